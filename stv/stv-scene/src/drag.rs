//! Pointer interaction as an explicit state machine.
//!
//! The rendering side does the picking and reports what happened as
//! [`PointerEvent`]s; [`DragState::transition`] turns each event into the next
//! state plus at most one [`DragEffect`] for the runtime to apply.

use stv_core::{Scalar, Vec3};

use crate::ObjectId;

/// Factor applied to a handle while the pointer is over it.
pub const HOVER_SCALE: Scalar = 1.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    HoverOn(ObjectId),
    HoverOff(ObjectId),
    DragStart(ObjectId),
    /// The pointer moved the dragged object to a new (unconstrained) position.
    Drag(ObjectId, Vec3),
    DragEnd(ObjectId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEffect {
    /// Multiply the object's display scale.
    Scale(ObjectId, Scalar),
    /// Move the object, subject to the scene's constraints.
    Move(ObjectId, Vec3),
    /// Enable or disable camera orbiting.
    Orbit(bool),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Hovered(ObjectId),
    Dragging(ObjectId),
}

impl DragState {
    /// Next state for `event`. Events that do not fit the current state leave
    /// it unchanged and produce no effect.
    pub fn transition(self, event: PointerEvent) -> (DragState, Option<DragEffect>) {
        use DragState::*;
        use PointerEvent::*;

        match (self, event) {
            (Idle, HoverOn(id)) => (Hovered(id), Some(DragEffect::Scale(id, HOVER_SCALE))),
            (Hovered(a), HoverOff(b)) if a == b => (Idle, Some(DragEffect::Scale(a, 1.0 / HOVER_SCALE))),
            (Idle, DragStart(id)) => (Dragging(id), Some(DragEffect::Orbit(false))),
            (Hovered(a), DragStart(b)) if a == b => (Dragging(a), Some(DragEffect::Orbit(false))),
            (Dragging(a), Drag(b, to)) if a == b => (Dragging(a), Some(DragEffect::Move(a, to))),
            (Dragging(a), DragEnd(b)) if a == b => (Hovered(a), Some(DragEffect::Orbit(true))),
            (state, _) => (state, None),
        }
    }
}
