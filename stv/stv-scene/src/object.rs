//! Declarative scene objects.

use glam::DVec2;
use stv_core::{Scalar, Vec3};
use stv_curve::{Curve, CurveSpec, Polyline};

/// Index of an object inside its scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

/// 24-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFF_FF_FF);
    pub const BLACK: Color = Color(0x00_00_00);
    pub const RED: Color = Color(0xFF_00_00);
    pub const GREY: Color = Color(0x80_80_80);
    pub const GRID: Color = Color(0x2B_2B_2B);
    pub const AXIS: Color = Color(0x85_84_83);
    pub const WIRE: Color = Color(0x38_38_38);

    pub fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

#[derive(Clone, Debug)]
pub enum Shape {
    /// A curve extruded into a tube of `radius` with `segments` rings.
    Tube { curve: CurveSpec, segments: usize, radius: Scalar },
    /// A flat-array line drawn as is.
    Line { points: Polyline, width: Scalar },
    /// A sphere handle; `scale` grows while hovered.
    Marker { position: Vec3, radius: Scalar, scale: Scalar },
    /// An arrow from `origin` to `origin + vector`.
    Arrow { origin: Vec3, vector: Vec3 },
    /// Typeset text anchored to a world point; `screen` is its overlay
    /// position from the last frame, `None` while hidden.
    Label { anchor: Vec3, text: String, screen: Option<DVec2> },
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub shape: Shape,
    pub color: Color,
    pub draggable: bool,
}

impl SceneObject {
    pub fn tube(curve: CurveSpec, segments: usize, radius: Scalar, color: Color) -> Self {
        Self { shape: Shape::Tube { curve, segments, radius }, color, draggable: false }
    }

    pub fn line(points: Polyline, width: Scalar, color: Color) -> Self {
        Self { shape: Shape::Line { points, width }, color, draggable: false }
    }

    pub fn marker(position: Vec3, radius: Scalar, color: Color) -> Self {
        Self { shape: Shape::Marker { position, radius, scale: 1.0 }, color, draggable: false }
    }

    pub fn handle(position: Vec3, radius: Scalar, color: Color) -> Self {
        Self { draggable: true, ..Self::marker(position, radius, color) }
    }

    pub fn arrow(origin: Vec3, vector: Vec3, color: Color) -> Self {
        Self { shape: Shape::Arrow { origin, vector }, color, draggable: false }
    }

    pub fn label(anchor: Vec3, text: impl Into<String>) -> Self {
        Self { shape: Shape::Label { anchor, text: text.into(), screen: None }, color: Color::WHITE, draggable: false }
    }

    /// Anchor point: marker centre, arrow origin, label anchor, first line
    /// sample or tube start.
    pub fn position(&self) -> Option<Vec3> {
        match &self.shape {
            Shape::Marker { position, .. } => Some(*position),
            Shape::Arrow { origin, .. } => Some(*origin),
            Shape::Label { anchor, .. } => Some(*anchor),
            Shape::Line { points, .. } => points.point(0),
            Shape::Tube { curve, .. } => Some(curve.point_at(0.0)),
        }
    }

    /// Centre line of a tube, one point per ring.
    pub fn tube_path(&self) -> Option<Vec<Vec3>> {
        match &self.shape {
            Shape::Tube { curve, segments, .. } => Some(curve.discretize(segments + 1)),
            _ => None,
        }
    }
}
