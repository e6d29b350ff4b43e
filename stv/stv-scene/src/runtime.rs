//! The scene runtime: an explicit context, a lifecycle, and a per-frame
//! event queue.

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use stv_core::{Scalar, Vec3};
use stv_noise::NoiseSource;
use tracing::{debug, info, warn};

use crate::camera::OrthographicCamera;
use crate::config::ToolkitConfig;
use crate::drag::{DragEffect, DragState, PointerEvent};
use crate::mount::Mount;
use crate::object::{SceneObject, Shape};
use crate::{ObjectId, SceneError};

/// Everything a scene's functions read and mutate: camera, configuration,
/// the noise field, the object list and the pointer state.
pub struct SceneContext {
    pub camera: OrthographicCamera,
    pub config: ToolkitConfig,
    noise: Rc<dyn NoiseSource>,
    objects: Vec<SceneObject>,
    drag: DragState,
    orbit_enabled: bool,
    viewport: (u32, u32),
}

impl SceneContext {
    /// A context with a fresh noise field drawn as `config` prescribes.
    pub fn new(config: ToolkitConfig, camera: OrthographicCamera) -> Result<Self, SceneError> {
        let noise: Rc<dyn NoiseSource> = Rc::new(config.noise_field()?);
        Ok(Self::with_noise(config, camera, noise))
    }

    pub fn with_noise(config: ToolkitConfig, camera: OrthographicCamera, noise: Rc<dyn NoiseSource>) -> Self {
        Self { camera, config, noise, objects: Vec::new(), drag: DragState::Idle, orbit_enabled: true, viewport: (0, 0) }
    }

    #[inline]
    pub fn noise(&self) -> &Rc<dyn NoiseSource> {
        &self.noise
    }

    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    #[inline]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Result<&SceneObject, SceneError> {
        self.objects.get(id.0).ok_or(SceneError::UnknownObject(id))
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject, SceneError> {
        self.objects.get_mut(id.0).ok_or(SceneError::UnknownObject(id))
    }

    /// Moves a marker, arrow origin or label anchor.
    pub fn set_position(&mut self, id: ObjectId, to: Vec3) -> Result<(), SceneError> {
        match &mut self.object_mut(id)?.shape {
            Shape::Marker { position, .. } => *position = to,
            Shape::Arrow { origin, .. } => *origin = to,
            Shape::Label { anchor, .. } => *anchor = to,
            _ => return Err(SceneError::WrongShape { id, expected: "positioned object" }),
        }
        Ok(())
    }

    pub fn set_arrow(&mut self, id: ObjectId, from: Vec3, by: Vec3) -> Result<(), SceneError> {
        match &mut self.object_mut(id)?.shape {
            Shape::Arrow { origin, vector } => {
                *origin = from;
                *vector = by;
                Ok(())
            }
            _ => Err(SceneError::WrongShape { id, expected: "arrow" }),
        }
    }

    pub fn set_text(&mut self, id: ObjectId, to: impl Into<String>) -> Result<(), SceneError> {
        match &mut self.object_mut(id)?.shape {
            Shape::Label { text, .. } => {
                *text = to.into();
                Ok(())
            }
            _ => Err(SceneError::WrongShape { id, expected: "label" }),
        }
    }

    pub fn scale(&mut self, id: ObjectId, factor: Scalar) -> Result<(), SceneError> {
        match &mut self.object_mut(id)?.shape {
            Shape::Marker { scale, .. } => {
                *scale *= factor;
                Ok(())
            }
            _ => Err(SceneError::WrongShape { id, expected: "marker" }),
        }
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[inline]
    pub fn orbit_enabled(&self) -> bool {
        self.orbit_enabled
    }

    #[inline]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.camera.resize(width, height);
    }

    /// Recomputes the overlay position of every label; returns how many are
    /// visible.
    pub fn project_labels(&mut self) -> usize {
        let (w, h) = self.viewport;
        let camera = self.camera;
        let mut visible = 0;
        for obj in &mut self.objects {
            if let Shape::Label { anchor, screen, .. } = &mut obj.shape {
                *screen = camera.overlay_position(*anchor, w, h);
                visible += usize::from(screen.is_some());
            }
        }
        visible
    }
}

impl fmt::Debug for SceneContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneContext")
            .field("camera", &self.camera)
            .field("objects", &self.objects.len())
            .field("drag", &self.drag)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

/// Scene-specific reaction to a drag frame. Implementations apply their
/// constraint and update dependent objects through the context.
pub trait Interaction {
    fn on_drag(&mut self, ctx: &mut SceneContext, id: ObjectId, to: Vec3) -> Result<(), SceneError>;
}

/// Interaction for scenes without constraints: handles follow the pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct FreeDrag;

impl Interaction for FreeDrag {
    fn on_drag(&mut self, ctx: &mut SceneContext, id: ObjectId, to: Vec3) -> Result<(), SceneError> {
        ctx.set_position(id, to)
    }
}

/// What a scene factory produces: a populated context plus its interaction.
pub struct SceneBlueprint {
    pub name: &'static str,
    pub context: SceneContext,
    pub interaction: Box<dyn Interaction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Running,
    Stopped,
}

/// Counts for one processed frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub processed: usize,
    pub rejected: usize,
    pub visible_labels: usize,
}

/// A mounted scene.
pub struct Scene {
    name: &'static str,
    ctx: SceneContext,
    interaction: Box<dyn Interaction>,
    canvas: Mount,
    overlay: Mount,
    state: Lifecycle,
    queue: VecDeque<PointerEvent>,
    frames: u64,
}

impl Scene {
    /// Attaches one node to each mount and fits the camera to the canvas.
    pub fn mount(blueprint: SceneBlueprint, mut canvas: Mount, mut overlay: Mount) -> Self {
        let SceneBlueprint { name, context: mut ctx, interaction } = blueprint;
        canvas.attach(canvas_node(name));
        overlay.attach(overlay_node(name));
        let (w, h) = canvas.size();
        ctx.resize(w, h);
        info!(scene = name, width = w, height = h, objects = ctx.objects.len(), "scene mounted");
        Self { name, ctx, interaction, canvas, overlay, state: Lifecycle::Created, queue: VecDeque::new(), frames: 0 }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    #[inline]
    pub fn context(&self) -> &SceneContext {
        &self.ctx
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Begins the frame loop.
    pub fn start(&mut self) -> Result<(), SceneError> {
        if self.state == Lifecycle::Running {
            return Err(SceneError::Lifecycle { op: "start", state: self.state });
        }
        self.state = Lifecycle::Running;
        info!(scene = self.name, "scene started");
        Ok(())
    }

    /// Halts the frame loop; queued events are kept for the next start.
    pub fn stop(&mut self) -> Result<(), SceneError> {
        if self.state != Lifecycle::Running {
            return Err(SceneError::Lifecycle { op: "stop", state: self.state });
        }
        self.state = Lifecycle::Stopped;
        info!(scene = self.name, frames = self.frames, "scene stopped");
        Ok(())
    }

    /// Detaches the scene's nodes and hands the mounts back.
    pub fn cleanup(mut self) -> (Mount, Mount) {
        self.canvas.detach(&canvas_node(self.name));
        self.overlay.detach(&overlay_node(self.name));
        info!(scene = self.name, dropped_events = self.queue.len(), "scene cleaned up");
        (self.canvas, self.overlay)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_size(width, height);
        self.overlay.set_size(width, height);
        self.ctx.resize(width, height);
        debug!(scene = self.name, width, height, "resized");
    }

    /// Queues a pointer event for the next frame.
    pub fn pointer(&mut self, event: PointerEvent) {
        self.queue.push_back(event);
    }

    /// Runs one frame: applies queued pointer events in order, then
    /// re-projects overlay labels.
    pub fn tick(&mut self) -> Result<FrameReport, SceneError> {
        if self.state != Lifecycle::Running {
            return Err(SceneError::Lifecycle { op: "tick", state: self.state });
        }
        let mut report = FrameReport::default();
        while let Some(event) = self.queue.pop_front() {
            report.processed += 1;
            if let Err(e) = self.apply(event) {
                report.rejected += 1;
                warn!(scene = self.name, ?event, error = %e, "rejected drag frame");
            }
        }
        report.visible_labels = self.ctx.project_labels();
        self.frames += 1;
        Ok(report)
    }

    fn apply(&mut self, event: PointerEvent) -> Result<(), SceneError> {
        if let PointerEvent::HoverOn(id) | PointerEvent::DragStart(id) = event {
            if !self.ctx.object(id)?.draggable {
                return Err(SceneError::WrongShape { id, expected: "draggable object" });
            }
        }

        let (next, effect) = self.ctx.drag.transition(event);
        self.ctx.drag = next;
        match effect {
            None => {
                debug!(?event, state = ?next, "pointer event ignored");
                Ok(())
            }
            Some(DragEffect::Scale(id, factor)) => self.ctx.scale(id, factor),
            Some(DragEffect::Orbit(enabled)) => {
                self.ctx.orbit_enabled = enabled;
                Ok(())
            }
            Some(DragEffect::Move(id, to)) => self.interaction.on_drag(&mut self.ctx, id, to),
        }
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("queued", &self.queue.len())
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

fn canvas_node(scene: &str) -> String {
    format!("{scene}-canvas")
}

fn overlay_node(scene: &str) -> String {
    format!("{scene}-overlay")
}
