//! A flowing worldline drawn from value noise, with stride ticks whose labels
//! live in the screen overlay.

use rand::Rng;
use stv_core::{Scalar, Vec3};
use stv_curve::FlowingCurve;

use crate::camera::OrthographicCamera;
use crate::config::ToolkitConfig;
use crate::object::{Color, SceneObject};
use crate::runtime::{FreeDrag, Interaction, SceneBlueprint, SceneContext};
use crate::widget::PolylineSlider;
use crate::{ObjectId, SceneError};

/// Samples between consecutive ticks.
pub const STRIDE: usize = 16;
/// Ticks between the middle of the line and τ = 0.
pub const ORIGIN_SHIFT: usize = 5;

/// The line's sample parameters; `phase` is drawn per scene.
pub fn flowing(phase: Scalar) -> FlowingCurve {
    FlowingCurve { num_points: 400, complexity: 0.02, amplitude: 250.0, phase, size: 0.01, stretch: 2.0 }
}

/// Sample index of τ = 0: the tick nearest the middle, moved back
/// [`ORIGIN_SHIFT`] ticks.
pub fn origin_index(len: usize) -> usize {
    let middle = (len as Scalar / (2 * STRIDE) as Scalar).round() as usize * STRIDE;
    middle.saturating_sub(ORIGIN_SHIFT * STRIDE)
}

pub struct LineDrag {
    pub slider: PolylineSlider,
    pub handle: ObjectId,
    pub readout: ObjectId,
}

impl Interaction for LineDrag {
    fn on_drag(&mut self, ctx: &mut SceneContext, id: ObjectId, to: Vec3) -> Result<(), SceneError> {
        if id != self.handle {
            return FreeDrag.on_drag(ctx, id, to);
        }
        self.slider.restrict(to)?;
        let at = self.slider.position();
        ctx.set_position(self.handle, at)?;
        ctx.set_position(self.readout, at)?;
        ctx.set_text(self.readout, self.slider.label())
    }
}

pub fn build(config: &ToolkitConfig) -> Result<SceneBlueprint, SceneError> {
    let camera = OrthographicCamera::looking_at(
        config.frustum_size,
        3.0,
        Vec3::new(-1.0758422432724446, 9.157376072449832, 3.8710498492416723),
        Vec3::ZERO,
    );
    let mut ctx = SceneContext::new(config.clone(), camera)?;

    let phase = config.rng_for("line.phase").gen_range(0.0..1000.0);
    let points = flowing(phase).polyline();
    ctx.add(SceneObject::line(points.clone(), 0.01, Color::WHITE));

    let origin = origin_index(points.len());
    let slider = PolylineSlider::new(points, origin, STRIDE)?;
    for (index, tau) in slider.ticks() {
        let at = slider.line().point(index).unwrap_or_default();
        ctx.add(SceneObject::marker(at, 0.1, Color::WHITE));
        ctx.add(SceneObject::label(at, format!("{tau}")));
    }

    let handle = ctx.add(SceneObject::handle(slider.position(), 0.2, Color::RED));
    let readout = ctx.add(SceneObject::label(slider.position(), slider.label()));

    Ok(SceneBlueprint { name: "line", context: ctx, interaction: Box::new(LineDrag { slider, handle, readout }) })
}
