//! A Perlin worldline with proper-time ticks and a handle that reads out τ.

use std::rc::Rc;

use stv_core::{ProperTimeScale, Vec3};
use stv_curve::{ArcLengthCurve, Curve, CurveSpec, PerlinParams};

use crate::camera::OrthographicCamera;
use crate::config::ToolkitConfig;
use crate::object::{Color, SceneObject};
use crate::runtime::{FreeDrag, Interaction, SceneBlueprint, SceneContext};
use crate::widget::CurveParameter;
use crate::{ObjectId, SceneError};

/// Offset of tick labels from their tick, towards the top of the screen.
pub const LABEL_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -0.5);
pub const HANDLE_RADIUS: f64 = 0.25;
pub const TICK_RADIUS: f64 = 0.1;

/// Drag handler: keeps the handle on the worldline and updates the readout.
pub struct WorldlineDrag {
    pub parameter: CurveParameter<ArcLengthCurve<CurveSpec>>,
    pub handle: ObjectId,
    pub readout: ObjectId,
}

impl Interaction for WorldlineDrag {
    fn on_drag(&mut self, ctx: &mut SceneContext, id: ObjectId, to: Vec3) -> Result<(), SceneError> {
        if id != self.handle {
            return FreeDrag.on_drag(ctx, id, to);
        }
        self.parameter.restrict(to)?;
        let at = self.parameter.position();
        ctx.set_position(self.handle, at)?;
        ctx.set_position(self.readout, at + 2.0 * LABEL_OFFSET)?;
        ctx.set_text(self.readout, self.parameter.label())
    }
}

pub fn build(config: &ToolkitConfig) -> Result<SceneBlueprint, SceneError> {
    let camera = OrthographicCamera { frustum_size: config.frustum_size, ..Default::default() };
    let mut ctx = SceneContext::new(config.clone(), camera)?;

    let worldline = CurveSpec::perlin(PerlinParams { amplitude: 1.0, ..Default::default() }, Rc::clone(ctx.noise()));
    ctx.add(SceneObject::tube(worldline.clone(), config.tube_segments, config.tube_radius, Color::WHITE));

    // Ticks and handle share the arc-length parametrisation, so τ is
    // proportional to distance travelled along the line.
    let arc = ArcLengthCurve::new(worldline);
    let scale = ProperTimeScale::default();
    for (tau, t) in scale.integer_ticks() {
        let at = arc.point_at(t);
        ctx.add(SceneObject::marker(at, TICK_RADIUS, Color::WHITE));
        ctx.add(SceneObject::label(at + LABEL_OFFSET, tau.to_string()));
    }

    let parameter = CurveParameter::new(arc, config.closest_step, scale, 0.5)?;
    let handle = ctx.add(SceneObject::handle(parameter.position(), HANDLE_RADIUS, Color::WHITE));
    let readout = ctx.add(SceneObject::label(parameter.position() + 2.0 * LABEL_OFFSET, parameter.label()));

    Ok(SceneBlueprint {
        name: "worldline",
        context: ctx,
        interaction: Box::new(WorldlineDrag { parameter, handle, readout }),
    })
}
