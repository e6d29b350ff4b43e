//! Wireframe globe with a marked point on its equator.

use stv_core::Vec3;
use stv_curve::orb_wireframe;

use crate::camera::OrthographicCamera;
use crate::config::ToolkitConfig;
use crate::object::{Color, SceneObject};
use crate::runtime::{FreeDrag, SceneBlueprint, SceneContext};
use crate::SceneError;

pub const RADIUS: f64 = 1.0;
pub const LATITUDES: usize = 4;
pub const LOOP_DELTA: f64 = 0.01;

pub fn build(config: &ToolkitConfig) -> Result<SceneBlueprint, SceneError> {
    let camera = OrthographicCamera::looking_at(
        config.frustum_size,
        7.0,
        Vec3::new(8.160970910866846, 5.286975970297566, 2.333760673565631),
        Vec3::ZERO,
    );
    let mut ctx = SceneContext::new(config.clone(), camera)?;

    for ring in orb_wireframe(RADIUS, LATITUDES, LOOP_DELTA)? {
        ctx.add(SceneObject::line(ring, 0.01, Color::WIRE));
    }
    ctx.add(SceneObject::marker(Vec3::ZERO, RADIUS - 0.01, Color::BLACK));
    ctx.add(SceneObject::marker(Vec3::new(RADIUS, 0.0, 0.0), 0.06, Color::RED));

    Ok(SceneBlueprint { name: "planet", context: ctx, interaction: Box::new(FreeDrag) })
}
