//! A single thick Perlin worldline.

use std::rc::Rc;

use stv_curve::{CurveSpec, PerlinParams};

use crate::camera::OrthographicCamera;
use crate::config::ToolkitConfig;
use crate::object::{Color, SceneObject};
use crate::runtime::{FreeDrag, SceneBlueprint, SceneContext};
use crate::SceneError;

pub const TUBE_RADIUS: f64 = 0.1;

pub fn build(config: &ToolkitConfig) -> Result<SceneBlueprint, SceneError> {
    let camera = OrthographicCamera { frustum_size: config.frustum_size, ..Default::default() };
    let mut ctx = SceneContext::new(config.clone(), camera)?;

    let params = PerlinParams { scale: 2.0, amplitude: 3.0, ..Default::default() };
    let path = CurveSpec::perlin(params, Rc::clone(ctx.noise()));
    ctx.add(SceneObject::tube(path, config.tube_segments, TUBE_RADIUS, Color::WHITE));

    Ok(SceneBlueprint { name: "curve", context: ctx, interaction: Box::new(FreeDrag) })
}
