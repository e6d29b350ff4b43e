//! Two probes on a warped grid showing how e1 changes along x⁰.
//!
//! Probe 1 carries e0 and e1. Probe 2 shows its own e1 next to a copy of
//! probe 1's, and the difference `de1/dx0 = e1(p1) − e1(p2)` drawn from the
//! tip of its own e1.

use std::rc::Rc;

use stv_core::{Scalar, Vec3};
use stv_curve::{perlin_polyline, Axis, GridLineParams, PerlinParams, Polyline};
use stv_noise::NoiseSource;

use crate::camera::OrthographicCamera;
use crate::config::ToolkitConfig;
use crate::object::{Color, SceneObject};
use crate::runtime::{FreeDrag, Interaction, SceneBlueprint, SceneContext};
use crate::widget::{BasisProbe, ProbeParams};
use crate::{ObjectId, SceneError};

pub const SHIFT_PER_ROW: Scalar = 0.5;
pub const STRETCH_PER_ROW: Scalar = 0.1;
/// Half length of the background grid lines.
pub const GRID_EXTENT: Scalar = 30.0;
/// Length e1 is drawn at.
pub const E1_SCALE: Scalar = 5.4;
pub const PROBE_STARTS: [Vec3; 2] = [Vec3::new(0.0, 0.05, -4.0), Vec3::new(0.0, 0.05, 4.0)];

fn row(axis: Axis, i: Scalar) -> PerlinParams {
    PerlinParams {
        axis,
        y_sample: STRETCH_PER_ROW * i,
        shift: SHIFT_PER_ROW * i,
        start: -GRID_EXTENT,
        end: GRID_EXTENT,
        ..Default::default()
    }
}

/// The highlighted x⁰ axis the probes slide along.
pub fn axis_line(noise: &dyn NoiseSource) -> Result<Polyline, SceneError> {
    Ok(perlin_polyline(noise, &row(Axis::Z, 0.0), 0.01)?)
}

/// Rate of change of e1 between the probes.
#[inline]
pub fn de1_dx0(p1: &BasisProbe, p2: &BasisProbe) -> Vec3 {
    p1.e1() - p2.e1()
}

/// Probe lines follow the drawn grid and span the whole axis, so a probe
/// anywhere on the axis reads its frame at its own sample.
pub fn probe_params(config: &ToolkitConfig) -> ProbeParams {
    ProbeParams {
        grid: GridLineParams {
            shift_per_row: SHIFT_PER_ROW,
            stretch_per_row: STRETCH_PER_ROW,
            start: -GRID_EXTENT,
            end: GRID_EXTENT,
            solve: config.solver,
            ..Default::default()
        },
        e1_scale: -E1_SCALE,
        ..Default::default()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Arrows {
    pub e0: ObjectId,
    pub e1: ObjectId,
    pub e1_copy: ObjectId,
    pub e1_b: ObjectId,
    pub de1: ObjectId,
}

pub struct ChristoffelDrag {
    pub probes: [BasisProbe; 2],
    pub handles: [ObjectId; 2],
    pub arrows: Arrows,
    /// Labels in the same order as the arrows.
    pub labels: [ObjectId; 5],
}

impl ChristoffelDrag {
    fn sync(&self, ctx: &mut SceneContext) -> Result<(), SceneError> {
        let [p1, p2] = &self.probes;
        let a = self.arrows;
        let placed = [
            (a.e0, p1.position(), p1.e0()),
            (a.e1, p1.position(), p1.e1()),
            (a.e1_copy, p2.position(), p1.e1()),
            (a.e1_b, p2.position(), p2.e1()),
            (a.de1, p2.position() + p2.e1(), de1_dx0(p1, p2)),
        ];
        for (handle, probe) in self.handles.iter().zip(&self.probes) {
            ctx.set_position(*handle, probe.position())?;
        }
        for ((id, from, by), label) in placed.into_iter().zip(self.labels) {
            ctx.set_arrow(id, from, by)?;
            ctx.set_position(label, from + by)?;
        }
        Ok(())
    }
}

impl Interaction for ChristoffelDrag {
    fn on_drag(&mut self, ctx: &mut SceneContext, id: ObjectId, to: Vec3) -> Result<(), SceneError> {
        let Some(which) = self.handles.iter().position(|h| *h == id) else {
            return FreeDrag.on_drag(ctx, id, to);
        };
        self.probes[which].move_to(to)?;
        self.sync(ctx)
    }
}

pub fn build(config: &ToolkitConfig) -> Result<SceneBlueprint, SceneError> {
    let camera = OrthographicCamera { frustum_size: config.frustum_size, ..Default::default() };
    let mut ctx = SceneContext::new(config.clone(), camera)?;
    let noise = Rc::clone(ctx.noise());

    for i in -config.grid_rows..config.grid_rows {
        for axis in [Axis::X, Axis::Z] {
            let line = perlin_polyline(noise.as_ref(), &row(axis, i as Scalar), 0.1)?;
            ctx.add(SceneObject::line(line, 0.005, Color::GRID));
        }
    }

    let axis = axis_line(noise.as_ref())?;
    ctx.add(SceneObject::line(axis.clone(), 0.01, Color::AXIS));

    let params = probe_params(config);
    let probes = [
        BasisProbe::new(params, Rc::clone(&noise), axis.clone(), PROBE_STARTS[0])?,
        BasisProbe::new(params, Rc::clone(&noise), axis, PROBE_STARTS[1])?,
    ];
    let handles = [
        ctx.add(SceneObject::handle(probes[0].position(), 0.25, Color::WHITE)),
        ctx.add(SceneObject::handle(probes[1].position(), 0.25, Color::WHITE)),
    ];

    let arrows = Arrows {
        e0: ctx.add(SceneObject::arrow(Vec3::ZERO, Vec3::ZERO, Color::GREY)),
        e1: ctx.add(SceneObject::arrow(Vec3::ZERO, Vec3::ZERO, Color::RED)),
        e1_copy: ctx.add(SceneObject::arrow(Vec3::ZERO, Vec3::ZERO, Color::RED)),
        e1_b: ctx.add(SceneObject::arrow(Vec3::ZERO, Vec3::ZERO, Color::GREY)),
        de1: ctx.add(SceneObject::arrow(Vec3::ZERO, Vec3::ZERO, Color::WHITE)),
    };
    let labels = [
        ctx.add(SceneObject::label(Vec3::ZERO, "\\overrightarrow{e_0}")),
        ctx.add(SceneObject::label(Vec3::ZERO, "\\overrightarrow{e_1}")),
        ctx.add(SceneObject::label(Vec3::ZERO, "\\overrightarrow{e_1}")),
        ctx.add(SceneObject::label(Vec3::ZERO, "\\overrightarrow{e_1}")),
        ctx.add(SceneObject::label(Vec3::ZERO, "\\dfrac{\\mathrm{d}\\overrightarrow{e_1}}{\\mathrm{d}x^0}")),
    ];

    let drag = ChristoffelDrag { probes, handles, arrows, labels };
    drag.sync(&mut ctx)?;
    Ok(SceneBlueprint { name: "christoffel", context: ctx, interaction: Box::new(drag) })
}
