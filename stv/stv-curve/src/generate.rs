//! Polyline generators for the grid, loop, orb and flowing-worldline shapes.
//!
//! Every generator walks its parameter from the start of the range in fixed
//! steps of `delta`, stopping before the end of the range.

use std::f64::consts::{PI, TAU};

use rand::Rng;
use serde::{Deserialize, Serialize};
use stv_core::{Scalar, Vec3};
use stv_noise::{value_noise_1d, NoiseSource};

use crate::{CurveError, LoopParams, PerlinParams, Polyline};

/// Meridians drawn on an orb wireframe.
pub const ORB_MERIDIANS: usize = 10;

/// `start, start + delta, …` while below `end`.
fn steps(start: Scalar, end: Scalar, delta: Scalar) -> Result<impl Iterator<Item = Scalar>, CurveError> {
    if !delta.is_finite() || delta <= 0.0 {
        return Err(CurveError::InvalidStep { step: delta });
    }
    let n = ((end - start) / delta).ceil().max(0.0) as usize;
    Ok((0..n).map(move |k| start + k as Scalar * delta).filter(move |&x| x < end))
}

/// A Perlin grid line sampled every `delta` along its axis over `[start, end)`.
pub fn perlin_polyline(noise: &dyn NoiseSource, params: &PerlinParams, delta: Scalar) -> Result<Polyline, CurveError> {
    Ok(steps(params.start, params.end, delta)?.map(|along| params.point_along(noise, along)).collect())
}

/// A full loop sampled every `delta` radians.
pub fn loop_polyline(params: &LoopParams, delta: Scalar) -> Result<Polyline, CurveError> {
    Ok(steps(0.0, TAU, delta)?.map(|a| params.point_at_angle(a)).collect())
}

/// Sphere outline: [`ORB_MERIDIANS`] meridians every π/5 followed by the
/// latitude circles at heights `k · radius / latitudes` for `k ∈ [−n, n]`.
pub fn orb_wireframe(radius: Scalar, latitudes: usize, delta: Scalar) -> Result<Vec<Polyline>, CurveError> {
    let mut out = Vec::with_capacity(ORB_MERIDIANS + 2 * latitudes + 1);
    for k in 0..ORB_MERIDIANS {
        let theta = k as Scalar * PI / 5.0;
        out.push(loop_polyline(&LoopParams::meridian(radius, theta), delta)?);
    }
    if latitudes > 0 {
        let n = latitudes as i64;
        for k in -n..=n {
            let height = radius * k as Scalar / latitudes as Scalar;
            out.push(loop_polyline(&LoopParams::latitude(radius, height), delta)?);
        }
    }
    Ok(out)
}

/// A wandering planar worldline built from 1D value noise.
///
/// Sample i (for i in `-num_points..num_points`) sits at
/// `(stretch · size · 5i, 0, size · amplitude · noise(i · complexity + phase))`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowingCurve {
    pub num_points: usize,
    pub complexity: Scalar,
    pub amplitude: Scalar,
    pub phase: Scalar,
    pub size: Scalar,
    pub stretch: Scalar,
}

impl Default for FlowingCurve {
    fn default() -> Self {
        Self { num_points: 100, complexity: 0.02, amplitude: 100.0, phase: 0.0, size: 0.01, stretch: 2.0 }
    }
}

impl FlowingCurve {
    pub fn with_phase(phase: Scalar) -> Self {
        Self { phase, ..Self::default() }
    }

    pub fn polyline(&self) -> Polyline {
        let n = self.num_points as i64;
        (-n..n)
            .map(|i| {
                let i = i as Scalar;
                let z = self.size * self.amplitude * value_noise_1d(i * self.complexity + self.phase);
                Vec3::new(self.stretch * self.size * i * 5.0, 0.0, z)
            })
            .collect()
    }
}

/// A space-filling 3D wander: each coordinate is value noise with its own
/// random phase in `[0, 1000)`.
pub fn flowing_curve_3d<R: Rng>(num_points: usize, complexity: Scalar, amplitude: Scalar, rng: &mut R) -> Polyline {
    let phase: [Scalar; 3] = [rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)];
    (0..num_points)
        .map(|i| {
            let s = i as Scalar * complexity;
            Vec3::new(value_noise_1d(s + phase[0]), value_noise_1d(s + phase[1]), value_noise_1d(s + phase[2])) * amplitude
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use stv_noise::{NoiseField, PermutationTable};

    #[test]
    fn perlin_polyline_excludes_end() {
        let noise = NoiseField::from_table(PermutationTable::identity());
        let params = PerlinParams { start: -1.0, end: 1.0, ..Default::default() };
        let line = perlin_polyline(&noise, &params, 0.5).unwrap();
        assert_eq!(line.len(), 4);
        assert_eq!(line.point(0).map(|p| p.x), Some(-1.0));
        assert_eq!(line.point(3).map(|p| p.x), Some(0.5));
    }

    #[test]
    fn non_positive_delta_is_rejected() {
        let l = LoopParams::horizontal(1.0, 0.0);
        assert!(matches!(loop_polyline(&l, 0.0), Err(CurveError::InvalidStep { .. })));
        assert!(matches!(loop_polyline(&l, -1.0), Err(CurveError::InvalidStep { .. })));
    }

    #[test]
    fn loop_samples_lie_on_circle() {
        let l = LoopParams::horizontal(2.0, 0.5);
        let line = loop_polyline(&l, 0.1).unwrap();
        assert_eq!(line.len(), 63);
        for p in line.points() {
            assert!(((p - l.center()).length() - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn orb_has_meridians_and_latitudes() {
        let orb = orb_wireframe(1.0, 4, 0.05).unwrap();
        assert_eq!(orb.len(), ORB_MERIDIANS + 9);
        for p in orb.iter().flat_map(Polyline::points) {
            assert!((p.length() - 1.0).abs() < 1e-9, "off sphere: {p:?}");
        }
    }

    #[test]
    fn flowing_curve_spans_symmetric_range() {
        let line = FlowingCurve::default().polyline();
        assert_eq!(line.len(), 200);
        let first = line.point(0).unwrap();
        assert!((first.x + 10.0).abs() < 1e-12);
        assert!(line.points().all(|p| p.y == 0.0 && (0.0..1.0).contains(&p.z)));
    }

    #[test]
    fn flowing_3d_is_reproducible_from_seed() {
        let a = flowing_curve_3d(50, 0.02, 3.0, &mut StdRng::seed_from_u64(1));
        let b = flowing_curve_3d(50, 0.02, 3.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
    }
}
