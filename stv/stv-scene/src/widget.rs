//! Draggable handles constrained to curves.
//!
//! Each widget owns its constraint and exposes a single `move_to`/`restrict`
//! update that the scene calls with the raw pointer position of a drag frame.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use stv_core::{decompose_planar, CoreError, ProperTimeScale, Scalar, Vec3};
use stv_curve::{closest_on_continuous, Axis, Curve, CurveError, GridLineParams, PointLockedCurve, Polyline};
use stv_noise::NoiseSource;
use tracing::trace;

/// `\tau = x.xx` for the overlay readout.
pub fn tau_label(tau: Scalar) -> String {
    format!("\\tau = {tau:.2}")
}

/// A handle that slides along a continuous curve.
#[derive(Clone, Debug)]
pub struct CurveParameter<C> {
    curve: C,
    step: Scalar,
    scale: ProperTimeScale,
    t: Scalar,
    position: Vec3,
}

impl<C: Curve> CurveParameter<C> {
    /// Places the handle at parameter `t` (clamped to [0, 1]). `step` is the
    /// parameter resolution of every later search.
    pub fn new(curve: C, step: Scalar, scale: ProperTimeScale, t: Scalar) -> Result<Self, CurveError> {
        if !step.is_finite() || step <= 0.0 || step > 1.0 {
            return Err(CurveError::InvalidStep { step });
        }
        let t = t.clamp(0.0, 1.0);
        let position = curve.point_at(t);
        Ok(Self { curve, step, scale, t, position })
    }

    /// Moves the handle to the closest sampled point of the curve.
    pub fn restrict(&mut self, query: Vec3) -> Result<Scalar, CurveError> {
        let hit = closest_on_continuous(query, &self.curve, self.step)?;
        self.t = hit.t;
        self.position = hit.point;
        Ok(hit.t)
    }

    #[inline]
    pub fn t(&self) -> Scalar {
        self.t
    }

    #[inline]
    pub fn tau(&self) -> Scalar {
        self.scale.tau(self.t)
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn curve(&self) -> &C {
        &self.curve
    }

    pub fn label(&self) -> String {
        tau_label(self.tau())
    }
}

/// A handle that jumps between the samples of a polyline; τ counts strides
/// of samples away from the origin sample.
#[derive(Clone, Debug)]
pub struct PolylineSlider {
    line: Polyline,
    origin: usize,
    stride: usize,
    index: usize,
}

impl PolylineSlider {
    pub fn new(line: Polyline, origin: usize, stride: usize) -> Result<Self, CurveError> {
        if line.is_empty() {
            return Err(CurveError::MalformedInput { len: 0 });
        }
        if origin >= line.len() {
            return Err(CurveError::IndexOutOfRange { index: origin, len: line.len() });
        }
        if stride == 0 {
            return Err(CurveError::InvalidStep { step: 0.0 });
        }
        Ok(Self { line, origin, stride, index: origin })
    }

    pub fn restrict(&mut self, query: Vec3) -> Result<Scalar, CurveError> {
        let hit = self.line.closest(query)?;
        self.index = hit.index;
        Ok(self.tau())
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn tau(&self) -> Scalar {
        (self.index as Scalar - self.origin as Scalar) / self.stride as Scalar
    }

    pub fn position(&self) -> Vec3 {
        // index always comes from the line itself
        self.line.point(self.index).unwrap_or_default()
    }

    #[inline]
    pub fn line(&self) -> &Polyline {
        &self.line
    }

    /// Sample indices of every whole-stride tick, with their τ.
    pub fn ticks(&self) -> Vec<(usize, Scalar)> {
        (0..self.line.len())
            .step_by(self.stride)
            .map(|i| (i, (i as Scalar - self.origin as Scalar) / self.stride as Scalar))
            .collect()
    }

    pub fn label(&self) -> String {
        tau_label(self.tau())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeParams {
    /// Grid family used for both coordinate lines; its axis is ignored.
    pub grid: GridLineParams,
    /// Height the probe floats at above the ground plane (default 0.05).
    pub height: Scalar,
    /// Factor applied to the unit e1 (default −1, pointing against +z rows).
    pub e1_scale: Scalar,
    /// Sample spacing of the coordinate lines used for tangents (default 0.01).
    pub sample_delta: Scalar,
}

impl Default for ProbeParams {
    fn default() -> Self {
        Self {
            grid: GridLineParams::default(),
            height: 0.05,
            e1_scale: -1.0,
            sample_delta: 0.01,
        }
    }
}

/// A handle snapped to an axis polyline that carries the local coordinate
/// frame of the warped grid at its position.
///
/// After every move it relocks one grid line of each family through itself
/// and takes e0 (along the x family) and e1 (along the z family) as
/// normalised forward differences at the samples nearest to it.
#[derive(Clone, Debug)]
pub struct BasisProbe {
    params: ProbeParams,
    axis: Polyline,
    position: Vec3,
    along: PointLockedCurve,
    across: PointLockedCurve,
    e0: Vec3,
    e1: Vec3,
}

impl BasisProbe {
    pub fn new(params: ProbeParams, noise: Rc<dyn NoiseSource>, axis: Polyline, start: Vec3) -> Result<Self, CurveError> {
        let position = snap(&axis, start, params.height)?;
        let along = PointLockedCurve::new(GridLineParams { axis: Axis::X, ..params.grid }, Rc::clone(&noise), position)?;
        let across = PointLockedCurve::new(GridLineParams { axis: Axis::Z, ..params.grid }, noise, position)?;
        let (e0, e1) = frame(&params, &along, &across, position)?;
        Ok(Self { params, axis, position, along, across, e0, e1 })
    }

    /// Snaps `query` onto the axis and rebuilds the frame there. On failure
    /// the probe is left where it was.
    pub fn move_to(&mut self, query: Vec3) -> Result<Vec3, CurveError> {
        let position = snap(&self.axis, query, self.params.height)?;
        let mut along = self.along.clone();
        let mut across = self.across.clone();
        along.set_anchor(position)?;
        across.set_anchor(position)?;
        let (e0, e1) = frame(&self.params, &along, &across, position)?;

        self.position = position;
        self.along = along;
        self.across = across;
        self.e0 = e0;
        self.e1 = e1;
        trace!(?position, "probe moved");
        Ok(position)
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn e0(&self) -> Vec3 {
        self.e0
    }

    #[inline]
    pub fn e1(&self) -> Vec3 {
        self.e1
    }

    #[inline]
    pub fn along(&self) -> &PointLockedCurve {
        &self.along
    }

    #[inline]
    pub fn across(&self) -> &PointLockedCurve {
        &self.across
    }

    /// Components of a ground-plane vector in the local (e0, e1) frame.
    pub fn components(&self, v: Vec3) -> Result<(Scalar, Scalar), CoreError> {
        decompose_planar(v, self.e0, self.e1)
    }
}

fn snap(axis: &Polyline, query: Vec3, height: Scalar) -> Result<Vec3, CurveError> {
    let mut p = query + axis.snap_offset(query)?;
    p.y = height;
    Ok(p)
}

fn frame(params: &ProbeParams, along: &PointLockedCurve, across: &PointLockedCurve, at: Vec3) -> Result<(Vec3, Vec3), CurveError> {
    let e0 = frame_vector(along, at, params.sample_delta)?;
    let e1 = frame_vector(across, at, params.sample_delta)? * params.e1_scale;
    Ok((e0, e1))
}

fn frame_vector(line: &PointLockedCurve, at: Vec3, delta: Scalar) -> Result<Vec3, CurveError> {
    let samples = line.polyline(delta)?;
    let hit = samples.closest(at)?;
    Ok(samples.forward_difference(hit.index)?.normalize_or_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stv_curve::{perlin_polyline, CurveSpec, LoopParams, PerlinParams};
    use stv_noise::NoiseField;

    #[test]
    fn curve_parameter_tracks_loop() {
        let mut p = CurveParameter::new(CurveSpec::Loop(LoopParams::horizontal(1.0, 0.0)), 1e-4, ProperTimeScale::default(), 0.0).unwrap();
        assert_eq!(p.tau(), -10.0);
        let t = p.restrict(Vec3::new(0.0, 0.0, -3.0)).unwrap();
        assert!((t - 0.75).abs() < 1e-4);
        assert!((p.position() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-3);
        assert_eq!(p.label(), "\\tau = 5.00");
    }

    #[test]
    fn curve_parameter_rejects_bad_step() {
        let c = CurveSpec::Loop(LoopParams::default());
        assert!(CurveParameter::new(c, 0.0, ProperTimeScale::default(), 0.5).is_err());
    }

    #[test]
    fn slider_counts_strides() {
        let line: Polyline = (0..100).map(|i| Vec3::new(i as Scalar, 0.0, 0.0)).collect();
        let mut s = PolylineSlider::new(line, 40, 16).unwrap();
        assert_eq!(s.tau(), 0.0);
        assert_eq!(s.restrict(Vec3::new(72.3, 5.0, 0.0)).unwrap(), 2.0);
        assert_eq!(s.position(), Vec3::new(72.0, 0.0, 0.0));
        assert_eq!(s.ticks().first(), Some(&(0, -2.5)));
        assert!(PolylineSlider::new(Polyline::new(), 0, 1).is_err());
    }

    #[test]
    fn probe_frame_is_unit_and_independent() {
        let noise: Rc<dyn NoiseSource> = Rc::new(NoiseField::with_seed(4));
        let axis = perlin_polyline(noise.as_ref(), &PerlinParams { axis: Axis::Z, start: -30.0, end: 30.0, ..Default::default() }, 0.01).unwrap();
        let mut probe = BasisProbe::new(ProbeParams::default(), Rc::clone(&noise), axis, Vec3::new(0.0, 0.0, 3.0)).unwrap();
        assert_eq!(probe.position().y, 0.05);
        assert!((probe.e0().length() - 1.0).abs() < 1e-9);
        assert!((probe.e1().length() - 1.0).abs() < 1e-9);
        assert!(probe.e0().cross(probe.e1()).length() > 0.1);

        let v = probe.e0() * 2.0 - probe.e1() * 0.5;
        let (a, b) = probe.components(v).unwrap();
        assert!((a - 2.0).abs() < 1e-9 && (b + 0.5).abs() < 1e-9);

        let moved = probe.move_to(Vec3::new(1.0, 3.0, -2.0)).unwrap();
        assert_eq!(moved, probe.position());
        assert_eq!(moved.y, 0.05);
        assert!((moved.z + 2.0).abs() < 1.0, "{moved:?}");
    }
}
