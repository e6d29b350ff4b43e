//! Linear-scan closest-point search.
//!
//! Both searches are O(n) with no early exit. A candidate replaces the current
//! best only when strictly closer, so the lowest index (or lowest t) wins ties.

use stv_core::{Scalar, Vec3};

use crate::{Curve, CurveError};

/// Closest sample of a discretised curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestSample {
    pub point: Vec3,
    /// Point index; the sample starts at `3 * index` in the flat array.
    pub index: usize,
    pub distance_sq: Scalar,
}

impl ClosestSample {
    #[inline]
    pub fn flat_index(&self) -> usize {
        3 * self.index
    }

    #[inline]
    pub fn distance(&self) -> Scalar {
        self.distance_sq.sqrt()
    }
}

/// Closest sampled parameter of a continuous curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestParam {
    pub point: Vec3,
    pub t: Scalar,
    pub distance_sq: Scalar,
}

/// Closest point of a flat `[x, y, z, ...]` array to `query`.
///
/// The returned point is one of the samples, never an interpolation.
pub fn closest_on_discretized(query: Vec3, coords: &[Scalar]) -> Result<ClosestSample, CurveError> {
    if coords.is_empty() || coords.len() % 3 != 0 {
        return Err(CurveError::MalformedInput { len: coords.len() });
    }

    let mut best = ClosestSample { point: Vec3::new(coords[0], coords[1], coords[2]), index: 0, distance_sq: Scalar::INFINITY };
    for (index, c) in coords.chunks_exact(3).enumerate() {
        let p = Vec3::new(c[0], c[1], c[2]);
        let d = p.distance_squared(query);
        if d < best.distance_sq {
            best = ClosestSample { point: p, index, distance_sq: d };
        }
    }
    Ok(best)
}

/// Closest point of `curve` to `query`, scanning t = 0, step, 2·step, … and
/// finally t = 1. Precision is bounded by `step_t`.
pub fn closest_on_continuous<C: Curve + ?Sized>(query: Vec3, curve: &C, step_t: Scalar) -> Result<ClosestParam, CurveError> {
    if !step_t.is_finite() || step_t <= 0.0 || step_t > 1.0 {
        return Err(CurveError::InvalidStep { step: step_t });
    }

    let n = (1.0 / step_t).floor() as usize;
    let tail = if (n as Scalar) * step_t < 1.0 { Some(1.0) } else { None };
    let ts = (0..=n).map(|k| (k as Scalar * step_t).min(1.0)).chain(tail);

    let start = curve.point_at(0.0);
    let mut best = ClosestParam { point: start, t: 0.0, distance_sq: Scalar::INFINITY };
    for t in ts {
        let p = curve.point_at(t);
        let d = p.distance_squared(query);
        if d < best.distance_sq {
            best = ClosestParam { point: p, t, distance_sq: d };
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurveSpec, LoopParams};

    #[test]
    fn rejects_empty_and_partial_arrays() {
        assert_eq!(closest_on_discretized(Vec3::ZERO, &[]), Err(CurveError::MalformedInput { len: 0 }));
        assert_eq!(closest_on_discretized(Vec3::ZERO, &[1.0; 4]), Err(CurveError::MalformedInput { len: 4 }));
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let flat = [-1.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.0, 0.0, 0.0];
        let hit = closest_on_discretized(Vec3::ZERO, &flat).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.flat_index(), 0);
    }

    #[test]
    fn nan_samples_are_never_selected_over_finite_ones() {
        let flat = [Scalar::NAN, 0.0, 0.0, 3.0, 0.0, 0.0];
        let hit = closest_on_discretized(Vec3::ZERO, &flat).unwrap();
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn continuous_search_on_loop() {
        let l = CurveSpec::Loop(LoopParams::horizontal(1.0, 0.0));
        let hit = closest_on_continuous(Vec3::new(-5.0, 0.0, 0.0), &l, 1e-4).unwrap();
        assert!((hit.t - 0.5).abs() <= 1e-4, "t={}", hit.t);
        assert!((hit.point - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn continuous_search_visits_t_one() {
        let s = CurveSpec::SineWave(Default::default());
        let hit = closest_on_continuous(Vec3::new(10.0, 0.0, 0.0), &s, 0.3).unwrap();
        assert_eq!(hit.t, 1.0);
    }

    #[test]
    fn invalid_steps_are_rejected() {
        let s = CurveSpec::SineWave(Default::default());
        for step in [0.0, -0.1, 1.5, Scalar::NAN, Scalar::INFINITY] {
            assert!(matches!(closest_on_continuous(Vec3::ZERO, &s, step), Err(CurveError::InvalidStep { .. })));
        }
    }
}
