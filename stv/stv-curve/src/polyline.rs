//! Flat-array polylines, the wire format handed to line and tube meshes.

use stv_core::{Scalar, Vec3};

use crate::closest::{closest_on_discretized, ClosestSample};
use crate::CurveError;

/// An ordered run of 3D samples stored as `[x0, y0, z0, x1, y1, z1, ...]`.
///
/// The length is always a multiple of three; the polyline may be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    coords: Vec<Scalar>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(points: usize) -> Self {
        Self { coords: Vec::with_capacity(points * 3) }
    }

    /// Wraps a flat coordinate array, rejecting incomplete points.
    pub fn from_flat(coords: Vec<Scalar>) -> Result<Self, CurveError> {
        if coords.len() % 3 != 0 {
            return Err(CurveError::MalformedInput { len: coords.len() });
        }
        Ok(Self { coords })
    }

    pub fn from_points(points: &[Vec3]) -> Self {
        let mut out = Self::with_capacity(points.len());
        for &p in points {
            out.push(p);
        }
        out
    }

    #[inline]
    pub fn push(&mut self, p: Vec3) {
        self.coords.extend_from_slice(&[p.x, p.y, p.z]);
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn point(&self, i: usize) -> Option<Vec3> {
        self.coords.get(3 * i..3 * i + 3).map(|c| Vec3::new(c[0], c[1], c[2]))
    }

    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.coords.chunks_exact(3).map(|c| Vec3::new(c[0], c[1], c[2]))
    }

    #[inline]
    pub fn as_flat(&self) -> &[Scalar] {
        &self.coords
    }

    #[inline]
    pub fn into_flat(self) -> Vec<Scalar> {
        self.coords
    }

    /// Translates every point.
    pub fn translate(&mut self, by: Vec3) {
        for c in self.coords.chunks_exact_mut(3) {
            c[0] += by.x;
            c[1] += by.y;
            c[2] += by.z;
        }
    }

    /// Closest sample to `query`; see [`closest_on_discretized`].
    #[inline]
    pub fn closest(&self, query: Vec3) -> Result<ClosestSample, CurveError> {
        closest_on_discretized(query, &self.coords)
    }

    /// Vector that moves `query` onto its closest sample.
    pub fn snap_offset(&self, query: Vec3) -> Result<Vec3, CurveError> {
        Ok(self.closest(query)?.point - query)
    }

    /// Tangent estimate at sample `i`: `p[i+1] − p[i]`, or `p[i] − p[i−1]` at
    /// the final sample.
    pub fn forward_difference(&self, i: usize) -> Result<Vec3, CurveError> {
        let len = self.len();
        if len < 2 {
            return Err(CurveError::TooShort { needed: 2, len });
        }
        if i >= len {
            return Err(CurveError::IndexOutOfRange { index: i, len });
        }
        let (a, b) = if i + 1 < len { (i, i + 1) } else { (i - 1, i) };
        match (self.point(a), self.point(b)) {
            (Some(pa), Some(pb)) => Ok(pb - pa),
            _ => Err(CurveError::IndexOutOfRange { index: i, len }),
        }
    }

    /// Splits into `n` contiguous runs of `ceil(len / n)` points (the last
    /// run may be shorter). `n == 0` yields nothing.
    pub fn split(&self, n: usize) -> Vec<Polyline> {
        if n == 0 || self.is_empty() {
            return Vec::new();
        }
        let piece = self.len().div_ceil(n);
        self.coords.chunks(piece * 3).map(|c| Polyline { coords: c.to_vec() }).collect()
    }

    /// Total chord length.
    pub fn length(&self) -> Scalar {
        self.points().zip(self.points().skip(1)).map(|(a, b)| a.distance(b)).sum()
    }
}

impl FromIterator<Vec3> for Polyline {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        let mut out = Polyline::new();
        for p in iter {
            out.push(p);
        }
        out
    }
}

impl TryFrom<Vec<Scalar>> for Polyline {
    type Error = CurveError;

    fn try_from(coords: Vec<Scalar>) -> Result<Self, Self::Error> {
        Polyline::from_flat(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Polyline {
        (0..n).map(|i| Vec3::new(i as Scalar, 0.0, 0.0)).collect()
    }

    #[test]
    fn rejects_partial_points() {
        assert_eq!(Polyline::from_flat(vec![1.0, 2.0]), Err(CurveError::MalformedInput { len: 2 }));
        assert!(Polyline::from_flat(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn forward_difference_uses_backward_step_at_end() {
        let p: Polyline = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 0.0, 2.0)].into_iter().collect();
        assert_eq!(p.forward_difference(0).unwrap(), Vec3::X);
        assert_eq!(p.forward_difference(2).unwrap(), Vec3::new(0.0, 0.0, 2.0));
        assert!(matches!(p.forward_difference(3), Err(CurveError::IndexOutOfRange { .. })));
        assert!(matches!(ramp(1).forward_difference(0), Err(CurveError::TooShort { .. })));
    }

    #[test]
    fn split_keeps_points_whole() {
        let parts = ramp(10).split(3);
        let sizes: Vec<usize> = parts.iter().map(Polyline::len).collect();
        assert_eq!(sizes, vec![4, 4, 2]);
        assert_eq!(parts[1].point(0), Some(Vec3::new(4.0, 0.0, 0.0)));
        assert_eq!(ramp(10).split(1).len(), 1);
        assert!(ramp(10).split(0).is_empty());
    }

    #[test]
    fn snap_offset_moves_onto_curve() {
        let p = ramp(5);
        let q = Vec3::new(2.2, 1.0, 0.0);
        let moved = q + p.snap_offset(q).unwrap();
        assert_eq!(moved, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn length_sums_segments() {
        assert_eq!(ramp(4).length(), 3.0);
    }
}
