//! Arc-length reparametrisation.

use stv_core::{Scalar, Vec3};

use crate::Curve;

/// Chord count used when a curve is measured without an explicit resolution.
pub const DEFAULT_ARC_DIVISIONS: usize = 200;

/// Cumulative chord lengths of a curve sampled at `t = i / divisions`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcLengthTable {
    lengths: Vec<Scalar>,
}

impl ArcLengthTable {
    /// Measures `curve` with `divisions` chords (at least one).
    pub fn new<C: Curve + ?Sized>(curve: &C, divisions: usize) -> Self {
        let divisions = divisions.max(1);
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut last = curve.point_at(0.0);
        let mut sum = 0.0;
        lengths.push(sum);
        for i in 1..=divisions {
            let p = curve.point_at(i as Scalar / divisions as Scalar);
            sum += p.distance(last);
            lengths.push(sum);
            last = p;
        }
        Self { lengths }
    }

    #[inline]
    pub fn divisions(&self) -> usize {
        self.lengths.len() - 1
    }

    #[inline]
    pub fn total_length(&self) -> Scalar {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Parameter t at which the fraction `u` of the total length has been
    /// travelled. `u` is clamped to [0, 1]; zero-length curves map u → u.
    pub fn t_for_u(&self, u: Scalar) -> Scalar {
        let u = u.clamp(0.0, 1.0);
        let total = self.total_length();
        if total <= 0.0 {
            return u;
        }
        let target = u * total;
        let n = self.divisions();
        // First index whose cumulative length exceeds the target.
        let hi = self.lengths.partition_point(|&l| l <= target).min(n);
        if hi == 0 {
            return 0.0;
        }
        let lo = hi - 1;
        let seg = self.lengths[hi] - self.lengths[lo];
        let frac = if seg > 0.0 { (target - self.lengths[lo]) / seg } else { 0.0 };
        (lo as Scalar + frac.clamp(0.0, 1.0)) / n as Scalar
    }
}

/// A curve walked at (approximately) constant speed: `point_at(u)` is the
/// point a fraction `u` of the way along the arc.
#[derive(Clone, Debug)]
pub struct ArcLengthCurve<C> {
    curve: C,
    table: ArcLengthTable,
}

impl<C: Curve> ArcLengthCurve<C> {
    pub fn new(curve: C) -> Self {
        Self::with_divisions(curve, DEFAULT_ARC_DIVISIONS)
    }

    pub fn with_divisions(curve: C, divisions: usize) -> Self {
        let table = ArcLengthTable::new(&curve, divisions);
        Self { curve, table }
    }

    #[inline]
    pub fn inner(&self) -> &C {
        &self.curve
    }

    #[inline]
    pub fn table(&self) -> &ArcLengthTable {
        &self.table
    }

    #[inline]
    pub fn length(&self) -> Scalar {
        self.table.total_length()
    }

    /// `count` points at equal arc-length spacing, endpoints included.
    pub fn spaced_points(&self, count: usize) -> Vec<Vec3> {
        self.discretize(count)
    }
}

impl<C: Curve> Curve for ArcLengthCurve<C> {
    #[inline]
    fn point_at(&self, u: Scalar) -> Vec3 {
        self.curve.point_at(self.table.t_for_u(u))
    }
}
