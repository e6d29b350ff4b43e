//! Two-dimensional metric tensors over decomposed vector components.

use serde::{Deserialize, Serialize};

use crate::Scalar;

/// Minkowski-like quadratic form s² = c²·dt² − dx² over number differences.
#[inline]
pub fn s2(c: Scalar, dt: Scalar, dx: Scalar) -> Scalar {
    c * c * dt * dt - dx * dx
}

/// Symmetric 2×2 metric `g_{μν}` acting on components `(v⁰, v¹)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric2 {
    pub g: [[Scalar; 2]; 2],
}

impl Metric2 {
    #[inline]
    pub fn new(g00: Scalar, g01: Scalar, g11: Scalar) -> Self {
        Self { g: [[g00, g01], [g01, g11]] }
    }

    /// `diag(c², −1)`: time along e0, one space direction along e1.
    #[inline]
    pub fn minkowski(c: Scalar) -> Self {
        Self::new(c * c, 0.0, -1.0)
    }

    #[inline]
    pub fn euclidean() -> Self {
        Self::new(1.0, 0.0, 1.0)
    }

    /// `g_{μν} a^μ b^ν`.
    #[inline]
    pub fn inner(&self, a: [Scalar; 2], b: [Scalar; 2]) -> Scalar {
        let g = &self.g;
        a[0] * (g[0][0] * b[0] + g[0][1] * b[1]) + a[1] * (g[1][0] * b[0] + g[1][1] * b[1])
    }

    /// `g_{μν} v^μ v^ν`; for a worldline's 4-velocity under Minkowski this is c².
    #[inline]
    pub fn norm_sq(&self, v0: Scalar, v1: Scalar) -> Scalar {
        self.inner([v0, v1], [v0, v1])
    }
}

impl Default for Metric2 {
    fn default() -> Self {
        Self::minkowski(1.0)
    }
}
