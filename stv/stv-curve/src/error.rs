//! Crate-level error types for stv-curve.

use stv_core::Scalar;
use thiserror::Error;

/// Bisection ran out of iterations without reaching the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("no parameter within tolerance after {iterations} iterations (best residual {residual:e} at q = {best_q})")]
pub struct Unsolvable {
    pub iterations: usize,
    pub residual: Scalar,
    pub best_q: Scalar,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Flat coordinate arrays must hold at least one complete 3D point.
    #[error("curve array must contain complete 3D points (multiple of 3), found {len} values")]
    MalformedInput { len: usize },

    #[error("sample step must be finite and positive, got {step}")]
    InvalidStep { step: Scalar },

    #[error("sample index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("need at least {needed} points, found {len}")]
    TooShort { needed: usize, len: usize },

    #[error(transparent)]
    Unsolvable(#[from] Unsolvable),
}
