//! Crate-level error types for stv-core.

use thiserror::Error;

use crate::Scalar;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The three basis vectors are coplanar (or one of them vanishes), so the
    /// basis matrix cannot be inverted.
    #[error("degenerate basis: determinant {determinant:e} is too close to zero")]
    DegenerateBasis { determinant: Scalar },

    #[error("invalid proper-time interval [{start}, {end}]")]
    EmptyInterval { start: Scalar, end: Scalar },
}
