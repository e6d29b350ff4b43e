//! Crate-level error types for stv-noise.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoiseError {
    #[error("permutation table needs 256 entries, found {len}")]
    TableLength { len: usize },

    #[error("permutation table is missing value {missing}")]
    InvalidPermutation { missing: u8 },
}
