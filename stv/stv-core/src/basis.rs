//! Local frames and vector decomposition.

use tracing::debug;

use crate::{CoreError, Mat3, Scalar, Vec3};

/// Relative determinant threshold below which a basis counts as degenerate.
///
/// The determinant is compared against `|e0|·|e1|·|e2|`, so the check does not
/// depend on the overall length of the basis vectors.
pub const DEGENERATE_TOLERANCE: Scalar = 1e-12;

/// Three reference directions used as a local coordinate frame.
///
/// The vectors need not be orthogonal or of unit length. A basis is only
/// useful for [`Basis::decompose`] when it spans 3D space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    pub e0: Vec3,
    pub e1: Vec3,
    pub e2: Vec3,
}

impl Basis {
    #[inline]
    pub fn new(e0: Vec3, e1: Vec3, e2: Vec3) -> Self {
        Self { e0, e1, e2 }
    }

    /// Completes two in-plane directions with their unit normal as the middle
    /// vector. The coefficient on the normal is zero for any in-plane vector.
    pub fn planar(e0: Vec3, e2: Vec3) -> Self {
        let normal = e2.cross(e0).normalize_or_zero();
        Self { e0, e1: normal, e2 }
    }

    /// The basis matrix with e0, e1, e2 as columns.
    #[inline]
    pub fn matrix(&self) -> Mat3 {
        Mat3::from_cols(self.e0, self.e1, self.e2)
    }

    #[inline]
    pub fn determinant(&self) -> Scalar {
        self.matrix().determinant()
    }

    /// `a·e0 + b·e1 + c·e2` for coefficients `(a, b, c)`.
    #[inline]
    pub fn compose(&self, coeffs: Vec3) -> Vec3 {
        self.e0 * coeffs.x + self.e1 * coeffs.y + self.e2 * coeffs.z
    }

    /// Coefficients of `v` in this basis.
    ///
    /// Returns [`CoreError::DegenerateBasis`] instead of producing NaNs when the
    /// basis matrix is (numerically) singular.
    pub fn decompose(&self, v: Vec3) -> Result<Vec3, CoreError> {
        let m = self.matrix();
        let determinant = m.determinant();
        let scale = self.e0.length() * self.e1.length() * self.e2.length();
        if !determinant.is_finite() || scale == 0.0 || determinant.abs() <= DEGENERATE_TOLERANCE * scale {
            debug!(determinant, scale, "rejecting degenerate basis");
            return Err(CoreError::DegenerateBasis { determinant });
        }
        Ok(m.inverse() * v)
    }
}

/// Expresses `v` in the basis `{e0, e1, e2}`; see [`Basis::decompose`].
#[inline]
pub fn decompose(v: Vec3, e0: Vec3, e1: Vec3, e2: Vec3) -> Result<Vec3, CoreError> {
    Basis::new(e0, e1, e2).decompose(v)
}

/// In-plane coefficients `(v⁰, v²)` of `v` against `e0` and `e2`.
///
/// Any out-of-plane part of `v` lands on the completing normal and is dropped.
pub fn decompose_planar(v: Vec3, e0: Vec3, e2: Vec3) -> Result<(Scalar, Scalar), CoreError> {
    let c = Basis::planar(e0, e2).decompose(v)?;
    Ok((c.x, c.z))
}
