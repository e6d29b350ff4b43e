#![doc = r#"
stv-core: vectors, bases and metrics for the spacetime visual toolkit

This crate provides:
- Core aliases `Scalar`, `Vec3` and `Mat3` (double precision, backed by glam)
- [`Basis`]: a local frame of three (not necessarily orthonormal) vectors
- [`decompose`]: coefficients of a vector in a basis, with explicit
  degenerate-basis detection
- [`Metric2`] and [`s2`]: the 2×2 metric form used to measure decomposed
  velocities (Minkowski `diag(c², −1)` by default)
- [`ProperTimeScale`]: mapping between a curve parameter t ∈ [0, 1] and
  proper time τ along a worldline

Examples

```rust
use stv_core::{decompose, Vec3};

let e0 = Vec3::new(1.0, 0.0, 0.0);
let e1 = Vec3::new(1.0, 1.0, 0.0);
let e2 = Vec3::new(0.0, 0.0, 2.0);
let v = e0 * 2.0 + e1 * 3.0 - e2;

let c = decompose(v, e0, e1, e2).unwrap();
assert!((c - Vec3::new(2.0, 3.0, -1.0)).length() < 1e-12);
```
"#]

pub mod basis;
pub mod error;
pub mod metric;
pub mod tau;

pub use basis::{decompose, decompose_planar, Basis, DEGENERATE_TOLERANCE};
pub use error::CoreError;
pub use metric::{s2, Metric2};
pub use tau::ProperTimeScale;

pub type Scalar = f64;

/// Double precision 3-vector used for every point, tangent and basis vector.
pub type Vec3 = glam::DVec3;

/// Double precision 3×3 matrix (column major).
pub type Mat3 = glam::DMat3;

/// Squared Euclidean distance between two points.
#[inline]
pub fn dist_sq(a: Vec3, b: Vec3) -> Scalar {
    a.distance_squared(b)
}
