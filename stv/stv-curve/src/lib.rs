#![doc = r#"Parametric curves and the searches the interactive scenes run on them.

This crate provides:
- [`Curve`]: the t ∈ [0, 1] → point contract every curve family implements,
  with finite-difference tangents and dense discretisation.
- [`CurveSpec`]: Perlin-warped grid lines, circles, loops and sine waves.
- [`Polyline`]: flat `[x0, y0, z0, x1, ...]` sample arrays plus generators for
  the grid, loop, orb and flowing-worldline shapes.
- [`closest_on_discretized`] / [`closest_on_continuous`]: linear-scan
  closest-point search; the lowest index (or lowest t) wins ties.
- [`solve`]: bisection for the family parameter q with f(px, q) ≈ py.
- [`PointLockedCurve`]: a grid line re-solved to pass through an anchor point.
- [`ArcLengthTable`] / [`ArcLengthCurve`]: equal-arc-length reparametrisation.

Examples

```rust
use stv_curve::{closest_on_discretized, solve, SolveOptions};
use stv_core::Vec3;

let q = solve(|x, q| x + q, (2.0, 5.0), 0.0, 10.0, SolveOptions::default()).unwrap();
assert!((q - 3.0).abs() <= 1e-10);

let flat = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0];
let hit = closest_on_discretized(Vec3::new(1.2, 0.5, 0.0), &flat).unwrap();
assert_eq!(hit.index, 1);
```
"#]

pub mod arc;
pub mod closest;
pub mod error;
pub mod generate;
pub mod locked;
pub mod polyline;
pub mod solve;
pub mod spec;

pub use arc::{ArcLengthCurve, ArcLengthTable, DEFAULT_ARC_DIVISIONS};
pub use closest::{closest_on_continuous, closest_on_discretized, ClosestParam, ClosestSample};
pub use error::{CurveError, Unsolvable};
pub use generate::{flowing_curve_3d, loop_polyline, orb_wireframe, perlin_polyline, FlowingCurve, ORB_MERIDIANS};
pub use locked::{GridLineParams, PointLockedCurve};
pub use polyline::Polyline;
pub use solve::{solve, SolveOptions};
pub use spec::{
    Axis, CircleParams, CurveDescriptor, CurveSpec, LoopParams, PerlinCurve, PerlinParams, SineParams,
    PERLIN_FREQUENCY,
};

use stv_core::{Scalar, Vec3};

/// Half-width of the parameter window used for finite-difference tangents.
pub const TANGENT_DELTA: Scalar = 1e-4;

/// A curve parametrised over t ∈ [0, 1].
pub trait Curve {
    /// Point at normalised parameter `t`.
    fn point_at(&self, t: Scalar) -> Vec3;

    /// Derivative estimate in the direction of increasing t (not normalised).
    ///
    /// The difference window is clamped to [0, 1], so the endpoints fall back
    /// to one-sided differences.
    fn tangent_at(&self, t: Scalar) -> Vec3 {
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);
        (self.point_at(t2) - self.point_at(t1)) / (t2 - t1)
    }

    /// `count` points at evenly spaced parameters, endpoints included.
    fn discretize(&self, count: usize) -> Vec<Vec3> {
        match count {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => {
                let last = (count - 1) as Scalar;
                (0..count).map(|i| self.point_at(i as Scalar / last)).collect()
            }
        }
    }

    /// Same samples as [`Curve::discretize`], packed as a flat polyline.
    fn to_polyline(&self, count: usize) -> Polyline {
        Polyline::from_points(&self.discretize(count))
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    #[inline]
    fn point_at(&self, t: Scalar) -> Vec3 {
        (**self).point_at(t)
    }

    #[inline]
    fn tangent_at(&self, t: Scalar) -> Vec3 {
        (**self).tangent_at(t)
    }
}
