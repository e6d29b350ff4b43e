//! Parameter inversion by bisection.

use serde::{Deserialize, Serialize};
use stv_core::Scalar;
use tracing::warn;

use crate::Unsolvable;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Accept q once `|f(px, q) − py| ≤ tolerance` (default 1e-10).
    pub tolerance: Scalar,
    /// Give up after this many midpoint evaluations (default 1000).
    pub max_iterations: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self { tolerance: 1e-10, max_iterations: 1000 }
    }
}

/// Finds q in `[q_min, q_max]` with `f(px, q) ≈ py` for `target = (px, py)`.
///
/// `f(px, ·)` must be monotonic over the bracket. That precondition is not
/// checked: a non-monotonic family gives a deterministic but unspecified q, or
/// [`Unsolvable`] once `max_iterations` midpoints miss the tolerance.
///
/// Both bracket ends are tried first, so a root sitting exactly on `q_min` or
/// `q_max` is returned as is. Each step then keeps the half whose endpoints
/// still disagree in sign, so both increasing and decreasing families converge.
pub fn solve<F>(f: F, target: (Scalar, Scalar), q_min: Scalar, q_max: Scalar, opts: SolveOptions) -> Result<Scalar, Unsolvable>
where
    F: Fn(Scalar, Scalar) -> Scalar,
{
    let (px, py) = target;
    let (mut lo, mut hi) = (q_min, q_max);
    let lo_err = f(px, lo) - py;
    let hi_err = f(px, hi) - py;
    if lo_err.abs() <= opts.tolerance {
        return Ok(lo);
    }
    if hi_err.abs() <= opts.tolerance {
        return Ok(hi);
    }
    let mut lo_sign = lo_err.signum();
    let mut best = if lo_err.abs() <= hi_err.abs() {
        Unsolvable { iterations: 0, residual: lo_err.abs(), best_q: lo }
    } else {
        Unsolvable { iterations: 0, residual: hi_err.abs(), best_q: hi }
    };

    for iteration in 0..opts.max_iterations {
        let mid = 0.5 * (lo + hi);
        let err = f(px, mid) - py;
        if err.abs() <= opts.tolerance {
            return Ok(mid);
        }
        if err.abs() < best.residual {
            best.residual = err.abs();
            best.best_q = mid;
        }
        best.iterations = iteration + 1;

        if err.signum() == lo_sign {
            lo = mid;
            lo_sign = err.signum();
        } else {
            hi = mid;
        }
    }

    warn!(px, py, q_min, q_max, iterations = best.iterations, residual = best.residual, "parameter inversion did not converge");
    Err(best)
}
