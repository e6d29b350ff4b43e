//! Grid lines that pass through a chosen (possibly moving) point.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use stv_core::{Scalar, Vec3};
use stv_noise::NoiseSource;
use tracing::debug;

use crate::generate::perlin_polyline;
use crate::{solve, Axis, Curve, CurveError, PerlinCurve, PerlinParams, Polyline, SolveOptions, Unsolvable};

/// One family of warped grid lines, indexed by a continuous row number q.
///
/// Row q has `shift = shift_per_row · q` and `y_sample = stretch_per_row · q`,
/// so integer rows are the regular grid and fractional rows fall in between.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLineParams {
    pub axis: Axis,
    pub shift_per_row: Scalar,
    pub stretch_per_row: Scalar,
    pub amplitude: Scalar,
    pub theta: Scalar,
    pub scale: Scalar,
    pub start: Scalar,
    pub end: Scalar,
    /// Row bracket searched when locking onto a point.
    pub row_min: Scalar,
    pub row_max: Scalar,
    pub solve: SolveOptions,
}

impl Default for GridLineParams {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            shift_per_row: 0.5,
            stretch_per_row: 0.1,
            amplitude: 1.0,
            theta: 0.0,
            scale: 1.0,
            start: -20.0,
            end: 20.0,
            row_min: -50.0,
            row_max: 50.0,
            solve: SolveOptions { tolerance: 1e-10, max_iterations: 10_000 },
        }
    }
}

impl GridLineParams {
    /// Curve parameters of row `q`.
    pub fn row(&self, q: Scalar) -> PerlinParams {
        PerlinParams {
            axis: self.axis,
            y_sample: self.stretch_per_row * q,
            shift: self.shift_per_row * q,
            amplitude: self.amplitude,
            theta: self.theta,
            scale: self.scale,
            start: self.start,
            end: self.end,
        }
    }

    /// Row whose line passes through `anchor` (anchor height is ignored).
    pub fn solve_row(&self, noise: &dyn NoiseSource, anchor: Vec3) -> Result<Scalar, Unsolvable> {
        let local = self.row(0.0).to_local(anchor);
        let (along, across) = self.axis.split(local);
        solve(|x, q| self.row(q).warp(noise, x), (along, across), self.row_min, self.row_max, self.solve)
    }
}

/// A Perlin grid line re-solved whenever its anchor moves, so it always runs
/// through the anchor.
#[derive(Clone)]
pub struct PointLockedCurve {
    grid: GridLineParams,
    anchor: Vec3,
    row: Scalar,
    curve: PerlinCurve,
}

impl PointLockedCurve {
    pub fn new(grid: GridLineParams, noise: Rc<dyn NoiseSource>, anchor: Vec3) -> Result<Self, CurveError> {
        let row = grid.solve_row(noise.as_ref(), anchor)?;
        let curve = PerlinCurve::new(grid.row(row), noise);
        Ok(Self { grid, anchor, row, curve })
    }

    /// Moves the anchor and re-solves the row.
    ///
    /// When no row passes through the new anchor, the previous anchor and row
    /// are kept and the error is returned.
    pub fn set_anchor(&mut self, anchor: Vec3) -> Result<Scalar, CurveError> {
        let row = self.grid.solve_row(self.curve.noise.as_ref(), anchor).map_err(|e| {
            debug!(?anchor, error = %e, "keeping previous grid row");
            e
        })?;
        self.anchor = anchor;
        self.row = row;
        self.curve.params = self.grid.row(row);
        Ok(row)
    }

    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    #[inline]
    pub fn row(&self) -> Scalar {
        self.row
    }

    #[inline]
    pub fn grid(&self) -> &GridLineParams {
        &self.grid
    }

    #[inline]
    pub fn curve(&self) -> &PerlinCurve {
        &self.curve
    }

    /// Parameter t at which the line passes the anchor, clamped to [0, 1]:
    /// an anchor beyond `[start, end]` maps to the nearer end of the line.
    pub fn anchor_t(&self) -> Scalar {
        let (along, _) = self.grid.axis.split(self.curve.params.to_local(self.anchor));
        ((along - self.grid.start) / (self.grid.end - self.grid.start)).clamp(0.0, 1.0)
    }

    /// The line sampled every `delta` along its axis, for array-based searches.
    pub fn polyline(&self, delta: Scalar) -> Result<Polyline, CurveError> {
        perlin_polyline(self.curve.noise.as_ref(), &self.curve.params, delta)
    }
}

impl fmt::Debug for PointLockedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointLockedCurve")
            .field("grid", &self.grid)
            .field("anchor", &self.anchor)
            .field("row", &self.row)
            .finish_non_exhaustive()
    }
}

impl Curve for PointLockedCurve {
    #[inline]
    fn point_at(&self, t: Scalar) -> Vec3 {
        self.curve.point_at(t)
    }
}
