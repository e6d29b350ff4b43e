//! Toolkit configuration: documented defaults, JSON files and `STV_*`
//! environment overrides.

use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use stv_core::Scalar;
use stv_curve::SolveOptions;
use stv_noise::{NoiseField, PermutationTable};
use tracing::info;

use crate::SceneError;

pub const ENV_SEED: &str = "STV_SEED";
pub const ENV_CLOSEST_STEP: &str = "STV_CLOSEST_STEP";
pub const ENV_SOLVER_TOLERANCE: &str = "STV_SOLVER_TOLERANCE";
pub const ENV_SOLVER_MAX_ITERATIONS: &str = "STV_SOLVER_MAX_ITERATIONS";

/// Settings shared by every scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Seed for noise fields and random phases. `None` draws from OS entropy
    /// once per scene.
    pub seed: Option<u64>,
    /// Explicit permutation of 0..=255 for the noise field; overrides `seed`.
    pub permutation: Option<Vec<u8>>,
    /// Parameter step of the continuous closest-point scan used while
    /// dragging along a curve (default 1e-4).
    pub closest_step: Scalar,
    /// Bisection settings for grid lines locked to a point
    /// (default tolerance 1e-10, 10 000 iterations).
    pub solver: SolveOptions,
    /// Segments per tube mesh (default 1000).
    pub tube_segments: usize,
    /// Tube radius in world units (default 0.01).
    pub tube_radius: Scalar,
    /// Grid rows drawn on each side of the origin (default 40).
    pub grid_rows: i32,
    /// Vertical extent of the orthographic frustum before zoom (default 50).
    pub frustum_size: Scalar,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            seed: None,
            permutation: None,
            closest_step: 1e-4,
            solver: SolveOptions { tolerance: 1e-10, max_iterations: 10_000 },
            tube_segments: 1000,
            tube_radius: 0.01,
            grid_rows: 40,
            frustum_size: 50.0,
        }
    }
}

impl ToolkitConfig {
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Defaults overridden by the `STV_*` process environment.
    pub fn from_env() -> Result<Self, SceneError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `STV_*` overrides read through `lookup`. Blank values are
    /// ignored; unparsable ones are errors.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, SceneError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = parse(&lookup, ENV_SEED)? {
            self.seed = Some(seed);
        }
        if let Some(step) = parse::<Scalar, _>(&lookup, ENV_CLOSEST_STEP)? {
            if !(step > 0.0 && step <= 1.0) {
                return Err(SceneError::Config { key: ENV_CLOSEST_STEP, value: step.to_string() });
            }
            self.closest_step = step;
        }
        if let Some(tol) = parse(&lookup, ENV_SOLVER_TOLERANCE)? {
            self.solver.tolerance = tol;
        }
        if let Some(iters) = parse(&lookup, ENV_SOLVER_MAX_ITERATIONS)? {
            self.solver.max_iterations = iters;
        }
        Ok(self)
    }

    /// The noise field a new scene samples.
    pub fn noise_field(&self) -> Result<NoiseField, SceneError> {
        let field = match (&self.permutation, self.seed) {
            (Some(p), _) => NoiseField::from_table(PermutationTable::from_permutation(p)?),
            (None, Some(seed)) => NoiseField::with_seed(seed),
            (None, None) => NoiseField::new(),
        };
        info!(seeded = self.seed.is_some(), injected = self.permutation.is_some(), "noise field ready");
        Ok(field)
    }

    /// Random source for one named consumer; reproducible when seeded.
    pub fn rng_for(&self, label: &str) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(label_seed(seed, label)),
            None => StdRng::from_entropy(),
        }
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Sub-seed for one labelled consumer: the seed mixed with the 64-bit FNV-1a
/// hash of the label, stable across toolchains.
fn label_seed(seed: u64, label: &str) -> u64 {
    let hash = label.bytes().fold(FNV_OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
    seed ^ hash
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, SceneError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SceneError::Config { key, value: raw }),
        _ => Ok(None),
    }
}
