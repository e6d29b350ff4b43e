//! Classic lattice gradient noise.

use rand::Rng;
use stv_core::Scalar;
use tracing::trace;

use crate::{NoiseSource, PermutationTable};

/// Quintic smoothstep `6t⁵ − 15t⁴ + 10t³`.
#[inline]
pub fn fade(t: Scalar) -> Scalar {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(t: Scalar, a: Scalar, b: Scalar) -> Scalar {
    a + t * (b - a)
}

/// Dot product of (x, y, z) with one of 12 cube-edge gradients picked by the
/// low four bits of `hash`.
#[inline]
pub fn grad(hash: usize, x: Scalar, y: Scalar, z: Scalar) -> Scalar {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Perlin gradient noise over 3D space, roughly in [-1, 1].
///
/// Integer lattice coordinates wrap every 256 cells.
#[derive(Clone, Debug)]
pub struct NoiseField {
    perm: PermutationTable,
}

impl NoiseField {
    /// A field shuffled from OS entropy; every call yields an independent field.
    pub fn new() -> Self {
        Self::from_table(PermutationTable::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        trace!(seed, "building seeded noise field");
        Self::from_table(PermutationTable::from_seed(seed))
    }

    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self::from_table(PermutationTable::shuffled(rng))
    }

    #[inline]
    pub fn from_table(perm: PermutationTable) -> Self {
        Self { perm }
    }

    #[inline]
    pub fn table(&self) -> &PermutationTable {
        &self.perm
    }

    pub fn noise(&self, x: Scalar, y: Scalar, z: Scalar) -> Scalar {
        let (fx, fy, fz) = (x.floor(), y.floor(), z.floor());
        let xi = (fx as i64 & 255) as usize;
        let yi = (fy as i64 & 255) as usize;
        let zi = (fz as i64 & 255) as usize;

        let (x, y, z) = (x - fx, y - fy, z - fz);
        let (u, v, w) = (fade(x), fade(y), fade(z));

        let p = &self.perm;
        let a = p.get(xi) + yi;
        let aa = p.get(a) + zi;
        let ab = p.get(a + 1) + zi;
        let b = p.get(xi + 1) + yi;
        let ba = p.get(b) + zi;
        let bb = p.get(b + 1) + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(p.get(aa), x, y, z), grad(p.get(ba), x - 1.0, y, z)),
                lerp(u, grad(p.get(ab), x, y - 1.0, z), grad(p.get(bb), x - 1.0, y - 1.0, z)),
            ),
            lerp(
                v,
                lerp(u, grad(p.get(aa + 1), x, y, z - 1.0), grad(p.get(ba + 1), x - 1.0, y, z - 1.0)),
                lerp(u, grad(p.get(ab + 1), x, y - 1.0, z - 1.0), grad(p.get(bb + 1), x - 1.0, y - 1.0, z - 1.0)),
            ),
        )
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for NoiseField {
    #[inline]
    fn sample(&self, x: Scalar, y: Scalar, z: Scalar) -> Scalar {
        self.noise(x, y, z)
    }
}
