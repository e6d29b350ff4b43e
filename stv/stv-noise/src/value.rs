//! One-dimensional value noise for flowing worldlines.

use stv_core::Scalar;

use crate::perlin::fade;

#[inline]
fn hash(n: Scalar) -> Scalar {
    let x = n.sin() * 43758.5453123;
    x - x.floor()
}

/// Smoothly interpolated pseudo-random values in [0, 1).
///
/// Lattice values come from a sine hash of the integer cell (wrapped to 256
/// cells), blended with the quintic fade curve.
pub fn value_noise_1d(x: Scalar) -> Scalar {
    let fx = x.floor();
    let cell = (fx as i64 & 255) as Scalar;
    let f = fade(x - fx);
    let a = hash(cell);
    let b = hash(cell + 1.0);
    (1.0 - f) * a + f * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_points_hit_hash_values() {
        assert_eq!(value_noise_1d(0.0), 0.0);
        assert_eq!(value_noise_1d(3.0), hash(3.0));
    }

    #[test]
    fn stays_in_unit_interval() {
        for i in 0..2_000 {
            let v = value_noise_1d(i as Scalar * 0.137 - 100.0);
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }
}
