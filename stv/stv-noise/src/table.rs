//! Lattice permutation tables.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::NoiseError;

/// A permutation of 0..=255 stored twice, so `p[i + 256] == p[i]` and lattice
/// lookups of the form `p[p[x] + y]` never need a modulo.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    p: [u8; 512],
}

impl PermutationTable {
    /// The unshuffled table `[0, 1, ..., 255, 0, 1, ..., 255]`.
    pub fn identity() -> Self {
        let mut p = [0u8; 512];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = (i & 255) as u8;
        }
        Self { p }
    }

    /// Fisher–Yates shuffle of the identity, walking i = 255 down to 1.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut p = [0u8; 512];
        for (i, slot) in p.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }
        for i in (1..=255usize).rev() {
            let j = rng.gen_range(0..=i);
            p.swap(i, j);
        }
        let (head, tail) = p.split_at_mut(256);
        tail.copy_from_slice(head);
        Self { p }
    }

    /// Reproducible shuffle driven by a seeded `StdRng`.
    pub fn from_seed(seed: u64) -> Self {
        Self::shuffled(&mut StdRng::seed_from_u64(seed))
    }

    /// Shuffle drawn once from OS entropy.
    pub fn from_entropy() -> Self {
        Self::shuffled(&mut StdRng::from_entropy())
    }

    /// Builds a table from an explicit 256-entry permutation (test doubles,
    /// replayed sessions).
    pub fn from_permutation(values: &[u8]) -> Result<Self, NoiseError> {
        if values.len() != 256 {
            return Err(NoiseError::TableLength { len: values.len() });
        }
        let mut seen = [false; 256];
        for &v in values {
            seen[v as usize] = true;
        }
        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(NoiseError::InvalidPermutation { missing: missing as u8 });
        }
        let mut p = [0u8; 512];
        p[..256].copy_from_slice(values);
        p[256..].copy_from_slice(values);
        Ok(Self { p })
    }

    #[inline]
    pub fn get(&self, i: usize) -> usize {
        self.p[i] as usize
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8; 512] {
        &self.p
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable").field("head", &&self.p[..8]).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mirrored(t: &PermutationTable) {
        let p = t.as_slice();
        for i in 0..256 {
            assert_eq!(p[i], p[i + 256], "entry {i} not mirrored");
        }
    }

    #[test]
    fn shuffled_table_is_a_mirrored_permutation() {
        let t = PermutationTable::from_seed(99);
        assert_mirrored(&t);
        let mut head: Vec<u8> = t.as_slice()[..256].to_vec();
        head.sort_unstable();
        assert!(head.iter().enumerate().all(|(i, &v)| i == v as usize));
    }

    #[test]
    fn identity_is_mirrored() {
        let t = PermutationTable::identity();
        assert_mirrored(&t);
        assert_eq!(t.get(300), 44);
    }

    #[test]
    fn explicit_permutation_is_validated() {
        let short = [0u8; 10];
        assert_eq!(PermutationTable::from_permutation(&short), Err(NoiseError::TableLength { len: 10 }));

        let mut dup: Vec<u8> = (0..=255).collect();
        dup[5] = 4;
        assert_eq!(PermutationTable::from_permutation(&dup), Err(NoiseError::InvalidPermutation { missing: 5 }));

        let rev: Vec<u8> = (0..=255).rev().collect();
        let t = PermutationTable::from_permutation(&rev).unwrap();
        assert_eq!(t.get(0), 255);
        assert_eq!(t.get(256), 255);
    }

    #[test]
    fn seeds_differ() {
        assert_ne!(PermutationTable::from_seed(1), PermutationTable::from_seed(2));
    }
}
