#![allow(unused_doc_comments)]
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stv_noise::{NoiseField, NoiseSource, PermutationTable};

fn identity_field() -> NoiseField {
    NoiseField::from_table(PermutationTable::identity())
}

// Golden test: unshuffled table at the origin.
#[test]
fn golden_identity_origin() {
    assert_eq!(identity_field().sample(0.0, 0.0, 0.0), 0.0);
}

// Golden test: unshuffled table at the centre of the first cell.
// Corner gradients are (1, 1, -1, 0, 0, -1, 1, 1); the trilinear blend is 0.25.
#[test]
fn golden_identity_cell_centre() {
    let v = identity_field().sample(0.5, 0.5, 0.5);
    assert_eq!(v, 0.25, "identity field drifted: {v}");
}

#[test]
fn identity_fields_agree_everywhere() {
    let a = identity_field();
    let b = identity_field();
    for i in 0..200 {
        let x = i as f64 * 0.173 - 17.0;
        assert_eq!(a.sample(x, 0.3 * x, 1.7), b.sample(x, 0.3 * x, 1.7));
    }
}

#[test]
fn entropy_fields_are_independent() {
    // 256! possible tables; two fresh draws colliding is not a realistic outcome.
    let a = NoiseField::new();
    let b = NoiseField::new();
    assert_ne!(a.table(), b.table());
}

#[test]
fn rng_driven_field_matches_seeded_table() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = NoiseField::from_rng(&mut rng);
    let b = NoiseField::with_seed(11);
    assert_eq!(a.table(), b.table());
}

#[test]
fn field_is_continuous_across_cell_faces() {
    let n = NoiseField::with_seed(5);
    let eps = 1e-9;
    for i in -5..5 {
        let x = i as f64;
        let left = n.sample(x - eps, 0.37, 0.0);
        let right = n.sample(x + eps, 0.37, 0.0);
        assert!((left - right).abs() < 1e-6, "jump at x={x}: {left} vs {right}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256, .. ProptestConfig::default()
    })]

    /// Output stays within the classic Perlin envelope.
    #[test]
    fn prop_bounded(seed in any::<u64>(), x in -300.0f64..300.0, y in -300.0f64..300.0, z in -300.0f64..300.0) {
        let v = NoiseField::with_seed(seed).sample(x, y, z);
        prop_assert!(v.is_finite());
        prop_assert!(v.abs() <= 1.1, "noise out of range: {v}");
    }

    /// Integer lattice points are zero crossings for every table.
    #[test]
    fn prop_zero_on_lattice(seed in any::<u64>(), x in -50i32..50, y in -50i32..50, z in -50i32..50) {
        let v = NoiseField::with_seed(seed).sample(x as f64, y as f64, z as f64);
        prop_assert_eq!(v, 0.0);
    }

    /// Translating by a full 256-cell period does not change the field.
    #[test]
    fn prop_periodic(seed in any::<u64>(), x in -10.0f64..10.0, y in -10.0f64..10.0) {
        let n = NoiseField::with_seed(seed);
        let a = n.sample(x, y, 0.25);
        let b = n.sample(x + 256.0, y, 0.25);
        prop_assert!((a - b).abs() < 1e-9);
    }
}
