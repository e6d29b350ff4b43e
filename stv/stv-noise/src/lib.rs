#![doc = r#"Procedural noise for warped coordinate grids.

- [`PermutationTable`]: 256 shuffled lattice hashes, mirrored to 512 entries.
- [`NoiseField`]: classic (improved) Perlin gradient noise over 3D space.
- [`NoiseSource`]: the sampling seam curves are written against.
- [`value_noise_1d`]: a cheap sine-hash value noise for flowing 1D curves.

Notes:
- A field is immutable after construction. Two fields built from OS entropy
  are independent; fields built from the same seed are identical.

```rust
use stv_noise::{NoiseField, NoiseSource};

let a = NoiseField::with_seed(7);
let b = NoiseField::with_seed(7);
assert_eq!(a.sample(1.3, 0.2, 0.0), b.sample(1.3, 0.2, 0.0));
assert_eq!(a.sample(4.0, 2.0, 1.0), 0.0); // lattice points are zero crossings
```
"#]

pub mod error;
pub mod perlin;
pub mod table;
pub mod value;

pub use error::NoiseError;
pub use perlin::{fade, grad, lerp, NoiseField};
pub use table::PermutationTable;
pub use value::value_noise_1d;

use stv_core::Scalar;

/// Anything that can be sampled as a scalar field over 3D space.
pub trait NoiseSource: std::fmt::Debug {
    fn sample(&self, x: Scalar, y: Scalar, z: Scalar) -> Scalar;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &N {
    #[inline]
    fn sample(&self, x: Scalar, y: Scalar, z: Scalar) -> Scalar {
        (**self).sample(x, y, z)
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for std::rc::Rc<N> {
    #[inline]
    fn sample(&self, x: Scalar, y: Scalar, z: Scalar) -> Scalar {
        (**self).sample(x, y, z)
    }
}
