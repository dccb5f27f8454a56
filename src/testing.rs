use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::extent::GridExtent;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` points uniformly distributed inside the bounding box of `extent`
pub fn random_points(rng: &mut StdRng, extent: &GridExtent<f64>, n: usize) -> Vec<[f64; 3]> {
    let (lo, hi) = (extent.min_xyz(), extent.max_xyz());
    std::iter::repeat_with(|| {
        let mut p = [0.0; 3];
        for axis in 0..3 {
            p[axis] = rng.random_range(lo[axis]..=hi[axis]);
        }
        p
    })
    .take(n)
    .collect()
}
