//! Convenience methods for constructing grid coordinates and fields
//! in the flat storage order used throughout this crate.
use itertools::iproduct;
use num_traits::{Float, NumCast};

use crate::extent::GridExtent;

/// Physical positions of every grid point, in storage order (`i` fastest, then `j`, then `k`).
///
/// Mapping a function over the result gives a field that can be sampled directly.
pub fn grid_points<T: Float>(extent: &GridExtent<T>) -> Vec<[T; 3]> {
    let [ni, nj, nk] = extent.max_ijk();
    let (lo, del) = (extent.min_xyz(), extent.del_xyz());
    let coord = |axis: usize, i: usize| {
        lo[axis] + del[axis] * <T as NumCast>::from(i).unwrap_or_else(T::nan)
    };

    iproduct!(0..nk, 0..nj, 0..ni)
        .map(|(k, j, i)| [coord(0, i), coord(1, j), coord(2, k)])
        .collect()
}
