//! Mapping between 3D grid coordinates and flat storage indices.
//!
//! Grid coordinates follow the host convention: `i`, `j` and `k` are 1-based,
//! with `i` varying fastest in storage. The flat index returned by
//! [`index_from_ijk`] is 1-based as well; subtract one to get a storage offset.
//!
//! ```rust
//! use volextent::index::{index_from_ijk, ijk_from_index};
//!
//! let max_ijk = [4, 3, 2];
//! let flat = index_from_ijk([2, 3, 2], max_ijk[0], max_ijk[1]);
//! assert_eq!(flat, 2 + 4 * 2 + 4 * 3);
//! assert_eq!(ijk_from_index(flat, max_ijk), [2, 3, 2]);
//! ```
use crate::extent::Periodicity;

/// Flat 1-based index of the 1-based grid coordinate `ijk`.
///
/// Only the sizes of the first two axes enter the formula; the `k` coordinate
/// carries the third axis on its own. Coordinates are not range-checked.
#[inline]
pub fn index_from_ijk(ijk: [usize; 3], max_i: usize, max_j: usize) -> usize {
    ijk[0] + max_i * (ijk[1] - 1) + max_i * max_j * (ijk[2] - 1)
}

/// Flat 1-based index of `ijk`, wrapping coordinates into `[1, max]` on periodic axes.
///
/// With periodicity on an axis, `max + 1` maps to `1` and `0` maps to `max`, and
/// any further multiple of the axis length wraps the same way. Coordinates on
/// non-periodic axes must already lie in `[1, max]`; this is not validated.
#[inline]
pub fn index_from_ijk_periodic(
    ijk: [isize; 3],
    max_ijk: [usize; 3],
    periodic: Periodicity,
) -> usize {
    let mut wrapped = [0_usize; 3];
    for axis in 0..3 {
        let n = max_ijk[axis] as isize;
        let v = if periodic.is_periodic(axis) {
            (ijk[axis] - 1).rem_euclid(n) + 1
        } else {
            ijk[axis]
        };
        debug_assert!(v >= 1, "non-periodic grid coordinate below 1");
        wrapped[axis] = v as usize;
    }

    index_from_ijk(wrapped, max_ijk[0], max_ijk[1])
}

/// Recover the 1-based grid coordinate from a 1-based flat index.
///
/// Inverse of [`index_from_ijk`] for coordinates inside `max_ijk`.
#[inline]
pub fn ijk_from_index(index: usize, max_ijk: [usize; 3]) -> [usize; 3] {
    let offset = index - 1;
    let plane = max_ijk[0] * max_ijk[1];

    [
        offset % max_ijk[0] + 1,
        (offset % plane) / max_ijk[0] + 1,
        offset / plane + 1,
    ]
}

/// Storage offset of the 0-based grid coordinate `ijk0`.
///
/// Keeps the 1-based convention local to this module so that callers
/// assembling cell corners never adjust by one themselves.
#[inline(always)]
pub(crate) fn storage_offset(ijk0: [usize; 3], max_i: usize, max_j: usize) -> usize {
    index_from_ijk([ijk0[0] + 1, ijk0[1] + 1, ijk0[2] + 1], max_i, max_j) - 1
}
