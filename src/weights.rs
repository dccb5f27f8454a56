//! Trilinear shape-function weights of a hexahedral cell.
//!
//! Each corner's weight is the product of one linear shape function per axis,
//! `(1 - r) / 2` on the low side of the cell and `(1 + r) / 2` on the high side,
//! evaluated at the point's natural coordinates. The eight weights sum to one
//! by construction.
//!
//! References
//! * https://en.wikipedia.org/wiki/Trilinear_interpolation
use crunchy::unroll;
use num_traits::{Float, NumCast};

use crate::error::LocateError;
use crate::locate::CORNER_OFFSETS;

/// Natural coordinates must lie strictly inside `(-WEIGHT_TOL, WEIGHT_TOL)`
/// for weights to be evaluated. Wider than the locator's own tolerance.
pub const WEIGHT_TOL: f64 = 1.0005;

/// Weights of the eight cell corners, in corner order, at natural coordinates `rst`.
///
/// # Errors
/// * `WeightToleranceExceeded` if any coordinate is NaN or outside the tolerance band
#[inline]
pub fn trilinear_weights<T: Float>(rst: &[T; 3]) -> Result<[T; 8], LocateError> {
    let one = T::one();
    let tol = <T as NumCast>::from(WEIGHT_TOL)
        .ok_or(LocateError::WeightToleranceExceeded { axis: 0 })?;
    let eighth = <T as NumCast>::from(0.125_f64)
        .ok_or(LocateError::WeightToleranceExceeded { axis: 0 })?;

    // factors[axis][0] is the low-side term, factors[axis][1] the high-side term
    let mut factors = [[T::zero(); 2]; 3];
    for axis in 0..3 {
        let r = rst[axis];
        if !(r > -tol && r < tol) {
            log::trace!("natural coordinate on axis {axis} exceeds weight tolerance");
            return Err(LocateError::WeightToleranceExceeded { axis });
        }
        factors[axis] = [one - r, one + r];
    }

    let mut weights = [T::zero(); 8];
    unroll! {
        for c in 0..8 {
            let offs = CORNER_OFFSETS[c];
            weights[c] = eighth
                * factors[0][offs[0]]
                * factors[1][offs[1]]
                * factors[2][offs[2]];
        }
    }

    Ok(weights)
}
