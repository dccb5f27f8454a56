//! Evaluation of fields at located points.
//!
//! Field values live in storage owned by the host, laid out with `i` varying
//! fastest. This module only needs indexed reads, expressed by [`FieldAccessor`].
//!
//! ```rust
//! use volextent::{sample, GridExtent, Periodicity};
//!
//! let extent = GridExtent::new([2, 2, 2], [0.0; 3], [1.0; 3], Periodicity::none()).unwrap();
//! let field = [0.0_f64, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]; // f(x, y, z) = x
//!
//! // Observation points to interpolate
//! let xobs = [0.25_f64, 0.5, 2.0];
//! let yobs = [0.0, 0.5, 0.5];
//! let zobs = [1.0, 0.5, 0.5];
//! let mut out = [0.0; 3];
//!
//! sample::interpn(&extent, &field[..], [&xobs[..], &yobs[..], &zobs[..]], &mut out).unwrap();
//! assert_eq!(out, [0.25, 0.5, 1.0]); // the last point is clamped to x = 1
//! ```
use num_traits::Float;

use crate::error::SampleError;
use crate::extent::GridExtent;
use crate::locate::CellLocation;

/// Read access to a field stored at the points of a grid.
///
/// Offsets are 0-based. Implementations may panic on out-of-range offsets;
/// the offsets produced by a [`CellLocation`] are always inside a field whose
/// length is [`GridExtent::num_points`].
pub trait FieldAccessor<T> {
    /// Value stored at `offset`.
    fn value_at(&self, offset: usize) -> T;
}

impl<T: Copy> FieldAccessor<T> for [T] {
    #[inline(always)]
    fn value_at(&self, offset: usize) -> T {
        self[offset]
    }
}

impl<T: Copy, const N: usize> FieldAccessor<T> for [T; N] {
    #[inline(always)]
    fn value_at(&self, offset: usize) -> T {
        self[offset]
    }
}

#[cfg(feature = "std")]
impl<T: Copy> FieldAccessor<T> for Vec<T> {
    #[inline(always)]
    fn value_at(&self, offset: usize) -> T {
        self[offset]
    }
}

impl<T, F: FieldAccessor<T> + ?Sized> FieldAccessor<T> for &F {
    #[inline(always)]
    fn value_at(&self, offset: usize) -> T {
        (**self).value_at(offset)
    }
}

/// Interpolated value of `field` at the point last located by `location`.
///
/// No bounds checking beyond what the accessor does itself.
#[inline]
pub fn sample<T: Float, F: FieldAccessor<T> + ?Sized>(
    location: &CellLocation<'_, T>,
    field: &F,
) -> T {
    let index = location.indices();
    let weights = location.weights();

    let mut value = T::zero();
    for c in 0..8 {
        value = value + weights[c] * field.value_at(index[c]);
    }

    value
}

/// Interpolate each of `fields` at the same located point.
///
/// # Errors
/// * If `out` and `fields` differ in length
pub fn sample_many<T: Float, F: FieldAccessor<T>>(
    location: &CellLocation<'_, T>,
    fields: &[F],
    out: &mut [T],
) -> Result<(), SampleError> {
    if fields.len() != out.len() {
        return Err(SampleError::LengthMismatch {
            expected: fields.len(),
            found: out.len(),
        });
    }

    for (o, field) in out.iter_mut().zip(fields) {
        *o = sample(location, field);
    }

    Ok(())
}

/// Interpolate `field` at a list of observation points given as per-axis coordinate slices.
///
/// Points outside the grid are clamped onto its boundary before sampling, like
/// single-point location; use [`check_bounds`] first to detect them. A single
/// [`CellLocation`] is reused across all points.
///
/// # Errors
/// * If the coordinate slices and `out` differ in length
/// * If any point can not be located; `out` is left partially filled
pub fn interpn<T: Float, F: FieldAccessor<T> + ?Sized>(
    extent: &GridExtent<T>,
    field: &F,
    obs: [&[T]; 3],
    out: &mut [T],
) -> Result<(), SampleError> {
    check_lengths(&obs, out.len())?;

    let mut location = CellLocation::new(extent);
    for (i, o) in out.iter_mut().enumerate() {
        let mut point = [obs[0][i], obs[1][i], obs[2][i]];
        location
            .update(&mut point)
            .map_err(|source| SampleError::Locate { point: i, source })?;
        *o = location.sample(field);
    }

    Ok(())
}

/// Evaluate [`interpn`], allocating a new Vec for the output.
///
/// For best results, use the `interpn` function with preallocated output;
/// allocation has a significant performance cost, and should be used sparingly.
#[cfg(feature = "std")]
pub fn interpn_alloc<T: Float, F: FieldAccessor<T> + ?Sized>(
    extent: &GridExtent<T>,
    field: &F,
    obs: [&[T]; 3],
) -> Result<Vec<T>, SampleError> {
    let mut out = vec![T::zero(); obs[0].len()];
    interpn(extent, field, obs, &mut out)?;
    Ok(out)
}

/// Check whether a list of observation points are inside the grid within some absolute tolerance.
///
/// Output slice entry `i` is set to `false` if no points on that axis are out of bounds,
/// and set to `true` if there is a bounds violation on that axis. Location clamps
/// silently, so this is how a caller learns a point has left the domain.
pub fn check_bounds<T: Float>(
    extent: &GridExtent<T>,
    obs: [&[T]; 3],
    atol: T,
    out: &mut [bool; 3],
) {
    let (lo, hi) = (extent.min_xyz(), extent.max_xyz());
    for axis in 0..3 {
        out[axis] = obs[axis]
            .iter()
            .any(|&x| (x - lo[axis]) <= -atol || (x - hi[axis]) >= atol || x.is_nan());
    }
}

/// Make sure all per-axis coordinate slices match the output length.
pub(crate) fn check_lengths<T>(obs: &[&[T]; 3], n: usize) -> Result<(), SampleError> {
    match obs.iter().find(|x| x.len() != n) {
        Some(bad) => Err(SampleError::LengthMismatch {
            expected: n,
            found: bad.len(),
        }),
        None => Ok(()),
    }
}
