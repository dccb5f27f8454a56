//! Point location in a structured grid.
//!
//! Locating a point clamps it into the grid's bounding box, finds the
//! hexahedral cell containing it along with its natural coordinates in
//! `[-1, 1]^3`, and expands the cell into the storage offsets of its
//! eight corners and their trilinear weights.
//!
//! Corners are numbered like a standard hexahedral brick:
//!
//! ```text
//!      7         6
//!      +---------+
//!     /|        /|
//!   4/ |      5/ |
//!   +---------+  |
//!   |  +------|--+
//!   | /3      | /2
//!   |/        |/
//!   +---------+
//!   0         1
//! ```
//!
//! ```rust
//! use volextent::{locate, GridExtent, Periodicity};
//!
//! let extent = GridExtent::new([3, 3, 3], [0.0; 3], [2.0; 3], Periodicity::none()).unwrap();
//!
//! // Values at grid points, i varying fastest
//! let field: Vec<f64> = (0..27).map(|v| v as f64).collect();
//!
//! // Points outside the grid are clamped onto its boundary
//! let mut point = [0.5, 0.5, 5.0];
//! let location = locate(&mut point, &extent).unwrap();
//! assert_eq!(point, [0.5, 0.5, 2.0]);
//! assert_eq!(location.cell(), [1, 1, 2]);
//!
//! let value = location.sample(&field[..]);
//! assert!((value - 20.0).abs() < 1e-12);
//! ```
use crunchy::unroll;
use num_traits::{Float, NumCast};

use crate::error::LocateError;
use crate::extent::GridExtent;
use crate::index::storage_offset;
use crate::sample::FieldAccessor;
use crate::weights::trilinear_weights;

/// Slack allowed on natural coordinates beyond the unit cube when locating,
/// absorbing rounding at cell boundaries.
pub const NATURAL_COORD_TOL: f64 = 1.0001;

/// Offsets `(di, dj, dk)` of each cell corner from the base corner, in corner order.
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Corner storage offsets and trilinear weights for the last located point.
///
/// One instance is meant to be reused across many queries against the same
/// extent; [`CellLocation::update`] overwrites it in place. Holding on to a
/// location lets the same point be sampled against several fields without
/// locating it again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLocation<'a, T: Float> {
    extent: &'a GridExtent<T>,

    /// 1-based base cell
    cell: [usize; 3],

    /// Natural coordinates within the cell
    natural: [T; 3],

    /// 0-based storage offsets of the cell's corners
    index: [usize; 8],

    /// Trilinear weights of the cell's corners
    weights: [T; 8],
}

impl<'a, T: Float> CellLocation<'a, T> {
    /// An empty location against `extent`.
    ///
    /// All weights are zero until the first successful [`CellLocation::update`].
    pub fn new(extent: &'a GridExtent<T>) -> Self {
        Self {
            extent,
            cell: [1; 3],
            natural: [T::zero(); 3],
            index: [0; 8],
            weights: [T::zero(); 8],
        }
    }

    /// Locate `point`, overwriting the stored corner offsets and weights.
    ///
    /// `point` is clamped into the grid's bounding box in place, and callers
    /// observe the clamped coordinates afterwards, whether or not location
    /// succeeds. On failure the previously stored offsets and weights are left
    /// untouched.
    ///
    /// # Errors
    /// * `OutOfCellRange` if the cell index or natural coordinate is outside the
    ///   padded valid range, which only happens for degenerate grids or NaN input
    /// * `WeightToleranceExceeded` if a natural coordinate exceeds the weight tolerance
    #[inline]
    pub fn update(&mut self, point: &mut [T; 3]) -> Result<(), LocateError> {
        let extent = self.extent;
        clamp_to_extent(point, extent);

        let (cell, natural) = cell_and_natural_coords(point, extent)?;
        let weights = trilinear_weights(&natural)?;

        let [max_i, max_j, _] = extent.max_ijk();
        let base = [cell[0] - 1, cell[1] - 1, cell[2] - 1];
        let mut index = [0_usize; 8];
        unroll! {
            for c in 0..8 {
                let offs = CORNER_OFFSETS[c];
                index[c] = storage_offset(
                    [base[0] + offs[0], base[1] + offs[1], base[2] + offs[2]],
                    max_i,
                    max_j,
                );
            }
        }

        self.cell = cell;
        self.natural = natural;
        self.index = index;
        self.weights = weights;

        Ok(())
    }

    /// The extent this location was computed against.
    #[inline]
    pub fn extent(&self) -> &'a GridExtent<T> {
        self.extent
    }

    /// 1-based coordinate of the base corner (corner 0) of the located cell.
    #[inline]
    pub fn cell(&self) -> [usize; 3] {
        self.cell
    }

    /// Natural coordinates of the located point, nominally in `[-1, 1]`.
    #[inline]
    pub fn natural_coords(&self) -> [T; 3] {
        self.natural
    }

    /// 0-based storage offsets of the eight cell corners.
    #[inline]
    pub fn indices(&self) -> &[usize; 8] {
        &self.index
    }

    /// Trilinear weights matching [`CellLocation::indices`] one-to-one.
    #[inline]
    pub fn weights(&self) -> &[T; 8] {
        &self.weights
    }

    /// Interpolate `field` at the located point.
    #[inline]
    pub fn sample<F: FieldAccessor<T> + ?Sized>(&self, field: &F) -> T {
        crate::sample::sample(self, field)
    }
}

/// Locate `point` in `extent`, clamping it in place.
///
/// Convenience for one-off queries; tracers evaluating many points should
/// keep a [`CellLocation`] and call [`CellLocation::update`] instead.
///
/// # Errors
/// See [`CellLocation::update`].
pub fn locate<'a, T: Float>(
    point: &mut [T; 3],
    extent: &'a GridExtent<T>,
) -> Result<CellLocation<'a, T>, LocateError> {
    let mut location = CellLocation::new(extent);
    location.update(point)?;
    Ok(location)
}

/// Find only the 1-based base cell containing `point`, clamping it in place.
///
/// Skips natural coordinates and corner expansion for callers that only need
/// coarse cell membership.
///
/// # Errors
/// * `OutOfCellRange` if the cell index falls outside the grid
pub fn locate_cell<T: Float>(
    point: &mut [T; 3],
    extent: &GridExtent<T>,
) -> Result<[usize; 3], LocateError> {
    clamp_to_extent(point, extent);

    let mut cell = [0_usize; 3];
    for axis in 0..3 {
        let t = continuous_cell_coord(point[axis], extent, axis)?;
        cell[axis] = base_cell(t, extent.max_ijk()[axis], axis)?;
    }

    Ok(cell)
}

/// Move each coordinate of `point` onto the nearest bound if it lies outside.
#[inline]
pub fn clamp_to_extent<T: Float>(point: &mut [T; 3], extent: &GridExtent<T>) {
    let (lo, hi) = (extent.min_xyz(), extent.max_xyz());
    for axis in 0..3 {
        if point[axis] < lo[axis] || point[axis] > hi[axis] {
            point[axis] = hi[axis].min(point[axis].max(lo[axis]));
        }
    }
}

/// Base cell and natural coordinates of a point already inside the bounds.
#[inline]
fn cell_and_natural_coords<T: Float>(
    point: &[T; 3],
    extent: &GridExtent<T>,
) -> Result<([usize; 3], [T; 3]), LocateError> {
    let one = T::one();
    let two = one + one;
    let tol = <T as NumCast>::from(NATURAL_COORD_TOL).ok_or(LocateError::OutOfCellRange { axis: 0 })?;

    let mut cell = [0_usize; 3];
    let mut natural = [T::zero(); 3];
    for axis in 0..3 {
        let t = continuous_cell_coord(point[axis], extent, axis)?;
        let ijk = base_cell(t, extent.max_ijk()[axis], axis)?;
        let fijk = <T as NumCast>::from(ijk).ok_or(LocateError::OutOfCellRange { axis })?;
        let rst = two * (t - fijk) - one;

        // Negated so that NaN fails as well
        if !(rst >= -tol && rst <= tol) {
            log::trace!("natural coordinate on axis {axis} of cell {ijk} outside tolerance");
            return Err(LocateError::OutOfCellRange { axis });
        }

        cell[axis] = ijk;
        natural[axis] = rst;
    }

    Ok((cell, natural))
}

/// Continuous 1-based grid coordinate of `v` along `axis`.
#[inline]
fn continuous_cell_coord<T: Float>(
    v: T,
    extent: &GridExtent<T>,
    axis: usize,
) -> Result<T, LocateError> {
    let ncells = <T as NumCast>::from(extent.max_ijk()[axis] - 1)
        .ok_or(LocateError::OutOfCellRange { axis })?;
    let (lo, hi) = (extent.min_xyz()[axis], extent.max_xyz()[axis]);

    Ok(T::one() + ncells * (v - lo) / (hi - lo))
}

/// 1-based base cell index for continuous coordinate `t`,
/// saturating onto the last full cell at the upper bound.
#[inline]
fn base_cell<T: Float>(t: T, n: usize, axis: usize) -> Result<usize, LocateError> {
    // NaN or unrepresentably large coordinates can not be placed
    let floc = <isize as NumCast>::from(t.floor()).ok_or_else(|| {
        log::trace!("cell coordinate on axis {axis} is not representable");
        LocateError::OutOfCellRange { axis }
    })?;

    let n = n as isize;
    let ijk = floc.min(n - 1).max(1);
    if ijk < 1 || ijk > n {
        return Err(LocateError::OutOfCellRange { axis });
    }

    Ok(ijk as usize)
}
