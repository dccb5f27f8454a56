//! Geometry of a structured 3D grid with uniform spacing on each axis.
use num_traits::{Float, NumCast};

use crate::error::ExtentError;

/// Per-axis flags marking which axes wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Periodicity([bool; 3]);

impl Periodicity {
    pub const fn new(x: bool, y: bool, z: bool) -> Self {
        Self([x, y, z])
    }

    /// No axis wraps.
    pub const fn none() -> Self {
        Self([false; 3])
    }

    /// Every axis wraps, as for a crystal lattice.
    pub const fn all() -> Self {
        Self([true; 3])
    }

    #[inline]
    pub fn is_periodic(&self, axis: usize) -> bool {
        self.0[axis]
    }
}

impl From<[bool; 3]> for Periodicity {
    fn from(flags: [bool; 3]) -> Self {
        Self(flags)
    }
}

/// Dimensions, physical bounding box and periodicity of a structured grid.
///
/// Grid points are evenly spaced on each axis, from `min_xyz` to `max_xyz`
/// inclusive. Built once from the host's zone geometry and shared read-only
/// by every query against that zone.
///
/// Equality is exact, including on the floating-point bounds; two extents
/// computed along different arithmetic paths may compare unequal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridExtent<T: Float> {
    /// Number of grid points along each axis
    max_ijk: [usize; 3],

    /// Lower corner of the bounding box
    min_xyz: [T; 3],

    /// Upper corner of the bounding box
    max_xyz: [T; 3],

    /// Spacing between grid points along each axis
    del_xyz: [T; 3],

    periodic: Periodicity,
}

impl<T: Float> GridExtent<T> {
    /// Build an extent from the number of points and bounding box on each axis.
    ///
    /// # Errors
    /// * If any axis has fewer than 2 points
    /// * If any bound is non-finite or the upper bound does not exceed the lower one
    /// * If the span or the spacing on an axis is not a finite positive number
    /// * If an axis size is not representable in `T`
    pub fn new(
        max_ijk: [usize; 3],
        min_xyz: [T; 3],
        max_xyz: [T; 3],
        periodic: Periodicity,
    ) -> Result<Self, ExtentError> {
        let mut del_xyz = [T::zero(); 3];
        for axis in 0..3 {
            if max_ijk[axis] < 2 {
                log::debug!("rejecting grid extent: axis {axis} has {} points", max_ijk[axis]);
                return Err(ExtentError::TooFewPoints {
                    axis,
                    size: max_ijk[axis],
                });
            }
            let (lo, hi) = (min_xyz[axis], max_xyz[axis]);
            if !(lo.is_finite() && hi.is_finite() && hi > lo && (hi - lo).is_finite()) {
                log::debug!("rejecting grid extent: bounds on axis {axis} are not increasing");
                return Err(ExtentError::InvalidBounds { axis });
            }
            let ncells = <T as NumCast>::from(max_ijk[axis] - 1)
                .ok_or(ExtentError::Unrepresentable { axis })?;
            del_xyz[axis] = (hi - lo) / ncells;
            if !(del_xyz[axis].is_finite() && del_xyz[axis] > T::zero()) {
                log::debug!("rejecting grid extent: spacing on axis {axis} is not positive");
                return Err(ExtentError::InvalidBounds { axis });
            }
        }

        Ok(Self {
            max_ijk,
            min_xyz,
            max_xyz,
            del_xyz,
            periodic,
        })
    }

    /// Build an extent from the lower corner and the spacing between points.
    ///
    /// The upper corner is `min_xyz + del_xyz * (max_ijk - 1)`, and the spacing
    /// is then re-derived from the bounds so the result matches [`GridExtent::new`].
    ///
    /// # Errors
    /// Same as [`GridExtent::new`]; a non-positive spacing yields `InvalidBounds`.
    pub fn from_spacing(
        max_ijk: [usize; 3],
        min_xyz: [T; 3],
        del_xyz: [T; 3],
        periodic: Periodicity,
    ) -> Result<Self, ExtentError> {
        let mut max_xyz = min_xyz;
        for axis in 0..3 {
            // Left degenerate so `new` rejects it
            if max_ijk[axis] < 2 {
                continue;
            }
            let ncells = <T as NumCast>::from(max_ijk[axis] - 1)
                .ok_or(ExtentError::Unrepresentable { axis })?;
            max_xyz[axis] = min_xyz[axis] + del_xyz[axis] * ncells;
        }

        Self::new(max_ijk, min_xyz, max_xyz, periodic)
    }

    /// Number of grid points along each axis.
    #[inline]
    pub fn max_ijk(&self) -> [usize; 3] {
        self.max_ijk
    }

    #[inline]
    pub fn min_xyz(&self) -> [T; 3] {
        self.min_xyz
    }

    #[inline]
    pub fn max_xyz(&self) -> [T; 3] {
        self.max_xyz
    }

    /// Physical spacing between neighboring grid points on each axis.
    #[inline]
    pub fn del_xyz(&self) -> [T; 3] {
        self.del_xyz
    }

    #[inline]
    pub fn periodic(&self) -> Periodicity {
        self.periodic
    }

    /// Total number of grid points, which is the length a field over this grid must have.
    pub fn num_points(&self) -> usize {
        self.max_ijk.iter().product()
    }

    /// Total number of hexahedral cells.
    pub fn num_cells(&self) -> usize {
        self.max_ijk.iter().map(|n| n - 1).product()
    }

    /// Whether `point` lies inside the closed bounding box.
    pub fn contains(&self, point: &[T; 3]) -> bool {
        (0..3).all(|axis| point[axis] >= self.min_xyz[axis] && point[axis] <= self.max_xyz[axis])
    }

    /// Physical position of the grid point at 1-based coordinate `ijk`.
    ///
    /// Returns `None` if a coordinate is zero or not representable in `T`.
    /// Coordinates past the last grid point extrapolate along the uniform spacing.
    pub fn grid_point_position(&self, ijk: [usize; 3]) -> Option<[T; 3]> {
        let mut xyz = [T::zero(); 3];
        for axis in 0..3 {
            let steps = <T as NumCast>::from(ijk[axis].checked_sub(1)?)?;
            xyz[axis] = self.min_xyz[axis] + self.del_xyz[axis] * steps;
        }
        Some(xyz)
    }
}
