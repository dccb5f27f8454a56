//! Error types for grid construction, point location and batch sampling.
use thiserror::Error;

/// Reasons a [`GridExtent`](crate::GridExtent) can not be built from host geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtentError {
    /// Interpolation needs at least one full cell along every axis.
    #[error("axis {axis} has {size} grid points, at least 2 are required")]
    TooFewPoints { axis: usize, size: usize },

    /// Bounds must be finite with the upper bound strictly above the lower one.
    #[error("bounds on axis {axis} are not finite and increasing")]
    InvalidBounds { axis: usize },

    /// The axis size can not be represented in the coordinate float type.
    #[error("size of axis {axis} is not representable in the coordinate type")]
    Unrepresentable { axis: usize },
}

/// Recoverable failures when placing a point in the grid.
///
/// Neither is fatal; a tracer hitting one of these should treat the point
/// as having left the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocateError {
    /// The cell index or natural coordinate fell outside the padded valid range.
    #[error("point could not be placed in a cell along axis {axis}")]
    OutOfCellRange { axis: usize },

    /// A natural coordinate exceeded the trilinear weight tolerance band.
    #[error("natural coordinate on axis {axis} exceeds the trilinear weight tolerance")]
    WeightToleranceExceeded { axis: usize },
}

/// Failures of the batch sampling helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleError {
    /// Observation coordinates and output storage disagree in length.
    #[error("dimension mismatch: expected {expected} entries, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// One observation point could not be located.
    #[error("observation point {point} could not be located")]
    Locate {
        point: usize,
        #[source]
        source: LocateError,
    },
}
