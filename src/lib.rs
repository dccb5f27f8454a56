//! Point location and trilinear interpolation on structured 3D grids,
//! no-std and no-alloc compatible.
//!
//! A structured grid is described once by a [`GridExtent`]: points per axis,
//! a physical bounding box, and per-axis periodicity. Any physical point can then
//! be placed in the hexahedral cell containing it, producing a [`CellLocation`]
//! with the storage offsets of the cell's eight corners and their trilinear
//! weights. The same location can be applied to any number of fields stored
//! over the grid, so the work of locating a point is done once per point rather
//! than once per field.
//!
//! Field storage is flat, with `i` varying fastest, then `j`, then `k`.
//!
//! # Performance Scalings
//! Locating a point and evaluating its weights is O(1) with no allocation and no
//! search, since the grid spacing is uniform on each axis. Sampling a field reads
//! exactly 8 values.
//!
//! | Operation                 | RAM   | Cost                 |
//! |---------------------------|-------|----------------------|
//! | locate::locate            | O(1)  | O(1)                 |
//! | locate::locate_cell       | O(1)  | O(1)                 |
//! | sample::sample            | O(1)  | 8 reads              |
//! | sample::interpn           | O(1)  | O(npoints)           |
//! | parallel::par_interpn     | O(nthreads) | O(npoints / nthreads) |
//!
//! # Example: Locate Once, Sample Several Fields
//! ```rust
//! use volextent::{CellLocation, GridExtent, Periodicity};
//!
//! // 3 points per axis spanning [0, 2] gives unit spacing
//! let extent = GridExtent::new([3, 3, 3], [0.0; 3], [2.0; 3], Periodicity::none()).unwrap();
//!
//! // Two fields over the 27 grid points
//! let density = vec![1.0_f64; extent.num_points()];
//! let potential: Vec<f64> = (0..extent.num_points()).map(|i| i as f64).collect();
//!
//! // Reusable storage for corner offsets and weights
//! let mut location = CellLocation::new(&extent);
//!
//! let mut point = [0.5, 0.5, 0.5];
//! location.update(&mut point).unwrap();
//! assert_eq!(location.cell(), [1, 1, 1]);
//! assert!(location.weights().iter().all(|&w| w == 0.125));
//!
//! let rho = location.sample(&density);
//! let phi = location.sample(&potential);
//! assert!((rho - 1.0).abs() < 1e-12);
//! assert!((phi - 6.5).abs() < 1e-12);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod error;
pub use error::{ExtentError, LocateError, SampleError};

pub mod index;

pub mod extent;
pub use extent::{GridExtent, Periodicity};

pub mod locate;
pub use locate::{locate, locate_cell, CellLocation, CORNER_OFFSETS, NATURAL_COORD_TOL};

pub mod weights;
pub use weights::{trilinear_weights, WEIGHT_TOL};

pub mod sample;
pub use sample::{sample_many, FieldAccessor};

#[cfg(feature = "rayon")]
pub mod parallel;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
