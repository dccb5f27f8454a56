//! Batch sampling split across the rayon thread pool.
//!
//! The extent and field are shared read-only; each worker locates points
//! with its own [`CellLocation`], so no synchronization is involved.
use num_traits::Float;
use rayon::prelude::*;

use crate::error::SampleError;
use crate::extent::GridExtent;
use crate::locate::CellLocation;
use crate::sample::{check_lengths, FieldAccessor};

/// Parallel counterpart of [`interpn`](crate::sample::interpn).
///
/// Produces the same values as the serial version. Which failed point is
/// reported when several fail is not deterministic.
///
/// # Errors
/// * If the coordinate slices and `out` differ in length
/// * If any point can not be located
pub fn par_interpn<T, F>(
    extent: &GridExtent<T>,
    field: &F,
    obs: [&[T]; 3],
    out: &mut [T],
) -> Result<(), SampleError>
where
    T: Float + Send + Sync,
    F: FieldAccessor<T> + Sync + ?Sized,
{
    check_lengths(&obs, out.len())?;

    out.par_iter_mut().enumerate().try_for_each_init(
        || CellLocation::new(extent),
        |location, (i, o)| {
            let mut point = [obs[0][i], obs[1][i], obs[2][i]];
            location
                .update(&mut point)
                .map_err(|source| SampleError::Locate { point: i, source })?;
            *o = location.sample(field);
            Ok(())
        },
    )
}

/// Evaluate [`par_interpn`], allocating a new Vec for the output.
pub fn par_interpn_alloc<T, F>(
    extent: &GridExtent<T>,
    field: &F,
    obs: [&[T]; 3],
) -> Result<Vec<T>, SampleError>
where
    T: Float + Send + Sync,
    F: FieldAccessor<T> + Sync + ?Sized,
{
    let mut out = vec![T::zero(); obs[0].len()];
    par_interpn(extent, field, obs, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::extent::Periodicity;
    use crate::sample::interpn_alloc;
    use crate::testing::{random_points, rng_fixed_seed};
    use crate::utils::grid_points;

    #[test]
    fn test_parallel_matches_serial() {
        let extent =
            GridExtent::new([9, 8, 7], [0.0; 3], [1.0, 2.0, 3.0], Periodicity::all()).unwrap();
        let field: Vec<f64> = grid_points(&extent)
            .into_iter()
            .map(|p| (p[0] * 3.0).sin() + p[1] * p[2])
            .collect();
        let mut rng = rng_fixed_seed();
        let points = random_points(&mut rng, &extent, 5000);
        let obs: Vec<Vec<f64>> = (0..3).map(|a| points.iter().map(|p| p[a]).collect()).collect();
        let obs = [&obs[0][..], &obs[1][..], &obs[2][..]];

        let serial = interpn_alloc(&extent, &field, obs).unwrap();
        let parallel = par_interpn_alloc(&extent, &field, obs).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_parallel_reports_failure() {
        let extent =
            GridExtent::new([3, 3, 3], [0.0; 3], [1.0; 3], Periodicity::none()).unwrap();
        let field = vec![0.0; extent.num_points()];
        let x = [0.5, 0.5, f64::NAN];
        let mut out = [0.0; 3];

        let err = par_interpn(&extent, &field, [&x[..], &x[..2], &x[..]], &mut out).unwrap_err();
        assert_eq!(err, SampleError::LengthMismatch { expected: 3, found: 2 });

        let err = par_interpn(&extent, &field, [&x[..], &x[..], &x[..]], &mut out).unwrap_err();
        assert!(matches!(err, SampleError::Locate { point: 2, .. }));
    }
}
