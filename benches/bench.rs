#![allow(clippy::all)] // Clippy will attempt to remove black_box() internals

use criterion::*;
use gridgen::*;
use volextent::{sample, CellLocation};

enum Kind {
    Interp,
    Clamped,
}

macro_rules! bench_locate_specific {
    ($group:ident, $gridsize:expr, $size:expr, $kind:expr) => {
        $group.throughput(Throughput::Elements(*$size as u64));
        let scan_or_shuffle = "Shuffled Order";

        $group.bench_with_input(
            BenchmarkId::new(
                format!("Locate + Sample {}^3, {}", $gridsize, scan_or_shuffle),
                $size,
            ),
            $size,
            |b, &size| {
                let (extent, z) = gen_grid($gridsize);
                let gridobs_t = match $kind {
                    Kind::Interp => gen_interp_obs(&extent, size),
                    Kind::Clamped => gen_clamped_obs(&extent, size),
                };
                let mut location = CellLocation::new(&extent);
                let mut out = vec![0.0; size];

                b.iter(|| {
                    black_box({
                        for i in 0..size {
                            let mut point = [gridobs_t[0][i], gridobs_t[1][i], gridobs_t[2][i]];
                            location.update(&mut point).unwrap();
                            out[i] = location.sample(&z[..]);
                        }
                    })
                });
            },
        );

        $group.bench_with_input(
            BenchmarkId::new(
                format!("Batch interpn {}^3, {}", $gridsize, scan_or_shuffle),
                $size,
            ),
            $size,
            |b, &size| {
                let (extent, z) = gen_grid($gridsize);
                let gridobs_t = match $kind {
                    Kind::Interp => gen_interp_obs(&extent, size),
                    Kind::Clamped => gen_clamped_obs(&extent, size),
                };
                let obs = [&gridobs_t[0][..], &gridobs_t[1][..], &gridobs_t[2][..]];
                let mut out = vec![0.0; size];

                b.iter(|| black_box(sample::interpn(&extent, &z[..], obs, &mut out).unwrap()));
            },
        );

        #[cfg(feature = "rayon")]
        $group.bench_with_input(
            BenchmarkId::new(
                format!("Parallel interpn {}^3, {}", $gridsize, scan_or_shuffle),
                $size,
            ),
            $size,
            |b, &size| {
                let (extent, z) = gen_grid($gridsize);
                let gridobs_t = match $kind {
                    Kind::Interp => gen_interp_obs(&extent, size),
                    Kind::Clamped => gen_clamped_obs(&extent, size),
                };
                let obs = [&gridobs_t[0][..], &gridobs_t[1][..], &gridobs_t[2][..]];
                let mut out = vec![0.0; size];

                b.iter(|| {
                    black_box(
                        volextent::parallel::par_interpn(&extent, &z[..], obs, &mut out).unwrap(),
                    )
                });
            },
        );
    };
}

fn bench_interp(c: &mut Criterion) {
    for gridsize in [10, 100] {
        let mut group = c.benchmark_group(format!("Interp_Shuffled_{gridsize}-grid"));
        for size in [1, 100, 1_000_000].iter() {
            bench_locate_specific!(group, gridsize, size, Kind::Interp);
        }
        group.finish();
    }
}

fn bench_clamped(c: &mut Criterion) {
    for gridsize in [10] {
        let mut group = c.benchmark_group(format!("Clamped_Shuffled_{gridsize}-grid"));
        for size in [1, 100, 1_000_000].iter() {
            bench_locate_specific!(group, gridsize, size, Kind::Clamped);
        }
        group.finish();
    }
}

criterion_group!(benches_interp, bench_interp);
criterion_group!(benches_clamped, bench_clamped);
criterion_main!(benches_interp, benches_clamped,);

mod randn {
    use rand::distr::{Distribution, StandardUniform};
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    /// Fixed random seed to support repeatable testing
    const SEED: [u8; 32] = [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7,
        6, 5, 4, 3, 2, 1,
    ];

    /// Get a random number generator with a const seed for repeatable testing
    pub fn rng_fixed_seed() -> StdRng {
        StdRng::from_seed(SEED)
    }

    /// Generate `n` random numbers using provided generator
    pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
    where
        StandardUniform: Distribution<T>,
    {
        let out: Vec<T> = (0..n).map(|_| rng.random::<T>()).collect();
        out
    }
}

mod gridgen {
    use super::randn::*;
    use volextent::{GridExtent, Periodicity};

    // Generate a cubic grid with `size` points per axis over [0, 100]^3,
    // and some fake data values.
    pub fn gen_grid(size: usize) -> (GridExtent<f64>, Vec<f64>) {
        let mut rng = rng_fixed_seed();
        let extent =
            GridExtent::new([size; 3], [0.0; 3], [100.0; 3], Periodicity::none()).unwrap();
        let z = randn::<f64>(&mut rng, extent.num_points());
        (extent, z)
    }

    // Generate shuffled observation points that are entirely inside the grid.
    pub fn gen_interp_obs(extent: &GridExtent<f64>, size: usize) -> Vec<Vec<f64>> {
        let mut rng = rng_fixed_seed();
        let (lo, hi) = (extent.min_xyz(), extent.max_xyz());
        (0..3)
            .map(|axis| {
                randn::<f64>(&mut rng, size)
                    .into_iter()
                    .map(|u| lo[axis] + u * (hi[axis] - lo[axis]))
                    .collect()
            })
            .collect()
    }

    // Generate observation points outside the grid on every axis,
    // so that every point is clamped onto a corner.
    pub fn gen_clamped_obs(extent: &GridExtent<f64>, size: usize) -> Vec<Vec<f64>> {
        let mut rng = rng_fixed_seed();
        let hi = extent.max_xyz();
        (0..3)
            .map(|axis| {
                randn::<f64>(&mut rng, size)
                    .into_iter()
                    .map(|u| hi[axis] + 1.0 + u)
                    .collect()
            })
            .collect()
    }
}
