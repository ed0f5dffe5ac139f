//! Seeded synthetic weight matrices for benches, demos and tests.
//!
//! Model
//! - `samples` observations of `n` items driven by one market factor plus one
//!   of `groups` sector factors (item `i` belongs to sector `i % groups`) and
//!   idiosyncratic noise. The weight matrix is the absolute Pearson
//!   correlation of the simulated observations, with unit diagonal.
//! - Same `(params, seed)` gives the same matrix.

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

#[derive(Clone, Copy, Debug)]
pub struct FactorParams {
    pub n: usize,
    pub groups: usize,
    pub samples: usize,
    /// Loading on the shared market factor.
    pub market: f64,
    /// Loading on the item's sector factor.
    pub sector: f64,
}

impl Default for FactorParams {
    fn default() -> Self {
        Self {
            n: 50,
            groups: 5,
            samples: 250,
            market: 0.4,
            sector: 0.8,
        }
    }
}

/// Absolute correlation matrix of a seeded factor model.
pub fn factor_similarity(params: FactorParams, seed: u64) -> DMatrix<f64> {
    let FactorParams {
        n,
        samples,
        market,
        sector,
        ..
    } = params;
    let groups = params.groups.max(1);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut draw = || -> f64 { StandardNormal.sample(&mut rng) };

    let mut x = DMatrix::<f64>::zeros(samples, n);
    let mut sectors = vec![0.0; groups];
    for t in 0..samples {
        let m = draw();
        for s in sectors.iter_mut() {
            *s = draw();
        }
        for i in 0..n {
            x[(t, i)] = market * m + sector * sectors[i % groups] + draw();
        }
    }
    abs_correlation(&x)
}

/// Every off-diagonal entry `c`, zero diagonal.
pub fn uniform(n: usize, c: f64) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |i, j| if i == j { 0.0 } else { c })
}

/// `|corr(x_i, x_j)|` over the columns of `x`; constant columns get zero
/// off-diagonal correlation.
pub fn abs_correlation(x: &DMatrix<f64>) -> DMatrix<f64> {
    let (rows, n) = x.shape();
    let mut centered = x.clone();
    for mut col in centered.column_iter_mut() {
        let mean = col.sum() / rows.max(1) as f64;
        col.add_scalar_mut(-mean);
    }
    let cov = centered.transpose() * &centered;
    let sd: Vec<f64> = (0..n).map(|i| cov[(i, i)].sqrt()).collect();
    DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            1.0
        } else if sd[i] > 0.0 && sd[j] > 0.0 {
            // Upper triangle only, so the result is exactly symmetric.
            let c = cov[(i.min(j), i.max(j))];
            (c / (sd[i] * sd[j])).abs().min(1.0)
        } else {
            0.0
        }
    })
}
