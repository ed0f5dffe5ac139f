//! Input validation: hard errors for malformed matrices, advisory diagnostics
//! for admissible-but-questionable ones.
//!
//! The diagonal of W is never read by the filter; it is only checked for
//! finiteness so a NaN anywhere in the input is rejected.

use std::fmt;

use nalgebra::DMatrix;

use crate::cfg::{TmfgCfg, MIN_VERTICES, SMALL_INPUT};
use crate::error::TmfgError;

/// Non-fatal findings about the input. The filter runs regardless.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// `N < 9`: too few items for the filtered graph to say much.
    SmallInput { n: usize },
    /// Off-diagonal weights below zero; gains are still summed as-is.
    NegativeWeights { count: usize, min: f64 },
    /// Largest `|W(i,j) - W(j,i)|` above the configured tolerance.
    Asymmetric { row: usize, col: usize, delta: f64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SmallInput { n } => write!(
                f,
                "input has {n} vertices (< {SMALL_INPUT}); filtering is not meaningful"
            ),
            Diagnostic::NegativeWeights { count, min } => write!(
                f,
                "{count} negative off-diagonal weights (min {min}); weights should be non-negative"
            ),
            Diagnostic::Asymmetric { row, col, delta } => write!(
                f,
                "weight matrix is not symmetric: |W({row},{col}) - W({col},{row})| = {delta}"
            ),
        }
    }
}

/// Validate `w` and collect diagnostics. Each diagnostic is also logged once.
pub fn validate(w: &DMatrix<f64>, cfg: &TmfgCfg) -> Result<Vec<Diagnostic>, TmfgError> {
    let (rows, cols) = w.shape();
    if rows != cols {
        return Err(TmfgError::NotSquare { rows, cols });
    }
    let n = rows;
    if n < MIN_VERTICES {
        return Err(TmfgError::InsufficientVertices { n });
    }
    // Column-major walk matches nalgebra storage.
    for col in 0..n {
        for row in 0..n {
            if !w[(row, col)].is_finite() {
                return Err(TmfgError::NonFinite { row, col });
            }
        }
    }

    let mut out = Vec::new();
    if n < SMALL_INPUT {
        out.push(Diagnostic::SmallInput { n });
    }

    let mut negatives = 0usize;
    let mut min = f64::INFINITY;
    let mut worst: Option<(usize, usize, f64)> = None;
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let v = w[(i, j)];
            if v < 0.0 {
                negatives += 1;
                min = min.min(v);
            }
            if i < j {
                let delta = (v - w[(j, i)]).abs();
                if delta > cfg.asym_tol && worst.map_or(true, |(_, _, d)| delta > d) {
                    worst = Some((i, j, delta));
                }
            }
        }
    }
    if negatives > 0 {
        out.push(Diagnostic::NegativeWeights {
            count: negatives,
            min,
        });
    }
    if let Some((row, col, delta)) = worst {
        out.push(Diagnostic::Asymmetric { row, col, delta });
    }

    for d in &out {
        tracing::warn!(n, "{d}");
    }
    Ok(out)
}
