//! Seed selection: the four vertices founding the tetrahedron.
//!
//! Strength of vertex i is the sum of its row of W restricted to entries
//! strictly above the matrix-wide mean. The diagonal is read as zero, both in
//! the mean and in the row sums. Vertices are ranked by descending strength
//! with a stable sort, so on equal strength the lower index wins.

use nalgebra::DMatrix;

use crate::cfg::MIN_VERTICES;

/// Founding tetrahedron and the complementary outside set.
#[derive(Clone, Debug, PartialEq)]
pub struct Seed {
    /// Seed vertices in rank order (strongest first).
    pub tetra: [usize; 4],
    /// Remaining vertices, ascending.
    pub outside: Vec<usize>,
    /// Per-vertex above-mean strength.
    pub strength: Vec<f64>,
}

/// Per-vertex sum of above-mean off-diagonal weights.
pub fn strength(w: &DMatrix<f64>) -> Vec<f64> {
    let n = w.nrows();
    if n == 0 {
        return Vec::new();
    }
    let off_diag = |i: usize, j: usize| if i == j { 0.0 } else { w[(i, j)] };
    let mut total = 0.0;
    for i in 0..n {
        for j in 0..n {
            total += off_diag(i, j);
        }
    }
    let mean = total / (n * n) as f64;
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| off_diag(i, j))
                .filter(|&v| v > mean)
                .sum::<f64>()
        })
        .collect()
}

/// Rank vertices by strength and split off the top four.
///
/// Callers guarantee `w` is square with at least four rows (see `input::validate`).
pub fn select_seed(w: &DMatrix<f64>) -> Seed {
    debug_assert!(w.nrows() >= MIN_VERTICES && w.is_square());
    let strength = strength(w);
    let mut order: Vec<usize> = (0..strength.len()).collect();
    // Stable: equal strengths keep ascending index order.
    order.sort_by(|&a, &b| {
        strength[b]
            .partial_cmp(&strength[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let tetra = [order[0], order[1], order[2], order[3]];
    let mut outside = order[MIN_VERTICES..].to_vec();
    outside.sort_unstable();
    tracing::debug!(?tetra, "seed tetrahedron");
    Seed {
        tetra,
        outside,
        strength,
    }
}
