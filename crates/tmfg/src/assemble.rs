//! Graph assembly: recorded edge marks → weighted adjacency.

use nalgebra::DMatrix;

/// Weighted, symmetric, zero-diagonal adjacency.
///
/// An edge `{i, j}` exists iff either `marks[(i, j)]` or `marks[(j, i)]` is set
/// (logical OR, so a pair marked from both sides is still counted once); its
/// weight is `w[(i, j)]` read from the upper triangle and mirrored.
pub fn weighted_adjacency(marks: &DMatrix<bool>, w: &DMatrix<f64>) -> DMatrix<f64> {
    let n = marks.nrows();
    let mut a = DMatrix::zeros(n, n);
    for j in 0..n {
        for i in 0..j {
            if marks[(i, j)] || marks[(j, i)] {
                a[(i, j)] = w[(i, j)];
                a[(j, i)] = w[(i, j)];
            }
        }
    }
    a
}

/// Unordered edges `(i, j)`, `i < j`, present in `marks` in either direction.
pub fn edge_pairs(marks: &DMatrix<bool>) -> Vec<(usize, usize)> {
    let n = marks.nrows();
    let mut out = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            if marks[(i, j)] || marks[(j, i)] {
                out.push((i, j));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_symmetrizes_without_double_counting() {
        let mut marks = DMatrix::from_element(3, 3, false);
        marks[(0, 1)] = true;
        marks[(1, 0)] = true;
        marks[(2, 0)] = true;
        #[rustfmt::skip]
        let w = DMatrix::from_row_slice(3, 3, &[
            9.0, 2.0, 3.0,
            2.0, 9.0, 5.0,
            3.0, 5.0, 9.0,
        ]);
        let a = weighted_adjacency(&marks, &w);
        #[rustfmt::skip]
        let expect = DMatrix::from_row_slice(3, 3, &[
            0.0, 2.0, 3.0,
            2.0, 0.0, 0.0,
            3.0, 0.0, 0.0,
        ]);
        assert_eq!(a, expect);
        assert_eq!(edge_pairs(&marks), vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn diagonal_marks_are_ignored() {
        let mut marks = DMatrix::from_element(2, 2, false);
        marks[(1, 1)] = true;
        let w = DMatrix::from_element(2, 2, 1.0);
        let a = weighted_adjacency(&marks, &w);
        assert_eq!(a, DMatrix::zeros(2, 2));
    }
}
