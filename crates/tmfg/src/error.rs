//! Error type for malformed inputs.
//!
//! Precondition violations that still admit a computation (small N, negative
//! weights) are advisory and live in `input::Diagnostic` instead.

use std::fmt;

/// Hard input failures; the filter never runs on these.
#[derive(Clone, Debug, PartialEq)]
pub enum TmfgError {
    /// The weight matrix is not square.
    NotSquare { rows: usize, cols: usize },
    /// Fewer than four vertices: no tetrahedron can be formed.
    InsufficientVertices { n: usize },
    /// A NaN or infinite weight would poison every gain comparison.
    NonFinite { row: usize, col: usize },
}

impl fmt::Display for TmfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TmfgError::NotSquare { rows, cols } => {
                write!(f, "invalid input: weight matrix is {rows}x{cols}, expected square")
            }
            TmfgError::InsufficientVertices { n } => write!(
                f,
                "insufficient vertices: need at least 4 to seed the tetrahedron, got {n}"
            ),
            TmfgError::NonFinite { row, col } => {
                write!(f, "invalid input: weight at ({row}, {col}) is not finite")
            }
        }
    }
}

impl std::error::Error for TmfgError {}
