//! State carried through the insertion loop.

use nalgebra::DMatrix;

/// A face as three vertex indices in stored order.
pub type Triangle = [usize; 3];

/// Winning `(vertex, slot)` pair of one selection pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub vertex: usize,
    pub slot: usize,
    pub gain: f64,
}

/// What one insertion did.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRecord {
    pub vertex: usize,
    /// Face slot the vertex was inserted into (overwritten in place).
    pub slot: usize,
    pub gain: f64,
    /// The buried face (the slot's content before insertion).
    pub separator: Triangle,
}

/// Engine state between insertions.
///
/// Invariants:
/// - `inserted` and `outside` partition `0..n`; `outside` is ascending.
/// - `triangles.len() == 2 * inserted.len() - 4`.
/// - For every `v` in `outside` and every `s < triangles.len()`,
///   `gain[(s, v)] == face_gain(w, v, &triangles[s])`.
#[derive(Clone, Debug)]
pub struct EngineState {
    /// Vertices in insertion order; the first four are the seed.
    pub inserted: Vec<usize>,
    pub outside: Vec<usize>,
    pub triangles: Vec<Triangle>,
    /// Gain table, `(2n-4) × n`: rows are face slots, columns are vertices,
    /// so one vertex's gains are contiguous for the selection scan.
    pub gain: DMatrix<f64>,
    /// Edge marks, one direction per edge (`(new, old)`).
    pub edges: DMatrix<bool>,
    pub separators: Vec<Triangle>,
    pub steps: Vec<StepRecord>,
}

impl EngineState {
    #[inline]
    pub fn n(&self) -> usize {
        self.edges.nrows()
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.outside.is_empty()
    }

    /// The four seed vertices in rank order.
    pub fn tetra(&self) -> [usize; 4] {
        [
            self.inserted[0],
            self.inserted[1],
            self.inserted[2],
            self.inserted[3],
        ]
    }
}
