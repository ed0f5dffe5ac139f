//! Triangulation engine: greedy vertex insertion into triangular faces.
//!
//! Purpose
//! - Grow a triangulated sphere from the seed tetrahedron by inserting each
//!   outside vertex into the exposed face with the largest gain (sum of the
//!   vertex's weights to the face's three corners).
//!
//! Design
//! - All mutable bookkeeping lives in `EngineState`; one insertion is one call
//!   to `EngineState::insert` (or the by-value `step`), so a single step can be
//!   tested in isolation.
//! - The gain table is maintained incrementally: an insertion only touches the
//!   row of the inserted vertex and the three face slots it creates.
//! - Ties resolve to the lowest outside vertex, then the lowest face slot.
//!
//! Split: `types.rs` (state and records), `insert.rs` (init, selection,
//! subdivision, run loop).

mod insert;
mod types;

pub use insert::{face_gain, run, step};
pub use types::{EngineState, Selection, StepRecord, Triangle};
