//! Triangulated Maximally Filtered Graph (TMFG).
//!
//! Filters a dense N×N weight matrix into a maximal planar graph with
//! `3N-6` edges and `2N-4` triangular faces by greedy triangle insertion.
//!
//! Pipeline
//! - `seed`: pick the four strongest vertices (founding tetrahedron).
//! - `engine`: insert the remaining vertices one by one into the face with the
//!   largest gain, maintaining the gain table incrementally.
//! - `assemble`: turn recorded edges into the weighted adjacency matrix.
//! - `cliques`: optional 4-clique list and the clique adjacency ("tree").
//!
//! The entry point is [`tmfg`]; [`tmfg_with_cfg`] exposes the optional outputs.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod assemble;
pub mod cfg;
pub mod cliques;
pub mod engine;
pub mod error;
pub mod input;
pub mod seed;
pub mod synth;
mod filter;

pub use cfg::{CliqueOutput, TmfgCfg};
pub use cliques::CliqueHierarchy;
pub use error::TmfgError;
pub use input::Diagnostic;
pub use filter::{tmfg, tmfg_with_cfg, Tmfg};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{CliqueOutput, TmfgCfg};
    pub use crate::cliques::CliqueHierarchy;
    pub use crate::engine::{EngineState, StepRecord, Triangle};
    pub use crate::error::TmfgError;
    pub use crate::input::Diagnostic;
    pub use crate::synth::{factor_similarity, uniform, FactorParams};
    pub use crate::{tmfg, tmfg_with_cfg, Tmfg};
    pub use nalgebra::DMatrix;
}
