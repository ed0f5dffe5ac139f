//! Entry point: validate → seed → triangulate → assemble → (cliques).

use nalgebra::DMatrix;

use crate::assemble::{edge_pairs, weighted_adjacency};
use crate::cfg::TmfgCfg;
use crate::cliques::CliqueHierarchy;
use crate::engine::{self, StepRecord, Triangle};
use crate::error::TmfgError;
use crate::input::{validate, Diagnostic};
use crate::seed::select_seed;

/// Filtered graph and its bookkeeping.
#[derive(Clone, Debug)]
pub struct Tmfg {
    /// `N×N` weighted adjacency, symmetric, zero diagonal.
    pub adjacency: DMatrix<f64>,
    /// `2N-4` faces.
    pub triangles: Vec<Triangle>,
    /// `N-4` buried faces, one per insertion.
    pub separators: Vec<Triangle>,
    /// All `N` vertices in insertion order (seed first).
    pub insertion_order: Vec<usize>,
    pub seed: [usize; 4],
    /// Per-vertex above-mean strength used to rank the seed.
    pub strength: Vec<f64>,
    pub steps: Vec<StepRecord>,
    /// Present when `TmfgCfg::cliques` asks for it.
    pub cliques: Option<CliqueHierarchy>,
    pub diagnostics: Vec<Diagnostic>,
    edge_pairs: Vec<(usize, usize)>,
}

impl Tmfg {
    #[inline]
    pub fn n(&self) -> usize {
        self.adjacency.nrows()
    }

    /// Planar edges `(i, j, w_ij)` with `i < j`, including zero-weight ones.
    pub fn edges(&self) -> Vec<(usize, usize, f64)> {
        self.edge_pairs
            .iter()
            .map(|&(i, j)| (i, j, self.adjacency[(i, j)]))
            .collect()
    }

    /// Always `3N-6`.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_pairs.len()
    }

    /// Sum of retained edge weights (each edge once).
    pub fn total_weight(&self) -> f64 {
        self.edge_pairs
            .iter()
            .map(|&(i, j)| self.adjacency[(i, j)])
            .sum()
    }

    /// Number of planar neighbours per vertex.
    pub fn degrees(&self) -> Vec<usize> {
        let mut deg = vec![0; self.n()];
        for &(i, j) in &self.edge_pairs {
            deg[i] += 1;
            deg[j] += 1;
        }
        deg
    }
}

/// Filter `w` with default configuration (no clique outputs).
pub fn tmfg(w: &DMatrix<f64>) -> Result<Tmfg, TmfgError> {
    tmfg_with_cfg(w, TmfgCfg::default())
}

/// Filter `w`.
///
/// Errors on non-square input, `N < 4`, or non-finite weights. Small inputs,
/// negative weights and asymmetry are reported in `Tmfg::diagnostics` only.
pub fn tmfg_with_cfg(w: &DMatrix<f64>, cfg: TmfgCfg) -> Result<Tmfg, TmfgError> {
    let diagnostics = validate(w, &cfg)?;
    let seed = select_seed(w);
    let state = engine::run(w, &seed);
    debug_assert!(state.is_done());

    let adjacency = weighted_adjacency(&state.edges, w);
    let edge_pairs = edge_pairs(&state.edges);
    let cliques = cfg
        .cliques
        .wants_list()
        .then(|| CliqueHierarchy::from_engine(&state, cfg.cliques.wants_tree()));

    tracing::debug!(
        n = w.nrows(),
        edges = edge_pairs.len(),
        faces = state.triangles.len(),
        "tmfg done"
    );

    Ok(Tmfg {
        adjacency,
        seed: seed.tetra,
        strength: seed.strength,
        triangles: state.triangles,
        separators: state.separators,
        insertion_order: state.inserted,
        steps: state.steps,
        cliques,
        diagnostics,
        edge_pairs,
    })
}
