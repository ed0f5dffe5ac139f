//! Run configuration and fixed thresholds.
//!
//! Policy
//! - Thresholds are constants; only the output ladder and the symmetry
//!   tolerance are caller-facing.

/// Vertices of the founding tetrahedron.
pub const MIN_VERTICES: usize = 4;
/// Below this size the filter still runs but a `SmallInput` diagnostic is raised.
pub const SMALL_INPUT: usize = 9;

/// Which clique outputs to compute on top of adjacency, faces and separators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CliqueOutput {
    #[default]
    None,
    /// 4-clique list and parent links.
    List,
    /// List plus the `(N-3)×(N-3)` clique adjacency.
    ListAndTree,
}

impl CliqueOutput {
    #[inline]
    pub fn wants_list(self) -> bool {
        !matches!(self, CliqueOutput::None)
    }
    #[inline]
    pub fn wants_tree(self) -> bool {
        matches!(self, CliqueOutput::ListAndTree)
    }
}

/// Filter configuration.
#[derive(Clone, Copy, Debug)]
pub struct TmfgCfg {
    pub cliques: CliqueOutput,
    /// Largest tolerated `|W(i,j) - W(j,i)|` before an `Asymmetric` diagnostic.
    pub asym_tol: f64,
}

impl Default for TmfgCfg {
    fn default() -> Self {
        Self {
            cliques: CliqueOutput::None,
            asym_tol: 1e-9,
        }
    }
}

impl TmfgCfg {
    pub fn with_cliques(mut self, cliques: CliqueOutput) -> Self {
        self.cliques = cliques;
        self
    }
}
