//! JSON view of a filter result.

use serde::Serialize;
use tmfg::Tmfg;

#[derive(Serialize)]
pub struct CliqueReport {
    pub cliques: Vec<[usize; 4]>,
    pub parents: Vec<Option<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<(usize, usize)>>,
}

#[derive(Serialize)]
pub struct TmfgReport {
    pub n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub seed: [usize; 4],
    pub insertion_order: Vec<usize>,
    pub edges: Vec<(usize, usize, f64)>,
    pub total_weight: f64,
    pub triangles: Vec<[usize; 3]>,
    pub separators: Vec<[usize; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliques: Option<CliqueReport>,
    /// Row-major dense adjacency, only with `--dense`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjacency: Option<Vec<Vec<f64>>>,
    pub diagnostics: Vec<String>,
}

impl TmfgReport {
    pub fn new(r: &Tmfg, labels: Option<Vec<String>>, dense: bool) -> Self {
        let cliques = r.cliques.as_ref().map(|h| CliqueReport {
            cliques: h.cliques.clone(),
            parents: h.parents.clone(),
            links: h.tree.as_ref().map(|_| h.tree_edges()),
        });
        let adjacency: Option<Vec<Vec<f64>>> = dense.then(|| {
            r.adjacency
                .row_iter()
                .map(|row| row.iter().copied().collect::<Vec<f64>>())
                .collect()
        });
        Self {
            n: r.n(),
            labels,
            seed: r.seed,
            insertion_order: r.insertion_order.clone(),
            edges: r.edges(),
            total_weight: r.total_weight(),
            triangles: r.triangles.clone(),
            separators: r.separators.clone(),
            cliques,
            adjacency,
            diagnostics: r.diagnostics.iter().map(|d| d.to_string()).collect(),
        }
    }
}
