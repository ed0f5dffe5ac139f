//! PyO3 bindings for the `tmfg` crate.
//!
//! Notes
//! - Keep bindings thin and predictable: nested lists in, tuples and nested
//!   lists out. NumPy conversion happens in the Python wrapper.
//! - Diagnostics are surfaced as a list of strings; Python callers decide
//!   whether to raise warnings.

use pyo3::prelude::*;

mod common;

use common::{clique_output, map_tmfg_err, matrix_from_rows, matrix_to_rows};

type Faces = Vec<Vec<usize>>;

/// Filter an N×N weight matrix.
///
/// Returns `(adjacency, triangles, separators, cliques, clique_tree, diagnostics)`;
/// `cliques` is `None` unless `cliques` or `tree` is set, `clique_tree` is
/// `None` unless `tree` is set.
#[pyfunction]
#[pyo3(name = "tmfg", signature = (weights, cliques = false, tree = false))]
#[allow(clippy::type_complexity)]
fn filter(
    weights: Vec<Vec<f64>>,
    cliques: bool,
    tree: bool,
) -> PyResult<(
    Vec<Vec<f64>>,
    Faces,
    Faces,
    Option<Faces>,
    Option<Vec<Vec<u8>>>,
    Vec<String>,
)> {
    let w = matrix_from_rows(weights)?;
    let cfg = ::tmfg::TmfgCfg::default().with_cliques(clique_output(cliques, tree));
    let r = ::tmfg::tmfg_with_cfg(&w, cfg).map_err(map_tmfg_err)?;
    let faces = |ts: &[[usize; 3]]| -> Faces { ts.iter().map(|t| t.to_vec()).collect() };
    let clique_list = r
        .cliques
        .as_ref()
        .map(|h| h.cliques.iter().map(|c| c.to_vec()).collect());
    let clique_tree = r
        .cliques
        .as_ref()
        .and_then(|h| h.tree.as_ref())
        .map(matrix_to_rows);
    Ok((
        matrix_to_rows(&r.adjacency),
        faces(&r.triangles),
        faces(&r.separators),
        clique_list,
        clique_tree,
        r.diagnostics.iter().map(|d| d.to_string()).collect(),
    ))
}

/// Planar edges `(i, j, w)` with `i < j`.
#[pyfunction]
fn tmfg_edges(weights: Vec<Vec<f64>>) -> PyResult<Vec<(usize, usize, f64)>> {
    let w = matrix_from_rows(weights)?;
    let r = ::tmfg::tmfg(&w).map_err(map_tmfg_err)?;
    Ok(r.edges())
}

#[pymodule]
fn tmfg_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(filter, m)?)?;
    m.add_function(wrap_pyfunction!(tmfg_edges, m)?)?;
    m.add("__version__", ::tmfg::VERSION)?;
    Ok(())
}
