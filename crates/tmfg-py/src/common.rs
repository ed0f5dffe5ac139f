use nalgebra::DMatrix;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tmfg::{CliqueOutput, TmfgError};

/// Row-major nested lists → dense matrix. Ragged rows are rejected here;
/// non-square shapes are left to `tmfg` so the error text stays uniform.
pub fn matrix_from_rows(rows: Vec<Vec<f64>>) -> PyResult<DMatrix<f64>> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);
    if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
        return Err(PyValueError::new_err(format!(
            "invalid input: row {i} has {} entries, expected {n_cols}",
            r.len()
        )));
    }
    Ok(DMatrix::from_fn(n_rows, n_cols, |i, j| rows[i][j]))
}

pub fn matrix_to_rows<T: nalgebra::Scalar + Copy>(m: &DMatrix<T>) -> Vec<Vec<T>> {
    m.row_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

pub fn clique_output(cliques: bool, tree: bool) -> CliqueOutput {
    match (cliques, tree) {
        (_, true) => CliqueOutput::ListAndTree,
        (true, false) => CliqueOutput::List,
        (false, false) => CliqueOutput::None,
    }
}

pub fn map_tmfg_err(err: TmfgError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
