//! Weight matrix ingestion from CSV via polars.

use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::DMatrix;
use polars::prelude::*;

/// A dense matrix plus optional column labels taken from the header.
pub struct LabeledMatrix {
    pub weights: DMatrix<f64>,
    pub labels: Option<Vec<String>>,
}

/// Read a numeric CSV into a matrix.
///
/// - `has_header`: first line holds column labels.
/// - `index_col`: first column holds row labels and is dropped.
///
/// Shape is not checked here; `tmfg` rejects non-square input.
pub fn read_matrix(path: &Path, has_header: bool, index_col: bool) -> Result<LabeledMatrix> {
    let df = LazyCsvReader::new(path)
        .with_has_header(has_header)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("parsing {}", path.display()))?;

    let skip = usize::from(index_col);
    let rows = df.height();
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(df.width().saturating_sub(skip));
    let mut labels = Vec::new();
    for (j, series) in df.get_columns().iter().enumerate().skip(skip) {
        labels.push(series.name().to_string());
        let cast = series
            .cast(&DataType::Float64)
            .with_context(|| format!("column {j} is not numeric"))?;
        let mut col = Vec::with_capacity(rows);
        for (i, v) in cast.f64()?.into_iter().enumerate() {
            match v {
                Some(v) => col.push(v),
                None => bail!("missing or non-numeric value at row {i}, column {j}"),
            }
        }
        columns.push(col);
    }

    let cols = columns.len();
    let weights = DMatrix::from_fn(rows, cols, |i, j| columns[j][i]);
    tracing::info!(rows, cols, path = %path.display(), "matrix_loaded");
    Ok(LabeledMatrix {
        weights,
        labels: has_header.then_some(labels),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_headered_matrix_with_index_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("w.csv");
        fs::write(
            &path,
            "id,a,b,c\na,1,0.5,0.25\nb,0.5,1,0.75\nc,0.25,0.75,1\n",
        )
        .unwrap();
        let m = read_matrix(&path, true, true).unwrap();
        assert_eq!(m.weights.shape(), (3, 3));
        assert_eq!(m.weights[(1, 2)], 0.75);
        assert_eq!(m.weights[(2, 0)], 0.25);
        assert_eq!(
            m.labels.unwrap(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn reads_headerless_matrix() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("w.csv");
        fs::write(&path, "0,1\n2,3\n").unwrap();
        let m = read_matrix(&path, false, false).unwrap();
        assert_eq!(m.weights, DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 2.0, 3.0]));
        assert!(m.labels.is_none());
    }

    #[test]
    fn rejects_missing_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("w.csv");
        fs::write(&path, "a,b\n1,\n2,3\n").unwrap();
        assert!(read_matrix(&path, true, false).is_err());
    }
}
