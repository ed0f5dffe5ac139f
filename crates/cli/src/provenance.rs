//! `<artifact>.provenance.json` sidecars: where a filtered graph came from and
//! what the run produced.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use tmfg::{CliqueOutput, Tmfg};

/// Where the weight matrix came from.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    Csv {
        input: String,
        has_header: bool,
        index_col: bool,
    },
    Synthetic {
        n: usize,
        seed: u64,
        groups: usize,
        samples: usize,
        market: f64,
        sector: f64,
    },
}

/// Headline numbers of a finished run.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub n: usize,
    pub seed: [usize; 4],
    pub edges: usize,
    pub total_weight: f64,
    pub cliques: Option<usize>,
    pub diagnostics: Vec<String>,
}

impl RunSummary {
    pub fn from_result(r: &Tmfg) -> Self {
        Self {
            n: r.n(),
            seed: r.seed,
            edges: r.edge_count(),
            total_weight: r.total_weight(),
            cliques: r.cliques.as_ref().map(|h| h.cliques.len()),
            diagnostics: r.diagnostics.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Everything a sidecar records besides code revision and callsite.
#[derive(Clone, Debug, Serialize)]
pub struct Payload {
    pub source: Source,
    pub cliques: &'static str,
    pub dense: bool,
    pub tag: Option<String>,
    pub summary: RunSummary,
}

impl Payload {
    pub fn new(source: Source, output: CliqueOutput, dense: bool, r: &Tmfg) -> Self {
        let cliques = match output {
            CliqueOutput::None => "none",
            CliqueOutput::List => "list",
            CliqueOutput::ListAndTree => "tree",
        };
        Self {
            source,
            cliques,
            dense,
            tag: None,
            summary: RunSummary::from_result(r),
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    tmfg_version: &'static str,
    callsite: Callsite,
    #[serde(flatten)]
    payload: &'a Payload,
    output: String,
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: &Payload) -> Result<PathBuf> {
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: code_rev(),
        tmfg_version: tmfg::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        payload,
        output: artifact.display().to_string(),
    };
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/graph.json` → `out/graph.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` if set, else `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tmfg::{tmfg_with_cfg, TmfgCfg};

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/graph.json")),
            Path::new("/tmp/output/graph.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("graph")),
            Path::new("graph.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_source_and_run_summary() {
        let w = tmfg::synth::uniform(8, 0.5);
        let cfg = TmfgCfg::default().with_cliques(CliqueOutput::List);
        let r = tmfg_with_cfg(&w, cfg).unwrap();
        let source = Source::Csv {
            input: "w.csv".into(),
            has_header: false,
            index_col: true,
        };
        let payload = Payload::new(source, cfg.cliques, false, &r).with_tag(Some("sweep-a".into()));

        let dir = tempdir().unwrap();
        let artifact = dir.path().join("graph.json");
        let path = write_sidecar(&artifact, &payload).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();

        assert_eq!(v["tmfg_version"], tmfg::VERSION);
        assert_eq!(v["tag"], "sweep-a");
        assert_eq!(v["cliques"], "list");
        assert_eq!(v["source"]["kind"], "csv");
        assert_eq!(v["source"]["index_col"], true);
        assert_eq!(v["summary"]["n"], 8);
        assert_eq!(v["summary"]["edges"], 18);
        assert_eq!(v["summary"]["cliques"], 5);
        assert_eq!(v["summary"]["seed"], serde_json::json!([0, 1, 2, 3]));
        assert!(v["summary"]["diagnostics"][0]
            .as_str()
            .unwrap()
            .contains("8 vertices"));
        assert_eq!(v["output"], artifact.display().to_string());
        assert!(v["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
    }
}
