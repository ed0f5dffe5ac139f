use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use nalgebra::DMatrix;
use std::path::{Path, PathBuf};
use tmfg::synth::{factor_similarity, FactorParams};
use tmfg::{tmfg_with_cfg, CliqueOutput, TmfgCfg};
use tracing_subscriber::fmt::SubscriberBuilder;

mod matrix_csv;
mod provenance;
mod report;

use provenance::{code_rev, write_sidecar, Payload, Source};
use report::TmfgReport;

#[derive(Parser)]
#[command(name = "tmfg")]
#[command(about = "Filter dense weight matrices into planar TMFG graphs")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Filter a weight matrix read from CSV
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// The CSV has no header line
        #[arg(long)]
        no_header: bool,
        /// The first column holds row labels
        #[arg(long)]
        index_col: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Filter a seeded synthetic similarity matrix
    Demo {
        #[arg(long, default_value_t = 50)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 5)]
        groups: usize,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Copy)]
struct OutputArgs {
    /// Clique outputs to compute
    #[arg(long, value_enum, default_value_t = CliqueArg::None)]
    cliques: CliqueArg,
    /// Also write the dense N×N adjacency
    #[arg(long)]
    dense: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliqueArg {
    None,
    List,
    Tree,
}

impl From<CliqueArg> for CliqueOutput {
    fn from(arg: CliqueArg) -> Self {
        match arg {
            CliqueArg::None => CliqueOutput::None,
            CliqueArg::List => CliqueOutput::List,
            CliqueArg::Tree => CliqueOutput::ListAndTree,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            no_header,
            index_col,
            output,
        } => run(&input, &out, !no_header, index_col, output, cmd.tag),
        Action::Demo {
            n,
            seed,
            groups,
            out,
            output,
        } => demo(n, seed, groups, &out, output, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn run(
    input: &Path,
    out: &Path,
    has_header: bool,
    index_col: bool,
    output: OutputArgs,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "run");
    let m = matrix_csv::read_matrix(input, has_header, index_col)?;
    let source = Source::Csv {
        input: input.display().to_string(),
        has_header,
        index_col,
    };
    filter_and_write(&m.weights, m.labels, out, output, source, tag)
}

fn demo(
    n: usize,
    seed: u64,
    groups: usize,
    out: &Path,
    output: OutputArgs,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(n, seed, groups, out = %out.display(), tag = ?tag, "demo");
    let fp = FactorParams {
        n,
        groups,
        ..FactorParams::default()
    };
    let w = factor_similarity(fp, seed);
    let source = Source::Synthetic {
        n,
        seed,
        groups,
        samples: fp.samples,
        market: fp.market,
        sector: fp.sector,
    };
    filter_and_write(&w, None, out, output, source, tag)
}

fn filter_and_write(
    w: &DMatrix<f64>,
    labels: Option<Vec<String>>,
    out: &Path,
    output: OutputArgs,
    source: Source,
    tag: Option<String>,
) -> Result<()> {
    let cfg = TmfgCfg::default().with_cliques(output.cliques.into());
    let result = tmfg_with_cfg(w, cfg).context("filtering weight matrix")?;
    tracing::info!(
        n = result.n(),
        edges = result.edge_count(),
        weight = result.total_weight(),
        diagnostics = result.diagnostics.len(),
        "filtered"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let doc = TmfgReport::new(&result, labels, output.dense);
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(source, cfg.cliques, output.dense, &result).with_tag(tag);
    let prov = write_sidecar(out, &payload)?;
    tracing::info!(provenance = %prov.display(), "written");
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": code_rev(),
        "tmfg_version": tmfg::VERSION,
        "tag": tag,
        "source": null,
        "summary": null
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn run_writes_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("w.csv");
        let n = 10;
        let w = tmfg::synth::uniform(n, 0.5);
        let mut csv = String::new();
        for i in 0..n {
            let row: Vec<String> = (0..n).map(|j| w[(i, j)].to_string()).collect();
            csv.push_str(&row.join(","));
            csv.push('\n');
        }
        fs::write(&input, csv).unwrap();
        let out = dir.path().join("out").join("graph.json");
        let output = OutputArgs {
            cliques: CliqueArg::Tree,
            dense: false,
        };
        run(&input, &out, false, false, output, Some("t".into())).unwrap();

        let doc: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["edges"].as_array().unwrap().len(), 3 * n - 6);
        assert_eq!(doc["cliques"]["cliques"].as_array().unwrap().len(), n - 3);
        assert!(doc["cliques"]["links"].is_array());
        let prov = dir.path().join("out").join("graph.provenance.json");
        let side: serde_json::Value = serde_json::from_slice(&fs::read(prov).unwrap()).unwrap();
        assert_eq!(side["source"]["kind"], "csv");
        assert_eq!(side["summary"]["edges"], 3 * n - 6);
        assert_eq!(side["cliques"], "tree");
        assert_eq!(side["tag"], "t");
    }

    #[test]
    fn run_rejects_tiny_matrix() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("w.csv");
        fs::write(&input, "0,1\n1,0\n").unwrap();
        let out = dir.path().join("graph.json");
        let output = OutputArgs {
            cliques: CliqueArg::None,
            dense: false,
        };
        let err = run(&input, &out, false, false, output, None).unwrap_err();
        assert!(format!("{err:#}").contains("insufficient vertices"));
        assert!(!out.exists());
    }

    #[test]
    fn demo_is_reproducible() {
        let dir = tempdir().unwrap();
        let output = OutputArgs {
            cliques: CliqueArg::None,
            dense: true,
        };
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        demo(16, 9, 4, &a, output, None).unwrap();
        demo(16, 9, 4, &b, output, None).unwrap();
        let read = |p: &Path| -> serde_json::Value {
            serde_json::from_slice(&fs::read(p).unwrap()).unwrap()
        };
        let (da, db) = (read(&a), read(&b));
        assert_eq!(da["edges"], db["edges"]);
        assert_eq!(da["adjacency"].as_array().unwrap().len(), 16);
    }
}
