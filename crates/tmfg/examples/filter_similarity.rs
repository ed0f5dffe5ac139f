//! Filter a synthetic sector/market similarity matrix and print a summary.
//!
//! Usage:
//!   cargo run -p tmfg --example filter_similarity -- [N] [SEED]

use tmfg::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(30);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let w = factor_similarity(
        FactorParams {
            n,
            ..FactorParams::default()
        },
        seed,
    );
    let cfg = TmfgCfg::default().with_cliques(CliqueOutput::ListAndTree);
    let r = match tmfg_with_cfg(&w, cfg) {
        Ok(r) => r,
        Err(err) => {
            eprintln!("tmfg failed: {err}");
            return;
        }
    };
    for d in &r.diagnostics {
        println!("diagnostic: {d}");
    }
    println!(
        "N={n}: edges={}, faces={}, separators={}, weight={:.3}",
        r.edge_count(),
        r.triangles.len(),
        r.separators.len(),
        r.total_weight()
    );
    println!("seed tetrahedron: {:?}", r.seed);
    if let Some(h) = &r.cliques {
        println!(
            "4-cliques={}, clique links={}",
            h.cliques.len(),
            h.tree_edges().len()
        );
    }
    let deg = r.degrees();
    let hub = (0..n).max_by_key(|&v| deg[v]).unwrap_or(0);
    println!("hub: vertex {hub} with degree {}", deg[hub]);
}
