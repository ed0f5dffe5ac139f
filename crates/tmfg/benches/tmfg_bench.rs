//! Criterion benchmarks for the TMFG filter.
//! Focus sizes: N in {16, 64, 128, 256}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p tmfg

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use tmfg::engine::EngineState;
use tmfg::seed::select_seed;
use tmfg::synth::{factor_similarity, FactorParams};
use tmfg::{tmfg_with_cfg, CliqueOutput, TmfgCfg};

fn similarity(n: usize, seed: u64) -> nalgebra::DMatrix<f64> {
    factor_similarity(
        FactorParams {
            n,
            ..FactorParams::default()
        },
        seed,
    )
}

fn bench_tmfg(c: &mut Criterion) {
    let mut group = c.benchmark_group("tmfg");
    for &n in &[16usize, 64, 128, 256] {
        let w = similarity(n, 42);
        group.bench_with_input(BenchmarkId::new("filter", n), &w, |b, w| {
            b.iter(|| tmfg_with_cfg(w, TmfgCfg::default()).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("filter_with_tree", n), &w, |b, w| {
            let cfg = TmfgCfg::default().with_cliques(CliqueOutput::ListAndTree);
            b.iter(|| tmfg_with_cfg(w, cfg).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("single_insert", n), &w, |b, w| {
            let seed = select_seed(w);
            b.iter_batched(
                || EngineState::init(w, &seed),
                |mut st| {
                    let _rec = st.insert(w);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tmfg);
criterion_main!(benches);
