//! Multi-stage benchmarks: no, one, or excessive materialization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqpipe_bench::utils::{bench_config, setup_source, SOURCE_SIZES};
use seqpipe_core::{Consumer, NoProbe, Scenario, ScenarioFamily};

/// Benchmark the three materialization strategies over the default source.
fn bench_multi_stage(c: &mut Criterion) {
    let config = bench_config();
    let source = setup_source(config.source_size);
    let mut group = c.benchmark_group("multi_stage");

    for scenario in Scenario::ALL
        .into_iter()
        .filter(|s| s.family() == ScenarioFamily::MultiStage)
    {
        group.bench_function(scenario.name(), |b| {
            let mut consumer = Consumer::new();
            b.iter(|| {
                let outcome = scenario.run(black_box(&source), &config, &NoProbe, &mut consumer);
                black_box(outcome);
            });
        });
    }

    group.finish();
}

/// Benchmark the strategies across source sizes.
fn bench_multi_stage_size(c: &mut Criterion) {
    let config = bench_config();
    let mut group = c.benchmark_group("multi_stage_size");

    for &size in SOURCE_SIZES {
        let source = setup_source(size);
        group.throughput(Throughput::Elements(size as u64));

        for scenario in [
            Scenario::MultiStageLazy,
            Scenario::MultiStageOnce,
            Scenario::MultiStageMany,
        ] {
            group.bench_with_input(
                BenchmarkId::new(scenario.name(), size),
                &source,
                |b, source| {
                    let mut consumer = Consumer::new();
                    b.iter(|| black_box(scenario.run(source, &config, &NoProbe, &mut consumer)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_multi_stage, bench_multi_stage_size);

criterion_main!(benches);
