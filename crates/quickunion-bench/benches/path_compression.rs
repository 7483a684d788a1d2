//! Repeated `find` on trees built with strong locality, where path halving
//! has the most work to do on the first pass and little afterwards.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quickunion_bench::{SizeTier, WorkloadConfig, generate_workload};
use quickunion_core::UnionFind;

fn local_config(tier: SizeTier) -> WorkloadConfig {
    WorkloadConfig {
        locality: 0.9,
        ..tier.config(7)
    }
}

fn bench_find_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_all");

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
    ] {
        let workload = generate_workload(&local_config(tier));
        let mut built = UnionFind::new(workload.elements);
        for &(p, q) in &workload.unions {
            built.union(p, q);
        }

        group.bench_with_input(BenchmarkId::new("first_pass", name), &built, |b, built| {
            b.iter_batched_ref(
                || built.clone(),
                |uf| (0..uf.len()).map(|i| uf.find(i)).sum::<usize>(),
                criterion::BatchSize::LargeInput,
            );
        });

        let mut warmed = built.clone();
        for i in 0..warmed.len() {
            warmed.find(i);
        }
        group.bench_with_input(BenchmarkId::new("warm_pass", name), &warmed, |b, warmed| {
            b.iter_batched_ref(
                || warmed.clone(),
                |uf| (0..uf.len()).map(|i| uf.find(i)).sum::<usize>(),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_passes);
criterion_main!(benches);
