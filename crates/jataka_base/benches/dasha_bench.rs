//! Benchmarks for the dasha engines.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use jataka_base::dasha::{
    YoginiStartRule, vimshottari_config, vimshottari_hierarchy, vimshottari_snapshot,
    yogini_config, yogini_hierarchy,
};

const J2000: f64 = 2_451_545.0;

fn bench_vimshottari_hierarchy(c: &mut Criterion) {
    let cfg = vimshottari_config();
    c.bench_function("vimshottari_hierarchy_depth3", |b| {
        b.iter(|| {
            vimshottari_hierarchy(black_box(J2000), black_box(123.456), &cfg, 3).unwrap()
        })
    });
}

fn bench_vimshottari_snapshot(c: &mut Criterion) {
    let cfg = vimshottari_config();
    c.bench_function("vimshottari_snapshot_depth4", |b| {
        b.iter(|| {
            vimshottari_snapshot(
                black_box(J2000),
                black_box(123.456),
                &cfg,
                black_box(J2000 + 9_000.0),
                4,
            )
        })
    });
}

fn bench_yogini_hierarchy(c: &mut Criterion) {
    let cfg = yogini_config();
    c.bench_function("yogini_hierarchy_depth3", |b| {
        b.iter(|| {
            yogini_hierarchy(
                black_box(J2000),
                black_box(200.0),
                &cfg,
                3,
                YoginiStartRule::NakshatraMap,
            )
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_vimshottari_hierarchy,
    bench_vimshottari_snapshot,
    bench_yogini_hierarchy
);
criterion_main!(benches);
