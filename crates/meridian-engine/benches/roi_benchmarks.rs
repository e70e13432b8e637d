//! Criterion benchmarks for the ROI pipeline hot paths.
//!
//! Covers: ramp evaluation, baseline derivation, and the full pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::BTreeSet;

use meridian_core::types::{
    ImprovementAssumptions, OpsProfile, OrganizationProfile, PainProfile, SpendProfile,
    TransformationInvestment,
};
use meridian_engine::{compute_baseline, compute_roi, ramp_factor};

fn bench_ramp_factor(c: &mut Criterion) {
    // Mid-Supervised month, inside the interpolation path.
    let month = 9.5;

    c.bench_function("ramp_factor", |b| b.iter(|| ramp_factor(black_box(month))));
}

fn bench_compute_baseline(c: &mut Criterion) {
    let org = OrganizationProfile::default();
    let spend = SpendProfile::default();
    let ops = OpsProfile::default();
    let pain = PainProfile::default();

    c.bench_function("compute_baseline", |b| {
        b.iter(|| {
            compute_baseline(
                black_box(&org),
                black_box(&spend),
                black_box(&ops),
                black_box(&pain),
            )
        })
    });
}

fn bench_compute_roi(c: &mut Criterion) {
    let org = OrganizationProfile::default();
    let spend = SpendProfile::default();
    let ops = OpsProfile::default();
    let pain = PainProfile::default();
    let investment = TransformationInvestment::default();
    let assumptions = ImprovementAssumptions::default();
    let disabled = BTreeSet::new();

    c.bench_function("compute_roi", |b| {
        b.iter(|| {
            compute_roi(
                black_box(&org),
                black_box(&spend),
                black_box(&ops),
                black_box(&pain),
                black_box(&investment),
                black_box(&assumptions),
                black_box(&disabled),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_ramp_factor,
    bench_compute_baseline,
    bench_compute_roi
);
criterion_main!(benches);
