//! Performance measurement for end-to-end spelling at varying sequence lengths

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spellcut::pitch::{Pitch, PitchClass};
use spellcut::speller::CostModel;
use std::hint::black_box;

/// Reproducible pitch sequence spanning two octaves around middle C
fn seeded_pitches(length: usize, seed: u64) -> Vec<Pitch> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..length)
        .map(|_| Pitch::new(f64::from(rng.random_range(48..72_i32))))
        .collect()
}

/// Measures spelling cost as the quadratic pairwise edge set grows
fn bench_spell(c: &mut Criterion) {
    let model = CostModel::fifths();
    let mut group = c.benchmark_group("spell");

    for &length in &[4_usize, 16, 48] {
        let input = seeded_pitches(length, 12345);
        group.bench_with_input(BenchmarkId::from_parameter(length), &input, |b, input| {
            b.iter(|| {
                let Ok(spelled) = spellcut::spell(black_box(input), &model, PitchClass::new(2))
                else {
                    return;
                };
                black_box(spelled);
            });
        });
    }
    group.finish();
}

/// Measures cost model construction in isolation
fn bench_build_model(c: &mut Criterion) {
    c.bench_function("build_fifths_model", |b| {
        b.iter(|| black_box(CostModel::fifths()));
    });
}

criterion_group!(benches, bench_spell, bench_build_model);
criterion_main!(benches);
