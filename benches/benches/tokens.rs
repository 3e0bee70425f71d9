// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `fluid_tokens`: view lookups, enumeration and CSS names.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::rc::Rc;

use fluid_tokens::{CssNameCache, TokenAccessor, TokenTable, TokenTableBuilder, css_property_name};

fn table(len: usize) -> TokenTable {
    let mut builder = TokenTableBuilder::new();
    for i in 0..len {
        builder = builder.set(format!("FLUID_TOKEN_{i:04}"), format!("{i}px"));
    }
    builder.build()
}

/// An accessor where every fourth token is overridden and a few tokens only
/// exist as overrides.
fn accessor(len: usize) -> TokenAccessor {
    let mut accessor = TokenAccessor::new(table(len));
    for i in (0..len).step_by(4) {
        accessor.set_override(&format!("FLUID_TOKEN_{i:04}"), "0px");
    }
    for i in 0..8 {
        accessor.set_override(&format!("FLUID_DYNAMIC_{i}"), "1px");
    }
    accessor
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokens/view");

    for len in [16_usize, 256] {
        let accessor = accessor(len);

        group.bench_function(BenchmarkId::new("get_original", len), |b| {
            let view = accessor.tokens();
            b.iter(|| black_box(view.get(black_box("FLUID_TOKEN_0001"))))
        });

        group.bench_function(BenchmarkId::new("get_override", len), |b| {
            let view = accessor.tokens();
            b.iter(|| black_box(view.get(black_box("FLUID_TOKEN_0004"))))
        });

        group.bench_function(BenchmarkId::new("get_missing", len), |b| {
            let view = accessor.tokens();
            b.iter(|| black_box(view.get(black_box("FLUID_UNKNOWN"))))
        });

        group.bench_function(BenchmarkId::new("iter", len), |b| {
            let view = accessor.tokens();
            b.iter(|| black_box(view.iter().count()))
        });

        group.bench_function(BenchmarkId::new("snapshot", len), |b| {
            b.iter(|| black_box(accessor.tokens().snapshot()))
        });
    }

    group.finish();
}

fn bench_overrides(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokens/overrides");
    let base = table(256);

    group.bench_function("set_remove_native", |b| {
        b.iter_batched(
            || TokenAccessor::new(base.clone()),
            |mut accessor| {
                accessor.set_override("FLUID_TOKEN_0100", "2px");
                black_box(accessor.remove_override("FLUID_TOKEN_0100"));
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("set_dynamic/8", |b| {
        b.iter_batched(
            || TokenAccessor::new(base.clone()),
            |mut accessor| {
                for name in ["A", "B", "C", "D", "E", "F", "G", "H"] {
                    accessor.set_override(name, 1);
                }
                black_box(accessor);
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_css_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokens/css_name");

    group.bench_function("uncached", |b| {
        b.iter(|| black_box(css_property_name(black_box("FLUID_SPACING_MEDIUM"))))
    });

    group.bench_function("cached_hit", |b| {
        let cache = CssNameCache::new();
        let _ = cache.get("FLUID_SPACING_MEDIUM");
        b.iter(|| black_box(cache.get(black_box("FLUID_SPACING_MEDIUM"))))
    });

    group.bench_function("shared_cache/256", |b| {
        let names: Vec<String> = (0..256).map(|i| format!("FLUID_TOKEN_{i:04}")).collect();
        let cache = Rc::new(CssNameCache::new());
        b.iter(|| {
            for name in &names {
                black_box(cache.get(name));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_view, bench_overrides, bench_css_names);
criterion_main!(benches);
