// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `fluid_provider`: connect, theme and density switches.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use fluid_provider::{FluidTheme, LayoutDensity, Provider, ProviderBuilder};
use fluid_tokens::{TokenTable, TokenTableBuilder};

fn theme(background: &str, text: &str) -> TokenTable {
    let mut builder = TokenTableBuilder::new()
        .set("FLUID_COLOR_BACKGROUND", background)
        .set("FLUID_COLOR_TEXT", text);
    for i in 0..32 {
        builder = builder.set(format!("FLUID_COLOR_PALETTE_{i:02}"), text);
    }
    builder.build()
}

fn tokens() -> TokenTable {
    let mut builder = TokenTableBuilder::new()
        .set("FLUID_LAYOUT_DEFAULT", "1")
        .set("FLUID_LAYOUT_DENSE", "0.5")
        .set("FLUID_LAYOUT_LOOSE", "1.5")
        .set(
            "THEMES",
            TokenTableBuilder::new()
                .set("ABYSS", theme("#14141f", "#f0f0f5"))
                .set("SURFACE", theme("#ffffff", "#14141f"))
                .build(),
        );
    for i in 0..64 {
        builder = builder.set(format!("FLUID_SPACING_{i:02}"), format!("{}px", i * 2));
    }
    for i in 0..128 {
        builder = builder.set(format!("FLUID_FONT_{i:03}"), "Inter, sans-serif");
    }
    builder.build()
}

fn connected(tokens: &TokenTable) -> Provider {
    let mut provider = ProviderBuilder::new(tokens.clone())
        .build()
        .expect("density factors are defined");
    provider.connect().expect("both themes are defined");
    provider
}

fn bench_provider(c: &mut Criterion) {
    let tokens = tokens();
    let mut group = c.benchmark_group("provider");

    group.bench_function("connect", |b| {
        b.iter_batched(
            || {
                ProviderBuilder::new(tokens.clone())
                    .build()
                    .expect("density factors are defined")
            },
            |mut provider| {
                provider.connect().expect("both themes are defined");
                black_box(provider);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("set_theme", |b| {
        b.iter_batched(
            || connected(&tokens),
            |mut provider| {
                provider
                    .set_theme(FluidTheme::Surface)
                    .expect("both themes are defined");
                black_box(provider);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("set_layout", |b| {
        b.iter_batched(
            || connected(&tokens),
            |mut provider| {
                provider.set_layout(LayoutDensity::Dense);
                black_box(provider);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("set_override", |b| {
        let mut provider = connected(&tokens);
        b.iter(|| provider.set_override(black_box("FLUID_COLOR_ACCENT"), "#ef4444"))
    });

    group.finish();
}

criterion_group!(benches, bench_provider);
criterion_main!(benches);
