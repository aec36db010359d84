//! Builder Operations Benchmarks
//!
//! Benchmarks for segment assembly, root composition and `back()` rescans.
//!
//! Run with: `cargo bench --bench builder_ops`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xpath_builder::prelude::*;

fn quiet_builder() -> PathBuilder {
    PathBuilder::with_config(BuilderConfig::new().with_trace_operations(false))
}

fn deep_path(depth: usize) -> PathBuilder {
    let mut builder = quiet_builder();
    for i in 0..depth {
        builder.add_segment_with(ComponentType::ALL[i % ComponentType::ALL.len()], |c| {
            c.with_automation_id(&format!("item{i}"));
        });
    }
    builder
}

fn bench_segment_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_assembly");

    group.bench_function("bare_segments", |bench| {
        bench.iter(|| {
            let mut builder = quiet_builder();
            builder.window().pane().button();
            black_box(builder.build());
        });
    });

    group.bench_function("segments_with_predicates", |bench| {
        bench.iter(|| {
            let mut builder = quiet_builder();
            builder
                .window_with(|w| {
                    w.with_name(black_box("Calculator"));
                    w.with_class_name(black_box("ApplicationFrameWindow"));
                })
                .button_with(|b| {
                    b.starts_with("AutomationId", black_box("num"));
                });
            black_box(builder.build());
        });
    });

    group.finish();
}

fn bench_root_composition(c: &mut Criterion) {
    c.bench_function("set_root_with", |bench| {
        bench.iter(|| {
            let mut builder = quiet_builder();
            builder.set_root_with(|r| {
                r.window_with(|w| {
                    w.with_name("Main");
                });
            });
            black_box(builder.build());
        });
    });
}

fn bench_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("back");

    for depth in [1usize, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bench, &depth| {
            let template = deep_path(depth);
            bench.iter(|| {
                let mut builder = template.clone();
                builder.back().unwrap();
                black_box(builder.build());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_segment_assembly,
    bench_root_composition,
    bench_back
);
criterion_main!(benches);
