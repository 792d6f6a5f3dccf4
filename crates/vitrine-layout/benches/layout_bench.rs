//! Layout engine benchmarks: full-collection layout at each view mode.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vitrine_core::geometry::{Vec2, ViewportMetrics};
use vitrine_layout::{layout_all, ItemExtent, LayoutContext, ViewMode};

fn extents(count: usize) -> Vec<ItemExtent> {
    (0..count)
        .map(|i| {
            ItemExtent::new(
                Vec2::new(320.0, 240.0),
                i as f32 * 360.0,
                120.0 + (i % 3) as f32 * 40.0,
            )
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let metrics = ViewportMetrics::new(1920.0, 1080.0);
    let mut group = c.benchmark_group("layout_all");

    for count in [8usize, 64, 512] {
        let items = extents(count);
        for mode in ViewMode::ALL {
            let ctx = LayoutContext {
                mode,
                metrics,
                scroll_offset: 250.0,
                hovered: Some(count / 2),
                count,
            };
            group.bench_with_input(
                BenchmarkId::new(mode.to_string(), count),
                &items,
                |b, items| b.iter(|| layout_all(black_box(&ctx), black_box(items))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
