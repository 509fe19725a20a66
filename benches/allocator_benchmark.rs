//! Allocator benchmark: Measure a full layout pass and the raw width split.
//!
//! Target: well under 100ns per pass, since passes run on every resize event.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trellis::layout::allocate;
use trellis::{Bounds, ColumnOptions, FallbackPolicy, Panel, Size, ThreeColumnLayout};

fn options(fallback: FallbackPolicy) -> ColumnOptions {
    ColumnOptions {
        min_menu_width: 60,
        max_menu_width: 200,
        min_content_width: 820,
        min_preview_width: 400,
        content_visible: true,
        preview_visible: true,
        menu_expanded: true,
        fallback,
    }
}

fn allocate_split(c: &mut Criterion) {
    let opts = options(FallbackPolicy::Hide);

    c.bench_function("allocate_even_split", |b| {
        b.iter(|| allocate(black_box(2000), black_box(&opts), true))
    });

    c.bench_function("allocate_fallback", |b| {
        b.iter(|| allocate(black_box(900), black_box(&opts), true))
    });
}

fn layout_pass(c: &mut Criterion) {
    let mut layout = ThreeColumnLayout::new(
        Panel::new(Size::new(200, 800)),
        Panel::new(Size::new(900, 800)),
        Panel::new(Size::new(600, 800)),
        options(FallbackPolicy::StackBehind),
    )
    .expect("valid options");

    c.bench_function("layout_pass", |b| {
        b.iter(|| layout.layout(black_box(Bounds::new(0, 800, 0, 1440))))
    });
}

criterion_group!(benches, allocate_split, layout_pass);
criterion_main!(benches);
