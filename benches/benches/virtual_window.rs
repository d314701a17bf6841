// Copyright 2025 the Flowdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use flowdeck_view::VirtualView;
use flowdeck_virtual_window::{RowGeometry, compute_placeholders, compute_window};

fn bench_compute_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("virtual_window/compute");
    let geometry = RowGeometry::new(32.0_f64).with_header_height(23.0);

    // The math is O(1) in the item count; the interesting cost is placeholder
    // construction across representative list sizes.
    for len in [100_usize, 10_000, 1_000_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("window_and_spacers", len), &len, |b, &len| {
            b.iter(|| {
                let window = compute_window(black_box(1_600.0), black_box(320.0), &geometry);
                black_box(compute_placeholders(window, len, &geometry));
            });
        });
    }

    group.finish();
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("virtual_window/scroll_sweep");

    // A full top-to-bottom scroll of the flow table, one event per row.
    for len in [10_000_usize, 1_000_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("set_scroll_offset", len), &len, |b, &len| {
            b.iter(|| {
                let mut view = VirtualView::new(RowGeometry::new(32.0_f64));
                view.set_len(len);
                view.set_viewport_extent(320.0);
                for row in 0..len {
                    black_box(view.set_scroll_offset(row as f64 * 32.0));
                }
                black_box(view);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_window, bench_scroll_sweep);
criterion_main!(benches);
