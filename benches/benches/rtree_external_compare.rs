// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrant_tree::{BoundingBox, QuadTree, StraddlePolicy, TreeConfig};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_boxes(n: usize, cell: i64) -> Vec<BoundingBox> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(BoundingBox::new(x as i64 * cell, y as i64 * cell, cell, cell));
        }
    }
    out
}

fn to_rstar_rects(v: &[BoundingBox]) -> Vec<Rectangle<[i64; 2]>> {
    v.iter()
        .map(|b| Rectangle::from_corners([b.left(), b.bottom()], [b.right(), b.top()]))
        .collect()
}

fn bench_rtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_i64");
    for &n in &[64usize, 128] {
        let cell = 10;
        let boxes = gen_grid_boxes(n, cell);
        let region = BoundingBox::new(0, 0, n as i64 * cell, n as i64 * cell);
        let query = BoundingBox::new(100, 100, 400, 400);
        let config = TreeConfig::new().with_straddle_policy(StraddlePolicy::Keep);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadrant_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::with_config(region, config),
                |mut tree| {
                    tree.extend(boxes.iter().copied());
                    black_box(tree.retrieve(query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&boxes),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    // rstar matches touching envelopes; shrink by one to mirror strict overlap.
                    let aabb = AABB::from_corners(
                        [query.left() + 1, query.bottom() + 1],
                        [query.right() - 1, query.top() - 1],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare);
criterion_main!(benches);
