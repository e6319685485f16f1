// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrant_tree::{BoundingBox, QuadTree, StraddlePolicy, TreeConfig};

fn gen_grid_boxes(n: usize, cell: i64) -> Vec<BoundingBox> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(BoundingBox::new(x as i64 * cell, y as i64 * cell, cell, cell));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: i64) -> i64 {
        (self.next_u64() % n as u64) as i64
    }
}

fn gen_random_boxes(count: usize, extent: i64, max_side: i64) -> Vec<BoundingBox> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let w = 1 + rng.below(max_side);
        let h = 1 + rng.below(max_side);
        out.push(BoundingBox::new(
            rng.below(extent - w),
            rng.below(extent - h),
            w,
            h,
        ));
    }
    out
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    for &n in &[32usize, 64, 128] {
        let cell = 8;
        let boxes = gen_grid_boxes(n, cell);
        let region = BoundingBox::new(0, 0, n as i64 * cell, n as i64 * cell);
        let query = BoundingBox::new(100, 100, 400, 400);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("insert_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(region),
                |mut tree| {
                    for r in boxes.iter().copied() {
                        tree.insert(r);
                    }
                    black_box(tree.retrieve(query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("linear_scan_n{}", n), |b| {
            b.iter(|| {
                let hits = boxes.iter().filter(|r| query.intersects(r)).count();
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    let region = BoundingBox::new(0, 0, 4096, 4096);
    for &count in &[1_000usize, 10_000, 50_000] {
        let boxes = gen_random_boxes(count, 4096, 24);
        group.throughput(Throughput::Elements(count as u64));

        for (name, policy) in [("drop", StraddlePolicy::Drop), ("keep", StraddlePolicy::Keep)] {
            let config = TreeConfig::new().with_straddle_policy(policy);
            group.bench_function(format!("insert_{}_{}", name, count), |b| {
                b.iter_batched(
                    || QuadTree::with_config(region, config),
                    |mut tree| {
                        tree.extend(boxes.iter().copied());
                        black_box(tree.count());
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        let config = TreeConfig::new().with_straddle_policy(StraddlePolicy::Keep);
        let tree = QuadTree::from_values(region, config, boxes.iter().copied());
        let mut rng = Rng::new(0xBADC_F00D_1234_5678);
        let queries: Vec<_> = (0..64)
            .map(|_| BoundingBox::new(rng.below(3800), rng.below(3800), 256, 256))
            .collect();
        group.bench_function(format!("query_{}", count), |b| {
            b.iter(|| {
                let hits: usize = queries.iter().map(|q| tree.retrieve(*q).len()).sum();
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("capacity");
    let region = BoundingBox::new(0, 0, 4096, 4096);
    let boxes = gen_random_boxes(20_000, 4096, 16);
    let query = BoundingBox::new(1000, 1000, 512, 512);
    for &max in &[4usize, 16, 64] {
        let config = TreeConfig::new()
            .with_max_node_size(max)
            .with_straddle_policy(StraddlePolicy::Keep);
        let tree = QuadTree::from_values(region, config, boxes.iter().copied());
        group.bench_function(format!("query_max{}", max), |b| {
            b.iter(|| black_box(tree.retrieve(query).len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid, bench_random, bench_capacity);
criterion_main!(benches);
