// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Quadrant Tree: insert entities, split, query, and clear.

use quadrant_tree::{BoundingBox, Boxable, QuadTree, TreeConfig};

/// A round entity boxed by its center and radius.
#[derive(Debug)]
struct Entity {
    id: u32,
    x: i64,
    y: i64,
    r: i64,
}

impl Boxable for Entity {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x - self.r, self.y - self.r, self.r * 2, self.r * 2)
    }
}

fn main() {
    let region = BoundingBox::new(-32, -32, 64, 64);
    let mut tree = QuadTree::with_config(region, TreeConfig::new().with_max_node_size(4));

    for id in 0..12 {
        let x = -28 + (id as i64 * 5) % 56;
        let y = -28 + (id as i64 * 11) % 56;
        if let Err(rejected) = tree.try_insert(Entity { id, x, y, r: 2 }) {
            println!("entity {} not stored: {}", rejected.value.id, rejected.error);
        }
    }
    println!(
        "stored {} entities in {} nodes\n{}",
        tree.count(),
        tree.node_count(),
        tree.root()
    );

    // Query the top-right quadrant.
    let query = BoundingBox::new(0, 0, 32, 32);
    let hits: Vec<_> = tree.retrieve(query).iter().map(|e| e.id).collect();
    println!("entities intersecting {query}: {hits:?}");

    tree.clear();
    println!("after clear: {} entities, {} nodes", tree.count(), tree.node_count());
}
