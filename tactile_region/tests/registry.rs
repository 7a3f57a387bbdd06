// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `tactile_region` crate.
//!
//! These exercise the link structure through every removal case and check that hit resolution
//! follows insertion order across arbitrary overlap layouts.

use tactile_region::{Rect, Region, RegionKey, RegionKind, Registry};

fn build(n: i32) -> (Registry<i32>, Vec<RegionKey>) {
    let mut reg = Registry::new();
    let keys = (0..n)
        .map(|i| reg.include(Region::new(Rect::new(0, 0, 10, 10), RegionKind::Button, i)))
        .collect();
    (reg, keys)
}

/// Walks the chain both ways and checks it agrees with `expected`.
fn assert_chain(reg: &Registry<i32>, expected: &[i32]) {
    let fwd: Vec<i32> = reg.iter().map(|(_, r)| r.target).collect();
    let mut bwd: Vec<i32> = reg.iter().rev().map(|(_, r)| r.target).collect();
    bwd.reverse();
    assert_eq!(fwd, expected, "forward traversal");
    assert_eq!(bwd, expected, "backward traversal");
    assert_eq!(reg.len(), expected.len());
    assert_eq!(
        reg.head().and_then(|k| reg.get(k)).map(|r| r.target),
        expected.first().copied()
    );
    assert_eq!(
        reg.tail().and_then(|k| reg.get(k)).map(|r| r.target),
        expected.last().copied()
    );
}

#[test]
fn remove_head() {
    let (mut reg, keys) = build(3);
    reg.remove(keys[0]);
    assert_chain(&reg, &[1, 2]);
}

#[test]
fn remove_tail() {
    let (mut reg, keys) = build(3);
    reg.remove(keys[2]);
    assert_chain(&reg, &[0, 1]);
}

#[test]
fn remove_interior() {
    let (mut reg, keys) = build(4);
    reg.remove(keys[2]);
    assert_chain(&reg, &[0, 1, 3]);
    reg.remove(keys[1]);
    assert_chain(&reg, &[0, 3]);
}

#[test]
fn remove_sole() {
    let (mut reg, keys) = build(1);
    reg.remove(keys[0]);
    assert_chain(&reg, &[]);
    assert!(reg.is_empty());
}

#[test]
fn drain_from_both_ends_then_refill() {
    let (mut reg, keys) = build(5);
    reg.remove(keys[4]);
    reg.remove(keys[0]);
    reg.remove(keys[2]);
    assert_chain(&reg, &[1, 3]);
    reg.remove(keys[1]);
    reg.remove(keys[3]);
    assert_chain(&reg, &[]);

    reg.include(Region::new(Rect::new(0, 0, 1, 1), RegionKind::Slider, 9));
    assert_chain(&reg, &[9]);
}

#[test]
fn include_after_removing_tail_links_to_new_tail() {
    let (mut reg, keys) = build(3);
    reg.remove(keys[2]);
    reg.include(Region::new(Rect::new(0, 0, 1, 1), RegionKind::Button, 7));
    assert_chain(&reg, &[0, 1, 7]);
}

/// Small xorshift so layouts are varied but reproducible.
struct Rng(u32);

impl Rng {
    fn next(&mut self) -> i32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        (self.0 % 64) as i32
    }
}

#[test]
fn resolve_always_picks_earliest_inserted_candidate() {
    let mut rng = Rng(0x9E37_79B9);
    for _ in 0..50 {
        let mut reg = Registry::new();
        let mut boxes = Vec::new();
        for i in 0..12 {
            let (x, y) = (rng.next(), rng.next());
            let b = Rect::new(x, y, x + rng.next() / 2, y + rng.next() / 2);
            boxes.push(b);
            reg.include(Region::new(b, RegionKind::Button, i));
        }
        for _ in 0..40 {
            let (px, py) = (rng.next(), rng.next());
            let expected = boxes.iter().position(|b| b.contains(px, py));
            let got = reg.resolve(px, py).map(|(_, r)| r.target as usize);
            assert_eq!(got, expected, "point ({px}, {py})");
        }
    }
}

#[test]
fn resolve_skips_removed_regions() {
    let (mut reg, keys) = build(3);
    assert_eq!(reg.resolve(5, 5).map(|(_, r)| r.target), Some(0));
    reg.remove(keys[0]);
    assert_eq!(reg.resolve(5, 5).map(|(_, r)| r.target), Some(1));
    reg.remove(keys[1]);
    reg.remove(keys[2]);
    assert!(reg.resolve(5, 5).is_none());
}
