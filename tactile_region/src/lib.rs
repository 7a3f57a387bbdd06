// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_region --heading-base-level=0

//! Tactile Region: an insertion-ordered registry of hit-test regions.
//!
//! A touch screen hands the application a raw `(x, y)` coordinate. Before any widget can react,
//! that coordinate has to be resolved to the on-screen area it falls into. This crate owns exactly
//! that step:
//!
//! - [`Rect`]: an inclusive, integer pixel bounding box.
//! - [`Region`]: a bounding box plus a [`RegionKind`] tag and an application-defined target
//!   (typically a handle to the widget that owns the region).
//! - [`Registry`]: a doubly linked, insertion-ordered collection of regions addressed by
//!   generational [`RegionKey`]s.
//! - [`Registry::resolve`]: the hit tester. It scans from head to tail and returns the
//!   **first** region whose box contains the point.
//!
//! ## Ordering is semantic
//!
//! Regions may overlap. Overlap is resolved strictly by insertion order: the earliest-inserted
//! region wins. A widget registered after an overlapping one is therefore "behind" it for hit
//! purposes, regardless of draw order. Removing a region and including it again moves it to the
//! back of that order.
//!
//! ## Ownership
//!
//! The registry stores the link structure (previous/next) and the region data; the widget that
//! owns a region holds its [`RegionKey`]. Keys are generational, so a key that outlived its region
//! never aliases a different, newer region: [`Registry::remove`] on a stale key returns `None`
//! and leaves the chain untouched.
//!
//! ## Minimal example
//!
//! ```rust
//! use tactile_region::{Rect, Region, RegionKind, Registry};
//!
//! let mut registry = Registry::new();
//! let ok = registry.include(Region::new(Rect::new(10, 10, 60, 40), RegionKind::Button, "ok"));
//! let _behind = registry.include(Region::new(Rect::new(0, 0, 100, 100), RegionKind::Slider, "bg"));
//!
//! // The point lies in both regions; the first-inserted one wins.
//! let (key, region) = registry.resolve(20, 20).unwrap();
//! assert_eq!(key, ok);
//! assert_eq!(region.target, "ok");
//!
//! // Boundaries are inclusive.
//! assert!(registry.resolve(100, 100).is_some());
//! assert!(registry.resolve(101, 100).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod rect;
mod registry;

pub use rect::Rect;
pub use registry::{Iter, Region, RegionKey, RegionKind, Registry};
