// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point → region resolution.

use crate::registry::{Region, RegionKey, Registry};

impl<T> Registry<T> {
    /// Resolves a point to the first region, in insertion order, whose inclusive box contains it.
    ///
    /// Overlaps are settled strictly first-inserted-wins. Returns `None` when no region matches;
    /// a miss is an ordinary outcome, not an error.
    #[must_use]
    pub fn resolve(&self, x: i32, y: i32) -> Option<(RegionKey, &Region<T>)> {
        self.iter().find(|(_, region)| region.bounds.contains(x, y))
    }

    /// Like [`Registry::resolve`], returning only the key.
    #[must_use]
    pub fn resolve_key(&self, x: i32, y: i32) -> Option<RegionKey> {
        self.resolve(x, y).map(|(key, _)| key)
    }
}
