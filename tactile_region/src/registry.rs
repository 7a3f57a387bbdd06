// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The region registry: a doubly linked list threaded through a slot map.

use core::iter::FusedIterator;

use slotmap::{SlotMap, new_key_type};

use crate::rect::Rect;

new_key_type! {
    /// Generational handle of a region in a [`Registry`].
    ///
    /// A key stays valid until its region is removed. After removal the key is stale: it never
    /// refers to a region included later, even when the underlying slot is reused.
    pub struct RegionKey;
}

/// Which interaction protocol a region's owner speaks.
///
/// The tag travels with the region so the event loop can pick a protocol without looking at the
/// owner first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegionKind {
    /// Tap and release.
    Button,
    /// Press, drag and track, release.
    Slider,
}

/// A hit-test area associated with one owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region<T> {
    /// Inclusive hit box in screen pixels.
    pub bounds: Rect,
    /// Protocol tag of the owner.
    pub kind: RegionKind,
    /// Application data identifying the owner, usually a widget handle.
    pub target: T,
}

impl<T> Region<T> {
    /// Creates a region.
    #[must_use]
    pub const fn new(bounds: Rect, kind: RegionKind, target: T) -> Self {
        Self {
            bounds,
            kind,
            target,
        }
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    region: Region<T>,
    prev: Option<RegionKey>,
    next: Option<RegionKey>,
}

/// Insertion-ordered collection of hit-test regions.
///
/// Regions are linked head → tail in the order they were included. The order is meaningful:
/// [`Registry::resolve`] returns the first match, so earlier regions shadow later ones where
/// they overlap.
///
/// All link operations are O(1); resolution is a linear scan.
#[derive(Clone, Debug)]
pub struct Registry<T> {
    nodes: SlotMap<RegionKey, Node<T>>,
    head: Option<RegionKey>,
    tail: Option<RegionKey>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    /// Appends a region at the tail and returns its key.
    ///
    /// On an empty registry the region becomes both head and tail.
    pub fn include(&mut self, region: Region<T>) -> RegionKey {
        let prev = self.tail;
        let key = self.nodes.insert(Node {
            region,
            prev,
            next: None,
        });
        match prev.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(tail) => tail.next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        key
    }

    /// Unlinks a region and returns it.
    ///
    /// Handles the sole element (registry becomes empty), the head (its successor becomes head),
    /// the tail (its predecessor becomes tail) and interior nodes (neighbors are spliced).
    /// Returns `None` and changes nothing if `key` is not a member.
    pub fn remove(&mut self, key: RegionKey) -> Option<Region<T>> {
        let node = self.nodes.remove(key)?;

        match node.prev.and_then(|prev| self.nodes.get_mut(prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.nodes.get_mut(next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        Some(node.region)
    }

    /// Removes every region.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no region is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `key` refers to a registered region.
    #[must_use]
    pub fn contains(&self, key: RegionKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Key of the first-inserted live region.
    #[must_use]
    pub fn head(&self) -> Option<RegionKey> {
        self.head
    }

    /// Key of the last-inserted live region.
    #[must_use]
    pub fn tail(&self) -> Option<RegionKey> {
        self.tail
    }

    /// Returns the region for `key`.
    #[must_use]
    pub fn get(&self, key: RegionKey) -> Option<&Region<T>> {
        self.nodes.get(key).map(|node| &node.region)
    }

    /// Returns the region for `key` mutably.
    ///
    /// Changing a region in place keeps its position in the order.
    pub fn get_mut(&mut self, key: RegionKey) -> Option<&mut Region<T>> {
        self.nodes.get_mut(key).map(|node| &mut node.region)
    }

    /// Replaces the hit box of a region, keeping its position in the order.
    ///
    /// Returns `false` if `key` is not a member.
    pub fn set_bounds(&mut self, key: RegionKey, bounds: Rect) -> bool {
        match self.nodes.get_mut(key) {
            Some(node) => {
                node.region.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Iterates regions head → tail. Use `.rev()` to walk tail → head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = (RegionKey, &'a Region<T>);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Registry`] in link order, created by [`Registry::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<RegionKey, Node<T>>,
    front: Option<RegionKey>,
    back: Option<RegionKey>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (RegionKey, &'a Region<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front?;
        let node = self.nodes.get(key)?;
        self.front = node.next;
        self.remaining -= 1;
        Some((key, &node.region))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back?;
        let node = self.nodes.get(key)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some((key, &node.region))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
