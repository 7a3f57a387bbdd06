// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inclusive integer bounding boxes.

/// An axis-aligned pixel box with **inclusive** corners.
///
/// Both `(x1, y1)` and `(x2, y2)` belong to the box, so a box with `x1 == x2` is one pixel wide.
/// A box with `x2 < x1` or `y2 < y1` contains no points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x1: i32,
    /// Top edge.
    pub y1: i32,
    /// Right edge (inclusive).
    pub x2: i32,
    /// Bottom edge (inclusive).
    pub y2: i32,
}

impl Rect {
    /// Creates a box from its inclusive corners.
    #[must_use]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns `true` if `(x, y)` lies inside the box or on its edge.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Returns `true` if the box contains no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x2 < self.x1 || self.y2 < self.y1
    }

    /// Number of pixel columns covered, or `0` for an empty box.
    #[must_use]
    pub const fn width(&self) -> i32 {
        if self.x2 < self.x1 {
            0
        } else {
            self.x2 - self.x1 + 1
        }
    }

    /// Number of pixel rows covered, or `0` for an empty box.
    #[must_use]
    pub const fn height(&self) -> i32 {
        if self.y2 < self.y1 {
            0
        } else {
            self.y2 - self.y1 + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn corners_are_inside() {
        let r = Rect::new(10, 20, 30, 40);
        assert!(r.contains(10, 20));
        assert!(r.contains(30, 40));
        assert!(r.contains(10, 40));
        assert!(r.contains(30, 20));
    }

    #[test]
    fn one_past_the_edge_is_outside() {
        let r = Rect::new(10, 20, 30, 40);
        assert!(!r.contains(31, 30));
        assert!(!r.contains(9, 30));
        assert!(!r.contains(20, 41));
        assert!(!r.contains(20, 19));
    }

    #[test]
    fn inverted_box_is_empty() {
        let r = Rect::new(5, 5, 4, 10);
        assert!(r.is_empty());
        assert_eq!(r.width(), 0);
        assert!(!r.contains(5, 5));
    }

    #[test]
    fn single_pixel_box() {
        let r = Rect::new(3, 3, 3, 3);
        assert!(!r.is_empty());
        assert_eq!((r.width(), r.height()), (1, 1));
        assert!(r.contains(3, 3));
    }
}
