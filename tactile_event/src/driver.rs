// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contracts for the touch controller.

/// A raw touch coordinate in screen pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TouchPoint {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl TouchPoint {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Position sampling on a touch controller.
pub trait TouchDriver {
    /// Reads the current touch position. Only meaningful while the panel is pressed.
    fn sample(&mut self) -> TouchPoint;
}

/// The touch controller's interrupt line.
///
/// The line is asserted for as long as a finger is on the panel. Its edge raises the interrupt
/// that wakes the event task.
pub trait InterruptLine {
    /// Unmasks or masks the touch interrupt.
    fn set_enabled(&mut self, enabled: bool);

    /// Returns `true` while the panel is physically pressed.
    fn is_asserted(&self) -> bool;

    /// Returns `true` if an interrupt is latched but not yet cleared.
    fn is_pending(&self) -> bool;

    /// Clears a latched interrupt.
    fn clear_pending(&mut self);
}
