// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget placement and the shared rounded-rectangle painter.

use crate::canvas::{Canvas, Color};

/// Origin and size of a widget in screen pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Frame {
    /// Creates a frame.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Paints a filled rounded rectangle as four corner discs and three bands.
///
/// The central band is one pixel taller than the frame and the right band one pixel wider than
/// the radius; widgets rely on that overdraw to close the seams left by the discs.
pub(crate) fn fill_rounded<C: Canvas + ?Sized>(
    canvas: &mut C,
    frame: Frame,
    radius: i32,
    color: Color,
) {
    let Frame {
        x,
        y,
        width,
        height,
    } = frame;
    let left = x + radius;
    let right = x + width - radius;
    let top = y + radius;
    let bottom = y + height - radius;

    canvas.fill_circle(left, top, radius, color);
    canvas.fill_circle(right, top, radius, color);
    canvas.fill_circle(left, bottom, radius, color);
    canvas.fill_circle(right, bottom, radius, color);

    canvas.fill_rect(x, top, radius, height - 2 * radius, color);
    canvas.fill_rect(right, top, radius + 1, height - 2 * radius, color);
    canvas.fill_rect(left, y, width - 2 * radius, height + 1, color);
}
