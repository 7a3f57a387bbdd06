// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A canvas that records draw calls instead of rasterizing them.
//!
//! Intended for tests and debugging that want to assert on the exact primitives a widget
//! emitted. Text is measured with a fixed-advance font so layout is predictable.

use alloc::string::String;
use alloc::vec::Vec;

use crate::canvas::{Canvas, Color, FontMetric};

/// One recorded primitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOp {
    /// [`Canvas::fill_rect`].
    FillRect {
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Fill color.
        color: Color,
    },
    /// [`Canvas::fill_circle`].
    FillCircle {
        /// Center x.
        cx: i32,
        /// Center y.
        cy: i32,
        /// Radius in pixels.
        radius: i32,
        /// Fill color.
        color: Color,
    },
    /// [`Canvas::draw_text`].
    Text {
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
        /// The drawn string.
        text: String,
        /// Text color.
        color: Color,
    },
}

/// Fixed-advance font used by [`RecordingCanvas`] for measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MonoFont {
    /// Horizontal advance of every character.
    pub advance: i32,
    /// Line height.
    pub height: i32,
    /// Descender height.
    pub descent: i32,
}

impl Default for MonoFont {
    fn default() -> Self {
        Self {
            advance: 8,
            height: 16,
            descent: 4,
        }
    }
}

/// [`Canvas`] implementation that appends every call to a log.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    font: MonoFont,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    /// Creates an empty recorder with the default [`MonoFont`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty recorder measuring text with `font`.
    #[must_use]
    pub fn with_font(font: MonoFont) -> Self {
        Self {
            font,
            ops: Vec::new(),
        }
    }

    /// Recorded primitives in call order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drains the log, returning everything recorded so far.
    pub fn take(&mut self) -> Vec<DrawOp> {
        core::mem::take(&mut self.ops)
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Rectangle fills painted in `color`, as `(x, y, width, height)`.
    pub fn fills_of(&self, color: Color) -> impl Iterator<Item = (i32, i32, i32, i32)> + '_ {
        self.ops.iter().filter_map(move |op| match *op {
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color: c,
            } if c == color => Some((x, y, width, height)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        self.ops.push(DrawOp::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn text_width(&self, text: &str) -> i32 {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        chars.saturating_mul(self.font.advance)
    }

    fn font_metric(&self, metric: FontMetric) -> i32 {
        match metric {
            FontMetric::Height => self.font.height,
            FontMetric::DescendersHeight => self.font.descent,
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: String::from(text),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_with_fixed_advance() {
        let canvas = RecordingCanvas::new();
        assert_eq!(canvas.text_width("OK"), 16);
        assert_eq!(canvas.text_width(""), 0);
        assert_eq!(canvas.font_metric(FontMetric::Height), 16);
    }

    #[test]
    fn take_drains_the_log() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(0, 0, 1, 1, Color::RED);
        canvas.fill_rect(1, 1, 2, 2, Color::BLUE);
        assert_eq!(canvas.fills_of(Color::BLUE).collect::<Vec<_>>(), [(1, 1, 2, 2)]);
        assert_eq!(canvas.take().len(), 2);
        assert!(canvas.ops().is_empty());
    }
}
