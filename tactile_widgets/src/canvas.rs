// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing contract widgets paint through.

/// A 16-bit RGB565 display color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u16);

impl Color {
    /// `#000000`.
    pub const BLACK: Self = Self(0x0000);
    /// `#FFFFFF`.
    pub const WHITE: Self = Self(0xFFFF);
    /// Mid gray, used for the label of a pressed button.
    pub const GRAY: Self = Self(0x7BEF);
    /// Pure red.
    pub const RED: Self = Self(0xF800);
    /// Pure green.
    pub const GREEN: Self = Self(0x07E0);
    /// Pure blue.
    pub const BLUE: Self = Self(0x001F);

    /// Packs 8-bit channels into RGB565, dropping the low bits.
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) >> 3) << 11) | (((g as u16) >> 2) << 5) | ((b as u16) >> 3))
    }
}

/// Font measurements a [`Canvas`] can report.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontMetric {
    /// Full line height, ascent plus descent.
    Height,
    /// Height of descenders below the baseline.
    DescendersHeight,
}

/// Pixel-drawing primitives consumed by the widgets.
///
/// Coordinates are screen pixels. Widths and heights are sizes, not inclusive corners, and a
/// non-positive size draws nothing. Implementations map these onto a display driver; see
/// [`RecordingCanvas`](crate::RecordingCanvas) for one that only records what was asked of it.
pub trait Canvas {
    /// Fills the `width × height` rectangle whose top-left corner is `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Fills a circle of `radius` centred on `(cx, cy)`.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color);

    /// Width in pixels `text` would occupy when drawn.
    fn text_width(&self, text: &str) -> i32;

    /// A measurement of the current font.
    fn font_metric(&self, metric: FontMetric) -> i32;

    /// Draws `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        (**self).fill_rect(x, y, width, height, color);
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        (**self).fill_circle(cx, cy, radius, color);
    }

    fn text_width(&self, text: &str) -> i32 {
        (**self).text_width(text)
    }

    fn font_metric(&self, metric: FontMetric) -> i32 {
        (**self).font_metric(metric)
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        (**self).draw_text(x, y, text, color);
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn rgb8_packing() {
        assert_eq!(Color::from_rgb8(255, 255, 255), Color::WHITE);
        assert_eq!(Color::from_rgb8(0, 0, 0), Color::BLACK);
        assert_eq!(Color::from_rgb8(255, 0, 0), Color::RED);
        assert_eq!(Color::from_rgb8(0, 255, 0), Color::GREEN);
        assert_eq!(Color::from_rgb8(0, 0, 255), Color::BLUE);
        assert_eq!(Color::from_rgb8(128, 128, 128).0, 0x8410);
    }
}
