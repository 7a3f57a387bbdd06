// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal slider with incremental repaint.
//!
//! A slider shows a value in `0..=100` as a filled bar inside a rounded border. The width of the
//! filled part, its *extent*, is cached after every paint. When the value changes during a drag,
//! [`Slider::draw_value`] repaints only the strip between the old and the new extent instead of
//! the whole widget.
//!
//! ```rust
//! use tactile_widgets::{Color, Frame, RecordingCanvas, Slider, SliderStyle, Theme};
//!
//! let style = SliderStyle { border: Color::WHITE, foreground: Color::GREEN };
//! let mut slider = Slider::new(Frame::new(0, 0, 200, 30), style, 0, ());
//! let theme = Theme::default();
//! let mut canvas = RecordingCanvas::new();
//!
//! slider.draw(&mut canvas, &theme);
//! assert_eq!(slider.extent(), 0);
//!
//! slider.set_value(50);
//! canvas.clear();
//! slider.draw_value(&mut canvas, &theme);
//! // Only the newly covered strip of the 193px track is painted.
//! assert_eq!(canvas.fills_of(Color::GREEN).collect::<Vec<_>>(), [(4, 4, 96, 23)]);
//! assert_eq!(slider.extent(), 96);
//! ```

use tactile_region::Rect;

use crate::canvas::{Canvas, Color};
use crate::geometry::{Frame, fill_rounded};
use crate::theme::Theme;

/// Corner radius of every slider.
pub const RADIUS: i32 = 4;
/// Distance from the widget's edges to the track's top-left corner.
pub const TRACK_INSET: i32 = 4;
/// How much narrower (and shorter) the track is than the widget.
pub const TRACK_TRIM: i32 = 7;
/// Horizontal offset subtracted from a touch before it is mapped to a value.
pub const TOUCH_OFFSET: i32 = 7;
/// Smallest representable value.
pub const MIN_VALUE: i32 = 0;
/// Largest representable value.
pub const MAX_VALUE: i32 = 100;

const HIT_INSET: i32 = 4;
const HIT_FAR_INSET_X: i32 = 8;
const HIT_FAR_INSET_Y: i32 = 6;

/// Colors of a slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SliderStyle {
    /// Rounded border.
    pub border: Color,
    /// Filled part of the track.
    pub foreground: Color,
}

/// The inner rectangle the value bar is drawn in, as origin and size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Track {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width; a full bar is exactly this wide.
    pub width: i32,
    /// Height of the bar.
    pub height: i32,
}

/// A horizontal value slider.
#[derive(Clone, Debug)]
pub struct Slider<P> {
    frame: Frame,
    style: SliderStyle,
    value: i32,
    extent: i32,
    payload: P,
}

impl<P> Slider<P> {
    /// Creates a slider. `value` is clamped to `0..=100`.
    ///
    /// Nothing is painted yet, so the cached extent starts at `0`.
    #[must_use]
    pub fn new(frame: Frame, style: SliderStyle, value: i32, payload: P) -> Self {
        Self {
            frame,
            style,
            value: clamp_value(value),
            extent: 0,
            payload,
        }
    }

    /// Replaces geometry, colors and value in place. `value` is clamped to `0..=100`.
    ///
    /// Neither the registered hit box nor the cached extent is touched; call
    /// [`Slider::draw`] to repaint from scratch.
    pub fn update(&mut self, frame: Frame, style: SliderStyle, value: i32) {
        self.frame = frame;
        self.style = style;
        self.value = clamp_value(value);
    }

    /// Current frame.
    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Current colors.
    #[must_use]
    pub fn style(&self) -> SliderStyle {
        self.style
    }

    /// Current value in `0..=100`.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Sets the value, clamped to `0..=100`, and returns what was stored.
    ///
    /// Does not repaint; follow with [`Slider::draw_value`].
    pub fn set_value(&mut self, value: i32) -> i32 {
        self.value = clamp_value(value);
        self.value
    }

    /// Width of the bar as last painted.
    #[must_use]
    pub fn extent(&self) -> i32 {
        self.extent
    }

    /// Value posted when a drag on this slider ends.
    #[must_use]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Track rectangle derived from the current frame.
    #[must_use]
    pub fn track(&self) -> Track {
        Track {
            x: self.frame.x + TRACK_INSET,
            y: self.frame.y + TRACK_INSET,
            width: self.frame.width - TRACK_TRIM,
            height: self.frame.height - TRACK_TRIM,
        }
    }

    /// Hit box for the current frame: four pixels in from the top-left, eight short of the right
    /// edge and six short of the bottom.
    #[must_use]
    pub fn hit_bounds(&self) -> Rect {
        let Frame {
            x,
            y,
            width,
            height,
        } = self.frame;
        Rect::new(
            x + HIT_INSET,
            y + HIT_INSET,
            x + width - HIT_FAR_INSET_X,
            y + height - HIT_FAR_INSET_Y,
        )
    }

    /// Maps a horizontal touch coordinate to a value in `0..=100`.
    ///
    /// `value = ((x - track.x - TOUCH_OFFSET) * 100) / track.width`, clamped. A degenerate track
    /// maps everything to `0`.
    #[must_use]
    pub fn value_at(&self, x: i32) -> i32 {
        let track = self.track();
        if track.width <= 0 {
            return MIN_VALUE;
        }
        let offset = x.saturating_sub(track.x).saturating_sub(TOUCH_OFFSET);
        clamp_value(offset.saturating_mul(MAX_VALUE) / track.width)
    }

    /// Bar width for `value` on the current track.
    #[must_use]
    pub fn extent_for(&self, value: i32) -> i32 {
        self.track().width.max(0) * clamp_value(value) / MAX_VALUE
    }

    /// Full repaint: border, cleared interior, then the bar. Caches the painted extent.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C, theme: &Theme) {
        let Frame {
            x,
            y,
            width,
            height,
        } = self.frame;
        fill_rounded(canvas, self.frame, RADIUS, self.style.border);
        canvas.fill_rect(x + 2, y + 2, width - 3, height - 3, theme.background);

        let track = self.track();
        let extent = self.extent_for(self.value);
        canvas.fill_rect(track.x, track.y, extent, track.height, self.style.foreground);
        self.extent = extent;
    }

    /// Incremental repaint after the value changed.
    ///
    /// A shrinking bar uncovers `[extent_new, extent_old)` with the background; a growing bar
    /// fills `[extent_old, extent_new)` with the foreground. An unchanged extent paints nothing.
    pub fn draw_value<C: Canvas + ?Sized>(&mut self, canvas: &mut C, theme: &Theme) {
        let track = self.track();
        let update = self.extent_for(self.value);
        let last = self.extent;

        if update < last {
            canvas.fill_rect(
                track.x + update,
                self.frame.y + 2,
                last - update,
                self.frame.height - 3,
                theme.background,
            );
        }
        if update > last {
            canvas.fill_rect(
                track.x + last,
                track.y,
                update - last,
                track.height,
                self.style.foreground,
            );
        }
        self.extent = update;
    }
}

fn clamp_value(value: i32) -> i32 {
    value.clamp(MIN_VALUE, MAX_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingCanvas;
    use alloc::vec::Vec;

    const FG: Color = Color::GREEN;
    const BG: Color = Color::BLACK;

    fn sample(value: i32) -> Slider<()> {
        Slider::new(
            Frame::new(0, 0, 200, 30),
            SliderStyle {
                border: Color::WHITE,
                foreground: FG,
            },
            value,
            (),
        )
    }

    /// A slider whose track is exactly 100px wide, so extents equal values.
    fn hundred(value: i32) -> Slider<()> {
        Slider::new(
            Frame::new(0, 0, 107, 30),
            SliderStyle {
                border: Color::WHITE,
                foreground: FG,
            },
            value,
            (),
        )
    }

    #[test]
    fn geometry() {
        let s = sample(0);
        assert_eq!(
            s.track(),
            Track {
                x: 4,
                y: 4,
                width: 193,
                height: 23
            }
        );
        assert_eq!(s.hit_bounds(), Rect::new(4, 4, 192, 24));
    }

    #[test]
    fn value_is_clamped_everywhere() {
        assert_eq!(sample(-5).value(), 0);
        assert_eq!(sample(500).value(), 100);
        let mut s = sample(0);
        assert_eq!(s.set_value(101), 100);
        s.update(Frame::new(0, 0, 200, 30), s.style(), -1);
        assert_eq!(s.value(), 0);
    }

    #[test]
    fn value_at_spans_the_track() {
        let s = sample(0);
        for x in [i32::MIN, -1000, 0, 11, 100, 156, 204, 1000, i32::MAX] {
            let v = s.value_at(x);
            assert!((0..=100).contains(&v), "x={x} gave {v}");
        }
        assert_eq!(s.value_at(11), 0);
        assert_eq!(s.value_at(156), 75);
        assert_eq!(s.value_at(11 + 193), 100);
    }

    #[test]
    fn degenerate_track_maps_to_zero() {
        let s = Slider::new(
            Frame::new(0, 0, 5, 30),
            SliderStyle {
                border: Color::WHITE,
                foreground: FG,
            },
            50,
            (),
        );
        assert_eq!(s.value_at(100), 0);
        assert_eq!(s.extent_for(100), 0);
    }

    #[test]
    fn extent_endpoints() {
        let s = sample(0);
        assert_eq!(s.extent_for(0), 0);
        assert_eq!(s.extent_for(100), s.track().width);
    }

    #[test]
    fn full_draw_caches_extent() {
        let mut s = sample(75);
        let mut canvas = RecordingCanvas::new();
        s.draw(&mut canvas, &Theme::new(BG));
        assert_eq!(s.extent(), 193 * 75 / 100);
        assert_eq!(
            canvas.fills_of(BG).collect::<Vec<_>>(),
            [(2, 2, 197, 27)]
        );
        assert_eq!(
            canvas.fills_of(FG).collect::<Vec<_>>(),
            [(4, 4, 144, 23)]
        );
    }

    #[test]
    fn growing_bar_fills_only_the_delta() {
        let theme = Theme::new(BG);
        let mut s = hundred(30);
        let mut canvas = RecordingCanvas::new();
        s.draw(&mut canvas, &theme);
        assert_eq!(s.extent(), 30);

        canvas.clear();
        s.set_value(50);
        s.draw_value(&mut canvas, &theme);
        assert_eq!(canvas.fills_of(FG).collect::<Vec<_>>(), [(4 + 30, 4, 20, 23)]);
        assert_eq!(canvas.fills_of(BG).count(), 0);
        assert_eq!(s.extent(), 50);
    }

    #[test]
    fn shrinking_bar_uncovers_only_the_delta() {
        let theme = Theme::new(BG);
        let mut s = hundred(50);
        let mut canvas = RecordingCanvas::new();
        s.draw(&mut canvas, &theme);

        canvas.clear();
        s.set_value(20);
        s.draw_value(&mut canvas, &theme);
        assert_eq!(canvas.fills_of(BG).collect::<Vec<_>>(), [(4 + 20, 2, 30, 27)]);
        assert_eq!(canvas.fills_of(FG).count(), 0);
        assert_eq!(s.extent(), 20);
    }

    #[test]
    fn unchanged_value_paints_nothing() {
        let theme = Theme::new(BG);
        let mut s = hundred(40);
        let mut canvas = RecordingCanvas::new();
        s.draw(&mut canvas, &theme);
        canvas.clear();
        s.draw_value(&mut canvas, &theme);
        assert!(canvas.ops().is_empty());
        assert_eq!(s.extent(), 40);
    }
}
