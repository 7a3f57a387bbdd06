// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-and-release button.
//!
//! A button paints as a rounded rectangle with a centred label. While held it shows a "pressed"
//! look: the outer two-pixel border is erased to the background and a slightly smaller copy is
//! painted with a dimmed label. The pressed look is never stored; drawing the button again
//! restores its normal face.

use alloc::borrow::Cow;

use tactile_region::Rect;

use crate::canvas::{Canvas, Color, FontMetric};
use crate::geometry::{Frame, fill_rounded};
use crate::theme::Theme;

/// Margin between the widget's top/left edges and its hit box.
pub const HIT_INSET: i32 = 4;
/// Distance from the widget's right/bottom edges back to the hit box's far corner.
pub const HIT_FAR_INSET: i32 = 8;
/// How far the pressed face shrinks on each side.
const PRESS_SHRINK: i32 = 2;
/// Offset from the right/bottom edges of the corner squares erased when pressed.
const PRESS_CORNER: i32 = 12;

/// Colors and corner radius of a button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ButtonStyle {
    /// Corner radius in pixels.
    pub radius: i32,
    /// Body color.
    pub background: Color,
    /// Label color.
    pub font_color: Color,
}

/// A push button.
#[derive(Clone, Debug)]
pub struct Button<P> {
    frame: Frame,
    style: ButtonStyle,
    label: Cow<'static, str>,
    payload: P,
}

impl<P> Button<P> {
    /// Creates a button. It becomes touchable once registered with a [`Screen`](crate::Screen).
    #[must_use]
    pub fn new(
        frame: Frame,
        style: ButtonStyle,
        label: impl Into<Cow<'static, str>>,
        payload: P,
    ) -> Self {
        Self {
            frame,
            style,
            label: label.into(),
            payload,
        }
    }

    /// Replaces geometry, style and label in place.
    ///
    /// The hit box registered for this button is left as it was; use
    /// [`Screen::sync_hit_region`](crate::Screen::sync_hit_region) to move it.
    pub fn update(
        &mut self,
        frame: Frame,
        style: ButtonStyle,
        label: impl Into<Cow<'static, str>>,
    ) {
        self.frame = frame;
        self.style = style;
        self.label = label.into();
    }

    /// Current frame.
    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    /// Current label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Value posted when the button is clicked.
    #[must_use]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Hit box for the current frame.
    ///
    /// It starts [`HIT_INSET`] pixels inside the top-left corner and ends [`HIT_FAR_INSET`] pixels
    /// short of the bottom-right one, so taps on the painted border do not trigger.
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
            x + width - HIT_FAR_INSET,
            y + height - HIT_FAR_INSET,
        )
    }

    /// Paints the normal face.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        paint_face(canvas, self.frame, self.style, &self.label);
    }

    /// Paints the pressed face.
    ///
    /// Erases the outer border strips and corner squares to `theme.background`, then paints a
    /// copy shrunk by two pixels on every side with a `theme.pressed_font` label.
    pub fn draw_pressed<C: Canvas + ?Sized>(&self, canvas: &mut C, theme: &Theme) {
        let Frame {
            x,
            y,
            width,
            height,
        } = self.frame;
        let r = self.style.radius;
        let bg = theme.background;

        canvas.fill_rect(x, y, width, 2, bg);
        canvas.fill_rect(x, y, 2, height, bg);
        canvas.fill_rect(x, y, r, r, bg);
        canvas.fill_rect(x, y + height - PRESS_CORNER, r, r, bg);
        canvas.fill_rect(x, y + height - 2, width, 4, bg);
        canvas.fill_rect(x + width - 2, y, 3, height, bg);
        canvas.fill_rect(x + width - PRESS_CORNER, y, r, r, bg);
        canvas.fill_rect(x + width - PRESS_CORNER, y + height - PRESS_CORNER, r, r, bg);

        let pressed = Frame::new(
            x + PRESS_SHRINK,
            y + PRESS_SHRINK,
            width - 2 * PRESS_SHRINK,
            height - 2 * PRESS_SHRINK,
        );
        let style = ButtonStyle {
            font_color: theme.pressed_font,
            ..self.style
        };
        paint_face(canvas, pressed, style, &self.label);
    }
}

fn paint_face<C: Canvas + ?Sized>(canvas: &mut C, frame: Frame, style: ButtonStyle, label: &str) {
    fill_rounded(canvas, frame, style.radius, style.background);

    let text_w = canvas.text_width(label);
    let text_h = canvas.font_metric(FontMetric::Height)
        - canvas.font_metric(FontMetric::DescendersHeight);
    canvas.draw_text(
        frame.x + (frame.width - text_w) / 2,
        frame.y + (frame.height - text_h) / 2,
        label,
        style.font_color,
    );
}
