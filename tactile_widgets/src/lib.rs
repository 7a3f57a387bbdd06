// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_widgets --heading-base-level=0

//! Tactile Widgets: touch widgets for small displays.
//!
//! Two widget kinds are provided, each behind a cargo feature of the same name:
//!
//! - [`Button`] (`button`): a rounded, labelled box with a transient pressed look.
//! - [`Slider`] (`slider`): a horizontal `0..=100` bar that repaints only the changed strip
//!   while it is dragged.
//!
//! Widgets paint through the [`Canvas`] trait, a handful of fill and text primitives that a
//! display driver implements. [`RecordingCanvas`] records calls instead, for tests.
//!
//! A [`Screen`] gathers widgets, registers each one's inset hit box in a
//! [`tactile_region::Registry`], and carries the [`Theme`] whose background every erase uses.
//! The interaction protocols that drive widgets from touch input live in `tactile_event`.
//!
//! ## Minimal example
//!
//! ```rust
//! use tactile_widgets::{ButtonStyle, Color, Frame, RecordingCanvas, Screen, Theme};
//!
//! let mut screen = Screen::new(Theme::new(Color::BLACK));
//! let ok = screen.init_button(
//!     Frame::new(10, 10, 100, 40),
//!     ButtonStyle { radius: 8, background: Color::BLUE, font_color: Color::WHITE },
//!     "OK",
//!     "ok-clicked",
//! );
//!
//! let mut canvas = RecordingCanvas::new();
//! screen.draw_all(&mut canvas);
//!
//! let (_, hit) = screen.hit(50, 25).unwrap();
//! assert_eq!(hit, ok);
//! // The hit box is inset, so the painted border does not react.
//! assert!(screen.hit(11, 11).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(not(any(feature = "button", feature = "slider")))]
compile_error!("enable at least one widget kind: the `button` or `slider` feature");

#[cfg(feature = "button")]
pub mod button;
mod canvas;
mod geometry;
mod kinds;
pub mod recording;
mod screen;
#[cfg(feature = "slider")]
pub mod slider;
mod theme;
mod widget;

#[cfg(feature = "button")]
pub use button::{Button, ButtonStyle};
pub use canvas::{Canvas, Color, FontMetric};
pub use geometry::Frame;
pub use kinds::WidgetKinds;
pub use recording::{DrawOp, RecordingCanvas};
pub use screen::{Screen, WidgetKey};
#[cfg(feature = "slider")]
pub use slider::{Slider, SliderStyle, Track};
pub use theme::Theme;
pub use widget::Widget;
