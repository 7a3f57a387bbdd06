// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_event --heading-base-level=0

//! Tactile Event: the touch event task.
//!
//! A touch panel raises an interrupt when pressed. The interrupt handler,
//! [`on_touch_interrupt`], does the least it can: it signals a binary [`Semaphore`] and masks
//! itself. A single [`EventTask`] waits on that semaphore, samples the touch position, hit-tests
//! it against a [`tactile_widgets::Screen`], and runs the interaction protocol of the widget it
//! landed on:
//!
//! - Buttons draw a pressed look, wait for release on a coarse poll, post their payload, and
//!   redraw normally.
//! - Sliders re-sample on a finer poll while pressed, update and repaint their value only while
//!   the finger stays within the slider's own region, and post their payload on release.
//!
//! Afterwards the task sleeps for a short cooldown, clears any interrupt latched meanwhile, and
//! re-enables the interrupt.
//!
//! Hardware and kernel services are traits so the task runs on a microcontroller or a host
//! alike: [`TouchDriver`] and [`InterruptLine`] for the controller, [`Semaphore`] and [`Delay`]
//! for scheduling, [`ClickSink`] for the output queue. With the `std` feature, the `host` types
//! implement the scheduling traits with `parking_lot`.
//!
//! ## Example
//!
//! ```rust
//! use core::cell::Cell;
//! use core::time::Duration;
//! use tactile_event::{
//!     Cycle, Delay, EventTask, InterruptLine, Semaphore, TouchDriver, TouchPoint,
//! };
//! use tactile_widgets::{ButtonStyle, Color, Frame, RecordingCanvas, Screen, Theme};
//!
//! // A panel touched once at (50, 25) and released immediately.
//! #[derive(Default)]
//! struct Tap { enabled: bool }
//! impl TouchDriver for Tap {
//!     fn sample(&mut self) -> TouchPoint { TouchPoint::new(50, 25) }
//! }
//! impl InterruptLine for Tap {
//!     fn set_enabled(&mut self, enabled: bool) { self.enabled = enabled; }
//!     fn is_asserted(&self) -> bool { false }
//!     fn is_pending(&self) -> bool { false }
//!     fn clear_pending(&mut self) {}
//! }
//!
//! struct Ready(Cell<bool>);
//! impl Semaphore for Ready {
//!     fn wait(&self, _: Option<Duration>) -> bool { self.0.replace(false) }
//!     fn signal(&self) -> tactile_event::Result<()> { self.0.set(true); Ok(()) }
//! }
//!
//! struct NoDelay;
//! impl Delay for NoDelay {
//!     fn sleep(&mut self, _: Duration) {}
//! }
//!
//! let mut screen = Screen::new(Theme::default());
//! let ok = screen.init_button(
//!     Frame::new(10, 10, 100, 40),
//!     ButtonStyle { radius: 10, background: Color::BLUE, font_color: Color::WHITE },
//!     "OK",
//!     "ok",
//! );
//!
//! let mut task = EventTask::new(
//!     screen,
//!     Tap::default(),
//!     Ready(Cell::new(true)),
//!     NoDelay,
//!     Vec::new(),
//!     RecordingCanvas::new(),
//! );
//! assert_eq!(task.step().unwrap(), Cycle::Pressed { widget: ok, polls: 0 });
//! assert_eq!(task.clicks(), &["ok"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`; the `std` feature adds the hosted primitives.

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod config;
mod driver;
mod error;
#[cfg(feature = "std")]
pub mod host;
mod interrupt;
mod kernel;
mod task;

pub use config::DispatchConfig;
pub use driver::{InterruptLine, TouchDriver, TouchPoint};
pub use error::{Error, Resource, Result};
#[cfg(feature = "std")]
pub use host::{ClickReceiver, ClickSender, Overflow, ThreadDelay, TouchSync, click_channel};
pub use interrupt::on_touch_interrupt;
pub use kernel::{ClickSink, Delay, Semaphore};
pub use task::{Cycle, EventTask, TaskState};
