// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing of the event task.

use core::time::Duration;

/// Polling cadences and delays of the event task.
///
/// Button presses are assumed to be short, so their release is polled coarsely. Slider drags
/// re-sample position on every poll and need a finer cadence to track the finger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DispatchConfig {
    /// Interval between release checks while a button is held.
    pub button_poll: Duration,
    /// Interval between position samples while a slider is dragged.
    pub slider_poll: Duration,
    /// Pause after each touch before the interrupt is re-armed.
    pub cooldown: Duration,
    /// How long to wait for a touch before [`EventTask::step`](crate::EventTask::step) gives up.
    /// `None` waits forever.
    pub idle_timeout: Option<Duration>,
}

impl DispatchConfig {
    /// Returns a copy with a different idle timeout.
    #[must_use]
    pub const fn with_idle_timeout(self, idle_timeout: Option<Duration>) -> Self {
        Self {
            idle_timeout,
            ..self
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            button_poll: Duration::from_millis(10),
            slider_poll: Duration::from_millis(20),
            cooldown: Duration::from_millis(3),
            idle_timeout: None,
        }
    }
}
