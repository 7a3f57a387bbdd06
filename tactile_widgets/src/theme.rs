// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-wide colors.

use crate::canvas::Color;

/// Colors shared by every widget on a [`Screen`](crate::Screen).
///
/// The theme is fixed when the screen is created. `background` is what every erase and
/// uncover operation paints with, so it must match what is actually behind the widgets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Label color of a button while it is held down.
    pub pressed_font: Color,
}

impl Theme {
    /// Creates a theme with the given background and the default pressed-label color.
    #[must_use]
    pub const fn new(background: Color) -> Self {
        Self {
            background,
            pressed_font: Color::GRAY,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}
