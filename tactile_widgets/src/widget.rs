// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of widget kinds.

use tactile_region::{Rect, RegionKind};

use crate::canvas::Canvas;
use crate::theme::Theme;

#[cfg(feature = "button")]
use crate::button::Button;
#[cfg(feature = "slider")]
use crate::slider::Slider;

/// Any widget a [`Screen`](crate::Screen) can hold.
///
/// Variants exist only for the kinds enabled by cargo features, so matching on a widget is
/// exhaustive over exactly the kinds this build can dispatch.
#[derive(Clone, Debug)]
pub enum Widget<P> {
    /// A push button.
    #[cfg(feature = "button")]
    Button(Button<P>),
    /// A value slider.
    #[cfg(feature = "slider")]
    Slider(Slider<P>),
}

impl<P> Widget<P> {
    /// Region tag matching this widget's interaction protocol.
    #[must_use]
    pub fn kind(&self) -> RegionKind {
        match self {
            #[cfg(feature = "button")]
            Self::Button(_) => RegionKind::Button,
            #[cfg(feature = "slider")]
            Self::Slider(_) => RegionKind::Slider,
        }
    }

    /// Value posted when an interaction with this widget completes.
    #[must_use]
    pub fn payload(&self) -> &P {
        match self {
            #[cfg(feature = "button")]
            Self::Button(b) => b.payload(),
            #[cfg(feature = "slider")]
            Self::Slider(s) => s.payload(),
        }
    }

    /// Hit box derived from the widget's current frame.
    #[must_use]
    pub fn hit_bounds(&self) -> Rect {
        match self {
            #[cfg(feature = "button")]
            Self::Button(b) => b.hit_bounds(),
            #[cfg(feature = "slider")]
            Self::Slider(s) => s.hit_bounds(),
        }
    }

    /// Full repaint in the widget's normal state.
    pub fn draw<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        #[cfg_attr(
            not(feature = "slider"),
            expect(unused_variables, reason = "only sliders read the theme on a full repaint")
        )]
        theme: &Theme,
    ) {
        match self {
            #[cfg(feature = "button")]
            Self::Button(b) => b.draw(canvas),
            #[cfg(feature = "slider")]
            Self::Slider(s) => s.draw(canvas, theme),
        }
    }

    /// The button, if this is one.
    #[cfg(feature = "button")]
    #[must_use]
    pub fn as_button(&self) -> Option<&Button<P>> {
        match self {
            Self::Button(b) => Some(b),
            #[allow(unreachable_patterns, reason = "reachable only when sliders are compiled in")]
            _ => None,
        }
    }

    /// The button, mutably, if this is one.
    #[cfg(feature = "button")]
    pub fn as_button_mut(&mut self) -> Option<&mut Button<P>> {
        match self {
            Self::Button(b) => Some(b),
            #[allow(unreachable_patterns, reason = "reachable only when sliders are compiled in")]
            _ => None,
        }
    }

    /// The slider, if this is one.
    #[cfg(feature = "slider")]
    #[must_use]
    pub fn as_slider(&self) -> Option<&Slider<P>> {
        match self {
            Self::Slider(s) => Some(s),
            #[allow(unreachable_patterns, reason = "reachable only when buttons are compiled in")]
            _ => None,
        }
    }

    /// The slider, mutably, if this is one.
    #[cfg(feature = "slider")]
    pub fn as_slider_mut(&mut self) -> Option<&mut Slider<P>> {
        match self {
            Self::Slider(s) => Some(s),
            #[allow(unreachable_patterns, reason = "reachable only when buttons are compiled in")]
            _ => None,
        }
    }
}

#[cfg(feature = "button")]
impl<P> From<Button<P>> for Widget<P> {
    fn from(button: Button<P>) -> Self {
        Self::Button(button)
    }
}

#[cfg(feature = "slider")]
impl<P> From<Slider<P>> for Widget<P> {
    fn from(slider: Slider<P>) -> Self {
        Self::Slider(slider)
    }
}
