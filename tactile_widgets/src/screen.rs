// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A screen: widgets, their hit regions, and the theme they share.

use slotmap::{SlotMap, new_key_type};
use tactile_region::{Region, RegionKey, Registry};

use crate::canvas::Canvas;
use crate::geometry::Frame;
use crate::theme::Theme;
use crate::widget::Widget;

#[cfg(feature = "button")]
use {
    crate::button::{Button, ButtonStyle},
    alloc::borrow::Cow,
};
#[cfg(feature = "slider")]
use crate::slider::{Slider, SliderStyle};

new_key_type! {
    /// Generational handle of a widget on a [`Screen`].
    pub struct WidgetKey;
}

#[derive(Clone, Debug)]
struct Entry<P> {
    widget: Widget<P>,
    region: RegionKey,
}

/// Widgets, their hit regions, and the screen-wide [`Theme`].
///
/// Every widget owns exactly one region in the screen's [`Registry`]; the region's target is the
/// widget's [`WidgetKey`]. Widgets are hit-tested in the order they were initialized, so a
/// widget initialized later is behind any earlier one it overlaps.
///
/// A screen is built during start-up and then handed to the event task, which is its only writer
/// from then on.
#[derive(Clone, Debug)]
pub struct Screen<P> {
    registry: Registry<WidgetKey>,
    widgets: SlotMap<WidgetKey, Entry<P>>,
    theme: Theme,
}

impl<P> Screen<P> {
    /// Creates an empty screen painting erased areas with `theme.background`.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            registry: Registry::new(),
            widgets: SlotMap::with_key(),
            theme,
        }
    }

    /// The screen-wide theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Hit regions in resolution order.
    #[must_use]
    pub fn registry(&self) -> &Registry<WidgetKey> {
        &self.registry
    }

    /// Number of widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns `true` if the screen holds no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Registers an already constructed widget at the back of the hit order.
    pub fn insert(&mut self, widget: impl Into<Widget<P>>) -> WidgetKey {
        let widget = widget.into();
        let bounds = widget.hit_bounds();
        let kind = widget.kind();
        let registry = &mut self.registry;
        let key = self.widgets.insert_with_key(|key| Entry {
            region: registry.include(Region::new(bounds, kind, key)),
            widget,
        });
        log::debug!("registered {kind:?} widget {key:?} with hit box {bounds:?}");
        key
    }

    /// Creates a button and registers its inset hit box.
    #[cfg(feature = "button")]
    pub fn init_button(
        &mut self,
        frame: Frame,
        style: ButtonStyle,
        label: impl Into<Cow<'static, str>>,
        payload: P,
    ) -> WidgetKey {
        self.insert(Button::new(frame, style, label, payload))
    }

    /// Creates a slider and registers its inset hit box.
    #[cfg(feature = "slider")]
    pub fn init_slider(
        &mut self,
        frame: Frame,
        style: SliderStyle,
        value: i32,
        payload: P,
    ) -> WidgetKey {
        self.insert(Slider::new(frame, style, value, payload))
    }

    /// Unregisters a widget and returns it. Its hit region is unlinked first.
    pub fn remove(&mut self, key: WidgetKey) -> Option<Widget<P>> {
        let entry = self.widgets.remove(key)?;
        self.registry.remove(entry.region);
        log::debug!("removed widget {key:?}");
        Some(entry.widget)
    }

    /// Returns `true` if `key` refers to a widget on this screen.
    #[must_use]
    pub fn contains(&self, key: WidgetKey) -> bool {
        self.widgets.contains_key(key)
    }

    /// The widget for `key`.
    #[must_use]
    pub fn widget(&self, key: WidgetKey) -> Option<&Widget<P>> {
        self.widgets.get(key).map(|e| &e.widget)
    }

    /// The widget for `key`, mutably.
    ///
    /// Geometry changes made through this reference do not move the hit region; see
    /// [`Screen::sync_hit_region`].
    pub fn widget_mut(&mut self, key: WidgetKey) -> Option<&mut Widget<P>> {
        self.widgets.get_mut(key).map(|e| &mut e.widget)
    }

    /// The button for `key`, if that widget is a button.
    #[cfg(feature = "button")]
    #[must_use]
    pub fn button(&self, key: WidgetKey) -> Option<&Button<P>> {
        self.widget(key)?.as_button()
    }

    /// The button for `key`, mutably, if that widget is a button.
    #[cfg(feature = "button")]
    pub fn button_mut(&mut self, key: WidgetKey) -> Option<&mut Button<P>> {
        self.widget_mut(key)?.as_button_mut()
    }

    /// The slider for `key`, if that widget is a slider.
    #[cfg(feature = "slider")]
    #[must_use]
    pub fn slider(&self, key: WidgetKey) -> Option<&Slider<P>> {
        self.widget(key)?.as_slider()
    }

    /// The slider for `key`, mutably, if that widget is a slider.
    #[cfg(feature = "slider")]
    pub fn slider_mut(&mut self, key: WidgetKey) -> Option<&mut Slider<P>> {
        self.widget_mut(key)?.as_slider_mut()
    }

    /// Key of the hit region owned by `key`.
    #[must_use]
    pub fn region_of(&self, key: WidgetKey) -> Option<RegionKey> {
        self.widgets.get(key).map(|e| e.region)
    }

    /// Recomputes the hit box of a widget from its current frame.
    ///
    /// `update` calls deliberately leave the hit box alone; this is the explicit way to move it
    /// after a resize. The region keeps its place in the hit order. Returns `false` for an
    /// unknown key.
    pub fn sync_hit_region(&mut self, key: WidgetKey) -> bool {
        let Some(entry) = self.widgets.get(key) else {
            return false;
        };
        self.registry.set_bounds(entry.region, entry.widget.hit_bounds())
    }

    /// Resolves a touch to the first widget whose hit region contains it.
    ///
    /// Returns the region key alongside the widget key so callers can tell whether two touches
    /// landed in the same region.
    #[must_use]
    pub fn hit(&self, x: i32, y: i32) -> Option<(RegionKey, WidgetKey)> {
        self.registry.resolve(x, y).map(|(region, r)| (region, r.target))
    }

    /// Full repaint of one widget. Returns `false` for an unknown key.
    pub fn draw<C: Canvas + ?Sized>(&mut self, key: WidgetKey, canvas: &mut C) -> bool {
        let theme = self.theme;
        match self.widgets.get_mut(key) {
            Some(entry) => {
                entry.widget.draw(canvas, &theme);
                true
            }
            None => false,
        }
    }

    /// Full repaint of every widget, back to front so earlier widgets end up on top.
    pub fn draw_all<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let theme = self.theme;
        for (_, region) in self.registry.iter().rev() {
            if let Some(entry) = self.widgets.get_mut(region.target) {
                entry.widget.draw(canvas, &theme);
            }
        }
    }
}
