// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `Screen`: registration order, teardown, and hit-box bookkeeping.

#![cfg(all(feature = "button", feature = "slider"))]

use tactile_region::RegionKind;
use tactile_widgets::{
    ButtonStyle, Color, DrawOp, Frame, RecordingCanvas, Screen, SliderStyle, Theme, Widget,
};

const BUTTON: ButtonStyle = ButtonStyle {
    radius: 6,
    background: Color::BLUE,
    font_color: Color::WHITE,
};

const SLIDER: SliderStyle = SliderStyle {
    border: Color::WHITE,
    foreground: Color::GREEN,
};

#[test]
fn regions_follow_initialization_order() {
    let mut screen = Screen::new(Theme::default());
    let a = screen.init_button(Frame::new(0, 0, 100, 40), BUTTON, "A", 1);
    let b = screen.init_slider(Frame::new(0, 20, 200, 30), SLIDER, 10, 2);

    let order: Vec<_> = screen
        .registry()
        .iter()
        .map(|(_, r)| (r.target, r.kind))
        .collect();
    assert_eq!(order, [(a, RegionKind::Button), (b, RegionKind::Slider)]);

    // (50, 28) is inside both hit boxes; the button came first.
    assert_eq!(screen.hit(50, 28).map(|(_, w)| w), Some(a));
    // Below the button's hit box only the slider remains.
    assert_eq!(screen.hit(50, 40).map(|(_, w)| w), Some(b));
}

#[test]
fn hit_reports_the_owning_region() {
    let mut screen = Screen::new(Theme::default());
    let a = screen.init_button(Frame::new(10, 10, 100, 40), BUTTON, "A", 1);
    let (region, widget) = screen.hit(50, 25).expect("tap lands on the button");
    assert_eq!(widget, a);
    assert_eq!(screen.region_of(a), Some(region));
}

#[test]
fn remove_unlinks_region_and_frees_the_spot() {
    let mut screen = Screen::new(Theme::default());
    let a = screen.init_button(Frame::new(0, 0, 100, 40), BUTTON, "A", 1);
    let b = screen.init_button(Frame::new(0, 0, 100, 40), BUTTON, "B", 2);
    assert_eq!(screen.hit(20, 20).map(|(_, w)| w), Some(a));

    let removed = screen.remove(a).expect("a was registered");
    assert!(matches!(removed, Widget::Button(ref btn) if btn.label() == "A"));
    assert_eq!(screen.hit(20, 20).map(|(_, w)| w), Some(b));
    assert_eq!(screen.registry().len(), 1);
    assert!(screen.remove(a).is_none());
    assert!(!screen.contains(a));
}

#[test]
fn update_keeps_the_old_hit_box_until_synced() {
    let mut screen = Screen::new(Theme::default());
    let a = screen.init_button(Frame::new(0, 0, 100, 40), BUTTON, "A", 1);

    screen
        .button_mut(a)
        .expect("a is a button")
        .update(Frame::new(200, 0, 100, 40), BUTTON, "A");
    assert_eq!(screen.hit(20, 20).map(|(_, w)| w), Some(a));
    assert!(screen.hit(220, 20).is_none());

    assert!(screen.sync_hit_region(a));
    assert!(screen.hit(20, 20).is_none());
    assert_eq!(screen.hit(220, 20).map(|(_, w)| w), Some(a));
}

#[test]
fn typed_accessors_reject_the_other_kind() {
    let mut screen = Screen::new(Theme::default());
    let a = screen.init_button(Frame::new(0, 0, 100, 40), BUTTON, "A", 1);
    let s = screen.init_slider(Frame::new(0, 50, 200, 30), SLIDER, 33, 2);
    assert!(screen.slider(a).is_none());
    assert!(screen.button(s).is_none());
    assert_eq!(screen.slider(s).map(|s| s.value()), Some(33));
    assert_eq!(screen.widget(s).map(|w| *w.payload()), Some(2));
}

#[test]
fn draw_all_paints_back_to_front() {
    let mut screen = Screen::new(Theme::default());
    screen.init_button(Frame::new(0, 0, 100, 40), BUTTON, "front", 1);
    screen.init_button(Frame::new(0, 0, 100, 40), BUTTON, "back", 2);

    let mut canvas = RecordingCanvas::new();
    screen.draw_all(&mut canvas);
    let labels: Vec<_> = canvas
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, ["back", "front"]);
}

#[test]
fn draw_of_a_slider_caches_its_extent() {
    let mut screen = Screen::new(Theme::default());
    let s = screen.init_slider(Frame::new(0, 0, 107, 30), SLIDER, 42, ());
    let mut canvas = RecordingCanvas::new();
    assert!(screen.draw(s, &mut canvas));
    assert_eq!(screen.slider(s).map(|s| s.extent()), Some(42));
}
