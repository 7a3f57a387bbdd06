// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated touch panel driving the event task on host threads.
//!
//! A panel thread plays back a few scripted strokes, raising the touch interrupt the way a
//! controller would. The event task runs on its own thread with the hosted semaphore, click
//! channel and sleep. The main thread reads clicks off the channel.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p tactile_demos --example touch_panel`

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{error, info, trace, warn};
use parking_lot::Mutex;
use tactile_event::{
    Cycle, DispatchConfig, EventTask, InterruptLine, ThreadDelay, TouchDriver, TouchPoint,
    TouchSync, click_channel, on_touch_interrupt,
};
use tactile_region::RegionKind;
use tactile_widgets::{ButtonStyle, Canvas, Color, FontMetric, Frame, Screen, SliderStyle, Theme};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Play,
    Stop,
    Volume,
}

#[derive(Debug, Default)]
struct PanelState {
    position: TouchPoint,
    pressed: bool,
    enabled: bool,
    pending: bool,
}

/// Both ends of the controller: the task samples it, the panel thread drives it.
#[derive(Clone, Debug, Default)]
struct Controller(Arc<Mutex<PanelState>>);

impl Controller {
    fn press(&self, sync: &TouchSync, at: TouchPoint) {
        {
            let mut state = self.0.lock();
            state.position = at;
            state.pressed = true;
            state.pending = true;
        }
        if let Err(err) = on_touch_interrupt(sync, &mut self.clone()) {
            warn!("touch interrupt lost: {err}");
        }
    }

    fn move_to(&self, at: TouchPoint) {
        self.0.lock().position = at;
    }

    fn release(&self) {
        self.0.lock().pressed = false;
    }

    fn wait_armed(&self) {
        while !self.0.lock().enabled {
            thread::sleep(Duration::from_millis(1));
        }
    }
}

impl TouchDriver for Controller {
    fn sample(&mut self) -> TouchPoint {
        self.0.lock().position
    }
}

impl InterruptLine for Controller {
    fn set_enabled(&mut self, enabled: bool) {
        self.0.lock().enabled = enabled;
    }

    fn is_asserted(&self) -> bool {
        self.0.lock().pressed
    }

    fn is_pending(&self) -> bool {
        self.0.lock().pending
    }

    fn clear_pending(&mut self) {
        self.0.lock().pending = false;
    }
}

/// A display that logs what it would paint.
#[derive(Debug, Default)]
struct LogCanvas {
    fills: usize,
}

impl Canvas for LogCanvas {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.fills += 1;
        trace!("rect {width}x{height} at ({x}, {y}) in {color:?}");
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        self.fills += 1;
        trace!("circle r={radius} at ({cx}, {cy}) in {color:?}");
    }

    fn text_width(&self, text: &str) -> i32 {
        i32::try_from(text.chars().count())
            .unwrap_or(i32::MAX)
            .saturating_mul(8)
    }

    fn font_metric(&self, metric: FontMetric) -> i32 {
        match metric {
            FontMetric::Height => 16,
            FontMetric::DescendersHeight => 4,
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        info!("text {text:?} at ({x}, {y}) in {color:?}");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let button = ButtonStyle {
        radius: 8,
        background: Color::BLUE,
        font_color: Color::WHITE,
    };
    let slider = SliderStyle {
        border: Color::WHITE,
        foreground: Color::from_rgb8(0x30, 0xC0, 0x60),
    };

    let mut screen = Screen::new(Theme::default());
    screen.init_button(Frame::new(10, 10, 100, 40), button, "Play", Command::Play);
    screen.init_button(Frame::new(120, 10, 100, 40), button, "Stop", Command::Stop);
    screen.init_slider(Frame::new(10, 70, 210, 30), slider, 50, Command::Volume);
    for (key, region) in screen.registry() {
        let kind = match region.kind {
            RegionKind::Button => "button",
            RegionKind::Slider => "slider",
            _ => "other",
        };
        info!("{kind} region {key:?} at {:?}", region.bounds);
    }

    let mut canvas = LogCanvas::default();
    screen.draw_all(&mut canvas);

    let controller = Controller::default();
    let sync = TouchSync::new();
    let (clicks, inbox) = match click_channel(16) {
        Ok(pair) => pair,
        Err(err) => {
            error!("cannot create click channel: {err}");
            return;
        }
    };

    let config = DispatchConfig::default().with_idle_timeout(Some(Duration::from_millis(250)));
    let mut task = EventTask::new(
        screen,
        controller.clone(),
        sync.clone(),
        ThreadDelay,
        clicks,
        canvas,
    )
    .with_config(config);

    // Runs until the panel goes quiet; a device would call `run` instead.
    let events = thread::spawn(move || {
        loop {
            match task.step() {
                Ok(Cycle::TimedOut) => break,
                Ok(cycle) => info!("{cycle:?}"),
                Err(err) => info!("cycle ended with: {err}"),
            }
        }
        info!("painted {} fill(s)", task.canvas().fills);
    });

    let panel = thread::spawn(move || {
        // Tap Play.
        controller.wait_armed();
        controller.press(&sync, TouchPoint::new(60, 30));
        thread::sleep(Duration::from_millis(40));
        controller.release();

        // Drag the volume slider left to right.
        thread::sleep(Duration::from_millis(50));
        controller.wait_armed();
        controller.press(&sync, TouchPoint::new(40, 85));
        for x in (40..=200).step_by(20) {
            controller.move_to(TouchPoint::new(x, 85));
            thread::sleep(Duration::from_millis(25));
        }
        controller.release();

        // Miss everything, then tap Stop.
        thread::sleep(Duration::from_millis(50));
        controller.wait_armed();
        controller.press(&sync, TouchPoint::new(300, 200));
        controller.release();

        thread::sleep(Duration::from_millis(50));
        controller.wait_armed();
        controller.press(&sync, TouchPoint::new(170, 30));
        thread::sleep(Duration::from_millis(30));
        controller.release();
    });

    let mut received = Vec::new();
    while let Some(command) = inbox.recv() {
        info!("click: {command:?}");
        received.push(command);
    }

    for handle in [panel, events] {
        if let Err(panic) = handle.join() {
            std::panic::resume_unwind(panic);
        }
    }
    assert_eq!(received, [Command::Play, Command::Volume, Command::Stop]);
}
