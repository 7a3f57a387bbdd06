// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event task: wait for a touch, resolve it, run the widget's interaction, re-arm.

use log::{debug, info, trace, warn};
use tactile_region::RegionKey;
use tactile_widgets::{Canvas, Screen, Theme, Widget, WidgetKey, WidgetKinds};

use crate::config::DispatchConfig;
use crate::driver::{InterruptLine, TouchDriver, TouchPoint};
use crate::error::{Error, Resource, Result};
use crate::kernel::{ClickSink, Delay, Semaphore};

/// Where the event task is within one touch cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TaskState {
    /// Blocked on the touch semaphore.
    #[default]
    Idle,
    /// Reading the touch position.
    Sampling,
    /// Running a widget's interaction protocol.
    Dispatching,
    /// Waiting out the cooldown before re-arming the interrupt.
    Cooldown,
}

/// What one call to [`EventTask::step`] observed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cycle {
    /// No touch arrived within [`DispatchConfig::idle_timeout`].
    TimedOut,
    /// The touch hit no registered region.
    Miss {
        /// The sampled position.
        point: TouchPoint,
    },
    /// A button was pressed and released.
    Pressed {
        /// The button.
        widget: WidgetKey,
        /// Release checks made while the button was held.
        polls: u32,
    },
    /// A slider was dragged and released.
    Dragged {
        /// The slider.
        widget: WidgetKey,
        /// The slider's value on release.
        value: i32,
        /// Samples that landed inside the slider and moved its value.
        updates: u32,
    },
    /// The touch hit a region whose widget could not be dispatched.
    Unhandled {
        /// The region that was hit.
        region: RegionKey,
    },
}

/// The widget protocol chosen for a hit.
#[derive(Copy, Clone, Debug)]
enum Protocol {
    #[cfg(feature = "button")]
    Press,
    #[cfg(feature = "slider")]
    Drag,
}

/// The single consumer of touch interrupts.
///
/// Owns the [`Screen`] whose widgets it dispatches to, plus every port it needs: the touch
/// controller (`D`), the semaphore the interrupt signals (`S`), a sleep primitive (`T`), the sink
/// click payloads are posted to (`Q`) and the canvas widgets are redrawn on (`C`).
///
/// Each touch runs one cycle:
///
/// 1. **Idle**: block on the semaphore.
/// 2. **Sampling**: read the position and hit-test it against the screen's regions.
/// 3. **Dispatching**: run the protocol for the widget's kind. Buttons show pressed feedback,
///    wait for release and post their payload. Sliders track the finger while it stays inside
///    the slider's region and post their payload on release.
/// 4. **Cooldown**: sleep, clear a latched interrupt if there is one, re-enable the interrupt.
///
/// Nothing is posted for a miss, and every cycle re-arms the interrupt before it returns.
pub struct EventTask<P, D, S, T, Q, C> {
    screen: Screen<P>,
    driver: D,
    sync: S,
    delay: T,
    clicks: Q,
    canvas: C,
    config: DispatchConfig,
    state: TaskState,
    started: bool,
}

impl<P, D, S, T, Q, C> core::fmt::Debug for EventTask<P, D, S, T, Q, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventTask")
            .field("widgets", &self.screen.len())
            .field("config", &self.config)
            .field("state", &self.state)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

impl<P, D, S, T, Q, C> EventTask<P, D, S, T, Q, C>
where
    P: Clone,
    D: TouchDriver + InterruptLine,
    S: Semaphore,
    T: Delay,
    Q: ClickSink<P>,
    C: Canvas,
{
    /// Creates a task with the default [`DispatchConfig`].
    pub fn new(screen: Screen<P>, driver: D, sync: S, delay: T, clicks: Q, canvas: C) -> Self {
        Self {
            screen,
            driver,
            sync,
            delay,
            clicks,
            canvas,
            config: DispatchConfig::default(),
            state: TaskState::Idle,
            started: false,
        }
    }

    /// Replaces the timing configuration.
    #[must_use]
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the timing configuration.
    #[must_use]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Returns the current cycle state.
    #[must_use]
    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Returns `true` once [`start`](Self::start) has succeeded.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns the screen being dispatched to.
    #[must_use]
    pub fn screen(&self) -> &Screen<P> {
        &self.screen
    }

    /// Returns the screen mutably, for registering or updating widgets between cycles.
    pub fn screen_mut(&mut self) -> &mut Screen<P> {
        &mut self.screen
    }

    /// Returns the click sink.
    #[must_use]
    pub fn clicks(&self) -> &Q {
        &self.clicks
    }

    /// Returns the canvas.
    #[must_use]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Returns the canvas mutably.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Disassembles the task into its screen and ports.
    pub fn into_parts(self) -> (Screen<P>, D, S, T, Q, C) {
        (
            self.screen,
            self.driver,
            self.sync,
            self.delay,
            self.clicks,
            self.canvas,
        )
    }

    /// Arms the touch interrupt. Runs once; [`step`](Self::step) calls it on first use.
    ///
    /// Fails with [`Error::AlreadyInitialized`] if the task has already started.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(Error::AlreadyInitialized(Resource::EventTask));
        }
        self.started = true;
        info!(
            "touch event task started with {} widget(s), kinds {:?}",
            self.screen.len(),
            WidgetKinds::compiled()
        );
        self.rearm();
        Ok(())
    }

    /// Runs exactly one touch cycle, from waiting on the semaphore back to idle.
    ///
    /// If posting the click payload fails, the widget is still redrawn and the interrupt is
    /// still re-armed before the error is returned.
    pub fn step(&mut self) -> Result<Cycle> {
        if !self.started {
            self.start()?;
        }

        self.enter(TaskState::Idle);
        if !self.sync.wait(self.config.idle_timeout) {
            trace!("no touch within {:?}", self.config.idle_timeout);
            return Ok(Cycle::TimedOut);
        }

        self.enter(TaskState::Sampling);
        let point = self.driver.sample();
        debug!("touch at ({}, {})", point.x, point.y);

        let (cycle, posted) = match self.screen.hit(point.x, point.y) {
            Some((region, widget)) => {
                self.enter(TaskState::Dispatching);
                self.dispatch(region, widget)
            }
            None => {
                trace!("touch at ({}, {}) missed every region", point.x, point.y);
                (Cycle::Miss { point }, Ok(()))
            }
        };

        self.enter(TaskState::Cooldown);
        self.delay.sleep(self.config.cooldown);
        self.rearm();
        self.enter(TaskState::Idle);

        if let Err(err) = posted {
            warn!("dropping click from {cycle:?}: {err}");
            return Err(err);
        }
        Ok(cycle)
    }

    /// Runs cycles forever. Errors are logged and the loop continues.
    pub fn run(mut self) -> ! {
        loop {
            match self.step() {
                Ok(cycle) => trace!("cycle done: {cycle:?}"),
                // Post failures were already reported by `step`.
                Err(err) => debug!("touch cycle failed: {err}"),
            }
        }
    }

    fn enter(&mut self, state: TaskState) {
        if self.state != state {
            trace!("{:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    fn rearm(&mut self) {
        if self.driver.is_pending() {
            self.driver.clear_pending();
        }
        self.driver.set_enabled(true);
    }

    fn dispatch(&mut self, region: RegionKey, key: WidgetKey) -> (Cycle, Result<()>) {
        let unhandled = (Cycle::Unhandled { region }, Ok(()));
        let Some(kind) = self.screen.registry().get(region).map(|r| r.kind) else {
            return unhandled;
        };
        let protocol = match self.screen.widget(key) {
            None => {
                warn!("region {region:?} targets a removed widget");
                return unhandled;
            }
            Some(widget) if widget.kind() != kind => {
                warn!(
                    "region {region:?} is tagged {kind:?} but its widget is a {:?}",
                    widget.kind()
                );
                return unhandled;
            }
            #[cfg(feature = "button")]
            Some(Widget::Button(_)) => Protocol::Press,
            #[cfg(feature = "slider")]
            Some(Widget::Slider(_)) => Protocol::Drag,
        };
        match protocol {
            #[cfg(feature = "button")]
            Protocol::Press => self.press(region, key),
            #[cfg(feature = "slider")]
            Protocol::Drag => self.drag(region, key),
        }
    }

    #[cfg(feature = "button")]
    fn press(&mut self, region: RegionKey, key: WidgetKey) -> (Cycle, Result<()>) {
        let theme: Theme = *self.screen.theme();
        let Some(button) = self.screen.button(key) else {
            return (Cycle::Unhandled { region }, Ok(()));
        };
        trace!("button {key:?} pressed");
        button.draw_pressed(&mut self.canvas, &theme);

        let mut polls = 0_u32;
        while self.driver.is_asserted() {
            self.delay.sleep(self.config.button_poll);
            polls = polls.saturating_add(1);
        }
        trace!("button {key:?} released after {polls} poll(s)");

        let posted = self.clicks.post(button.payload().clone());
        button.draw(&mut self.canvas);
        (Cycle::Pressed { widget: key, polls }, posted)
    }

    #[cfg(feature = "slider")]
    fn drag(&mut self, region: RegionKey, key: WidgetKey) -> (Cycle, Result<()>) {
        let theme: Theme = *self.screen.theme();
        let mut updates = 0_u32;
        while self.driver.is_asserted() {
            self.delay.sleep(self.config.slider_poll);
            let point = self.driver.sample();
            if self.screen.hit(point.x, point.y).map(|(hit, _)| hit) != Some(region) {
                trace!("drag at ({}, {}) is outside slider {key:?}", point.x, point.y);
                continue;
            }
            let Some(slider) = self.screen.slider_mut(key) else {
                break;
            };
            let value = slider.set_value(slider.value_at(point.x));
            slider.draw_value(&mut self.canvas, &theme);
            updates = updates.saturating_add(1);
            trace!("slider {key:?} dragged to {value}");
        }

        let Some(slider) = self.screen.slider(key) else {
            return (Cycle::Unhandled { region }, Ok(()));
        };
        let value = slider.value();
        debug!("slider {key:?} released at {value}");
        let posted = self.clicks.post(slider.payload().clone());
        (
            Cycle::Dragged {
                widget: key,
                value,
                updates,
            },
            posted,
        )
    }
}
