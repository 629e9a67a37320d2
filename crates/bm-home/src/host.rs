//! Headless host.
//!
//! Owns everything the screen treats as external: the clock, the timer
//! queue, the alert facility and the window. Time is virtual: it only moves
//! when `advance` is called, which makes every run reproducible.

use std::rc::Rc;

use anyhow::{Context, Result};
use bm_core::*;
use bm_ui::{AlertDialog, dialog::CONFIRM_LABEL, layout_and_paint};
use web_time::Duration;

use crate::config::HostConfig;
use crate::screen::{Screen, ScreenEnv};
use crate::state::InteractionSnapshot;
use crate::strings;
use crate::theme::{STATUS_BAR, StatusBar};

/// Frame interval used while stepping animations forward.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct Host {
    config: HostConfig,
    clock: TestClock,
    timers: Timers,
    alerts: AlertQueue,
    screen: Screen,
    view: View,
    frame: Frame,
}

impl Host {
    /// Install a fresh virtual clock on this thread, mount the screen and
    /// paint the first frame.
    pub fn new(config: HostConfig) -> Result<Self> {
        let clock = TestClock::new();
        set_clock(clock.clone());

        let timers = Timers::new();
        let alerts = AlertQueue::new();
        let (w, h) = config.window;
        let env = ScreenEnv {
            timers: timers.clone(),
            alerts: Rc::new(alerts.clone()),
            animations: config.animations,
            window: Size {
                width: w as f32,
                height: h as f32,
            },
        };
        let screen = Screen::new(config.props.clone(), env);

        let mut host = Self {
            config,
            clock,
            timers,
            alerts,
            screen,
            view: bm_ui::Box(Modifier::new()),
            frame: Frame::default(),
        };
        host.redraw()?;
        Ok(host)
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn status_bar(&self) -> StatusBar {
        STATUS_BAR
    }

    pub fn clock(&self) -> &TestClock {
        &self.clock
    }

    pub fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn snapshot(&self) -> Option<InteractionSnapshot> {
        self.screen.snapshot()
    }

    /// Tree of the last frame, including any alert overlay.
    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Recompose and repaint. Mounts the screen if it is not mounted.
    pub fn redraw(&mut self) -> Result<&Frame> {
        let mut view = self.screen.compose();
        if let Some(alert) = self.alerts.front() {
            let alerts = self.alerts.clone();
            view = AlertDialog(view, &alert, move || {
                alerts.dismiss();
            });
        }
        self.frame = layout_and_paint(&view, self.config.window)
            .context("laying out the home screen")?;
        self.view = view;
        Ok(&self.frame)
    }

    /// Tap the control whose accessibility label (or text) is `label`.
    ///
    /// The tap lands at the control's centre, so an alert on top swallows it.
    /// Returns `false` if no such control is on screen or something else
    /// received the tap.
    pub fn tap_label(&mut self, label: &str) -> Result<bool> {
        let Some(target) = self.frame.hit_by_label(label) else {
            log::warn!("no control labelled {label:?}");
            return Ok(false);
        };
        let (id, pos) = (target.id, target.rect.center());
        let hit = self.tap_at(pos)?;
        Ok(hit == Some(id))
    }

    /// Tap at a window position. Returns the id of the region that took it.
    pub fn tap_at(&mut self, pos: Vec2) -> Result<Option<u64>> {
        let Some((id, on_click)) = self
            .frame
            .hit_at(pos)
            .and_then(|h| h.on_click.clone().map(|cb| (h.id, cb)))
        else {
            return Ok(None);
        };
        log::debug!("tap at ({:.0}, {:.0}) -> region {id}", pos.x, pos.y);
        on_click();
        self.redraw()?;
        Ok(Some(id))
    }

    /// Scroll the region under `pos` by `dy`. Returns the unconsumed part.
    pub fn scroll_at(&mut self, pos: Vec2, dy: f32) -> Result<f32> {
        let Some(on_scroll) = self.frame.scroll_at(pos).and_then(|h| h.on_scroll.clone()) else {
            return Ok(dy);
        };
        let leftover = on_scroll(Vec2 { x: 0.0, y: dy });
        self.redraw()?;
        Ok(leftover.y)
    }

    /// Scroll the main content area.
    pub fn scroll(&mut self, dy: f32) -> Result<f32> {
        let (w, h) = self.config.window;
        self.scroll_at(
            Vec2 {
                x: w as f32 / 2.0,
                y: h as f32 / 2.0,
            },
            dy,
        )
    }

    pub fn tap_counter(&mut self) -> Result<bool> {
        self.tap_label(strings::COUNTER_BUTTON)
    }

    pub fn tap_refresh(&mut self) -> Result<bool> {
        self.tap_label(strings::REFRESH_BUTTON)
    }

    /// Confirm the alert on screen. Returns it, if there was one.
    pub fn confirm_alert(&mut self) -> Result<Option<Alert>> {
        let Some(alert) = self.alerts.front() else {
            return Ok(None);
        };
        if self.tap_label(CONFIRM_LABEL)? {
            Ok(Some(alert))
        } else {
            Ok(None)
        }
    }

    /// Move virtual time forward by `d`, firing timers at their deadlines and
    /// painting a frame every `FRAME_INTERVAL` while the entrance animates.
    pub fn advance(&mut self, d: Duration) -> Result<()> {
        let end = self.clock.now() + d;
        loop {
            let now = self.clock.now();
            let mut next = end;
            if let Some(deadline) = self.timers.next_deadline() {
                next = next.min(deadline.max(now));
            }
            if self.screen.is_animating() {
                next = next.min(now + FRAME_INTERVAL);
            }
            self.clock.set(next);
            self.pump()?;
            if next >= end {
                return Ok(());
            }
        }
    }

    /// Run due timers and repaint.
    pub fn pump(&mut self) -> Result<usize> {
        let fired = self.timers.run_due();
        if self.screen.is_mounted() {
            self.redraw()?;
        }
        Ok(fired)
    }

    pub fn is_mounted(&self) -> bool {
        self.screen.is_mounted()
    }

    pub fn unmount(&mut self) {
        self.screen.unmount();
        self.view = bm_ui::Box(Modifier::new());
        self.frame = Frame::default();
    }

    /// Mount a fresh instance after `unmount`.
    pub fn mount(&mut self) -> Result<()> {
        self.redraw()?;
        Ok(())
    }
}
