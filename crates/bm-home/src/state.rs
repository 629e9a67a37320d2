//! Counter and refresh state owned by one mounted screen.
//!
//! Both handlers run synchronously on the UI thread. The refresh handler is a
//! two-state machine:
//!
//! ```text
//! Idle --tap--> Loading --1500ms--> Idle (+ "refresh done" alert)
//!               Loading --tap--> Loading (ignored)
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use bm_core::*;
use web_time::Duration;

use crate::strings;

pub const REFRESH_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshPhase {
    #[default]
    Idle,
    Loading,
}

/// What the view reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionSnapshot {
    pub counter: u64,
    pub is_loading: bool,
}

#[derive(Clone)]
pub struct InteractionState {
    counter: Signal<u64>,
    phase: Signal<RefreshPhase>,
    pending: Rc<RefCell<Option<TimerHandle>>>,
    timers: Timers,
    alerts: Rc<dyn AlertPresenter>,
}

impl InteractionState {
    pub fn new(timers: Timers, alerts: Rc<dyn AlertPresenter>) -> Self {
        Self {
            counter: signal(0),
            phase: signal(RefreshPhase::Idle),
            pending: Rc::new(RefCell::new(None)),
            timers,
            alerts,
        }
    }

    pub fn snapshot(&self) -> InteractionSnapshot {
        InteractionSnapshot {
            counter: self.counter.get(),
            is_loading: self.is_loading(),
        }
    }

    pub fn counter(&self) -> u64 {
        self.counter.get()
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase.get()
    }

    pub fn is_loading(&self) -> bool {
        self.phase.get() == RefreshPhase::Loading
    }

    /// Bump the counter and acknowledge with the new value.
    pub fn increment(&self) -> u64 {
        self.counter.update(|c| *c += 1);
        let n = self.counter.get();
        log::debug!("counter -> {n}");
        self.alerts.present(Alert::new(
            strings::COUNTER_ALERT_TITLE,
            strings::counter_alert_message(n),
        ));
        n
    }

    /// Start a refresh. Returns `false` if one is already running.
    pub fn refresh(&self) -> bool {
        if self.is_loading() {
            log::debug!("refresh ignored: already loading");
            return false;
        }
        self.phase.set(RefreshPhase::Loading);

        let phase = self.phase.clone();
        let alerts = self.alerts.clone();
        let pending = self.pending.clone();
        let handle = self.timers.schedule(REFRESH_DELAY, move || {
            pending.borrow_mut().take();
            phase.set(RefreshPhase::Idle);
            log::debug!("refresh finished");
            alerts.present(Alert::new(
                strings::REFRESH_ALERT_TITLE,
                strings::REFRESH_ALERT_MESSAGE,
            ));
        });
        log::debug!("refresh started (timer {})", handle.id());
        *self.pending.borrow_mut() = Some(handle);
        true
    }

    /// Cancel an in-flight refresh timer; the phase is left as is.
    pub fn cancel_pending(&self) -> bool {
        let Some(handle) = self.pending.borrow_mut().take() else {
            return false;
        };
        let cancelled = handle.cancel();
        if cancelled {
            log::debug!("refresh timer {} cancelled", handle.id());
        }
        cancelled
    }

    /// Called on every counter or phase change.
    pub fn on_change(&self, f: impl Fn() + 'static) {
        let f = Rc::new(f);
        let g = f.clone();
        self.counter.subscribe(move |_| f());
        self.phase.subscribe(move |_| g());
    }
}
