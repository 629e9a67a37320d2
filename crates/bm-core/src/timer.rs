//! Single-threaded deferred work.
//!
//! `Timers` is the one place a screen can park work for later. Deadlines are
//! measured on the animation clock (`animation::now`), so the same `TestClock`
//! that drives animations in tests also drives timers. Nothing runs until the
//! host calls `run_due`, which keeps every callback on the UI thread's event
//! queue, in deadline order.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use web_time::{Duration, Instant};

use crate::animation::now;

pub type TimerId = u64;

struct Pending {
    id: TimerId,
    deadline: Instant,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct TimersInner {
    next_id: TimerId,
    // sorted by (deadline, id)
    pending: Vec<Pending>,
}

#[derive(Clone, Default)]
pub struct Timers {
    inner: Rc<RefCell<TimersInner>>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a one-shot task `delay` from now.
    pub fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static) -> TimerHandle {
        let deadline = now() + delay;
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        let at = inner
            .pending
            .partition_point(|p| (p.deadline, p.id) <= (deadline, id));
        inner.pending.insert(
            at,
            Pending {
                id,
                deadline,
                task: Box::new(task),
            },
        );
        log::trace!("timer {id} armed for {delay:?}");
        TimerHandle {
            id,
            timers: Rc::downgrade(&self.inner),
        }
    }

    pub fn cancel(&self, id: TimerId) -> bool {
        cancel_in(&self.inner, id)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.borrow().pending.first().map(|p| p.deadline)
    }

    /// Run every task whose deadline has passed, earliest first. Tasks may arm
    /// or cancel timers; the queue is not borrowed while a task runs. Returns
    /// the number of tasks run.
    pub fn run_due(&self) -> usize {
        let now = now();
        let mut ran = 0;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                match inner.pending.first() {
                    Some(p) if p.deadline <= now => Some(inner.pending.remove(0)),
                    _ => None,
                }
            };
            let Some(p) = next else { break };
            log::trace!("timer {} fired", p.id);
            (p.task)();
            ran += 1;
        }
        ran
    }
}

fn cancel_in(inner: &RefCell<TimersInner>, id: TimerId) -> bool {
    let mut inner = inner.borrow_mut();
    match inner.pending.iter().position(|p| p.id == id) {
        Some(i) => {
            inner.pending.remove(i);
            log::trace!("timer {id} canceled");
            true
        }
        None => false,
    }
}

/// Handle to one armed task. Dropping the handle does not cancel the task.
#[derive(Clone, Debug)]
pub struct TimerHandle {
    id: TimerId,
    timers: Weak<RefCell<TimersInner>>,
}

impl TimerHandle {
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Returns `true` if the task was still pending.
    pub fn cancel(&self) -> bool {
        self.timers
            .upgrade()
            .is_some_and(|inner| cancel_in(&inner, self.id))
    }

    pub fn is_pending(&self) -> bool {
        self.timers.upgrade().is_some_and(|inner| {
            inner.borrow().pending.iter().any(|p| p.id == self.id)
        })
    }
}
