use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::{Duration, Instant};

thread_local! {
    static CLOCK: RefCell<Rc<dyn Clock>> = RefCell::new(Rc::new(SystemClock));
}

/// Current time on this thread's animation clock.
pub fn now() -> Instant {
    CLOCK.with(|c| c.borrow().now())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Ease-in-out tween of `ms` milliseconds, the platform's default timing curve.
    pub fn timing(ms: u64) -> Self {
        Self::tween(Duration::from_millis(ms), Easing::EaseInOut)
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Install the animation clock for the current thread. Hosts install
/// `SystemClock` (the default); tests install a `TestClock`.
pub fn set_clock(clock: impl Clock) {
    CLOCK.with(|c| *c.borrow_mut() = Rc::new(clock));
}

/// A clock you can drive deterministically. Clones share the same time.
#[derive(Clone)]
pub struct TestClock {
    t: Rc<Cell<Instant>>,
}

impl TestClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(t: Instant) -> Self {
        Self {
            t: Rc::new(Cell::new(t)),
        }
    }

    pub fn advance(&self, d: Duration) {
        self.t.set(self.t.get() + d);
    }

    pub fn set(&self, t: Instant) {
        self.t.set(t);
    }
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

/// Value that transitions from its current value to a target over an
/// `AnimationSpec`. Call `update` once per frame.
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    pub fn set_target(&mut self, target: T) {
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(now());
    }

    /// Jump straight to `target` without animating.
    pub fn snap_to(&mut self, target: T) {
        self.current = target.clone();
        self.start = target.clone();
        self.target = target;
        self.start_time = None;
    }

    /// Advance to the clock's current time. Returns `true` while still animating.
    pub fn update(&mut self) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = now().saturating_duration_since(start);

        if elapsed >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }

        let t = elapsed.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased_t = self.spec.easing.interpolate(t);
        self.current = self.start.interpolate(&self.target, eased_t);

        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}
