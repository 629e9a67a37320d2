use bm_core::*;
use web_time::Duration;

pub const FADE_DURATION: Duration = Duration::from_millis(1000);
pub const SLIDE_DURATION: Duration = Duration::from_millis(800);
pub const SCALE_DURATION: Duration = Duration::from_millis(600);

/// Entrance values sampled for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceFrame {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl EntranceFrame {
    pub const START: EntranceFrame = EntranceFrame {
        opacity: 0.0,
        offset_y: 50.0,
        scale: 0.8,
    };
    pub const END: EntranceFrame = EntranceFrame {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };
}

/// Fade, slide and scale transitions played once when the screen mounts.
///
/// The three values share a start instant but are otherwise independent.
/// `start` is idempotent; nothing reverses or restarts them.
pub struct Entrance {
    opacity: AnimatedValue<f32>,
    offset_y: AnimatedValue<f32>,
    scale: AnimatedValue<f32>,
    started: bool,
}

impl Default for Entrance {
    fn default() -> Self {
        Self::new()
    }
}

impl Entrance {
    pub fn new() -> Self {
        let s = EntranceFrame::START;
        let tween = |d| AnimationSpec::tween(d, Easing::EaseInOut);
        Self {
            opacity: AnimatedValue::new(s.opacity, tween(FADE_DURATION)),
            offset_y: AnimatedValue::new(s.offset_y, tween(SLIDE_DURATION)),
            scale: AnimatedValue::new(s.scale, tween(SCALE_DURATION)),
            started: false,
        }
    }

    /// Start all three transitions, or jump to their end values when
    /// `animate` is false.
    pub fn start(&mut self, animate: bool) {
        if self.started {
            return;
        }
        self.started = true;

        let e = EntranceFrame::END;
        if animate {
            self.opacity.set_target(e.opacity);
            self.offset_y.set_target(e.offset_y);
            self.scale.set_target(e.scale);
            log::debug!("entrance animation started");
        } else {
            self.opacity.snap_to(e.opacity);
            self.offset_y.snap_to(e.offset_y);
            self.scale.snap_to(e.scale);
            log::debug!("animations disabled; entrance snapped to end state");
        }
    }

    /// Advance to the clock's current time. Returns `true` while any value is
    /// still moving.
    pub fn tick(&mut self) -> bool {
        let a = self.opacity.update();
        let b = self.offset_y.update();
        let c = self.scale.update();
        a || b || c
    }

    pub fn frame(&self) -> EntranceFrame {
        EntranceFrame {
            opacity: *self.opacity.get(),
            offset_y: *self.offset_y.get(),
            scale: *self.scale.get(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_running(&self) -> bool {
        self.opacity.is_animating() || self.offset_y.is_animating() || self.scale.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_run_to_their_ends_independently() {
        let clock = TestClock::new();
        set_clock(clock.clone());
        let mut e = Entrance::new();
        e.start(true);
        assert!(e.tick());
        assert_eq!(e.frame(), EntranceFrame::START);

        clock.advance(SCALE_DURATION);
        assert!(e.tick());
        let f = e.frame();
        assert_eq!(f.scale, 1.0);
        assert!(f.opacity > 0.0 && f.opacity < 1.0);
        assert!(f.offset_y > 0.0 && f.offset_y < 50.0);

        clock.advance(FADE_DURATION - SCALE_DURATION);
        assert!(!e.tick());
        assert_eq!(e.frame(), EntranceFrame::END);
        assert!(!e.is_running());
    }

    #[test]
    fn values_are_monotonic() {
        let clock = TestClock::new();
        set_clock(clock.clone());
        let mut e = Entrance::new();
        e.start(true);

        let mut prev = e.frame();
        for _ in 0..70 {
            clock.advance(Duration::from_millis(16));
            e.tick();
            let f = e.frame();
            assert!(f.opacity >= prev.opacity);
            assert!(f.offset_y <= prev.offset_y);
            assert!(f.scale >= prev.scale);
            prev = f;
        }
        assert_eq!(prev, EntranceFrame::END);
    }

    #[test]
    fn second_start_does_not_restart() {
        let clock = TestClock::new();
        set_clock(clock.clone());
        let mut e = Entrance::new();
        e.start(true);
        clock.advance(Duration::from_millis(700));
        e.tick();
        let mid = e.frame();

        e.start(true);
        e.tick();
        assert_eq!(e.frame(), mid);
    }

    #[test]
    fn disabled_animations_show_end_state_at_once() {
        let mut e = Entrance::new();
        e.start(false);
        assert!(!e.tick());
        assert_eq!(e.frame(), EntranceFrame::END);
    }
}
