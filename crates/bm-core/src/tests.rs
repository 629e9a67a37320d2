#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::animation::*;
    use crate::scope::*;
    use crate::*;
    use web_time::{Duration, Instant};

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription_sees_new_value() {
        let sig = signal(0);
        let seen = Rc::new(Cell::new(-1));

        let seen_clone = seen.clone();
        let sig_clone = sig.clone();
        sig.subscribe(move |v| {
            assert_eq!(sig_clone.get(), *v);
            seen_clone.set(*v);
        });

        sig.set(42);
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn test_signal_subscriber_can_write_back() {
        let sig = signal(0);
        let sig_clone = sig.clone();
        sig.subscribe(move |v| {
            if *v > 10 {
                sig_clone.set(10);
            }
        });

        sig.set(25);
        assert_eq!(sig.get(), 10);
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_scope_children_dispose_first() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let scope = Scope::new();
        let child = scope.child();

        let o = order.clone();
        scope.add_disposer(move || o.borrow_mut().push("parent"));
        let o = order.clone();
        child.add_disposer(move || o.borrow_mut().push("child"));

        scope.dispose();
        assert_eq!(*order.borrow(), vec!["child", "parent"]);
    }

    #[test]
    fn test_key_based_remember_persists_across_passes() {
        let mut composition = Composition::new();
        let val1 = composition.compose(|| remember_with_key("test", || 42));
        let val2 = composition.compose(|| remember_with_key("test", || 100));

        assert_eq!(*val1, 42);
        assert_eq!(*val2, 42);
        assert!(Rc::ptr_eq(&val1, &val2));
    }

    #[test]
    fn test_slot_remember_is_order_based() {
        let mut composition = Composition::new();
        let pass = |c: &mut Composition| {
            c.compose(|| {
                let a = remember(|| 1);
                let b = remember(|| String::from("b"));
                (a, b)
            })
        };
        let (a1, b1) = pass(&mut composition);
        let (a2, b2) = pass(&mut composition);
        assert!(Rc::ptr_eq(&a1, &a2));
        assert!(Rc::ptr_eq(&b1, &b2));
    }

    #[test]
    fn test_remember_inside_init() {
        let mut composition = Composition::new();
        let outer = composition.compose(|| remember(|| *remember(|| 7) + 1));
        assert_eq!(*outer, 8);
    }

    #[test]
    fn test_unmount_runs_cleanup_and_forgets_slots() {
        let cleaned = Rc::new(Cell::new(0));
        let mut composition = Composition::new();

        let mount = |c: &mut Composition, cleaned: Rc<Cell<i32>>| {
            c.compose(move || {
                launched_effect("mount", move || {
                    on_unmount(move || cleaned.set(cleaned.get() + 1))
                });
                remember_with_key("value", || Cell::new(0))
            })
        };

        let first = mount(&mut composition, cleaned.clone());
        first.set(5);
        mount(&mut composition, cleaned.clone());
        assert_eq!(cleaned.get(), 0);

        composition.unmount();
        assert_eq!(cleaned.get(), 1);
        assert!(!composition.is_mounted());

        let fresh = mount(&mut composition, cleaned.clone());
        assert_eq!(fresh.get(), 0);
    }

    #[test]
    fn test_launched_effect_runs_once_per_mount() {
        let runs = Rc::new(Cell::new(0));
        let mut composition = Composition::new();
        for _ in 0..3 {
            let runs = runs.clone();
            composition.compose(move || {
                launched_effect("once", move || {
                    runs.set(runs.get() + 1);
                    Dispose::noop()
                })
            });
        }
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_dispose_runs_at_most_once() {
        let n = Rc::new(Cell::new(0));
        let n2 = n.clone();
        let d = Dispose::new(move || n2.set(n2.get() + 1));
        d.run();
        d.run();
        assert_eq!(n.get(), 1);
        assert!(d.is_spent());
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#zz"), Color::BLACK);
        assert_eq!(Color::rgba_f(255, 255, 255, 0.95), Color(255, 255, 255, 242));
        assert_eq!(Color::from_hex("#1a1a2e").to_hex(), "#1a1a2e");
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = TestClock::starting_at(Instant::now());
        set_clock(clock.clone());

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);

        clock.advance(Duration::from_millis(250));
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        let cont = a.update();
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_ease_in_out_is_monotonic() {
        let mut prev = Easing::EaseInOut.interpolate(0.0);
        for i in 1..=100 {
            let v = Easing::EaseInOut.interpolate(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
        assert!((prev - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_snap_to_skips_animation() {
        let mut a = AnimatedValue::new(0.8f32, AnimationSpec::timing(600));
        a.snap_to(1.0);
        assert!(!a.is_animating());
        assert!(!a.update());
        assert_eq!(*a.get(), 1.0);
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let clock = TestClock::new();
        set_clock(clock.clone());
        let timers = Timers::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (name, ms) in [("late", 30u64), ("early", 10), ("tie-a", 20), ("tie-b", 20)] {
            let log = log.clone();
            timers.schedule(Duration::from_millis(ms), move || log.borrow_mut().push(name));
        }

        clock.advance(Duration::from_millis(19));
        assert_eq!(timers.run_due(), 1);
        clock.advance(Duration::from_millis(20));
        assert_eq!(timers.run_due(), 3);
        assert_eq!(*log.borrow(), vec!["early", "tie-a", "tie-b", "late"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_timer_cancel() {
        let clock = TestClock::new();
        set_clock(clock.clone());
        let timers = Timers::new();
        let fired = Rc::new(Cell::new(false));

        let f = fired.clone();
        let handle = timers.schedule(Duration::from_millis(5), move || f.set(true));
        assert!(handle.is_pending());
        assert!(handle.cancel());
        assert!(!handle.cancel());

        clock.advance(Duration::from_millis(10));
        assert_eq!(timers.run_due(), 0);
        assert!(!fired.get());
    }

    #[test]
    fn test_timer_task_can_rearm() {
        let clock = TestClock::new();
        set_clock(clock.clone());
        let timers = Timers::new();
        let count = Rc::new(Cell::new(0));

        let t = timers.clone();
        let c = count.clone();
        timers.schedule(Duration::from_millis(10), move || {
            c.set(c.get() + 1);
            let c = c.clone();
            t.schedule(Duration::from_millis(10), move || c.set(c.get() + 1));
        });

        clock.advance(Duration::from_millis(10));
        assert_eq!(timers.run_due(), 1);
        assert_eq!(timers.len(), 1);
        clock.advance(Duration::from_millis(10));
        assert_eq!(timers.run_due(), 1);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_alert_queue_fifo() {
        let q = AlertQueue::new();
        q.present(Alert::new("a", "1"));
        q.present(Alert::new("b", "2"));
        assert_eq!(q.front(), Some(Alert::new("a", "1")));
        assert_eq!(q.dismiss(), Some(Alert::new("a", "1")));
        assert_eq!(q.front(), Some(Alert::new("b", "2")));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_structural_equality_ignores_callbacks() {
        let a = View::new(
            1,
            ViewKind::Button {
                text: "go".into(),
                style: TextStyle::default(),
                on_click: Some(Rc::new(|| {})),
            },
        );
        let b = View::new(
            2,
            ViewKind::Button {
                text: "go".into(),
                style: TextStyle::default(),
                on_click: None,
            },
        );
        assert!(a.structurally_eq(&b));
        let c = b.clone().modifier(Modifier::new().alpha(0.5));
        assert!(!a.structurally_eq(&c));
    }
}
