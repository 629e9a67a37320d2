use bm_home::entrance::{FADE_DURATION, SCALE_DURATION, SLIDE_DURATION};
use bm_home::{EntranceFrame, Host, HostConfig, ScreenInputs};
use web_time::Duration;

fn host() -> Host {
    Host::new(HostConfig::default()).unwrap()
}

fn texts(host: &Host) -> Vec<String> {
    host.frame().scene.texts().map(str::to_string).collect()
}

#[test]
fn initial_frame() {
    let host = host();
    let s = host.snapshot().unwrap();
    assert_eq!(s.counter, 0);
    assert!(!s.is_loading);

    let view = host.view();
    assert!(view.find_button("🎯 开始点击").is_some());
    assert!(view.find_text("12345678").is_some());
    assert!(view.find_text("secretToken").is_some());
    assert!(host.alerts().is_empty());
    assert!(texts(&host).iter().any(|t| t == "BM-ReactNative"));
}

#[test]
fn counter_taps_acknowledge_each_new_value() {
    let mut host = host();
    for n in 1..=3u64 {
        assert!(host.tap_counter().unwrap());
        let alert = host.alerts().front().unwrap();
        assert_eq!(alert.title, "🎉 点击成功");
        assert_eq!(alert.message, format!("计数器: {n}"));
        assert_eq!(host.confirm_alert().unwrap(), Some(alert));
    }
    assert_eq!(host.snapshot().unwrap().counter, 3);
    assert!(host.view().find_button("🎯 继续点击 (3)").is_some());
    assert!(host.alerts().is_empty());
}

#[test]
fn open_alert_blocks_the_screen() {
    let mut host = host();
    host.tap_counter().unwrap();
    assert!(!host.tap_counter().unwrap());
    assert_eq!(host.snapshot().unwrap().counter, 1);
    assert_eq!(host.alerts().len(), 1);
}

#[test]
fn refresh_cycle() {
    let mut host = host();
    assert!(host.tap_refresh().unwrap());
    assert!(host.snapshot().unwrap().is_loading);
    assert!(host.view().find_button("🔄").is_some());

    host.advance(Duration::from_millis(1499)).unwrap();
    assert!(host.snapshot().unwrap().is_loading);
    assert!(host.alerts().is_empty());

    host.advance(Duration::from_millis(1)).unwrap();
    assert!(!host.snapshot().unwrap().is_loading);
    let alerts = host.alerts().snapshot();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "🔄 刷新完成");
    assert_eq!(alerts[0].message, "页面已更新！");
    assert!(host.view().find_button("⚙️").is_some());
}

#[test]
fn refresh_taps_while_loading_are_ignored() {
    let mut host = host();
    host.tap_refresh().unwrap();
    host.advance(Duration::from_millis(700)).unwrap();
    host.tap_refresh().unwrap();
    assert_eq!(host.timers().len(), 1);

    host.advance(Duration::from_millis(3000)).unwrap();
    assert_eq!(host.alerts().len(), 1);
}

#[test]
fn unmount_while_loading_cancels_the_timer() {
    let mut host = host();
    host.tap_refresh().unwrap();
    host.unmount();
    assert!(host.timers().is_empty());

    host.advance(Duration::from_millis(2000)).unwrap();
    assert!(host.alerts().is_empty());
    assert!(!host.is_mounted());

    host.mount().unwrap();
    let s = host.snapshot().unwrap();
    assert_eq!((s.counter, s.is_loading), (0, false));
}

#[test]
fn entrance_runs_once_and_ends() {
    let mut host = host();
    assert_eq!(host.screen().entrance(), EntranceFrame::START);
    assert!(host.screen().is_animating());

    host.advance(SCALE_DURATION).unwrap();
    let mid = host.screen().entrance();
    assert_eq!(mid.scale, 1.0);
    assert!(mid.opacity < 1.0);

    // a tap mid-animation must not restart anything
    host.tap_counter().unwrap();
    host.confirm_alert().unwrap();
    let after_tap = host.screen().entrance();
    assert!(after_tap.opacity >= mid.opacity);
    assert!(after_tap.offset_y <= mid.offset_y);

    host.advance(FADE_DURATION - SCALE_DURATION).unwrap();
    assert_eq!(host.screen().entrance(), EntranceFrame::END);
    assert!(!host.screen().is_animating());
    assert!(SLIDE_DURATION < FADE_DURATION);
}

#[test]
fn entrance_values_move_monotonically() {
    let mut host = host();
    let mut prev = host.screen().entrance();
    for _ in 0..80 {
        host.advance(Duration::from_millis(13)).unwrap();
        let f = host.screen().entrance();
        assert!(f.opacity >= prev.opacity);
        assert!(f.offset_y <= prev.offset_y);
        assert!(f.scale >= prev.scale);
        prev = f;
    }
    assert_eq!(prev, EntranceFrame::END);
}

#[test]
fn reduced_motion_starts_at_the_end() {
    let host = Host::new(HostConfig {
        animations: false,
        ..HostConfig::default()
    })
    .unwrap();
    assert_eq!(host.screen().entrance(), EntranceFrame::END);
    assert!(!host.screen().is_animating());
}

#[test]
fn long_tokens_are_shortened_on_screen() {
    let host = Host::new(HostConfig {
        props: ScreenInputs {
            user_id: "u-42".into(),
            token: "0123456789abcdefghijKLMNOPQRST".into(),
        },
        ..HostConfig::default()
    })
    .unwrap();
    assert!(host.view().find_text("u-42").is_some());
    assert!(texts(&host).iter().any(|t| t == "0123456789...KLMNOPQRST"));
}

#[test]
fn rerender_without_changes_is_structurally_identical() {
    let mut host = Host::new(HostConfig {
        animations: false,
        ..HostConfig::default()
    })
    .unwrap();
    let before = host.view().clone();
    host.pump().unwrap();
    assert!(before.structurally_eq(host.view()));
}

#[test]
fn content_scrolls_within_bounds() {
    let mut host = host();
    let leftover = host.scroll(10_000.0).unwrap();
    assert!(leftover > 0.0);
    let back = host.scroll(-20_000.0).unwrap();
    assert!(back < 0.0);
}

#[test]
fn open_alert_holds_the_content_still() {
    let mut host = host();
    host.tap_counter().unwrap();
    assert_eq!(host.scroll(300.0).unwrap(), 0.0);

    host.confirm_alert().unwrap();
    // still at the top: scrolling up is entirely left over
    assert_eq!(host.scroll(-100.0).unwrap(), -100.0);
}

#[test]
fn flag_user_ids_render_as_one_line() {
    let host = Host::new(HostConfig {
        props: ScreenInputs {
            user_id: "🇨🇳🇨🇳".into(),
            token: "secretToken".into(),
        },
        ..HostConfig::default()
    })
    .unwrap();
    assert!(texts(&host).iter().any(|t| t == "🇨🇳🇨🇳"));
}
