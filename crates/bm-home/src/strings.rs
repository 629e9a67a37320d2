//! Every user-visible string on the screen.

pub const LOGO: &str = "BM";
pub const TITLE: &str = "BM-ReactNative";
pub const REFRESH_IDLE_ICON: &str = "⚙️";
pub const REFRESH_LOADING_ICON: &str = "🔄";

pub const WELCOME_TITLE: &str = "🚀 欢迎使用 BM-ReactNative";
pub const WELCOME_SUBTITLE: &str = "这是一个集成在 Android 应用中的 React Native 页面";
pub const WELCOME_DECORATION: &str = "✨";

pub const USER_CARD_ICON: &str = "👤";
pub const USER_CARD_TITLE: &str = "用户信息";
pub const USER_ID_LABEL: &str = "用户ID:";
pub const TOKEN_LABEL: &str = "Token:";

pub const INTERACTION_CARD_ICON: &str = "🎯";
pub const INTERACTION_CARD_TITLE: &str = "交互测试";
pub const COUNTER_LABEL: &str = "点击次数:";
pub const COUNTER_START: &str = "🎯 开始点击";

pub const FEATURE_CARD_ICON: &str = "⭐";
pub const FEATURE_CARD_TITLE: &str = "功能特性";
pub const FEATURE_MARK: &str = "✅";
pub const FEATURES: [&str; 6] = ["原生集成", "组件化", "离线加载", "数据传递", "响应式UI", "动画效果"];

pub const FOOTER: &str = "Made with ❤️ by React Native";

pub const COUNTER_ALERT_TITLE: &str = "🎉 点击成功";
pub const REFRESH_ALERT_TITLE: &str = "🔄 刷新完成";
pub const REFRESH_ALERT_MESSAGE: &str = "页面已更新！";

/// Accessibility labels the host addresses buttons by.
pub const COUNTER_BUTTON: &str = "counter";
pub const REFRESH_BUTTON: &str = "refresh";

pub fn counter_button_text(counter: u64) -> String {
    if counter == 0 {
        COUNTER_START.to_string()
    } else {
        format!("🎯 继续点击 ({counter})")
    }
}

pub fn counter_alert_message(counter: u64) -> String {
    format!("计数器: {counter}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_label_switches_after_first_tap() {
        assert_eq!(counter_button_text(0), "🎯 开始点击");
        assert_eq!(counter_button_text(3), "🎯 继续点击 (3)");
        assert_eq!(counter_alert_message(1), "计数器: 1");
    }
}
