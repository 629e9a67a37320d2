use bm_core::Color;

pub const BACKGROUND: Color = Color::from_rgb(0x1a, 0x1a, 0x2e);
pub const BACKGROUND_LAYER: Color = Color::from_rgb(0x16, 0x21, 0x3e);
pub const OVERLAY: Color = Color::from_rgb(0x0f, 0x34, 0x60);
pub const OVERLAY_HEIGHT: f32 = 200.0;
pub const OVERLAY_RADIUS: f32 = 30.0;

pub const ACCENT: Color = Color::from_rgb(0xe9, 0x45, 0x60);
pub const ACCENT_ACTIVE: Color = Color::from_rgb(0xd6, 0x33, 0x84);
pub const ACTIVE_SCALE: f32 = 1.05;

pub const CARD: Color = Color::from_rgba(255, 255, 255, 242);
pub const INK: Color = Color::from_rgb(0x1a, 0x1a, 0x2e);
pub const MUTED: Color = Color::from_rgb(0x6c, 0x75, 0x7d);
pub const DIVIDER: Color = Color::from_rgb(0xf0, 0xf0, 0xf0);
pub const SHADOW: Color = Color::BLACK;

pub const HEADER_BUTTON: Color = Color::from_rgba(255, 255, 255, 51);
pub const HEADER_BUTTON_BORDER: Color = Color::from_rgba(255, 255, 255, 77);
pub const FOOTER_TEXT: Color = Color::from_rgba(255, 255, 255, 153);

/// Horizontal space the feature grid loses to scroll and card padding.
pub const FEATURE_GRID_INSET: f32 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarStyle {
    LightContent,
    DarkContent,
}

/// Status-bar appearance the host should forward to platform chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBar {
    pub style: BarStyle,
    pub background: Color,
}

impl StatusBar {
    /// Bar over `background`: light icons on dark colours, dark icons otherwise.
    pub const fn over(background: Color) -> Self {
        let Color(r, g, b, _) = background;
        let luma = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
        let style = if luma < 128 {
            BarStyle::LightContent
        } else {
            BarStyle::DarkContent
        };
        Self { style, background }
    }
}

pub const STATUS_BAR: StatusBar = StatusBar::over(BACKGROUND);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bar_contrasts_with_its_background() {
        assert_eq!(STATUS_BAR.style, BarStyle::LightContent);
        assert_eq!(STATUS_BAR.background, BACKGROUND);
        assert_eq!(StatusBar::over(Color::WHITE).style, BarStyle::DarkContent);
    }
}
