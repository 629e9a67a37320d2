//! The home screen tree.
//!
//! `HomeScreen` is a pure function of its model: the same model always
//! yields a structurally identical tree. Taps only reach state through the
//! `Handlers` callbacks.

#![allow(non_snake_case)]

use std::rc::Rc;

use bm_core::*;
use bm_ui::*;

use crate::config::ScreenInputs;
use crate::entrance::EntranceFrame;
use crate::state::InteractionSnapshot;
use crate::strings;
use crate::theme;
use crate::token::format_token;

/// Everything the tree is a function of.
#[derive(Clone, Copy, Debug)]
pub struct HomeModel<'a> {
    pub props: &'a ScreenInputs,
    pub state: InteractionSnapshot,
    pub entrance: EntranceFrame,
    pub window: Size,
}

#[derive(Clone)]
pub struct Handlers {
    pub on_counter: Callback,
    pub on_refresh: Callback,
}

impl Handlers {
    pub fn noop() -> Self {
        Self {
            on_counter: Rc::new(|| {}),
            on_refresh: Rc::new(|| {}),
        }
    }
}

pub fn HomeScreen(model: &HomeModel, handlers: &Handlers, scroll: Rc<ScrollState>) -> View {
    let e = model.entrance;
    let content = Column(Modifier::new().padding_values(PaddingValues {
        left: 20.0,
        right: 20.0,
        top: 20.0,
        bottom: 40.0,
    }))
    .child((
        WelcomeCard(e),
        UserCard(model.props, e),
        InteractionCard(model.state.counter, e, handlers.on_counter.clone()),
        FeatureCard(model.window.width, e),
        Footer(),
    ));

    Surface(
        Modifier::new().fill_max_size().background(theme::BACKGROUND),
        Stack(Modifier::new().fill_max_size()).child((
            Backdrop(),
            Column(Modifier::new().fill_max_size()).child((
                Header(model.state.is_loading, e, handlers.on_refresh.clone()),
                ScrollArea(Modifier::new().flex_grow(1.0).flex_shrink(1.0), scroll, content),
            )),
        )),
    )
}

fn Backdrop() -> View {
    Box(Modifier::new()
        .fill_max_size()
        .background(theme::BACKGROUND_LAYER))
    .child(Box(Modifier::new()
        .absolute()
        .offset(Some(0.0), Some(0.0), Some(0.0), None)
        .height(theme::OVERLAY_HEIGHT)
        .background(theme::OVERLAY)
        .radii(CornerRadii::bottom(theme::OVERLAY_RADIUS))))
}

fn Header(is_loading: bool, e: EntranceFrame, on_refresh: Callback) -> View {
    let icon = if is_loading {
        strings::REFRESH_LOADING_ICON
    } else {
        strings::REFRESH_IDLE_ICON
    };

    Row(Modifier::new()
        .padding(20.0)
        .margin_bottom(10.0)
        .justify_content(JustifyContent::SpaceBetween)
        .align_items(AlignItems::Center)
        .alpha(e.opacity)
        .translate(0.0, e.offset_y))
    .child((
        Row(Modifier::new().align_items(AlignItems::Center)).child((
            Box(Modifier::new()
                .size(40.0, 40.0)
                .rounded(20.0)
                .background(theme::ACCENT)
                .shadow(theme::ACCENT, 4.0, 8.0, 0.3)
                .margin_right(12.0)
                .justify_content(JustifyContent::Center)
                .align_items(AlignItems::Center))
            .child(Text(strings::LOGO).size(18.0).bold()),
            Text(strings::TITLE).size(28.0).bold(),
        )),
        Button(icon, move || on_refresh())
            .semantics(Semantics::new(Role::Button).label(strings::REFRESH_BUTTON))
            .modifier(
                Modifier::new()
                    .padding_values(PaddingValues::symmetric(16.0, 12.0))
                    .rounded(25.0)
                    .background(theme::HEADER_BUTTON)
                    .border(1.0, theme::HEADER_BUTTON_BORDER),
            )
            .size(18.0)
            .weight(FontWeight::SemiBold),
    ))
}

fn card(e: EntranceFrame) -> Modifier {
    Modifier::new()
        .background(theme::CARD)
        .rounded(16.0)
        .padding(20.0)
        .margin_bottom(16.0)
        .shadow(theme::SHADOW, 4.0, 8.0, 0.1)
        .alpha(e.opacity)
        .translate(0.0, e.offset_y)
}

fn CardHeader(icon: &str, title: &str) -> View {
    Row(Modifier::new()
        .align_items(AlignItems::Center)
        .margin_bottom(16.0))
    .child((
        Text(icon)
            .size(24.0)
            .modifier(Modifier::new().margin_right(12.0)),
        Text(title).size(20.0).bold().color(theme::INK),
    ))
}

fn WelcomeCard(e: EntranceFrame) -> View {
    Column(Modifier::new()
        .background(theme::CARD)
        .rounded(20.0)
        .padding(25.0)
        .margin_bottom(20.0)
        .align_items(AlignItems::Center)
        .shadow(theme::SHADOW, 8.0, 12.0, 0.15)
        .alpha(e.opacity)
        .scale(e.scale))
    .child((
        Text(strings::WELCOME_TITLE)
            .size(24.0)
            .bold()
            .color(theme::INK)
            .centered()
            .modifier(Modifier::new().margin_bottom(8.0)),
        Text(strings::WELCOME_SUBTITLE)
            .size(16.0)
            .color(theme::MUTED)
            .centered()
            .line_height(22.0),
        Box(Modifier::new().margin_top(15.0)).child(Text(strings::WELCOME_DECORATION).size(32.0)),
    ))
}

fn InfoRow(label: &str, value: &str) -> View {
    Column(Modifier::new()).child((
        Row(Modifier::new()
            .padding_values(PaddingValues::symmetric(0.0, 8.0))
            .justify_content(JustifyContent::SpaceBetween)
            .align_items(AlignItems::Center))
        .child((
            Text(label).color(theme::MUTED).weight(FontWeight::Medium),
            Text(value)
                .color(theme::INK)
                .weight(FontWeight::SemiBold)
                .monospace(),
        )),
        Box(Modifier::new().height(1.0).background(theme::DIVIDER)),
    ))
}

fn UserCard(props: &ScreenInputs, e: EntranceFrame) -> View {
    Column(card(e)).child((
        CardHeader(strings::USER_CARD_ICON, strings::USER_CARD_TITLE),
        InfoRow(strings::USER_ID_LABEL, &props.user_id),
        InfoRow(strings::TOKEN_LABEL, &format_token(&props.token)),
    ))
}

fn InteractionCard(counter: u64, e: EntranceFrame, on_counter: Callback) -> View {
    let active = counter > 0;
    let mut button = Modifier::new()
        .padding_values(PaddingValues::symmetric(32.0, 16.0))
        .rounded(12.0)
        .align_self_center()
        .background(if active {
            theme::ACCENT_ACTIVE
        } else {
            theme::ACCENT
        })
        .shadow(theme::ACCENT, 4.0, 8.0, 0.3);
    if active {
        button = button.scale(theme::ACTIVE_SCALE);
    }

    Column(card(e)).child((
        CardHeader(strings::INTERACTION_CARD_ICON, strings::INTERACTION_CARD_TITLE),
        Column(Modifier::new()
            .align_items(AlignItems::Center)
            .margin_bottom(20.0))
        .child((
            Text(strings::COUNTER_LABEL)
                .color(theme::MUTED)
                .modifier(Modifier::new().margin_bottom(8.0)),
            Text(counter.to_string())
                .size(32.0)
                .bold()
                .color(theme::ACCENT),
        )),
        Button(strings::counter_button_text(counter), move || on_counter())
            .semantics(Semantics::new(Role::Button).label(strings::COUNTER_BUTTON))
            .modifier(button)
            .size(18.0)
            .weight(FontWeight::SemiBold)
            .centered(),
    ))
}

fn FeatureCard(window_width: f32, e: EntranceFrame) -> View {
    let item_width = ((window_width - theme::FEATURE_GRID_INSET) / 2.0).max(0.0);
    let items: Vec<View> = strings::FEATURES
        .iter()
        .map(|name| {
            Row(Modifier::new()
                .width(item_width)
                .align_items(AlignItems::Center)
                .margin_bottom(12.0)
                .padding_values(PaddingValues::symmetric(0.0, 8.0)))
            .child((
                Text(strings::FEATURE_MARK)
                    .size(18.0)
                    .modifier(Modifier::new().margin_right(8.0)),
                Text(*name)
                    .size(14.0)
                    .weight(FontWeight::Medium)
                    .color(theme::MUTED),
            ))
        })
        .collect();

    Column(card(e)).child((
        CardHeader(strings::FEATURE_CARD_ICON, strings::FEATURE_CARD_TITLE),
        Row(Modifier::new()
            .flex_wrap(FlexWrap::Wrap)
            .justify_content(JustifyContent::SpaceBetween))
        .child(items),
    ))
}

fn Footer() -> View {
    Column(Modifier::new()
        .align_items(AlignItems::Center)
        .margin_top(20.0)
        .padding_values(PaddingValues::symmetric(0.0, 20.0)))
    .child(
        Text(strings::FOOTER)
            .size(14.0)
            .italic()
            .color(theme::FOOTER_TEXT),
    )
}
