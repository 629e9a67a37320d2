use bm_core::*;

use crate::{Box, Button, Column, Row, Spacer, Stack, Text, TextStyleExt, ViewExt};

pub const CONFIRM_LABEL: &str = "OK";

/// Modal acknowledgment: a scrim over `content` with a centred card holding
/// the alert's title, message and a single confirm button.
pub fn AlertDialog(content: View, alert: &Alert, on_confirm: impl Fn() + 'static) -> View {
    let scrim = Column(
        Modifier::new()
            .fill_max_size()
            .background(Color::from_hex("#00000088"))
            .justify_content(JustifyContent::Center)
            .align_items(AlignItems::Center),
    )
    .semantics(Semantics::new(Role::Dialog).label(alert.title.clone()))
    .child(
        Column(
            Modifier::new()
                .width(280.0)
                .background(Color::WHITE)
                .rounded(14.0)
                .padding(20.0),
        )
        .child((
            Text(alert.title.clone())
                .size(17.0)
                .bold()
                .color(Color::BLACK)
                .centered(),
            Box(Modifier::new().height(8.0)),
            Text(alert.message.clone())
                .size(13.0)
                .color(Color::from_hex("#333333"))
                .centered(),
            Box(Modifier::new().height(16.0)),
            Row(Modifier::new()).child((
                Spacer(),
                Button(CONFIRM_LABEL, on_confirm)
                    .modifier(Modifier::new().padding(8.0))
                    .color(Color::from_hex("#007aff"))
                    .size(17.0)
                    .weight(FontWeight::SemiBold),
                Spacer(),
            )),
        )),
    );

    Stack(Modifier::new().fill_max_size()).child((content, scrim))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout_and_paint;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn dialog_blocks_taps_outside_its_button() {
        let under = Rc::new(Cell::new(0));
        let confirmed = Rc::new(Cell::new(0));

        let u = under.clone();
        let content = Column(Modifier::new().fill_max_size())
            .child(Button("below", move || u.set(u.get() + 1)));
        let c = confirmed.clone();
        let root = AlertDialog(content, &Alert::new("t", "m"), move || c.set(c.get() + 1));
        let frame = layout_and_paint(&root, (390, 844)).unwrap();

        let below = frame.hit_by_label("below").unwrap().rect.center();
        (frame.hit_at(below).unwrap().on_click.as_ref().unwrap())();
        assert_eq!(under.get(), 0);

        let ok = frame.hit_by_label(CONFIRM_LABEL).unwrap().rect.center();
        (frame.hit_at(ok).unwrap().on_click.as_ref().unwrap())();
        assert_eq!(confirmed.get(), 1);

        let texts: Vec<_> = frame.scene.texts().collect();
        assert_eq!(texts, vec!["below", "t", "m", CONFIRM_LABEL]);
    }

    #[test]
    fn dialog_consumes_scrolls() {
        let state = Rc::new(crate::ScrollState::new());
        let content = crate::ScrollArea(
            Modifier::new().fill_max_size(),
            state.clone(),
            Column(Modifier::new().height(2000.0)),
        );
        let root = AlertDialog(content, &Alert::new("t", "m"), || {});
        let frame = layout_and_paint(&root, (390, 844)).unwrap();

        let region = frame.scroll_at(Vec2 { x: 195.0, y: 422.0 }).unwrap();
        assert_eq!(region.label.as_deref(), Some("t"));
        let leftover = (region.on_scroll.as_ref().unwrap())(Vec2 { x: 0.0, y: 300.0 });
        assert_eq!(leftover, Vec2::default());
        assert_eq!(state.get(), 0.0);
    }
}
