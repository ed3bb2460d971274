//! Text input and button components
//!
//! Field contents live in the controller; these only draw a field and route
//! clicks to focus it.

use crate::app::TickerboardApp;
use crate::theme::Theme;
use gpui::prelude::FluentBuilder;
use gpui::*;
use tickerboard_core::input::{FieldId, TextField};

pub fn text_input(
    theme: &Theme,
    id: FieldId,
    field: &TextField,
    focused: bool,
    width: Pixels,
    cx: &mut Context<TickerboardApp>,
) -> impl IntoElement {
    let border_color = if focused { theme.accent } else { theme.border };
    let (text, text_color) = if field.is_empty() {
        (id.placeholder().to_string(), theme.text_dimmed)
    } else {
        (field.value().to_string(), theme.text)
    };

    div()
        .id(SharedString::from(format!("field-{:?}", id)))
        .w(width)
        .h(px(40.0))
        .px(px(12.0))
        .rounded(px(6.0))
        .bg(theme.card_bg_elevated)
        .border_1()
        .border_color(border_color)
        .flex()
        .items_center()
        .gap(px(1.0))
        .cursor_text()
        .on_click(cx.listener(move |this, _event, window, cx| {
            this.focus_field(id, window, cx);
        }))
        .when(focused && field.is_empty(), |el| el.child(caret(theme)))
        .child(div().text_size(px(13.0)).text_color(text_color).child(text))
        .when(focused && !field.is_empty(), |el| el.child(caret(theme)))
}

fn caret(theme: &Theme) -> impl IntoElement {
    div().w(px(1.5)).h(px(18.0)).bg(theme.accent)
}

/// Primary action button; the caller attaches the click handler
pub fn action_button(theme: &Theme, id: &'static str, label: &'static str) -> Stateful<Div> {
    div()
        .id(id)
        .h(px(40.0))
        .px(px(20.0))
        .rounded(px(6.0))
        .bg(theme.accent)
        .flex()
        .items_center()
        .text_size(px(13.0))
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(hsla(0.0, 0.0, 1.0, 0.95))
        .cursor_pointer()
        .hover(|s| s.bg(theme.accent_hover))
        .child(label)
}
