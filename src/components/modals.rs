//! Modal dialogs
//!
//! Only the blocking alert is needed: it covers the window until dismissed
//! with the OK button, Enter or Escape.

use crate::app::TickerboardApp;
use crate::theme::Theme;
use gpui::*;

/// Base modal container
pub fn modal_container(theme: &Theme, width: Pixels, content: impl IntoElement) -> Div {
    div()
        .relative()
        .w(width)
        .bg(theme.card_bg)
        .rounded(px(12.0))
        .border_1()
        .border_color(theme.border)
        .shadow_lg()
        .flex()
        .flex_col()
        .overflow_hidden()
        .child(content)
}

pub fn alert_dialog(theme: &Theme, message: &str, cx: &mut Context<TickerboardApp>) -> impl IntoElement {
    let body = div()
        .flex()
        .flex_col()
        .gap(px(20.0))
        .p(px(24.0))
        .child(
            div()
                .text_size(px(14.0))
                .text_color(theme.text)
                .child(message.to_string()),
        )
        .child(
            div().flex().justify_end().child(
                div()
                    .id("alert-ok")
                    .px(px(20.0))
                    .py(px(8.0))
                    .rounded(px(6.0))
                    .bg(theme.accent)
                    .text_size(px(13.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(hsla(0.0, 0.0, 1.0, 0.95))
                    .cursor_pointer()
                    .hover(|s| s.bg(theme.accent_hover))
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.dismiss_alert(cx);
                    }))
                    .child("OK"),
            ),
        );

    div()
        .id("alert-overlay")
        .absolute()
        .inset_0()
        .flex()
        .items_center()
        .justify_center()
        .bg(hsla(0.0, 0.0, 0.0, 0.6))
        .occlude()
        .child(modal_container(theme, px(420.0), body))
}
