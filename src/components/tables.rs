//! List and grid components
//!
//! Top movers lists for the dashboard and the company directory grid.

use crate::app::TickerboardApp;
use crate::theme::Theme;
use gpui::*;
use tickerboard_core::view::{CompanyCard, CompanyDirectory, MoverItem};

/// Gainers or losers list
pub fn mover_list(theme: &Theme, title: &'static str, items: &[MoverItem]) -> impl IntoElement {
    div()
        .flex_1()
        .flex()
        .flex_col()
        .p(px(20.0))
        .rounded(px(10.0))
        .bg(theme.card_bg)
        .border_1()
        .border_color(theme.border_subtle)
        .child(
            div()
                .text_size(px(15.0))
                .font_weight(FontWeight::SEMIBOLD)
                .mb(px(12.0))
                .child(title),
        )
        .children(items.iter().map(|item| mover_row(theme, item)))
}

fn mover_row(theme: &Theme, item: &MoverItem) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .justify_between()
        .py(px(10.0))
        .px(px(8.0))
        .border_b_1()
        .border_color(theme.border_subtle)
        .child(
            div()
                .flex()
                .flex_col()
                .gap(px(2.0))
                .child(
                    div()
                        .text_size(px(14.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(theme.text)
                        .child(item.ticker.clone()),
                )
                .child(
                    div()
                        .text_size(px(12.0))
                        .text_color(theme.text_muted)
                        .child(item.name.clone()),
                ),
        )
        .child(
            div()
                .text_size(px(14.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(theme.tone_color(item.change.tone))
                .child(item.change.text.clone()),
        )
}

/// Company cards, hidden ones skipped. Clicking a card opens its analysis.
pub fn company_grid(
    theme: &Theme,
    directory: &CompanyDirectory,
    cx: &mut Context<TickerboardApp>,
) -> impl IntoElement {
    div()
        .flex()
        .flex_wrap()
        .gap(px(12.0))
        .children(
            directory
                .visible()
                .map(|card| company_card(theme, card, cx))
                .collect::<Vec<_>>(),
        )
}

fn company_card(theme: &Theme, card: &CompanyCard, cx: &mut Context<TickerboardApp>) -> impl IntoElement {
    let ticker = card.company.ticker.clone();

    div()
        .id(SharedString::from(format!("company-{}", card.company.ticker)))
        .w(px(220.0))
        .p(px(16.0))
        .rounded(px(8.0))
        .bg(theme.card_bg)
        .border_1()
        .border_color(theme.border_subtle)
        .flex()
        .flex_col()
        .gap(px(4.0))
        .cursor_pointer()
        .hover(|s| s.bg(theme.hover_bg).border_color(theme.accent))
        .on_click(cx.listener(move |this, _event, _window, cx| {
            this.open_company(&ticker, cx);
        }))
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(FontWeight::BOLD)
                .text_color(theme.accent)
                .child(card.company.ticker.clone()),
        )
        .child(
            div()
                .text_size(px(13.0))
                .text_color(theme.text_secondary)
                .child(card.company.name.clone()),
        )
        .child(
            div()
                .text_size(px(11.0))
                .text_color(theme.text_dimmed)
                .child(card.company.sector.clone()),
        )
}
