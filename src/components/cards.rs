//! Stat and comparison cards

use crate::theme::Theme;
use gpui::prelude::FluentBuilder;
use gpui::*;
use tickerboard_core::view::{ComparisonCard, ComparisonCards, StatField, StatPanel};

/// Stat panel laid out as a row of tiles
pub fn stat_panel(theme: &Theme, panel: &StatPanel) -> impl IntoElement {
    div()
        .flex()
        .flex_wrap()
        .gap(px(12.0))
        .children(panel.fields.iter().map(|field| stat_tile(theme, field)))
}

fn stat_tile(theme: &Theme, field: &StatField) -> impl IntoElement {
    div()
        .min_w(px(150.0))
        .flex_1()
        .p(px(16.0))
        .rounded(px(8.0))
        .bg(theme.card_bg)
        .border_1()
        .border_color(theme.border_subtle)
        .flex()
        .flex_col()
        .gap(px(6.0))
        .child(
            div()
                .text_size(px(11.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(theme.text_dimmed)
                .child(field.label),
        )
        .child(
            div()
                .text_size(px(20.0))
                .font_weight(FontWeight::BOLD)
                .text_color(theme.tone_color(field.value.tone))
                .child(field.value.text.clone()),
        )
}

pub fn comparison_cards(theme: &Theme, cards: &ComparisonCards) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap(px(12.0))
        .when_some(cards.subtitle.clone(), |el, subtitle| {
            el.child(
                div()
                    .text_size(px(12.0))
                    .text_color(theme.text_muted)
                    .child(subtitle),
            )
        })
        .child(
            div()
                .flex()
                .gap(px(12.0))
                .children(cards.cards.iter().map(|card| comparison_card(theme, card))),
        )
}

fn comparison_card(theme: &Theme, card: &ComparisonCard) -> impl IntoElement {
    div()
        .flex_1()
        .p(px(20.0))
        .rounded(px(10.0))
        .bg(theme.card_bg)
        .border_1()
        .border_color(theme.border_subtle)
        .flex()
        .flex_col()
        .gap(px(10.0))
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(FontWeight::BOLD)
                .mb(px(4.0))
                .child(card.title.clone()),
        )
        .children(card.stats.iter().map(|stat| {
            div()
                .flex()
                .justify_between()
                .child(
                    div()
                        .text_size(px(13.0))
                        .text_color(theme.text_muted)
                        .child(format!("{}:", stat.label)),
                )
                .child(
                    div()
                        .text_size(px(13.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(theme.tone_color(stat.value.tone))
                        .child(stat.value.text.clone()),
                )
        }))
}
