//! Sidebar navigation and the section header
//!
//! Exactly one section is highlighted: the sidebar reads the active section
//! straight from the view state, so activating one implicitly deactivates
//! the rest.

use crate::app::TickerboardApp;
use gpui::prelude::FluentBuilder;
use gpui::*;
use tickerboard_core::{LoadState, Section};

impl TickerboardApp {
    pub(crate) fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w(px(240.0))
            .h_full()
            .flex()
            .flex_col()
            .bg(theme.sidebar_bg)
            .border_r_1()
            .border_color(theme.border_subtle)
            .child(self.render_logo())
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .px(px(12.0))
                    .py(px(12.0))
                    .child(
                        div()
                            .text_size(px(10.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.text_dimmed)
                            .px(px(12.0))
                            .mb(px(8.0))
                            .child("NAVIGATION"),
                    )
                    .children(
                        Section::all()
                            .iter()
                            .map(|&section| self.nav_item(section, cx))
                            .collect::<Vec<_>>(),
                    ),
            )
    }

    fn render_logo(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .px(px(20.0))
            .py(px(24.0))
            .flex()
            .items_center()
            .gap(px(14.0))
            .border_b_1()
            .border_color(theme.border_subtle)
            .mb(px(8.0))
            .child(
                div()
                    .size(px(40.0))
                    .bg(theme.accent)
                    .rounded(px(10.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .border_1()
                    .border_color(theme.accent_glow)
                    .child(
                        div()
                            .text_size(px(20.0))
                            .font_weight(FontWeight::BLACK)
                            .text_color(hsla(0.0, 0.0, 1.0, 0.95))
                            .child("T"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .text_size(px(18.0))
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.text)
                            .child("Tickerboard"),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(theme.text_dimmed)
                            .child("Stock Market Dashboard"),
                    ),
            )
    }

    fn nav_item(&self, section: Section, cx: &mut Context<Self>) -> impl IntoElement {
        let is_active = self.controller.state().is_active(section);
        let theme = &self.theme;

        let bg = if is_active {
            theme.accent_subtle
        } else {
            transparent_black()
        };
        let text_color = if is_active {
            theme.accent
        } else {
            theme.text_muted
        };
        let hover_text = if is_active {
            theme.accent
        } else {
            theme.text_secondary
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", section)))
            .relative()
            .flex()
            .items_center()
            .gap(px(10.0))
            .px(px(12.0))
            .py(px(10.0))
            .rounded(px(8.0))
            .bg(bg)
            .text_color(text_color)
            .text_size(px(13.0))
            .font_weight(if is_active {
                FontWeight::SEMIBOLD
            } else {
                FontWeight::NORMAL
            })
            .cursor_pointer()
            .hover(|s| s.bg(theme.nav_hover).text_color(hover_text))
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.set_section(section, cx);
            }))
            // Active indicator bar on the left
            .when(is_active, |s| {
                s.child(
                    div()
                        .absolute()
                        .left(px(-12.0))
                        .top(px(8.0))
                        .bottom(px(8.0))
                        .w(px(3.0))
                        .rounded(px(2.0))
                        .bg(theme.nav_active_indicator),
                )
            })
            .child(
                div()
                    .w(px(18.0))
                    .text_size(px(11.0))
                    .font_weight(FontWeight::BOLD)
                    .child(section.icon()),
            )
            .child(div().flex_grow().child(section.label()))
            .child(
                div()
                    .text_size(px(10.0))
                    .text_color(theme.text_dimmed)
                    .child(section.shortcut().to_string()),
            )
    }

    pub(crate) fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .h(px(64.0))
            .px(px(28.0))
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(theme.border_subtle)
            .bg(theme.background)
            .child(
                div()
                    .text_size(px(20.0))
                    .font_weight(FontWeight::BOLD)
                    .child(self.controller.state().active().label()),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(10.0))
                    .child(self.render_api_status_badge(cx))
                    .child(
                        div()
                            .id("refresh-button")
                            .px(px(12.0))
                            .py(px(6.0))
                            .rounded(px(6.0))
                            .bg(theme.card_bg)
                            .border_1()
                            .border_color(theme.border)
                            .text_size(px(12.0))
                            .text_color(theme.text_secondary)
                            .cursor_pointer()
                            .hover(|s| s.bg(theme.hover_bg))
                            .on_click(cx.listener(|this, _event, _window, cx| {
                                this.refresh(cx);
                            }))
                            .child("Refresh"),
                    ),
            )
    }

    /// Backend health; click to re-check
    fn render_api_status_badge(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        let (status_text, bg, text_color) = match &self.controller.state().health {
            LoadState::NotLoaded | LoadState::Loading => {
                ("Connecting...".to_string(), theme.accent_subtle, theme.accent)
            }
            LoadState::Loaded(health) if health.is_healthy() => (
                format!("Live · {} rows", health.data_points),
                theme.positive_subtle,
                theme.positive,
            ),
            LoadState::Loaded(health) => (health.status.clone(), theme.negative_subtle, theme.warning),
            LoadState::Error(_) => ("Offline".to_string(), theme.negative_subtle, theme.negative),
        };

        div()
            .id("api-status")
            .px(px(8.0))
            .py(px(3.0))
            .rounded(px(4.0))
            .bg(bg)
            .text_size(px(10.0))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(text_color)
            .cursor_pointer()
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.check_health(cx);
            }))
            .child(status_text)
    }
}
