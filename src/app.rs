//! Main application state and rendering for the Tickerboard window
//!
//! The window owns a [`DashboardController`] and feeds it input. Loads the
//! controller hands back run on the tokio runtime; their results hop back to
//! the UI thread through `cx.spawn` and are applied with
//! [`DashboardController::finish`].

use crate::components::charts::ChartKind;
use crate::components::modals::alert_dialog;
use crate::keyboard::{next_field, process_keystroke, KeyAction, KeyContext};
use crate::theme::Theme;
use gpui::prelude::FluentBuilder;
use gpui::*;
use std::sync::Arc;
use tickerboard_core::input::FieldId;
use tickerboard_core::{execute, ApiError, DashboardController, PendingLoad, Section, Settings, TickerboardClient};
use tokio::runtime::Runtime;

/// Main application state
pub struct TickerboardApp {
    pub(crate) theme: Theme,
    pub(crate) controller: DashboardController,
    /// API client for backend communication
    client: Arc<TickerboardClient>,
    /// Runs every request; the UI thread never blocks on I/O
    runtime: Arc<Runtime>,
    focus_handle: FocusHandle,
    pub(crate) price_hover: Option<usize>,
    pub(crate) returns_hover: Option<usize>,
}

impl TickerboardApp {
    pub fn new(
        settings: Settings,
        client: Arc<TickerboardClient>,
        runtime: Arc<Runtime>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        let mut app = Self {
            theme: Theme::dark(),
            controller: DashboardController::new(settings.display),
            client,
            runtime,
            focus_handle,
            price_hover: None,
            returns_hover: None,
        };

        let health = app.controller.check_health();
        app.run_load(health, cx);
        app.set_section(Section::Dashboard, cx);

        app
    }

    /// Run a load off the UI thread and apply its result when it lands
    fn run_load(&mut self, load: PendingLoad, cx: &mut Context<Self>) {
        let client = self.client.clone();
        let request = load.request.clone();
        let handle = self
            .runtime
            .spawn(async move { execute(client.as_ref(), &request).await });

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(ApiError::Network(format!("request task failed: {}", e))),
            };

            let _ = cx.update(|cx| {
                if let Some(entity) = this.upgrade() {
                    entity.update(cx, |app: &mut Self, cx: &mut Context<Self>| {
                        app.controller.finish(&load, result);
                        cx.notify();
                    });
                }
            });
        })
        .detach();
    }

    fn run_if_some(&mut self, load: Option<PendingLoad>, cx: &mut Context<Self>) {
        if let Some(load) = load {
            self.run_load(load, cx);
        }
        cx.notify();
    }

    pub fn set_section(&mut self, section: Section, cx: &mut Context<Self>) {
        self.price_hover = None;
        self.returns_hover = None;
        let load = self.controller.activate(section);
        self.run_if_some(load, cx);
    }

    /// Company card click
    pub fn open_company(&mut self, ticker: &str, cx: &mut Context<Self>) {
        self.price_hover = None;
        self.returns_hover = None;
        let load = self.controller.load_stock_detail(ticker);
        self.run_load(load, cx);
        cx.notify();
    }

    pub fn analyze(&mut self, cx: &mut Context<Self>) {
        let load = self.controller.submit_analysis();
        self.run_if_some(load, cx);
    }

    pub fn compare(&mut self, cx: &mut Context<Self>) {
        let load = self.controller.submit_comparison();
        self.run_if_some(load, cx);
    }

    pub fn load_volatility(&mut self, cx: &mut Context<Self>) {
        let load = self.controller.load_volatility();
        self.run_if_some(load, cx);
    }

    pub fn check_health(&mut self, cx: &mut Context<Self>) {
        let load = self.controller.check_health();
        self.run_load(load, cx);
        cx.notify();
    }

    /// Reload whatever the active section shows
    pub fn refresh(&mut self, cx: &mut Context<Self>) {
        let section = self.controller.state().active();
        self.set_section(section, cx);
    }

    pub fn dismiss_alert(&mut self, cx: &mut Context<Self>) {
        self.controller.dismiss_alert();
        cx.notify();
    }

    pub fn focus_field(&mut self, id: FieldId, window: &mut Window, cx: &mut Context<Self>) {
        self.controller.focus(Some(id));
        window.focus(&self.focus_handle);
        cx.notify();
    }

    pub fn set_chart_hover(&mut self, kind: ChartKind, index: usize, hovered: bool, cx: &mut Context<Self>) {
        let slot = match kind {
            ChartKind::Price => &mut self.price_hover,
            ChartKind::Returns => &mut self.returns_hover,
        };
        if hovered {
            *slot = Some(index);
        } else if *slot == Some(index) {
            *slot = None;
        }
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let state = self.controller.state();
        let context = if state.alert.is_some() {
            KeyContext::Alert
        } else if state.focused.is_some() {
            KeyContext::Editing
        } else {
            KeyContext::Browsing
        };

        let Some(action) = process_keystroke(&event.keystroke, context) else {
            return;
        };

        match action {
            KeyAction::GotoSection(section) => self.set_section(section, cx),
            KeyAction::DismissAlert => self.dismiss_alert(cx),
            KeyAction::Submit => {
                let load = self.controller.submit_focused();
                self.run_if_some(load, cx);
            }
            KeyAction::Backspace => self.controller.backspace(),
            KeyAction::NextField => {
                let state = self.controller.state();
                let next = next_field(state.active(), state.focused);
                self.controller.focus(next);
            }
            KeyAction::Blur => self.controller.focus(None),
            KeyAction::Insert(text) => self.controller.insert_text(&text),
        }
        cx.stop_propagation();
        cx.notify();
    }
}

impl Render for TickerboardApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let alert = self.controller.state().alert.clone();

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .relative()
            .size_full()
            .flex()
            .flex_row()
            .bg(self.theme.background)
            .text_color(self.theme.text)
            .font_family("Inter")
            .child(self.render_sidebar(cx))
            .child(self.render_main_content(cx))
            .when_some(alert, |el, message| el.child(alert_dialog(&self.theme, &message, cx)))
    }
}

impl TickerboardApp {
    fn render_main_content(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let content = match self.controller.state().active() {
            Section::Dashboard => self.render_dashboard_section().into_any_element(),
            Section::Companies => self.render_companies_section(cx).into_any_element(),
            Section::Analysis => self.render_analysis_section(cx).into_any_element(),
            Section::Compare => self.render_compare_section(cx).into_any_element(),
        };

        div()
            .flex_grow()
            .h_full()
            .flex()
            .flex_col()
            .child(self.render_header(cx))
            .child(
                div()
                    .id("section-content")
                    .flex_grow()
                    .overflow_y_scroll()
                    .p(px(28.0))
                    .child(content),
            )
    }

    pub(crate) fn render_loading_state(&self, message: &str) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .p(px(40.0))
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap(px(12.0))
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(theme.text_muted)
                    .child(message.to_string()),
            )
    }

    pub(crate) fn render_error_state(&self, error: &str, context: &str) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .p(px(20.0))
            .rounded(px(8.0))
            .bg(theme.negative_subtle)
            .border_1()
            .border_color(theme.negative)
            .flex()
            .flex_col()
            .gap(px(8.0))
            .child(
                div()
                    .text_size(px(14.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.negative)
                    .child(format!("Failed to load {}", context)),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(theme.text_muted)
                    .child(error.to_string()),
            )
    }

    pub(crate) fn render_empty_state(&self, message: &str) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .p(px(40.0))
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(theme.text_muted)
                    .child(message.to_string()),
            )
    }

    pub(crate) fn section_title(&self, title: &str, subtitle: &str) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .flex()
            .flex_col()
            .gap(px(4.0))
            .mb(px(20.0))
            .child(
                div()
                    .text_size(px(22.0))
                    .font_weight(FontWeight::BOLD)
                    .child(title.to_string()),
            )
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(theme.text_dimmed)
                    .child(subtitle.to_string()),
            )
    }
}
