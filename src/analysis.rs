//! Analysis section: ticker form, price and returns charts, stat panel and
//! the optional volatility breakdown

use crate::app::TickerboardApp;
use crate::components::cards::stat_panel;
use crate::components::charts::{price_chart, returns_chart};
use crate::components::forms::{action_button, text_input};
use gpui::*;
use tickerboard_core::controller::AnalysisView;
use tickerboard_core::input::FieldId;
use tickerboard_core::LoadState;

impl TickerboardApp {
    pub(crate) fn render_analysis_section(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let body = match &self.controller.state().analysis {
            LoadState::NotLoaded => self
                .render_empty_state("Enter a ticker and press Analyze")
                .into_any_element(),
            LoadState::Loading => self.render_loading_state("Loading stock data...").into_any_element(),
            LoadState::Error(e) => self.render_error_state(e, "stock data").into_any_element(),
            LoadState::Loaded(view) => self.render_analysis(view, cx).into_any_element(),
        };

        div()
            .flex()
            .flex_col()
            .child(self.section_title("Stock Analysis", "Price trend, daily returns and key statistics"))
            .child(self.render_analysis_form(cx))
            .child(body)
    }

    fn render_analysis_form(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.controller.state();

        div()
            .flex()
            .items_center()
            .gap(px(12.0))
            .mb(px(20.0))
            .child(text_input(
                &self.theme,
                FieldId::AnalysisTicker,
                &state.fields.analysis_ticker,
                state.focused == Some(FieldId::AnalysisTicker),
                px(220.0),
                cx,
            ))
            .child(text_input(
                &self.theme,
                FieldId::AnalysisDays,
                &state.fields.analysis_days,
                state.focused == Some(FieldId::AnalysisDays),
                px(90.0),
                cx,
            ))
            .child(
                action_button(&self.theme, "analyze-button", "Analyze").on_click(cx.listener(
                    |this, _event, _window, cx| {
                        this.analyze(cx);
                    },
                )),
            )
    }

    fn render_analysis(&self, view: &AnalysisView, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .flex()
            .flex_col()
            .gap(px(16.0))
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(theme.text_muted)
                    .child(format!("{} · last {} days", view.ticker, view.days)),
            )
            .child(price_chart(theme, &view.price_chart, self.price_hover, cx))
            .child(returns_chart(theme, &view.returns_chart, self.returns_hover, cx))
            .child(stat_panel(theme, &view.stats))
            .child(self.render_volatility(cx))
    }

    fn render_volatility(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        let body = match &self.controller.state().volatility {
            LoadState::NotLoaded => action_button(theme, "volatility-button", "Volatility Breakdown")
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.load_volatility(cx);
                }))
                .into_any_element(),
            LoadState::Loading => self.render_loading_state("Loading volatility...").into_any_element(),
            LoadState::Error(e) => self.render_error_state(e, "volatility").into_any_element(),
            LoadState::Loaded(view) => div()
                .flex()
                .flex_col()
                .gap(px(8.0))
                .child(
                    div()
                        .text_size(px(15.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .child(format!("Volatility · {} over {} days", view.ticker, view.days)),
                )
                .child(stat_panel(theme, &view.panel))
                .into_any_element(),
        };

        div().flex().child(body)
    }
}
