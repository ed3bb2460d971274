//! Compare section: two tickers, one window, three cards

use crate::app::TickerboardApp;
use crate::components::cards::comparison_cards;
use crate::components::forms::{action_button, text_input};
use gpui::*;
use tickerboard_core::input::FieldId;
use tickerboard_core::LoadState;

impl TickerboardApp {
    pub(crate) fn render_compare_section(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let body = match &self.controller.state().comparison {
            LoadState::NotLoaded => self
                .render_empty_state("Enter two tickers and press Compare")
                .into_any_element(),
            LoadState::Loading => self.render_loading_state("Comparing...").into_any_element(),
            LoadState::Error(e) => self.render_error_state(e, "comparison").into_any_element(),
            LoadState::Loaded(view) => comparison_cards(&self.theme, &view.cards).into_any_element(),
        };

        div()
            .flex()
            .flex_col()
            .child(self.section_title("Compare Stocks", "Returns, volatility and correlation"))
            .child(self.render_compare_form(cx))
            .child(body)
    }

    fn render_compare_form(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.controller.state();
        let field = |id: FieldId| (id, state.fields.get(id), state.focused == Some(id));

        div()
            .flex()
            .items_center()
            .gap(px(12.0))
            .mb(px(20.0))
            .children(
                [
                    (field(FieldId::CompareTicker1), px(180.0)),
                    (field(FieldId::CompareTicker2), px(180.0)),
                    (field(FieldId::CompareDays), px(90.0)),
                ]
                .into_iter()
                .map(|((id, value, focused), width)| text_input(&self.theme, id, value, focused, width, cx))
                .collect::<Vec<_>>(),
            )
            .child(
                action_button(&self.theme, "compare-button", "Compare").on_click(cx.listener(
                    |this, _event, _window, cx| {
                        this.compare(cx);
                    },
                )),
            )
    }
}
