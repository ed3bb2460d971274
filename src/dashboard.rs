//! Dashboard section: top gainers and losers side by side

use crate::app::TickerboardApp;
use crate::components::tables::mover_list;
use gpui::*;
use tickerboard_core::view::render_mover_list;
use tickerboard_core::LoadState;

impl TickerboardApp {
    pub(crate) fn render_dashboard_section(&self) -> impl IntoElement {
        let body = match &self.controller.state().movers {
            LoadState::NotLoaded | LoadState::Loading => {
                self.render_loading_state("Loading market movers...").into_any_element()
            }
            LoadState::Error(e) => self.render_error_state(e, "market movers").into_any_element(),
            LoadState::Loaded(movers) => div()
                .flex()
                .gap(px(16.0))
                .child(mover_list(&self.theme, "Top Gainers", &render_mover_list(&movers.gainers)))
                .child(mover_list(&self.theme, "Top Losers", &render_mover_list(&movers.losers)))
                .into_any_element(),
        };

        div()
            .flex()
            .flex_col()
            .child(self.section_title("Market Overview", "Best and worst performers by return"))
            .child(body)
    }
}
