//! Companies section: searchable directory grid

use crate::app::TickerboardApp;
use crate::components::forms::text_input;
use crate::components::tables::company_grid;
use gpui::*;
use tickerboard_core::input::FieldId;
use tickerboard_core::LoadState;

impl TickerboardApp {
    pub(crate) fn render_companies_section(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.controller.state();

        let body = match &state.companies {
            LoadState::NotLoaded | LoadState::Loading => {
                self.render_loading_state("Loading companies...").into_any_element()
            }
            LoadState::Error(e) => self.render_error_state(e, "companies").into_any_element(),
            LoadState::Loaded(directory) if directory.visible_count() == 0 => {
                self.render_empty_state("No companies match your search").into_any_element()
            }
            LoadState::Loaded(directory) => company_grid(&self.theme, directory, cx).into_any_element(),
        };

        div()
            .flex()
            .flex_col()
            .child(self.section_title("Companies", "Click a company to analyze it"))
            .child(
                div().mb(px(16.0)).child(text_input(
                    &self.theme,
                    FieldId::CompanyFilter,
                    &state.fields.company_filter,
                    state.focused == Some(FieldId::CompanyFilter),
                    px(360.0),
                    cx,
                )),
            )
            .child(body)
    }
}
