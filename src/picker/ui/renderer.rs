use crate::picker::constants::{ACTION_BAR_HEIGHT, SEARCH_BAR_HEIGHT};
use crate::picker::ui::app_state::AppState;
use crate::picker::ui::components::{
    Component, action_bar::ActionBar, result_list::ResultList, search_bar::SearchBar,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    action_bar: ActionBar,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            action_bar: ActionBar::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(ACTION_BAR_HEIGHT),
            ])
            .split(f.area());

        self.search_bar.set_query(state.search.query.clone());
        self.search_bar
            .set_placeholder(state.config.labels.placeholder.clone());
        self.search_bar
            .set_selection_label(state.ui.selection.as_ref().map(|s| s.label.clone()));
        self.search_bar.set_searching(state.search.is_searching);
        self.search_bar.set_status(state.ui.status.clone());

        self.result_list.set_hits(state.search.hits.clone());
        self.result_list
            .set_selected_index(state.search.selected_index);
        self.result_list.set_waiting(
            state
                .search
                .is_searching
                .then(|| state.config.labels.waiting_for_results.clone()),
        );
        self.result_list
            .set_preview_base(state.config.preview_url.clone());

        self.action_bar.set_enabled(state.actions_enabled());

        self.search_bar.render(f, chunks[0]);
        self.result_list.render(f, chunks[1]);
        self.action_bar.render(f, chunks[2]);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_action_bar_mut(&mut self) -> &mut ActionBar {
        &mut self.action_bar
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
