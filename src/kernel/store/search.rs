use crate::kernel::{Action, FocusTarget};

impl super::Store {
    pub(super) fn reduce_search_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::FocusSearch => {
                let prev = self.state.ui.focus;
                self.state.ui.focus = FocusTarget::Search;
                super::DispatchResult::changed(prev != FocusTarget::Search)
            }
            Action::BlurSearch => {
                let prev = self.state.ui.focus;
                self.state.ui.focus = FocusTarget::Sidebar;
                super::DispatchResult::changed(prev != FocusTarget::Sidebar)
            }
            Action::SearchAppend(ch) => {
                if ch.is_control() {
                    return super::DispatchResult::unchanged();
                }
                self.state.ui.search.input.push(ch);
                super::DispatchResult::changed(true)
            }
            Action::SearchBackspace => {
                super::DispatchResult::changed(self.state.ui.search.input.pop().is_some())
            }
            Action::SearchSubmit => {
                let query = self.state.ui.search.input.trim();
                if query.is_empty() {
                    return super::DispatchResult::unchanged();
                }
                let query = query.to_string();
                let changed = self.state.ui.search_query != query;
                self.state.ui.search_query = query;
                self.handle_search();
                super::DispatchResult::changed(changed)
            }
            _ => unreachable!("non-search action passed to reduce_search_action"),
        }
    }

    /// Hook point for topic search. Not implemented: the query is recorded
    /// and nothing is filtered.
    fn handle_search(&self) {
        tracing::debug!(query = %self.state.ui.search_query, "search submitted");
    }
}
