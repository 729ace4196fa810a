use super::{Action, AppState, Effect};

mod search;
mod sidebar;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Start => {
                self.state.sidebar.loading = true;
                DispatchResult {
                    effects: vec![Effect::LoadTree],
                    state_changed: true,
                }
            }
            Action::TreeLoaded { .. }
            | Action::TreeLoadFailed
            | Action::SidebarSetViewHeight { .. }
            | Action::SidebarMoveCursor { .. }
            | Action::SidebarScroll { .. }
            | Action::SidebarActivate
            | Action::SidebarCollapse
            | Action::SidebarClickRow { .. }
            | Action::ToggleNode { .. } => self.reduce_sidebar_action(action),
            Action::SelectNode(node) => {
                if node.has_children() {
                    return DispatchResult::unchanged();
                }

                let menu_was_open = self.state.ui.mobile_menu_open;
                self.state.ui.mobile_menu_open = false;

                if self.state.content.selected_id() == Some(node.id.as_str()) {
                    return DispatchResult::changed(menu_was_open);
                }

                let effect = self.state.content.select(node);
                DispatchResult {
                    effects: vec![effect],
                    state_changed: true,
                }
            }
            Action::ContentResolved {
                request_id,
                content,
            } => DispatchResult::changed(self.state.content.apply_resolved(request_id, content)),
            Action::ContentSetViewport { height, line_count } => {
                DispatchResult::changed(self.state.content.set_viewport(height, line_count))
            }
            Action::ContentScroll { delta } => {
                DispatchResult::changed(self.state.content.scroll_by(delta))
            }
            Action::ToggleMobileMenu => {
                self.state.ui.mobile_menu_open = !self.state.ui.mobile_menu_open;
                DispatchResult::changed(true)
            }
            Action::CloseMobileMenu => {
                let was_open = self.state.ui.mobile_menu_open;
                self.state.ui.mobile_menu_open = false;
                DispatchResult::changed(was_open)
            }
            Action::SetCompact(compact) => {
                let prev = self.state.ui.compact;
                self.state.ui.compact = compact;
                DispatchResult::changed(prev != compact)
            }
            Action::FocusSearch
            | Action::BlurSearch
            | Action::SearchAppend(_)
            | Action::SearchBackspace
            | Action::SearchSubmit => self.reduce_search_action(action),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
