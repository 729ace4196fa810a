use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_sidebar_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::TreeLoaded { roots } => {
                tracing::info!(roots = roots.len(), "knowledge tree loaded");
                super::DispatchResult::changed(self.state.sidebar.apply_tree_loaded(roots))
            }
            Action::TreeLoadFailed => {
                super::DispatchResult::changed(self.state.sidebar.apply_tree_load_failed())
            }
            Action::SidebarSetViewHeight { height } => {
                super::DispatchResult::changed(self.state.sidebar.set_view_height(height))
            }
            Action::SidebarMoveCursor { delta } => {
                super::DispatchResult::changed(self.state.sidebar.move_cursor(delta))
            }
            Action::SidebarScroll { delta } => {
                super::DispatchResult::changed(self.state.sidebar.scroll(delta))
            }
            Action::SidebarActivate => {
                let cursor = self.state.sidebar.cursor;
                self.activate_row(cursor)
            }
            Action::SidebarCollapse => {
                let Some(row) = self.state.sidebar.cursor_row() else {
                    return super::DispatchResult::unchanged();
                };
                if !row.is_expanded {
                    return super::DispatchResult::unchanged();
                }
                let id = row.id.clone();
                super::DispatchResult::changed(self.state.sidebar.collapse(&id))
            }
            Action::SidebarClickRow { row } => {
                let moved = self.state.sidebar.set_cursor(row);
                let mut result = self.activate_row(row);
                result.state_changed |= moved;
                result
            }
            Action::ToggleNode { id } => {
                super::DispatchResult::changed(self.state.sidebar.toggle(&id))
            }
            _ => unreachable!("non-sidebar action passed to reduce_sidebar_action"),
        }
    }

    /// Branch rows toggle, leaf rows select. Never both.
    fn activate_row(&mut self, index: usize) -> super::DispatchResult {
        let Some(row) = self.state.sidebar.rows.get(index) else {
            return super::DispatchResult::unchanged();
        };

        if row.has_children {
            let id = row.id.clone();
            return super::DispatchResult::changed(self.state.sidebar.toggle(&id));
        }

        let Some(node) = self.state.sidebar.tree().find(&row.id).cloned() else {
            return super::DispatchResult::unchanged();
        };
        self.dispatch(Action::SelectNode(node))
    }
}

