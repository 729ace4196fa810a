use crate::models::{format_content, KnowledgeNode, KnowledgeTree, MarkupBlock, TreeRow};

use super::content::{ContentOrigin, ResolvedContent};
use super::effect::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Sidebar,
    Search,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBoxState {
    pub input: String,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: FocusTarget,
    pub mobile_menu_open: bool,
    /// Set by the frontend when the viewport is below the compact breakpoint.
    pub compact: bool,
    pub search: SearchBoxState,
    /// Last submitted query. Nothing consumes it yet.
    pub search_query: String,
}

#[derive(Debug)]
pub struct AppState {
    pub sidebar: SidebarState,
    pub content: ContentState,
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sidebar: SidebarState::new(),
            content: ContentState::default(),
            ui: UiState::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct SidebarState {
    tree: KnowledgeTree,
    pub loading: bool,
    pub rows: Vec<TreeRow>,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub view_height: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            tree: KnowledgeTree::empty(),
            loading: true,
            rows: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            view_height: 10,
        }
    }

    pub fn tree(&self) -> &KnowledgeTree {
        &self.tree
    }

    pub fn apply_tree_loaded(&mut self, roots: Vec<KnowledgeNode>) -> bool {
        self.tree = KnowledgeTree::new(roots);
        self.loading = false;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.refresh_rows();
        true
    }

    pub fn apply_tree_load_failed(&mut self) -> bool {
        let changed = self.loading || !self.tree.is_empty();
        self.tree = KnowledgeTree::empty();
        self.loading = false;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.refresh_rows();
        changed
    }

    fn refresh_rows(&mut self) {
        self.rows = self.tree.flatten_for_view();
        if self.rows.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.rows.len() - 1);
        }
        self.clamp_scroll();
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.tree.toggle(id) {
            return false;
        }
        self.refresh_rows();
        if let Some(index) = self.rows.iter().position(|r| r.id == id) {
            self.cursor = index;
            self.ensure_cursor_visible();
        }
        true
    }

    pub fn collapse(&mut self, id: &str) -> bool {
        if !self.tree.collapse(id) {
            return false;
        }
        self.refresh_rows();
        true
    }

    pub fn cursor_row(&self) -> Option<&TreeRow> {
        self.rows.get(self.cursor)
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;
        self.clamp_scroll();
        self.ensure_cursor_visible();
        true
    }

    pub fn move_cursor(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }
        let max = self.rows.len() - 1;
        let next = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            self.cursor.saturating_add(delta as usize).min(max)
        };
        if next == self.cursor {
            return false;
        }
        self.cursor = next;
        self.ensure_cursor_visible();
        true
    }

    pub fn set_cursor(&mut self, index: usize) -> bool {
        if index >= self.rows.len() || index == self.cursor {
            return false;
        }
        self.cursor = index;
        self.ensure_cursor_visible();
        true
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        let prev = self.scroll_offset;
        self.scroll_offset = if delta < 0 {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta as usize)
        };
        self.clamp_scroll();
        self.scroll_offset != prev
    }

    fn max_scroll(&self) -> usize {
        self.rows.len().saturating_sub(self.view_height)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn ensure_cursor_visible(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + self.view_height {
            self.scroll_offset = self.cursor + 1 - self.view_height;
        }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct ContentState {
    pub selected: Option<KnowledgeNode>,
    /// Bumped on every new selection; results tagged with an older id are dropped.
    pub request_id: u64,
    pub loading: bool,
    pub text: String,
    pub blocks: Vec<MarkupBlock>,
    pub origin: Option<ContentOrigin>,
    pub scroll: usize,
    pub view_height: usize,
    pub line_count: usize,
}

impl ContentState {
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|n| n.id.as_str())
    }

    pub fn select(&mut self, node: KnowledgeNode) -> Effect {
        self.request_id = self.request_id.wrapping_add(1);
        self.selected = Some(node.clone());
        self.loading = true;
        self.text.clear();
        self.blocks.clear();
        self.origin = None;
        self.scroll = 0;
        self.line_count = 0;
        Effect::LoadContent {
            request_id: self.request_id,
            node,
        }
    }

    pub fn apply_resolved(&mut self, request_id: u64, content: ResolvedContent) -> bool {
        if request_id != self.request_id {
            tracing::debug!(
                request_id,
                current = self.request_id,
                id = %content.node_id,
                "dropping stale content"
            );
            return false;
        }

        self.blocks = format_content(&content.text);
        self.text = content.text;
        self.origin = Some(content.origin);
        self.loading = false;
        true
    }

    pub fn set_viewport(&mut self, height: usize, line_count: usize) -> bool {
        if self.view_height == height && self.line_count == line_count {
            return false;
        }
        self.view_height = height;
        self.line_count = line_count;
        self.scroll = self.scroll.min(self.max_scroll());
        true
    }

    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let prev = self.scroll;
        self.scroll = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as usize)
        };
        self.scroll = self.scroll.min(self.max_scroll());
        self.scroll != prev
    }

    fn max_scroll(&self) -> usize {
        self.line_count.saturating_sub(self.view_height)
    }
}
