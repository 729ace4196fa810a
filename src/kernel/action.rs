use crate::models::KnowledgeNode;

use super::content::ResolvedContent;

#[derive(Debug, Clone)]
pub enum Action {
    /// Kicks off the one-time tree load.
    Start,
    TreeLoaded {
        roots: Vec<KnowledgeNode>,
    },
    TreeLoadFailed,
    SidebarSetViewHeight {
        height: usize,
    },
    SidebarMoveCursor {
        delta: isize,
    },
    SidebarScroll {
        delta: isize,
    },
    SidebarActivate,
    SidebarCollapse,
    SidebarClickRow {
        row: usize,
    },
    ToggleNode {
        id: String,
    },
    SelectNode(KnowledgeNode),
    ContentResolved {
        request_id: u64,
        content: ResolvedContent,
    },
    ContentSetViewport {
        height: usize,
        line_count: usize,
    },
    ContentScroll {
        delta: isize,
    },
    ToggleMobileMenu,
    CloseMobileMenu,
    SetCompact(bool),
    FocusSearch,
    BlurSearch,
    SearchAppend(char),
    SearchBackspace,
    SearchSubmit,
}
