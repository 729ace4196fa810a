use super::*;
use crate::kernel::{ContentOrigin, FocusTarget, ResolvedContent};
use crate::models::{KnowledgeNode, Level, NodeType};

fn leaf(id: &str, title: &str, level: Option<Level>) -> KnowledgeNode {
    KnowledgeNode {
        id: id.to_string(),
        title: title.to_string(),
        node_type: NodeType::Content,
        level,
        children: None,
    }
}

fn branch(id: &str, title: &str, node_type: NodeType, children: Vec<KnowledgeNode>) -> KnowledgeNode {
    KnowledgeNode {
        id: id.to_string(),
        title: title.to_string(),
        node_type,
        level: None,
        children: Some(children),
    }
}

fn sample_roots() -> Vec<KnowledgeNode> {
    vec![
        branch(
            "batting",
            "Batting",
            NodeType::Category,
            vec![
                leaf("grip", "Grip", Some(Level::Beginner)),
                leaf("stance", "Stance", None),
            ],
        ),
        branch(
            "bowling",
            "Bowling",
            NodeType::Category,
            vec![branch(
                "pace",
                "Pace",
                NodeType::Section,
                vec![leaf("yorker", "Yorker", Some(Level::Advanced))],
            )],
        ),
        branch("fielding", "Fielding", NodeType::Category, Vec::new()),
    ]
}

fn loaded_store() -> Store {
    let mut store = Store::new(AppState::new());
    let _ = store.dispatch(Action::Start);
    let _ = store.dispatch(Action::TreeLoaded {
        roots: sample_roots(),
    });
    store
}

fn row_ids(store: &Store) -> Vec<&str> {
    store
        .state()
        .sidebar
        .rows
        .iter()
        .map(|r| r.id.as_str())
        .collect()
}

fn resolved(id: &str, text: &str) -> ResolvedContent {
    ResolvedContent {
        node_id: id.to_string(),
        text: text.to_string(),
        origin: ContentOrigin::Stored,
    }
}

#[test]
fn start_requests_tree_and_marks_loading() {
    let mut store = Store::new(AppState::new());
    let result = store.dispatch(Action::Start);
    assert_eq!(result.effects, vec![Effect::LoadTree]);
    assert!(store.state().sidebar.loading);
}

#[test]
fn tree_loaded_shows_roots_expanded() {
    let store = loaded_store();
    assert!(!store.state().sidebar.loading);
    assert_eq!(
        row_ids(&store),
        vec!["batting", "grip", "stance", "bowling", "pace", "fielding"]
    );
}

#[test]
fn clicking_leaf_selects_once_without_toggling() {
    let mut store = loaded_store();
    let before = row_ids(&store).join(",");

    let result = store.dispatch(Action::SidebarClickRow { row: 1 });

    assert!(result.state_changed);
    assert_eq!(
        result.effects,
        vec![Effect::LoadContent {
            request_id: 1,
            node: leaf("grip", "Grip", Some(Level::Beginner)),
        }]
    );
    assert_eq!(row_ids(&store).join(","), before);
    assert_eq!(store.state().content.selected_id(), Some("grip"));
    assert!(store.state().content.loading);
    assert_eq!(store.state().sidebar.cursor, 1);
}

#[test]
fn clicking_branch_toggles_without_selecting() {
    let mut store = loaded_store();

    let result = store.dispatch(Action::SidebarClickRow { row: 4 });

    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().content.selected_id(), None);
    assert_eq!(
        row_ids(&store),
        vec!["batting", "grip", "stance", "bowling", "pace", "yorker", "fielding"]
    );
    assert_eq!(store.state().sidebar.cursor, 4);
}

#[test]
fn double_toggle_restores_rows() {
    let mut store = loaded_store();
    let before = store.state().sidebar.rows.clone();

    let _ = store.dispatch(Action::ToggleNode {
        id: "bowling".to_string(),
    });
    assert_eq!(
        row_ids(&store),
        vec!["batting", "grip", "stance", "bowling", "fielding"]
    );

    let _ = store.dispatch(Action::ToggleNode {
        id: "bowling".to_string(),
    });
    assert_eq!(store.state().sidebar.rows, before);
}

#[test]
fn toggling_leaf_or_childless_category_is_noop() {
    let mut store = loaded_store();
    let r1 = store.dispatch(Action::ToggleNode {
        id: "grip".to_string(),
    });
    let r2 = store.dispatch(Action::ToggleNode {
        id: "fielding".to_string(),
    });
    assert!(!r1.state_changed);
    assert!(!r2.state_changed);
}

#[test]
fn activating_childless_category_selects_it() {
    let mut store = loaded_store();
    let _ = store.dispatch(Action::SidebarMoveCursor { delta: 5 });
    let result = store.dispatch(Action::SidebarActivate);

    assert_eq!(result.effects.len(), 1);
    assert_eq!(store.state().content.selected_id(), Some("fielding"));
}

#[test]
fn stale_content_is_discarded() {
    let mut store = loaded_store();
    let _ = store.dispatch(Action::SidebarClickRow { row: 1 });
    let second = store.dispatch(Action::SidebarClickRow { row: 2 });
    assert!(matches!(
        second.effects.as_slice(),
        [Effect::LoadContent { request_id: 2, .. }]
    ));

    let stale = store.dispatch(Action::ContentResolved {
        request_id: 1,
        content: resolved("grip", "# Grip"),
    });
    assert!(!stale.state_changed);
    assert!(store.state().content.loading);
    assert!(store.state().content.text.is_empty());

    let fresh = store.dispatch(Action::ContentResolved {
        request_id: 2,
        content: resolved("stance", "# Stance"),
    });
    assert!(fresh.state_changed);
    assert!(!store.state().content.loading);
    assert_eq!(store.state().content.text, "# Stance");
    assert_eq!(store.state().content.blocks.len(), 1);
    assert_eq!(store.state().content.selected_id(), Some("stance"));
}

#[test]
fn late_result_for_earlier_selection_never_overwrites() {
    let mut store = loaded_store();
    let _ = store.dispatch(Action::SidebarClickRow { row: 1 });
    let _ = store.dispatch(Action::SidebarClickRow { row: 2 });
    let _ = store.dispatch(Action::ContentResolved {
        request_id: 2,
        content: resolved("stance", "stance body"),
    });
    let _ = store.dispatch(Action::ContentResolved {
        request_id: 1,
        content: resolved("grip", "grip body"),
    });

    assert_eq!(store.state().content.text, "stance body");
}

#[test]
fn selecting_closes_mobile_menu() {
    let mut store = loaded_store();
    let _ = store.dispatch(Action::ToggleMobileMenu);
    assert!(store.state().ui.mobile_menu_open);

    let _ = store.dispatch(Action::SelectNode(leaf("grip", "Grip", None)));
    assert!(!store.state().ui.mobile_menu_open);
}

#[test]
fn toggling_branch_keeps_mobile_menu_open() {
    let mut store = loaded_store();
    let _ = store.dispatch(Action::ToggleMobileMenu);
    let _ = store.dispatch(Action::SidebarClickRow { row: 0 });
    assert!(store.state().ui.mobile_menu_open);
}

#[test]
fn reselecting_same_leaf_does_not_refetch() {
    let mut store = loaded_store();
    let _ = store.dispatch(Action::SidebarClickRow { row: 1 });
    let _ = store.dispatch(Action::ToggleMobileMenu);

    let again = store.dispatch(Action::SidebarClickRow { row: 1 });
    assert!(again.effects.is_empty());
    assert!(again.state_changed);
    assert!(!store.state().ui.mobile_menu_open);
    assert_eq!(store.state().content.request_id, 1);
}

#[test]
fn select_node_ignores_branches() {
    let mut store = loaded_store();
    let pace = store.state().sidebar.tree().find("pace").cloned().unwrap();

    let result = store.dispatch(Action::SelectNode(pace));
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().content.selected_id(), None);
}

#[test]
fn empty_tree_renders_no_rows() {
    let mut store = Store::new(AppState::new());
    let _ = store.dispatch(Action::Start);
    let _ = store.dispatch(Action::TreeLoaded { roots: Vec::new() });

    assert!(!store.state().sidebar.loading);
    assert!(store.state().sidebar.rows.is_empty());

    let result = store.dispatch(Action::SidebarActivate);
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
}

#[test]
fn tree_load_failure_clears_loading() {
    let mut store = Store::new(AppState::new());
    let _ = store.dispatch(Action::Start);
    let result = store.dispatch(Action::TreeLoadFailed);

    assert!(result.state_changed);
    assert!(!store.state().sidebar.loading);
    assert!(store.state().sidebar.rows.is_empty());
}

#[test]
fn collapse_only_acts_on_expanded_cursor_row() {
    let mut store = loaded_store();
    let result = store.dispatch(Action::SidebarCollapse);
    assert!(result.state_changed);
    assert_eq!(row_ids(&store), vec!["batting", "bowling", "pace", "fielding"]);

    let again = store.dispatch(Action::SidebarCollapse);
    assert!(!again.state_changed);
}

#[test]
fn cursor_movement_is_clamped() {
    let mut store = loaded_store();
    assert!(!store.dispatch(Action::SidebarMoveCursor { delta: -1 }).state_changed);
    assert!(store.dispatch(Action::SidebarMoveCursor { delta: 100 }).state_changed);
    assert_eq!(store.state().sidebar.cursor, 5);
}

#[test]
fn sidebar_keeps_cursor_in_view() {
    let mut store = loaded_store();
    let _ = store.dispatch(Action::SidebarSetViewHeight { height: 2 });
    let _ = store.dispatch(Action::SidebarMoveCursor { delta: 4 });
    assert_eq!(store.state().sidebar.scroll_offset, 3);
}

#[test]
fn content_scroll_is_bounded_by_viewport() {
    let mut store = loaded_store();
    let _ = store.dispatch(Action::ContentSetViewport {
        height: 10,
        line_count: 25,
    });
    let _ = store.dispatch(Action::ContentScroll { delta: 100 });
    assert_eq!(store.state().content.scroll, 15);

    let _ = store.dispatch(Action::ContentScroll { delta: -20 });
    assert_eq!(store.state().content.scroll, 0);
}

#[test]
fn compact_flag_reports_changes_only() {
    let mut store = loaded_store();
    assert!(store.dispatch(Action::SetCompact(true)).state_changed);
    assert!(!store.dispatch(Action::SetCompact(true)).state_changed);
    assert!(store.dispatch(Action::CloseMobileMenu).effects.is_empty());
}

#[test]
fn search_submit_records_query_without_side_effects() {
    let mut store = loaded_store();
    let rows_before = store.state().sidebar.rows.clone();

    let _ = store.dispatch(Action::FocusSearch);
    assert_eq!(store.state().ui.focus, FocusTarget::Search);
    for ch in " yorker ".chars() {
        let _ = store.dispatch(Action::SearchAppend(ch));
    }
    let _ = store.dispatch(Action::SearchBackspace);

    let result = store.dispatch(Action::SearchSubmit);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().ui.search_query, "yorker");
    assert_eq!(store.state().sidebar.rows, rows_before);
    assert_eq!(store.state().content.selected_id(), None);

    let _ = store.dispatch(Action::BlurSearch);
    assert_eq!(store.state().ui.focus, FocusTarget::Sidebar);
}

#[test]
fn blank_search_submit_is_ignored() {
    let mut store = loaded_store();
    let _ = store.dispatch(Action::SearchAppend(' '));
    let result = store.dispatch(Action::SearchSubmit);
    assert!(!result.state_changed);
    assert!(store.state().ui.search_query.is_empty());
}
