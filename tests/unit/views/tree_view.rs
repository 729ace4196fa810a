use super::*;
use crate::models::Level;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

fn row(id: &str, depth: u16, node_type: NodeType, has_children: bool, is_expanded: bool) -> TreeRow {
    TreeRow {
        id: id.to_string(),
        depth,
        title: id.to_string(),
        node_type,
        level: None,
        has_children,
        is_expanded,
    }
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|cells| {
            let mut text = String::new();
            let mut skip = 0usize;
            for cell in cells {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = cell.symbol();
                skip = symbol.width().saturating_sub(1);
                text.push_str(symbol);
            }
            text
        })
        .collect()
}

fn draw(view: &mut TreeView, tree: &TreeSnapshot<'_>, width: u16, height: u16) -> Vec<String> {
    let theme = UiTheme::default();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), tree, &theme))
        .unwrap();
    screen_rows(&terminal)
}

#[test]
fn branch_rows_show_chevron_by_expansion() {
    let theme = UiTheme::default();
    let open = line_text(&row_line(
        &row("batting", 0, NodeType::Category, true, true),
        false,
        false,
        &theme,
    ));
    let closed = line_text(&row_line(
        &row("batting", 0, NodeType::Category, true, false),
        false,
        false,
        &theme,
    ));

    assert!(open.contains("▼ ▣ batting"));
    assert!(closed.contains("▶ ▣ batting"));
}

#[test]
fn leaf_rows_are_indented_without_chevron() {
    let theme = UiTheme::default();
    let text = line_text(&row_line(
        &row("grip", 2, NodeType::Content, false, false),
        false,
        false,
        &theme,
    ));
    assert_eq!(text, "       · grip");
}

#[test]
fn level_badge_is_independent_of_type() {
    let theme = UiTheme::default();
    let mut section = row("pace", 1, NodeType::Section, true, false);
    section.level = Some(Level::Advanced);

    let text = line_text(&row_line(&section, false, false, &theme));
    assert!(text.ends_with("pace [高级]"));
}

#[test]
fn selected_leaf_gets_marker_and_accent() {
    let theme = UiTheme::default();
    let line = row_line(
        &row("grip", 1, NodeType::Content, false, false),
        true,
        false,
        &theme,
    );

    assert!(line_text(&line).starts_with('▌'));
    let title = line.spans.iter().find(|s| s.content == "grip").unwrap();
    assert_eq!(title.style.fg, Some(theme.accent_fg));
}

#[test]
fn cursor_row_is_highlighted() {
    let theme = UiTheme::default();
    let line = row_line(
        &row("grip", 1, NodeType::Content, false, false),
        false,
        true,
        &theme,
    );
    let title = line.spans.iter().find(|s| s.content == "grip").unwrap();
    assert_eq!(title.style.bg, Some(theme.selected_bg));
    assert_eq!(title.style.fg, Some(theme.selected_fg));
}

#[test]
fn render_shows_title_and_visible_rows() {
    let rows = vec![
        row("batting", 0, NodeType::Category, true, true),
        row("grip", 1, NodeType::Content, false, false),
        row("stance", 1, NodeType::Content, false, false),
    ];
    let tree = TreeSnapshot {
        rows: &rows,
        loading: false,
        selected_id: Some("grip"),
        cursor: 0,
        scroll_offset: 1,
        show_cursor: true,
    };

    let mut view = TreeView::new();
    let screen = draw(&mut view, &tree, 30, 5);

    assert!(screen[0].contains(SIDEBAR_TITLE));
    assert!(screen[2].contains("grip"));
    assert!(screen[2].starts_with('▌'));
    assert!(screen[3].contains("stance"));
    assert!(!screen.iter().any(|l| l.contains("batting")));
    assert_eq!(view.view_height(), Some(3));
}

#[test]
fn hit_test_maps_screen_rows_to_tree_rows() {
    let rows = vec![
        row("a", 0, NodeType::Category, true, true),
        row("b", 1, NodeType::Content, false, false),
    ];
    let tree = TreeSnapshot {
        rows: &rows,
        loading: false,
        selected_id: None,
        cursor: 0,
        scroll_offset: 0,
        show_cursor: false,
    };

    let mut view = TreeView::new();
    let _ = draw(&mut view, &tree, 20, 6);

    assert_eq!(view.hit_test_row(3, 2, 0, rows.len()), Some(0));
    assert_eq!(view.hit_test_row(3, 3, 0, rows.len()), Some(1));
    assert_eq!(view.hit_test_row(3, 4, 0, rows.len()), None);
    assert_eq!(view.hit_test_row(3, 0, 0, rows.len()), None);
    assert_eq!(view.hit_test_row(25, 2, 0, rows.len()), None);
}

#[test]
fn loading_renders_skeleton_instead_of_rows() {
    let rows = vec![row("a", 0, NodeType::Category, false, false)];
    let tree = TreeSnapshot {
        rows: &rows,
        loading: true,
        selected_id: None,
        cursor: 0,
        scroll_offset: 0,
        show_cursor: true,
    };

    let mut view = TreeView::new();
    let screen = draw(&mut view, &tree, 20, 12);

    let bars = screen.iter().filter(|l| l.contains('░')).count();
    assert_eq!(bars, 8);
    assert!(!screen.iter().any(|l| l.contains("▣")));
}

#[test]
fn empty_tree_renders_only_title() {
    let tree = TreeSnapshot {
        rows: &[],
        loading: false,
        selected_id: None,
        cursor: 0,
        scroll_offset: 0,
        show_cursor: true,
    };

    let mut view = TreeView::new();
    let screen = draw(&mut view, &tree, 20, 6);

    assert!(screen[0].contains(SIDEBAR_TITLE));
    assert!(screen[1..].iter().all(|l| l.trim().is_empty()));
}
