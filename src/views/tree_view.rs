//! 知识树侧边栏视图（纯渲染 + 命中测试）

use crate::app::theme::UiTheme;
use crate::models::{NodeType, TreeRow};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const SIDEBAR_TITLE: &str = "板球知识体系";
const SKELETON_ROWS: usize = 8;
/// Title line plus one blank line above the rows.
const TITLE_HEIGHT: u16 = 2;

pub struct TreeSnapshot<'a> {
    pub rows: &'a [TreeRow],
    pub loading: bool,
    pub selected_id: Option<&'a str>,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub show_cursor: bool,
}

pub struct TreeView {
    list_area: Option<Rect>,
}

impl TreeView {
    pub fn new() -> Self {
        Self { list_area: None }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.list_area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    pub fn view_height(&self) -> Option<usize> {
        let area = self.list_area?;
        Some(area.height as usize)
    }

    pub fn clear_area(&mut self) {
        self.list_area = None;
    }

    /// Row index under the pointer, or `None` past the last row.
    pub fn hit_test_row(&self, x: u16, y: u16, scroll_offset: usize, row_count: usize) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let area = self.list_area?;
        let index = (y - area.y) as usize + scroll_offset;
        (index < row_count).then_some(index)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, tree: &TreeSnapshot<'_>, theme: &UiTheme) {
        if area.width == 0 || area.height == 0 {
            self.list_area = None;
            return;
        }

        let title_height = TITLE_HEIGHT.min(area.height);
        let title_area = Rect::new(area.x, area.y, area.width, 1);
        let list_area = Rect::new(
            area.x,
            area.y + title_height,
            area.width,
            area.height - title_height,
        );
        self.list_area = (list_area.height > 0).then_some(list_area);

        let title = Line::from(Span::styled(
            format!(" {SIDEBAR_TITLE}"),
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(title), title_area);

        if list_area.height == 0 {
            return;
        }

        let lines = if tree.loading {
            skeleton_lines(SKELETON_ROWS, list_area.width, theme)
        } else {
            let visible_end = (tree.scroll_offset + list_area.height as usize).min(tree.rows.len());
            let start = tree.scroll_offset.min(visible_end);
            tree.rows[start..visible_end]
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let is_selected = row.is_leaf() && tree.selected_id == Some(row.id.as_str());
                    let is_cursor = tree.show_cursor && start + i == tree.cursor;
                    row_line(row, is_selected, is_cursor, theme)
                })
                .collect()
        };

        frame.render_widget(Paragraph::new(lines), list_area);
    }
}

impl Default for TreeView {
    fn default() -> Self {
        Self::new()
    }
}

fn node_icon(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Category => "▣ ",
        NodeType::Section => "● ",
        NodeType::Subsection => "• ",
        NodeType::Content => "· ",
    }
}

fn node_style(node_type: NodeType, theme: &UiTheme) -> Style {
    match node_type {
        NodeType::Category => Style::default()
            .fg(theme.header_fg)
            .add_modifier(Modifier::BOLD),
        NodeType::Section => Style::default().fg(theme.text_fg).add_modifier(Modifier::BOLD),
        NodeType::Subsection => Style::default().fg(theme.text_fg),
        NodeType::Content => Style::default().fg(theme.muted_fg),
    }
}

pub fn row_line(row: &TreeRow, is_selected: bool, is_cursor: bool, theme: &UiTheme) -> Line<'static> {
    let marker = if is_selected { "▌" } else { " " };
    let indent = "  ".repeat(row.depth as usize);
    let chevron = if !row.has_children {
        "  "
    } else if row.is_expanded {
        "▼ "
    } else {
        "▶ "
    };

    let mut title_style = if is_selected {
        Style::default()
            .fg(theme.accent_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        node_style(row.node_type, theme)
    };
    if is_cursor {
        title_style = title_style.bg(theme.selected_bg).fg(theme.selected_fg);
    }

    let icon_style = match row.node_type {
        NodeType::Category | NodeType::Section => Style::default().fg(theme.accent_fg),
        NodeType::Subsection | NodeType::Content => Style::default().fg(theme.muted_fg),
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.accent_fg)),
        Span::raw(indent),
        Span::styled(chevron, Style::default().fg(theme.muted_fg)),
        Span::styled(node_icon(row.node_type), icon_style),
        Span::styled(row.title.clone(), title_style),
    ];

    if let Some(level) = row.level {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[{}]", level.badge_label()),
            Style::default().fg(theme.level_fg(level)),
        ));
    }

    Line::from(spans)
}

pub fn skeleton_lines(count: usize, width: u16, theme: &UiTheme) -> Vec<Line<'static>> {
    let bar = "░".repeat(width.saturating_sub(2) as usize);
    (0..count)
        .map(|_| {
            Line::from(Span::styled(
                format!(" {bar}"),
                Style::default().fg(theme.separator),
            ))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/views/tree_view.rs"]
mod tests;
