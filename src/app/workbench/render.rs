use super::Workbench;
use crate::kernel::FocusTarget;
use crate::views::{ContentSnapshot, TreeSnapshot};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const APP_TITLE: &str = "板球学习指南";
const APP_SUBTITLE: &str = "从规则到技术的系统教程";
const SEARCH_PLACEHOLDER: &str = "搜索板球知识点...";
const SEARCH_ICON: &str = "⌕ ";
const SEARCH_MAX_WIDTH: u16 = 40;
const PROGRESS_LABEL: &str = "学习进度 ";
const PROGRESS_CELLS: usize = 9;
const MENU_OPEN_GLYPH: &str = "✕";
const MENU_CLOSED_GLYPH: &str = "☰";

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_render_area = Some(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(super::HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);
    let header_area = chunks[0];
    let body_area = chunks[1];

    render_header(workbench, frame, header_area);

    let compact = workbench.store.state().ui.compact;
    if compact {
        render_content(workbench, frame, body_area);
        if workbench.store.state().ui.mobile_menu_open {
            let width = workbench.sidebar_width.min(body_area.width);
            let overlay = Rect::new(body_area.x, body_area.y, width, body_area.height);
            frame.render_widget(Clear, overlay);
            render_sidebar(workbench, frame, overlay);
        } else {
            workbench.last_sidebar_area = None;
            workbench.tree_view.clear_area();
        }
    } else {
        let sidebar_width = sidebar_width(workbench.sidebar_width, body_area.width);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(body_area);
        render_sidebar(workbench, frame, columns[0]);
        render_content(workbench, frame, columns[1]);
    }

    if let Some((x, y)) = search_cursor(workbench) {
        frame.set_cursor_position((x, y));
    }
}

/// Configured width, shrunk so the content column keeps its minimum.
pub(super) fn sidebar_width(configured: u16, available: u16) -> u16 {
    let max = available.saturating_sub(super::CONTENT_MIN_WIDTH);
    configured.min(max).max(super::SIDEBAR_MIN_WIDTH.min(available))
}

fn render_header(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let theme = &workbench.theme;
    let ui = &workbench.store.state().ui;
    let row = Rect::new(area.x, area.y, area.width, 1);

    let mut left: Vec<Span> = Vec::new();
    workbench.last_menu_button_area = None;
    if ui.compact {
        let glyph = if ui.mobile_menu_open {
            MENU_OPEN_GLYPH
        } else {
            MENU_CLOSED_GLYPH
        };
        left.push(Span::raw(" "));
        left.push(Span::styled(glyph, Style::default().fg(theme.header_fg)));
        left.push(Span::raw(" "));
        workbench.last_menu_button_area = Some(Rect::new(row.x, row.y, 3, 1));
    } else {
        left.push(Span::raw(" "));
    }
    left.push(Span::styled(
        " 板 ",
        Style::default()
            .fg(theme.header_fg)
            .bg(theme.accent_fg)
            .add_modifier(Modifier::BOLD),
    ));
    left.push(Span::raw(" "));
    left.push(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(theme.header_fg)
            .add_modifier(Modifier::BOLD),
    ));
    if !ui.compact {
        left.push(Span::styled(
            format!("  {APP_SUBTITLE}"),
            Style::default().fg(theme.muted_fg),
        ));
    }

    let mut right: Vec<Span> = Vec::new();
    if !ui.compact {
        let filled = PROGRESS_CELLS / 3;
        right.push(Span::styled(PROGRESS_LABEL, Style::default().fg(theme.text_fg)));
        right.push(Span::styled("█".repeat(filled), Style::default().fg(theme.accent_fg)));
        right.push(Span::styled(
            "░".repeat(PROGRESS_CELLS - filled),
            Style::default().fg(theme.separator),
        ));
        right.push(Span::raw(" "));
    }

    let left_width = spans_width(&left).min(row.width as usize) as u16;
    let right_width = spans_width(&right).min(row.width.saturating_sub(left_width) as usize) as u16;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(left_width),
            Constraint::Min(0),
            Constraint::Length(right_width),
        ])
        .split(row);

    frame.render_widget(Paragraph::new(Line::from(left)), columns[0]);
    frame.render_widget(Paragraph::new(Line::from(right)), columns[2]);

    let middle = columns[1];
    let margin = if middle.width > 8 { 2 } else { 0 };
    let search_width = middle.width.saturating_sub(margin * 2).min(SEARCH_MAX_WIDTH);
    let search_area = Rect::new(middle.x + margin, middle.y, search_width, 1);
    workbench.last_search_area = (search_area.width > 0).then_some(search_area);

    let focused = ui.focus == FocusTarget::Search;
    let input = &ui.search.input;
    let (text, text_style) = if input.is_empty() && !focused {
        (SEARCH_PLACEHOLDER.to_string(), Style::default().fg(theme.muted_fg))
    } else {
        (input.clone(), Style::default().fg(theme.header_fg))
    };
    let icon_style = if focused {
        Style::default().fg(theme.accent_fg)
    } else {
        Style::default().fg(theme.muted_fg)
    };
    let search_line = Line::from(vec![
        Span::styled(SEARCH_ICON, icon_style),
        Span::styled(text, text_style),
    ]);
    frame.render_widget(
        Paragraph::new(search_line).style(Style::default().bg(theme.selected_bg)),
        search_area,
    );

    if area.height > 1 {
        let rule = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "─".repeat(area.width as usize),
                Style::default().fg(theme.separator),
            )),
            rule,
        );
    }
}

fn render_sidebar(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_sidebar_area = (area.width > 0 && area.height > 0).then_some(area);

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(workbench.theme.separator));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = workbench.store.state();
    let tree = TreeSnapshot {
        rows: &state.sidebar.rows,
        loading: state.sidebar.loading,
        selected_id: state.content.selected_id(),
        cursor: state.sidebar.cursor,
        scroll_offset: state.sidebar.scroll_offset,
        show_cursor: state.ui.focus == FocusTarget::Sidebar,
    };
    let inner = Rect::new(
        inner.x,
        inner.y.saturating_add(1).min(inner.y + inner.height),
        inner.width,
        inner.height.saturating_sub(1),
    );
    workbench
        .tree_view
        .render(frame, inner, &tree, &workbench.theme);
}

fn render_content(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let area = Rect::new(
        area.x,
        area.y.saturating_add(1).min(area.y + area.height),
        area.width,
        area.height.saturating_sub(1),
    );

    let state = workbench.store.state();
    let selected = state.content.selected.as_ref();
    let ancestors = selected
        .map(|node| state.sidebar.tree().ancestors(&node.id))
        .unwrap_or_default();
    let content = ContentSnapshot {
        selected,
        ancestors,
        loading: state.content.loading,
        blocks: &state.content.blocks,
        scroll: state.content.scroll,
    };
    workbench
        .content_view
        .render(frame, area, &content, &workbench.theme);
}

fn search_cursor(workbench: &Workbench) -> Option<(u16, u16)> {
    let ui = &workbench.store.state().ui;
    if ui.focus != FocusTarget::Search {
        return None;
    }
    let area = workbench.last_search_area?;
    let offset = (SEARCH_ICON.width() + ui.search.input.width()) as u16;
    let x = (area.x + offset).min(area.x + area.width.saturating_sub(1));
    Some((x, area.y))
}

fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}
