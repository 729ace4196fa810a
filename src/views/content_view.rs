//! 内容区视图：欢迎页、文章排版与滚动

use crate::app::theme::UiTheme;
use crate::models::{KnowledgeNode, Level, MarkupBlock};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const WELCOME_TITLE: &str = "欢迎来到板球学习指南";
const WELCOME_SUBTITLE: &str = "从左侧导航中选择您想学习的知识点，开始您的板球学习之旅";
const WELCOME_CARDS: [(&str, &str); 6] = [
    ("基础知识", "了解板球的历史、规则和基本概念"),
    ("技术技能", "学习击球、投球、守备等核心技术"),
    ("战术策略", "掌握团队战术和个人策略"),
    ("训练方法", "科学的训练方法和计划"),
    ("心理战术", "心理技能和压力管理"),
    ("比赛管理", "赛前、赛中、赛后的管理"),
];
const HOME_CRUMB: &str = "首页";
const READING_TIME: &str = "阅读时间: 5-10分钟";
const AUTHOR: &str = "板球学习指南";
pub const LAST_UPDATED: &str = "最后更新: 2025-11-05";
const SKELETON_ROWS: usize = 10;
const H_PADDING: u16 = 2;
const LIST_BULLET: &str = "  • ";

pub struct ContentSnapshot<'a> {
    pub selected: Option<&'a KnowledgeNode>,
    /// Root-to-selected chain; empty when the node is not in the tree.
    pub ancestors: Vec<&'a KnowledgeNode>,
    pub loading: bool,
    pub blocks: &'a [MarkupBlock],
    pub scroll: usize,
}

pub struct ContentView {
    area: Option<Rect>,
    line_count: usize,
}

impl ContentView {
    pub fn new() -> Self {
        Self {
            area: None,
            line_count: 0,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    pub fn view_height(&self) -> Option<usize> {
        let area = self.area?;
        Some(area.height as usize)
    }

    /// Number of wrapped lines produced by the last render.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        content: &ContentSnapshot<'_>,
        theme: &UiTheme,
    ) {
        if area.width == 0 || area.height == 0 {
            self.area = None;
            self.line_count = 0;
            return;
        }
        self.area = Some(area);

        let padding = if area.width > H_PADDING * 2 + 10 {
            H_PADDING
        } else {
            0
        };
        let inner = Rect::new(
            area.x + padding,
            area.y,
            area.width - padding * 2,
            area.height,
        );

        let lines = document_lines(content, inner.width as usize, theme);
        self.line_count = lines.len();

        let start = content.scroll.min(lines.len());
        let visible: Vec<Line> = lines
            .into_iter()
            .skip(start)
            .take(inner.height as usize)
            .collect();
        frame.render_widget(Paragraph::new(visible), inner);
    }
}

impl Default for ContentView {
    fn default() -> Self {
        Self::new()
    }
}

pub fn document_lines(
    content: &ContentSnapshot<'_>,
    width: usize,
    theme: &UiTheme,
) -> Vec<Line<'static>> {
    let Some(node) = content.selected else {
        return welcome_lines(width, theme);
    };

    let mut lines = Vec::new();
    lines.push(breadcrumb_line(node, &content.ancestors, theme));
    lines.push(Line::default());
    lines.push(meta_line(node.level, theme));
    lines.push(Line::default());

    let title_style = Style::default()
        .fg(theme.header_fg)
        .add_modifier(Modifier::BOLD);
    lines.extend(wrap_segments(
        &[(node.title.clone(), title_style)],
        width,
        0,
    ));
    lines.push(Line::default());

    if content.loading {
        let bar = "░".repeat(width);
        for _ in 0..SKELETON_ROWS {
            lines.push(Line::from(Span::styled(
                bar.clone(),
                Style::default().fg(theme.separator),
            )));
        }
    } else {
        for block in content.blocks {
            lines.extend(block_lines(block, width, theme));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(theme.separator),
    )));
    lines.push(
        Line::from(Span::styled(LAST_UPDATED, Style::default().fg(theme.muted_fg))).right_aligned(),
    );
    lines
}

pub fn welcome_lines(width: usize, theme: &UiTheme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("▤", Style::default().fg(theme.muted_fg))).centered(),
        Line::default(),
        Line::from(Span::styled(
            WELCOME_TITLE,
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::default(),
    ];

    for line in wrap_segments(
        &[(
            WELCOME_SUBTITLE.to_string(),
            Style::default().fg(theme.muted_fg),
        )],
        width,
        0,
    ) {
        lines.push(line.centered());
    }
    lines.push(Line::default());

    let card_colors = [
        theme.accent_fg,
        theme.beginner_fg,
        theme.intermediate_fg,
        Color::Indexed(6),
        theme.advanced_fg,
        theme.muted_fg,
    ];
    for ((title, desc), color) in WELCOME_CARDS.iter().zip(card_colors) {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(
                *title,
                Style::default()
                    .fg(theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.extend(wrap_segments(
            &[(desc.to_string(), Style::default().fg(theme.muted_fg))],
            width,
            2,
        ));
        lines.push(Line::default());
    }
    lines
}

/// `首页 › a › b › node`, the last crumb emphasised.
pub fn breadcrumb_line(
    node: &KnowledgeNode,
    ancestors: &[&KnowledgeNode],
    theme: &UiTheme,
) -> Line<'static> {
    let muted = Style::default().fg(theme.muted_fg);
    let mut spans = vec![Span::styled(HOME_CRUMB, muted)];

    let titles: Vec<&str> = if ancestors.is_empty() {
        vec![node.title.as_str()]
    } else {
        ancestors.iter().map(|n| n.title.as_str()).collect()
    };
    let last = titles.len() - 1;
    for (i, title) in titles.into_iter().enumerate() {
        spans.push(Span::styled(" › ", muted));
        let style = if i == last {
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            muted
        };
        spans.push(Span::styled(title.to_string(), style));
    }
    Line::from(spans)
}

pub fn meta_line(level: Option<Level>, theme: &UiTheme) -> Line<'static> {
    let muted = Style::default().fg(theme.muted_fg);
    let mut spans = Vec::new();
    if let Some(level) = level {
        spans.push(Span::styled(
            format!("[{}]", level.label()),
            Style::default()
                .fg(theme.level_fg(level))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(format!("◷ {READING_TIME}"), muted));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(format!("✎ {AUTHOR}"), muted));
    Line::from(spans)
}

pub fn block_lines(block: &MarkupBlock, width: usize, theme: &UiTheme) -> Vec<Line<'static>> {
    let text = Style::default().fg(theme.text_fg);
    match block {
        MarkupBlock::Heading { level, text: title } => {
            let style = match level {
                1 => Style::default()
                    .fg(theme.header_fg)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                2 => Style::default()
                    .fg(theme.accent_fg)
                    .add_modifier(Modifier::BOLD),
                3 => Style::default()
                    .fg(theme.header_fg)
                    .add_modifier(Modifier::BOLD),
                _ => Style::default().fg(theme.text_fg).add_modifier(Modifier::BOLD),
            };
            wrap_segments(&[(title.clone(), style)], width, 0)
        }
        MarkupBlock::ListItem(item) => {
            let mut segments = vec![(LIST_BULLET.to_string(), Style::default().fg(theme.accent_fg))];
            segments.extend(inline_segments(item, text));
            wrap_segments(&segments, width, LIST_BULLET.width())
        }
        MarkupBlock::Spacer => vec![Line::default()],
        MarkupBlock::Emphasis(note) => wrap_segments(
            &[(
                note.clone(),
                Style::default()
                    .fg(theme.muted_fg)
                    .add_modifier(Modifier::ITALIC),
            )],
            width,
            0,
        ),
        MarkupBlock::Paragraph(para) => wrap_segments(&inline_segments(para, text), width, 0),
    }
}

/// Splits on `**` pairs; an unpaired marker is kept as literal text.
pub fn inline_segments(text: &str, base: Style) -> Vec<(String, Style)> {
    let parts: Vec<&str> = text.split("**").collect();
    if parts.len() < 3 || parts.len() % 2 == 0 {
        return vec![(text.to_string(), base)];
    }

    parts
        .into_iter()
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            let style = if i % 2 == 1 {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            (part.to_string(), style)
        })
        .collect()
}

/// Greedy wrap by display width. Breaks after the last space on the line
/// when there is one, otherwise between characters (CJK text has no spaces).
pub fn wrap_segments(
    segments: &[(String, Style)],
    width: usize,
    hanging_indent: usize,
) -> Vec<Line<'static>> {
    let width = width.max(1);
    let hanging_indent = if hanging_indent >= width {
        0
    } else {
        hanging_indent
    };

    let chars: Vec<(char, Style)> = segments
        .iter()
        .flat_map(|(text, style)| text.chars().map(move |c| (c, *style)))
        .collect();
    if chars.is_empty() {
        return vec![Line::default()];
    }

    let mut rows: Vec<Vec<(char, Style)>> = Vec::new();
    let mut current: Vec<(char, Style)> = Vec::new();
    let mut current_width = 0usize;
    let mut last_space: Option<usize> = None;

    for (ch, style) in chars {
        let ch_width = ch.width().unwrap_or(0);
        let limit = if rows.is_empty() {
            width
        } else {
            width - hanging_indent
        };

        if current_width + ch_width > limit && !current.is_empty() {
            let carry = match last_space {
                Some(pos) if pos + 1 < current.len() => current.split_off(pos + 1),
                _ => Vec::new(),
            };
            rows.push(std::mem::take(&mut current));
            current = carry;
            current_width = current.iter().map(|(c, _)| c.width().unwrap_or(0)).sum();
            last_space = None;
            if ch == ' ' && current.is_empty() {
                continue;
            }
        }

        if ch == ' ' {
            last_space = Some(current.len());
        }
        current.push((ch, style));
        current_width += ch_width;
    }
    if !current.is_empty() {
        rows.push(current);
    }

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::new();
            if i > 0 && hanging_indent > 0 {
                spans.push(Span::raw(" ".repeat(hanging_indent)));
            }
            spans.extend(group_spans(row));
            Line::from(spans)
        })
        .collect()
}

fn group_spans(row: Vec<(char, Style)>) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut buf = String::new();
    let mut buf_style: Option<Style> = None;

    for (ch, style) in row {
        if buf_style.is_some_and(|s| s != style) {
            spans.push(Span::styled(std::mem::take(&mut buf), buf_style.unwrap_or_default()));
        }
        buf_style = Some(style);
        buf.push(ch);
    }
    if let Some(style) = buf_style {
        spans.push(Span::styled(buf, style));
    }
    spans
}

#[cfg(test)]
#[path = "../../tests/unit/views/content_view.rs"]
mod tests;
