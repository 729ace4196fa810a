//! Line-oriented markup: each input line becomes exactly one display block.
//!
//! Only line prefixes are recognised. Inline markers such as `**bold**` or
//! `[links](...)` are left in the text untouched.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupBlock {
    /// `#` .. `####`, level 1..=4.
    Heading { level: u8, text: String },
    ListItem(String),
    Spacer,
    /// A line wrapped in `*`, shown as a muted footnote.
    Emphasis(String),
    Paragraph(String),
}

impl MarkupBlock {
    pub fn text(&self) -> &str {
        match self {
            MarkupBlock::Heading { text, .. } => text,
            MarkupBlock::ListItem(text) => text,
            MarkupBlock::Spacer => "",
            MarkupBlock::Emphasis(text) => text,
            MarkupBlock::Paragraph(text) => text,
        }
    }
}

const HEADINGS: [(&str, u8); 4] = [("# ", 1), ("## ", 2), ("### ", 3), ("#### ", 4)];

pub fn format_content(raw: &str) -> Vec<MarkupBlock> {
    raw.split('\n').map(format_line).collect()
}

pub fn format_line(line: &str) -> MarkupBlock {
    for (prefix, level) in HEADINGS {
        if let Some(text) = line.strip_prefix(prefix) {
            return MarkupBlock::Heading {
                level,
                text: text.to_string(),
            };
        }
    }

    if let Some(text) = line.strip_prefix("- ") {
        return MarkupBlock::ListItem(text.to_string());
    }

    if line.trim().is_empty() {
        return MarkupBlock::Spacer;
    }

    if line.starts_with('*') && line.ends_with('*') {
        // A lone "*" both starts and ends the line; it is kept as-is.
        let inner = if line.len() >= 2 {
            &line[1..line.len() - 1]
        } else {
            line
        };
        return MarkupBlock::Emphasis(inner.to_string());
    }

    MarkupBlock::Paragraph(line.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/models/markup.rs"]
mod tests;
