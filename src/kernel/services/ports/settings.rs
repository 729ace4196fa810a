use serde::{Deserialize, Serialize};

pub const DEFAULT_TREE_DOCUMENT: &str = "knowledge-tree.json";
pub const DEFAULT_CONTENT_DOCUMENT: &str = "cricket-content.json";
pub const DEFAULT_DATA_LOCATION: &str = "public/data";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory or http(s) base URL holding the two documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default = "default_tree_document")]
    pub tree_document: String,
    #[serde(default = "default_content_document")]
    pub content_document: String,
    /// Terminals narrower than this use the collapsible sidebar.
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
    #[serde(default)]
    pub theme: ThemeSettings,
}

fn default_tree_document() -> String {
    DEFAULT_TREE_DOCUMENT.to_string()
}

fn default_content_document() -> String {
    DEFAULT_CONTENT_DOCUMENT.to_string()
}

fn default_compact_width() -> u16 {
    80
}

fn default_sidebar_width() -> u16 {
    36
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginner_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            accent_fg: Some("#3B82F6".to_string()),
            header_fg: Some("white".to_string()),
            separator: Some("dark_gray".to_string()),
            text_fg: Some("gray".to_string()),
            muted_fg: Some("dark_gray".to_string()),
            selected_bg: None,
            selected_fg: None,
            beginner_fg: Some("green".to_string()),
            intermediate_fg: Some("yellow".to_string()),
            advanced_fg: Some("red".to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: None,
            tree_document: default_tree_document(),
            content_document: default_content_document(),
            compact_width: default_compact_width(),
            sidebar_width: default_sidebar_width(),
            theme: ThemeSettings::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
