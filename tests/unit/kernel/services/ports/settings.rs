use super::*;

#[test]
fn empty_object_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();

    assert!(settings.data.is_none());
    assert_eq!(settings.tree_document, DEFAULT_TREE_DOCUMENT);
    assert_eq!(settings.content_document, DEFAULT_CONTENT_DOCUMENT);
    assert_eq!(settings.compact_width, 80);
    assert_eq!(settings.sidebar_width, 36);
    assert_eq!(settings.theme.accent_fg.as_deref(), Some("#3B82F6"));
}

#[test]
fn partial_settings_keep_other_defaults() {
    let settings: Settings = serde_json::from_str(
        r#"{"data":"https://example.org/data","compact_width":100,"theme":{"accent_fg":"cyan"}}"#,
    )
    .unwrap();

    assert_eq!(settings.data.as_deref(), Some("https://example.org/data"));
    assert_eq!(settings.compact_width, 100);
    assert_eq!(settings.tree_document, DEFAULT_TREE_DOCUMENT);
    assert_eq!(settings.theme.accent_fg.as_deref(), Some("cyan"));
    assert!(settings.theme.beginner_fg.is_none());
}

#[test]
fn unset_data_is_not_written() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(!json.contains("\"data\""));
    assert!(!json.contains("selected_bg"));
}
