use super::*;
use crate::kernel::services::adapters::memory::MemorySource;
use crate::kernel::services::adapters::source::LocalSource;
use crate::kernel::ContentOrigin;
use crate::models::{Level, NodeType};
use std::sync::mpsc;
use std::time::Duration;
use tempfile::tempdir;

const TREE: &str = "knowledge-tree.json";
const CONTENT: &str = "cricket-content.json";

fn node(id: &str, title: &str) -> KnowledgeNode {
    KnowledgeNode {
        id: id.to_string(),
        title: title.to_string(),
        node_type: NodeType::Content,
        level: Some(Level::Intermediate),
        children: None,
    }
}

fn runtime_with(source: MemorySource) -> (AsyncRuntime, mpsc::Receiver<AppMessage>) {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx, Arc::new(source), TREE, CONTENT).unwrap();
    (runtime, rx)
}

fn recv(rx: &mpsc::Receiver<AppMessage>) -> AppMessage {
    rx.recv_timeout(Duration::from_secs(5)).unwrap()
}

#[test]
fn load_tree_sends_roots() {
    let source = MemorySource::new().with_doc(
        TREE,
        r#"{"categories":[{"id":"a","title":"A","type":"category","children":[]}]}"#,
    );
    let (runtime, rx) = runtime_with(source);

    runtime.load_tree();

    match recv(&rx) {
        AppMessage::TreeLoaded { roots } => {
            assert_eq!(roots.len(), 1);
            assert_eq!(roots[0].id, "a");
        }
        _ => panic!("expected TreeLoaded"),
    }
}

#[test]
fn load_tree_reports_missing_document() {
    let (runtime, rx) = runtime_with(MemorySource::new());
    runtime.load_tree();
    assert!(matches!(recv(&rx), AppMessage::TreeLoadFailed { .. }));
}

#[test]
fn load_tree_reports_malformed_json() {
    let (runtime, rx) = runtime_with(MemorySource::new().with_doc(TREE, "{not json"));
    runtime.load_tree();
    match recv(&rx) {
        AppMessage::TreeLoadFailed { error } => assert!(error.contains(TREE)),
        _ => panic!("expected TreeLoadFailed"),
    }
}

#[test]
fn load_content_uses_stored_entry() {
    let source = MemorySource::new().with_doc(
        CONTENT,
        r##"{"pull":{"content":"# Pull shot\n- Back foot","title":"Pull"}}"##,
    );
    let (runtime, rx) = runtime_with(source);

    runtime.load_content(7, node("pull", "Pull shot"));

    match recv(&rx) {
        AppMessage::ContentResolved {
            request_id,
            content,
        } => {
            assert_eq!(request_id, 7);
            assert_eq!(content.origin, ContentOrigin::Stored);
            assert_eq!(content.text, "# Pull shot\n- Back foot");
        }
        _ => panic!("expected ContentResolved"),
    }
}

#[test]
fn load_content_falls_back_to_placeholder() {
    let source = MemorySource::new().with_doc(CONTENT, r#"{"other":{"content":"x"}}"#);
    let (runtime, rx) = runtime_with(source);

    runtime.load_content(1, node("hook", "Hook shot"));

    match recv(&rx) {
        AppMessage::ContentResolved { content, .. } => {
            assert_eq!(content.origin, ContentOrigin::Placeholder);
            assert!(content.text.contains("Hook shot"));
            assert!(content.text.contains("进阶级"));
        }
        _ => panic!("expected ContentResolved"),
    }
}

#[test]
fn unreachable_content_document_still_resolves() {
    let (runtime, rx) = runtime_with(MemorySource::new());
    runtime.load_content(3, node("cut", "Cut"));
    match recv(&rx) {
        AppMessage::ContentResolved {
            request_id,
            content,
        } => {
            assert_eq!(request_id, 3);
            assert_eq!(content.origin, ContentOrigin::Placeholder);
        }
        _ => panic!("expected ContentResolved"),
    }
}

#[test]
fn every_request_refetches_the_content_document() {
    let source = Arc::new(
        MemorySource::new()
            .with_doc(CONTENT, "{}")
            .with_delay(Duration::from_millis(20)),
    );
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx, source.clone(), TREE, CONTENT).unwrap();

    runtime.load_content(1, node("a", "A"));
    runtime.load_content(2, node("b", "B"));

    let mut seen = Vec::new();
    for _ in 0..2 {
        if let AppMessage::ContentResolved {
            request_id,
            content,
        } = recv(&rx)
        {
            seen.push((request_id, content.node_id));
        }
    }
    seen.sort();
    assert_eq!(seen, vec![(1, "a".to_string()), (2, "b".to_string())]);
    assert_eq!(source.fetch_count(), 2);
}

#[test]
fn local_source_end_to_end() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(TREE),
        r#"{"categories":[{"id":"bat","title":"Batting","type":"category"}]}"#,
    )
    .unwrap();

    let (tx, rx) = mpsc::channel();
    let source = Arc::new(LocalSource::new(dir.path().to_path_buf()));
    let runtime = AsyncRuntime::new(tx, source, TREE, CONTENT).unwrap();

    runtime.load_tree();
    match recv(&rx) {
        AppMessage::TreeLoaded { roots } => assert_eq!(roots[0].title, "Batting"),
        _ => panic!("expected TreeLoaded"),
    }
}
