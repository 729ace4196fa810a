//! Content resolution: stored text when the document has an entry for the
//! node, generated placeholder otherwise.

use crate::kernel::services::ports::FetchError;
use crate::models::{default_content, KnowledgeNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    Stored,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub node_id: String,
    pub text: String,
    pub origin: ContentOrigin,
}

/// `fetched` is the lookup result for `node.id` in the content document.
pub fn resolve(node: &KnowledgeNode, fetched: Result<Option<String>, FetchError>) -> ResolvedContent {
    match fetched {
        Ok(Some(text)) => ResolvedContent {
            node_id: node.id.clone(),
            text,
            origin: ContentOrigin::Stored,
        },
        Ok(None) => {
            tracing::debug!(id = %node.id, "no stored content, using placeholder");
            placeholder(node)
        }
        Err(e) => {
            tracing::warn!(id = %node.id, error = %e, "content fetch failed, using placeholder");
            placeholder(node)
        }
    }
}

fn placeholder(node: &KnowledgeNode) -> ResolvedContent {
    ResolvedContent {
        node_id: node.id.clone(),
        text: default_content(node),
        origin: ContentOrigin::Placeholder,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/content.rs"]
mod tests;
