use super::message::AppMessage;
use crate::kernel::content;
use crate::kernel::services::adapters::documents::{fetch_content_map, fetch_tree};
use crate::kernel::services::ports::DocumentSource;
use crate::models::KnowledgeNode;
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    source: Arc<dyn DocumentSource>,
    tree_document: String,
    content_document: String,
}

impl AsyncRuntime {
    pub fn new(
        tx: Sender<AppMessage>,
        source: Arc<dyn DocumentSource>,
        tree_document: impl Into<String>,
        content_document: impl Into<String>,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            source,
            tree_document: tree_document.into(),
            content_document: content_document.into(),
        })
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    pub fn load_tree(&self) {
        let tx = self.tx.clone();
        let source = Arc::clone(&self.source);
        let name = self.tree_document.clone();
        self.runtime.spawn(async move {
            match fetch_tree(source.as_ref(), &name).await {
                Ok(roots) => {
                    let _ = tx.send(AppMessage::TreeLoaded { roots });
                }
                Err(e) => {
                    tracing::error!(document = %name, error = %e, "knowledge tree load failed");
                    let _ = tx.send(AppMessage::TreeLoadFailed {
                        error: e.to_string(),
                    });
                }
            }
        });
    }

    /// The content document is fetched again for every request.
    pub fn load_content(&self, request_id: u64, node: KnowledgeNode) {
        let tx = self.tx.clone();
        let source = Arc::clone(&self.source);
        let name = self.content_document.clone();
        self.runtime.spawn(async move {
            let fetched = fetch_content_map(source.as_ref(), &name)
                .await
                .map(|mut map| map.remove(&node.id).map(|entry| entry.content));
            let content = content::resolve(&node, fetched);
            let _ = tx.send(AppMessage::ContentResolved {
                request_id,
                content,
            });
        });
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/runtime.rs"]
mod tests;
