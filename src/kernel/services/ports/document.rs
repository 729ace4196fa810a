use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of the content document, keyed by node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

pub type ContentMap = HashMap<String, ContentEntry>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only access to the named static documents.
#[async_trait]
pub trait DocumentSource: Send + Sync + 'static {
    async fn fetch_text(&self, name: &str) -> Result<String, FetchError>;

    /// Human readable location, for logs.
    fn describe(&self) -> String;
}
