//! In-memory document source for tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::kernel::services::ports::{DocumentSource, FetchError};

#[derive(Default)]
pub struct MemorySource {
    docs: HashMap<String, String>,
    delay: Option<Duration>,
    fetches: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doc(mut self, name: &str, text: &str) -> Self {
        self.docs.insert(name.to_string(), text.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn fetch_text(&self, name: &str) -> Result<String, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.docs.get(name).cloned().ok_or_else(|| FetchError::Io {
            path: PathBuf::from(name),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
        })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
