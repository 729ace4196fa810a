//! Document sources: a local data directory or an http(s) base URL.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::kernel::services::ports::{DocumentSource, FetchError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    Local(PathBuf),
    Remote(String),
}

impl DataLocation {
    pub fn parse(value: &str) -> Self {
        let v = value.trim();
        let lower = v.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataLocation::Remote(v.trim_end_matches('/').to_string())
        } else {
            DataLocation::Local(PathBuf::from(v))
        }
    }

    /// Relative paths are resolved against `cwd`.
    pub fn resolve_against(self, cwd: &Path) -> Self {
        match self {
            DataLocation::Local(path) if path.is_relative() => DataLocation::Local(cwd.join(path)),
            other => other,
        }
    }

    pub fn into_source(self) -> Arc<dyn DocumentSource> {
        match self {
            DataLocation::Local(dir) => Arc::new(LocalSource::new(dir)),
            DataLocation::Remote(base) => Arc::new(HttpSource::new(base)),
        }
    }
}

pub struct LocalSource {
    dir: PathBuf,
}

impl LocalSource {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

#[async_trait]
impl DocumentSource for LocalSource {
    async fn fetch_text(&self, name: &str) -> Result<String, FetchError> {
        let path = self.dir.join(name);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| FetchError::Io { path, source })
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

pub struct HttpSource {
    base_url: String,
    http: Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: build_http_client(),
        }
    }

    pub fn url_for(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            name.trim_start_matches('/')
        )
    }
}

fn build_http_client() -> Client {
    // Proxy auto-detection can panic in some sandboxed environments.
    match catch_unwind(AssertUnwindSafe(|| Client::builder().build())) {
        Ok(Ok(client)) => client,
        Ok(Err(_)) | Err(_) => Client::builder()
            .no_proxy()
            .build()
            .unwrap_or_else(|_| Client::new()),
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch_text(&self, name: &str) -> Result<String, FetchError> {
        let url = self.url_for(name);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Http {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Http {
            url,
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/source.rs"]
mod tests;
