//! Service ports: traits + data contracts.

pub mod document;
pub mod settings;

pub use document::{ContentEntry, ContentMap, DocumentSource, FetchError};
pub use settings::{Settings, ThemeSettings};
