//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod documents;
#[cfg(test)]
pub mod memory;
pub mod runtime;
pub mod settings;
pub mod source;

pub use documents::{fetch_content_map, fetch_tree};
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
};
pub use source::{DataLocation, HttpSource, LocalSource};
