//! 命令行参数与启动配置解析

use std::path::Path;

use clap::Parser;
use cricket_guide::kernel::services::adapters::DataLocation;
use cricket_guide::kernel::services::ports::settings::DEFAULT_DATA_LOCATION;
use cricket_guide::kernel::services::ports::Settings;

/// Terminal guide to cricket: rules, skills, tactics and training.
#[derive(Parser, Debug, Default)]
#[command(name = "cricket-guide")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Data directory or http(s) base URL holding the knowledge documents
    #[arg(short, long, env = "CRICKET_GUIDE_DATA")]
    pub data: Option<String>,

    /// File name of the knowledge tree document
    #[arg(long)]
    pub tree_document: Option<String>,

    /// File name of the content document
    #[arg(long)]
    pub content_document: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub location: DataLocation,
    pub tree_document: String,
    pub content_document: String,
}

/// Command line (or env) wins over settings, settings over the built-in default.
pub fn resolve_startup_config(cli: Cli, settings: &Settings, cwd: &Path) -> StartupConfig {
    let data = cli
        .data
        .or_else(|| settings.data.clone())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_LOCATION.to_string());

    StartupConfig {
        location: DataLocation::parse(&data).resolve_against(cwd),
        tree_document: non_blank(cli.tree_document)
            .unwrap_or_else(|| settings.tree_document.clone()),
        content_document: non_blank(cli.content_document)
            .unwrap_or_else(|| settings.content_document.clone()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup_config.rs"]
mod tests;
