//! Log setup
//!
//! The terminal belongs to the UI, so tracing output goes to a file.

use crate::config::Config;
use anyhow::{Context, Result};
use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "nlp-tui.log";
const DEFAULT_DIRECTIVE: &str = "nlp_tui=info";

/// Default log location inside the config directory
pub fn default_log_path() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

/// Install a file-backed tracing subscriber
///
/// `RUST_LOG` replaces the default filter; without it the app logs at `info`.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = build_filter(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}

/// Filter from a `RUST_LOG` value, falling back to the default when it is
/// unset, blank or unparsable
fn build_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_overrides_default() {
        let filter = build_filter(Some("nlp_tui=debug"));
        assert_eq!(filter.to_string(), "nlp_tui=debug");
    }

    #[test]
    fn test_default_filter_without_rust_log() {
        assert_eq!(build_filter(None).to_string(), DEFAULT_DIRECTIVE);
        assert_eq!(build_filter(Some("  ")).to_string(), DEFAULT_DIRECTIVE);
    }
}
