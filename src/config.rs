use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the NLP backend
    pub api_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout_secs: Option<u64>,
    /// Event polling interval for the UI loop
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: None,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".nlp-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        Self::from_json(&contents)
    }

    fn from_json(contents: &str) -> Option<Config> {
        serde_json::from_str(contents).ok()
    }

    /// Config file (or defaults) with command line overrides applied
    pub fn resolve(cli: &Cli) -> Config {
        Self::load().unwrap_or_default().with_overrides(cli)
    }

    fn with_overrides(mut self, cli: &Cli) -> Config {
        if let Some(ref url) = cli.api_url {
            self.api_url = url.clone();
        }
        self
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}
