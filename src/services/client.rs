//! NLP backend client
//!
//! `NlpBackend` is the seam between the UI and the remote service; the
//! production implementation talks HTTP with a blocking reqwest client.

use crate::config::Config;
use crate::model::{ExampleRow, Labeled};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════════
// Wire Types
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
pub struct TokenizeResponse {
    #[serde(default)]
    pub tokens: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StemResponse {
    #[serde(default)]
    pub stemmed_tokens: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LemmatizeResponse {
    #[serde(default)]
    pub lemmatized_tokens: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PosResponse {
    #[serde(default)]
    pub pos_tags: Vec<Labeled>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EntityResponse {
    #[serde(default)]
    pub entities: Vec<Labeled>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonExample {
    pub word: String,
    pub stemmed: String,
    pub lemmatized: String,
    pub explanation: String,
}

impl From<ComparisonExample> for ExampleRow {
    fn from(example: ComparisonExample) -> Self {
        ExampleRow {
            word: example.word,
            stem: example.stemmed,
            lemma: example.lemmatized,
            explanation: example.explanation,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonResponse {
    pub examples: Vec<ComparisonExample>,
    pub differences: Vec<String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Backend Trait
// ═══════════════════════════════════════════════════════════════════════════════

/// Operations offered by the NLP service
pub trait NlpBackend: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
    fn stem(&self, text: &str) -> Result<Vec<String>>;
    fn lemmatize(&self, text: &str) -> Result<Vec<String>>;
    fn pos_tagging(&self, text: &str) -> Result<Vec<Labeled>>;
    fn entity_recognition(&self, text: &str) -> Result<Vec<Labeled>>;
    fn comparison_examples(&self) -> Result<ComparisonResponse>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// HTTP Implementation
// ═══════════════════════════════════════════════════════════════════════════════

/// NLP backend reached over plain HTTP GET
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.base_url(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET `path` with an optional `text` query and decode the JSON body
    fn get<T: DeserializeOwned>(&self, path: &str, text: Option<&str>) -> Result<T> {
        let mut request = self.client.get(self.endpoint(path));
        if let Some(text) = text {
            request = request.query(&[("text", text)]);
        }

        let response = request
            .send()
            .with_context(|| format!("Request to /{} failed", path))?
            .error_for_status()
            .with_context(|| format!("/{} returned an error status", path))?;

        response
            .json::<T>()
            .with_context(|| format!("Malformed response from /{}", path))
    }
}

impl NlpBackend for HttpBackend {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.get::<TokenizeResponse>("tokenize", Some(text))?.tokens)
    }

    fn stem(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.get::<StemResponse>("stem", Some(text))?.stemmed_tokens)
    }

    fn lemmatize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .get::<LemmatizeResponse>("lemmatize", Some(text))?
            .lemmatized_tokens)
    }

    fn pos_tagging(&self, text: &str) -> Result<Vec<Labeled>> {
        Ok(self.get::<PosResponse>("pos_tagging", Some(text))?.pos_tags)
    }

    fn entity_recognition(&self, text: &str) -> Result<Vec<Labeled>> {
        Ok(self
            .get::<EntityResponse>("entity_recognition", Some(text))?
            .entities)
    }

    fn comparison_examples(&self) -> Result<ComparisonResponse> {
        self.get::<ComparisonResponse>("comparison_examples", None)
    }
}
