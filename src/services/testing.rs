//! In-memory backend used by the service and app tests

use crate::model::{Labeled, ProcessOutcome, ResultSet};
use crate::services::client::{ComparisonExample, ComparisonResponse};
use crate::services::{NlpBackend, TextProcessor};
use anyhow::{bail, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

const STEMS: &[(&str, &str)] = &[
    ("Google", "googl"),
    ("hired", "hire"),
    ("cats", "cat"),
    ("running", "run"),
    ("studies", "studi"),
];

const LEMMAS: &[(&str, &str)] = &[
    ("hired", "hire"),
    ("cats", "cat"),
    ("running", "run"),
    ("mice", "mouse"),
];

fn lookup(table: &[(&str, &str)], token: &str) -> String {
    table
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, out)| out.to_string())
        .unwrap_or_else(|| token.to_lowercase())
}

/// Deterministic fake NLP service
///
/// Tokens are whitespace-split, POS tags are all `X` and the whole text is
/// reported as one `ORG` entity.
pub struct FakeBackend {
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
    failing: Vec<&'static str>,
    empty_for: Vec<String>,
    comparison: Option<ComparisonResponse>,
    gate: Mutex<Option<Receiver<()>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            texts: Mutex::new(Vec::new()),
            failing: Vec::new(),
            empty_for: Vec::new(),
            comparison: None,
            gate: Mutex::new(None),
        }
    }

    /// Make `endpoint` fail on every call
    pub fn failing(mut self, endpoint: &'static str) -> Self {
        self.failing.push(endpoint);
        self
    }

    /// Return no tokens from stem/lemmatize for `word`
    pub fn empty_for(mut self, word: &str) -> Self {
        self.empty_for.push(word.to_string());
        self
    }

    /// Serve `examples`/`differences` from the comparison endpoint
    pub fn with_comparison(mut self, examples: &[(&str, &str, &str, &str)], differences: &[&str]) -> Self {
        self.comparison = Some(ComparisonResponse {
            examples: examples
                .iter()
                .map(|(word, stemmed, lemmatized, explanation)| ComparisonExample {
                    word: word.to_string(),
                    stemmed: stemmed.to_string(),
                    lemmatized: lemmatized.to_string(),
                    explanation: explanation.to_string(),
                })
                .collect(),
            differences: differences.iter().map(|d| d.to_string()).collect(),
        });
        self
    }

    /// Block `tokenize` until the returned sender fires (or is dropped)
    pub fn gated(self) -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        *self.gate.lock().unwrap() = Some(rx);
        (self, tx)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Texts received, one entry per call
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }

    fn record(&self, endpoint: &'static str, text: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(text.to_string());
        if self.failing.contains(&endpoint) {
            bail!("/{} unavailable", endpoint);
        }
        Ok(())
    }

    fn tokens(&self, text: &str, table: &[(&str, &str)]) -> Vec<String> {
        if self.empty_for.iter().any(|w| w == text) {
            return Vec::new();
        }
        text.split_whitespace().map(|t| lookup(table, t)).collect()
    }
}

impl NlpBackend for FakeBackend {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.record("tokenize", text)?;
        if let Some(rx) = self.gate.lock().unwrap().as_ref() {
            let _ = rx.recv();
        }
        Ok(text.split_whitespace().map(str::to_string).collect())
    }

    fn stem(&self, text: &str) -> Result<Vec<String>> {
        self.record("stem", text)?;
        Ok(self.tokens(text, STEMS))
    }

    fn lemmatize(&self, text: &str) -> Result<Vec<String>> {
        self.record("lemmatize", text)?;
        Ok(self.tokens(text, LEMMAS))
    }

    fn pos_tagging(&self, text: &str) -> Result<Vec<Labeled>> {
        self.record("pos_tagging", text)?;
        Ok(text
            .split_whitespace()
            .map(|t| (t.to_string(), "X".to_string()))
            .collect())
    }

    fn entity_recognition(&self, text: &str) -> Result<Vec<Labeled>> {
        self.record("entity_recognition", text)?;
        Ok(vec![(text.to_string(), "ORG".to_string())])
    }

    fn comparison_examples(&self) -> Result<ComparisonResponse> {
        self.record("comparison_examples", "")?;
        match self.comparison {
            Some(ref response) => Ok(response.clone()),
            None => bail!("/comparison_examples returned 404 Not Found"),
        }
    }
}

/// Poll `processor` until it reports an outcome
pub fn wait_for(processor: &mut TextProcessor, results: &mut ResultSet) -> ProcessOutcome {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(outcome) = processor.poll(results) {
            return outcome;
        }
        assert!(Instant::now() < deadline, "processing did not finish");
        thread::sleep(Duration::from_millis(5));
    }
}
