//! Comparison example loader
//!
//! Fetches the stemming vs lemmatization examples once at startup. When the
//! backend has no comparison endpoint the seeded words are enriched one by
//! one with stem/lemmatize calls instead.

use crate::model::{ExampleRow, ExampleTable};
use crate::services::NlpBackend;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Progress reported by the loader worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleMessage {
    /// Backend supplied the whole table
    Replaced {
        rows: Vec<ExampleRow>,
        differences: Vec<String>,
    },
    /// Fallback results for a single word; `None` keeps the current value
    Enriched {
        index: usize,
        stem: Option<String>,
        lemma: Option<String>,
    },
    /// Nothing more will be sent
    Finished,
}

impl ExampleMessage {
    /// Apply this message to the table
    pub fn apply(self, table: &mut ExampleTable) {
        match self {
            ExampleMessage::Replaced { rows, differences } => table.replace(rows, differences),
            ExampleMessage::Enriched { index, stem, lemma } => {
                if let Some(stem) = stem {
                    table.set_stem(index, stem);
                }
                if let Some(lemma) = lemma {
                    table.set_lemma(index, lemma);
                }
            }
            ExampleMessage::Finished => {}
        }
    }
}

/// Load comparison examples, reporting through `emit`
///
/// Failures never reach the caller; they are logged and the affected
/// values keep their defaults.
pub fn fetch_examples(backend: &dyn NlpBackend, words: &[String], mut emit: impl FnMut(ExampleMessage)) {
    match backend.comparison_examples() {
        Ok(response) => {
            tracing::info!(
                "Loaded {} comparison examples from backend",
                response.examples.len()
            );
            emit(ExampleMessage::Replaced {
                rows: response.examples.into_iter().map(ExampleRow::from).collect(),
                differences: response.differences,
            });
        }
        Err(err) => {
            tracing::warn!("Error fetching examples, enriching defaults instead: {:#}", err);
            for (index, word) in words.iter().enumerate() {
                let stem = first_token(backend.stem(word), "stem", word);
                let lemma = first_token(backend.lemmatize(word), "lemmatize", word);
                tracing::debug!("Enriched '{}': stem={:?} lemma={:?}", word, stem, lemma);

                if stem.is_some() || lemma.is_some() {
                    emit(ExampleMessage::Enriched { index, stem, lemma });
                }
            }
        }
    }
    emit(ExampleMessage::Finished);
}

fn first_token(result: anyhow::Result<Vec<String>>, endpoint: &str, word: &str) -> Option<String> {
    match result {
        Ok(tokens) => tokens.into_iter().next(),
        Err(err) => {
            tracing::warn!("Error calling /{} for '{}': {:#}", endpoint, word, err);
            None
        }
    }
}

/// Background loader polled by the UI thread
pub struct ExampleLoader {
    receiver: Option<Receiver<ExampleMessage>>,
}

impl ExampleLoader {
    /// Start loading on a worker thread
    pub fn spawn(backend: Arc<dyn NlpBackend>, words: Vec<String>) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            fetch_examples(&*backend, &words, |message| {
                let _ = tx.send(message);
            });
        });

        Self { receiver: Some(rx) }
    }

    /// A loader with nothing to do
    pub fn idle() -> Self {
        Self { receiver: None }
    }

    pub fn is_finished(&self) -> bool {
        self.receiver.is_none()
    }

    /// Apply pending messages, returns true if the table changed
    pub fn poll(&mut self, table: &mut ExampleTable) -> bool {
        let Some(ref receiver) = self.receiver else {
            return false;
        };

        let mut changed = false;
        let mut done = false;

        loop {
            match receiver.try_recv() {
                Ok(ExampleMessage::Finished) => {
                    done = true;
                    break;
                }
                Ok(message) => {
                    message.apply(table);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    done = true;
                    break;
                }
            }
        }

        if done {
            self.receiver = None;
        }

        changed
    }
}
