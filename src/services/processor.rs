//! Text processing service
//!
//! Fans one input text out to the five NLP endpoints on a background
//! thread and hands the aggregated results back to the UI thread.

use crate::model::{Labeled, ProcessOutcome, ResultSet};
use crate::services::NlpBackend;
use anyhow::{anyhow, Context, Result};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// An in-flight processing request
struct ProcessJob {
    receiver: Receiver<Result<ResultSet, String>>,
    start_instant: Instant,
}

/// Runs processing requests, at most one at a time
pub struct TextProcessor {
    backend: Arc<dyn NlpBackend>,
    /// Current request (if any); its presence is the loading flag
    job: Option<ProcessJob>,
}

impl TextProcessor {
    pub fn new(backend: Arc<dyn NlpBackend>) -> Self {
        Self { backend, job: None }
    }

    pub fn is_loading(&self) -> bool {
        self.job.is_some()
    }

    /// Dispatch a request for `text`
    ///
    /// Returns false without touching the network when the text is blank
    /// or a request is already in flight.
    pub fn start(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            tracing::debug!("Ignoring process request for blank input");
            return false;
        }
        if self.is_loading() {
            tracing::debug!("Ignoring process request while another is in flight");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        let backend = Arc::clone(&self.backend);
        let text = text.to_string();

        tracing::info!("Processing {} characters of text", text.chars().count());

        thread::spawn(move || {
            let result = process_text(backend, &text).map_err(|e| format!("{:#}", e));
            let _ = tx.send(result);
        });

        self.job = Some(ProcessJob {
            receiver: rx,
            start_instant: Instant::now(),
        });

        true
    }

    /// Check for a finished request
    ///
    /// On success `results` is replaced wholesale; on failure it is left
    /// untouched. Loading is cleared whenever an outcome is returned.
    pub fn poll(&mut self, results: &mut ResultSet) -> Option<ProcessOutcome> {
        let job = self.job.as_ref()?;

        let outcome = match job.receiver.try_recv() {
            Ok(Ok(fresh)) => {
                tracing::info!(
                    "Processing finished in {:.2}s: {} tokens, {} entities",
                    job.start_instant.elapsed().as_secs_f64(),
                    fresh.tokens.len(),
                    fresh.entities.len()
                );
                results.replace(fresh);
                ProcessOutcome::Updated
            }
            Ok(Err(err)) => {
                tracing::warn!("Error processing text: {}", err);
                ProcessOutcome::Failed(err)
            }
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("Processing worker exited without a result");
                ProcessOutcome::Failed("processing worker exited".to_string())
            }
        };

        self.job = None;
        Some(outcome)
    }
}

/// One endpoint's payload, tagged by field
enum Part {
    Tokens(Vec<String>),
    Stemmed(Vec<String>),
    Lemmatized(Vec<String>),
    Pos(Vec<Labeled>),
    Entities(Vec<Labeled>),
}

type Call = fn(&dyn NlpBackend, &str) -> Result<Part>;

const CALLS: [(&str, Call); 5] = [
    ("tokenize", |b: &dyn NlpBackend, t: &str| b.tokenize(t).map(Part::Tokens)),
    ("stem", |b: &dyn NlpBackend, t: &str| b.stem(t).map(Part::Stemmed)),
    ("lemmatize", |b: &dyn NlpBackend, t: &str| b.lemmatize(t).map(Part::Lemmatized)),
    ("pos_tagging", |b: &dyn NlpBackend, t: &str| b.pos_tagging(t).map(Part::Pos)),
    ("entity_recognition", |b: &dyn NlpBackend, t: &str| b.entity_recognition(t).map(Part::Entities)),
];

/// Call all five endpoints concurrently and aggregate the results
///
/// Returns as soon as any call fails; calls still running are abandoned and
/// their results dropped. The set is only built once all five succeed.
pub fn process_text(backend: Arc<dyn NlpBackend>, text: &str) -> Result<ResultSet> {
    let (tx, rx) = mpsc::channel();

    for (endpoint, call) in CALLS {
        let backend = Arc::clone(&backend);
        let tx = tx.clone();
        let text = text.to_string();
        thread::spawn(move || {
            let _ = tx.send((endpoint, call(&*backend, &text)));
        });
    }
    drop(tx);

    let mut results = ResultSet::new();
    for _ in 0..CALLS.len() {
        let (endpoint, part) = rx
            .recv()
            .map_err(|_| anyhow!("request thread exited without a result"))?;
        match part.with_context(|| format!("/{} failed", endpoint))? {
            Part::Tokens(tokens) => results.tokens = tokens,
            Part::Stemmed(stemmed) => results.stemmed = stemmed,
            Part::Lemmatized(lemmatized) => results.lemmatized = lemmatized,
            Part::Pos(pos) => results.pos = pos,
            Part::Entities(entities) => results.entities = entities,
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{wait_for, FakeBackend};
    use std::time::Duration;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_process_text_collects_all_fields() {
        let backend = Arc::new(FakeBackend::new());

        let results = process_text(backend.clone(), "Google hired Sundar").unwrap();

        assert_eq!(results.tokens, vec!["Google", "hired", "Sundar"]);
        assert_eq!(results.stemmed, vec!["googl", "hire", "sundar"]);
        assert_eq!(results.lemmatized, vec!["google", "hire", "sundar"]);
        assert_eq!(
            results.pos,
            vec![pair("Google", "X"), pair("hired", "X"), pair("Sundar", "X")]
        );
        assert_eq!(results.entities, vec![pair("Google hired Sundar", "ORG")]);
        assert_eq!(backend.call_count(), 5);
    }

    #[test]
    fn test_process_text_one_failure_fails_all() {
        let backend = Arc::new(FakeBackend::new().failing("pos_tagging"));

        let err = process_text(backend, "Mountain View").unwrap_err();

        assert!(format!("{:#}", err).contains("/pos_tagging failed"));
    }

    #[test]
    fn test_process_text_fails_without_waiting_for_hung_call() {
        // tokenize blocks until released; pos_tagging fails straight away
        let (backend, release) = FakeBackend::new().failing("pos_tagging").gated();
        let backend = Arc::new(backend);

        let (tx, rx) = mpsc::channel();
        let worker_backend: Arc<dyn NlpBackend> = backend.clone();
        thread::spawn(move || {
            let _ = tx.send(process_text(worker_backend, "Mountain View"));
        });

        let result = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("failure should not wait for the hung call");
        assert!(result.is_err());

        drop(release);
    }

    #[test]
    fn test_start_updates_results() {
        let backend = Arc::new(FakeBackend::new());
        let mut processor = TextProcessor::new(backend.clone());
        let mut results = ResultSet::new();

        assert!(processor.start("cats running"));
        assert!(processor.is_loading());

        let outcome = wait_for(&mut processor, &mut results);

        assert_eq!(outcome, ProcessOutcome::Updated);
        assert!(!processor.is_loading());
        assert_eq!(results.tokens, vec!["cats", "running"]);
        assert_eq!(results.stemmed, vec!["cat", "run"]);
    }

    #[test]
    fn test_blank_input_makes_no_calls() {
        let backend = Arc::new(FakeBackend::new());
        let mut processor = TextProcessor::new(backend.clone());
        let mut results = ResultSet {
            tokens: vec!["kept".to_string()],
            ..Default::default()
        };

        assert!(!processor.start(""));
        assert!(!processor.start("   \n\t"));

        assert!(!processor.is_loading());
        assert!(processor.poll(&mut results).is_none());
        assert_eq!(backend.call_count(), 0);
        assert_eq!(results.tokens, vec!["kept".to_string()]);
    }

    #[test]
    fn test_failure_keeps_previous_results() {
        let backend = Arc::new(FakeBackend::new().failing("entity_recognition"));
        let mut processor = TextProcessor::new(backend);
        let previous = ResultSet {
            tokens: vec!["old".to_string()],
            stemmed: vec!["old".to_string()],
            lemmatized: vec!["old".to_string()],
            pos: vec![pair("old", "ADJ")],
            entities: vec![],
        };
        let mut results = previous.clone();

        assert!(processor.start("new text"));
        let outcome = wait_for(&mut processor, &mut results);

        assert!(matches!(outcome, ProcessOutcome::Failed(_)));
        assert!(!processor.is_loading());
        assert_eq!(results, previous);
    }

    #[test]
    fn test_second_start_while_loading_is_noop() {
        let (backend, release) = FakeBackend::new().gated();
        let backend = Arc::new(backend);
        let mut processor = TextProcessor::new(backend.clone());
        let mut results = ResultSet::new();

        assert!(processor.start("first"));
        assert!(!processor.start("second"));
        assert!(!processor.start("third"));

        release.send(()).unwrap();
        let outcome = wait_for(&mut processor, &mut results);

        assert_eq!(outcome, ProcessOutcome::Updated);
        assert_eq!(results.tokens, vec!["first"]);
        assert_eq!(backend.call_count(), 5);
        assert!(backend.texts().iter().all(|t| t == "first"));

        // Once idle, a new request goes through
        drop(release);
        assert!(processor.start("again"));
    }
}
