//! Processing results - the output of one text-processing request

/// A `(text, label)` pair, used for POS tags and named entities
pub type Labeled = (String, String);

/// Results of the five NLP calls for a single input text
///
/// Every field is always present; "no data" is an empty vec. A successful
/// request replaces the whole set, never individual fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub tokens: Vec<String>,
    pub stemmed: Vec<String>,
    pub lemmatized: Vec<String>,
    pub pos: Vec<Labeled>,
    pub entities: Vec<Labeled>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no request has produced anything yet
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
            && self.stemmed.is_empty()
            && self.lemmatized.is_empty()
            && self.pos.is_empty()
            && self.entities.is_empty()
    }

    /// Replace the whole set with fresh results
    pub fn replace(&mut self, fresh: ResultSet) {
        *self = fresh;
    }
}

/// Outcome of a finished processing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Results were replaced
    Updated,
    /// Request failed; previous results were kept
    Failed(String),
}
