//! Domain state - business/data state separate from UI concerns

use super::examples::ExampleTable;
use super::input::InputText;
use super::results::ResultSet;
use chrono::{DateTime, Local};

/// Domain state containing all view data fed by the backend
#[derive(Debug, Default)]
pub struct DomainState {
    /// Text to be processed
    pub input: InputText,

    /// Results of the last successful processing request
    pub results: ResultSet,

    /// Stemming vs lemmatization comparison table
    pub examples: ExampleTable,

    /// When `results` was last replaced
    pub last_processed: Option<DateTime<Local>>,
}

impl DomainState {
    pub fn new() -> Self {
        Self {
            input: InputText::new(),
            results: ResultSet::new(),
            examples: ExampleTable::new(),
            last_processed: None,
        }
    }
}
