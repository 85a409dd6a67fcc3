//! Stemming vs lemmatization comparison examples
//!
//! The table starts from a seeded set of words and is either replaced by the
//! backend's `/comparison_examples` payload or enriched word by word.

/// A single row of the comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleRow {
    pub word: String,
    pub stem: String,
    pub lemma: String,
    pub explanation: String,
}

impl ExampleRow {
    pub fn new(word: &str, stem: &str, lemma: &str, explanation: &str) -> Self {
        Self {
            word: word.to_string(),
            stem: stem.to_string(),
            lemma: lemma.to_string(),
            explanation: explanation.to_string(),
        }
    }
}

/// Where the currently displayed examples came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExampleSource {
    /// Still showing the built-in defaults
    #[default]
    Defaults,
    /// Replaced by the backend's comparison endpoint
    Backend,
    /// Defaults enriched with per-word stem/lemmatize calls
    Enriched,
}

/// Comparison table plus the list of key differences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleTable {
    pub rows: Vec<ExampleRow>,
    pub differences: Vec<String>,
    pub source: ExampleSource,
}

impl Default for ExampleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleTable {
    pub fn new() -> Self {
        Self {
            rows: default_rows(),
            differences: default_differences(),
            source: ExampleSource::Defaults,
        }
    }

    /// Replace rows and differences verbatim
    pub fn replace(&mut self, rows: Vec<ExampleRow>, differences: Vec<String>) {
        self.rows = rows;
        self.differences = differences;
        self.source = ExampleSource::Backend;
    }

    /// Overwrite the stem of the row at `index`, if it exists
    pub fn set_stem(&mut self, index: usize, stem: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.stem = stem;
            self.source = ExampleSource::Enriched;
        }
    }

    /// Overwrite the lemma of the row at `index`, if it exists
    pub fn set_lemma(&mut self, index: usize, lemma: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.lemma = lemma;
            self.source = ExampleSource::Enriched;
        }
    }
}

/// The ten seeded comparison rows
pub fn default_rows() -> Vec<ExampleRow> {
    vec![
        ExampleRow::new("running", "run", "run", "Simple verb form"),
        ExampleRow::new("better", "better", "good", "Comparative adjective to base form"),
        ExampleRow::new("studies", "studi", "study", "Plural noun to singular"),
        ExampleRow::new("wolves", "wolv", "wolf", "Irregular plural"),
        ExampleRow::new("caring", "care", "care", "Continuous form"),
        ExampleRow::new("are", "are", "be", "Irregular verb form"),
        ExampleRow::new("mice", "mice", "mouse", "Irregular plural noun"),
        ExampleRow::new("understood", "understood", "understand", "Past tense"),
        ExampleRow::new("worst", "worst", "bad", "Superlative to base form"),
        ExampleRow::new("children", "children", "child", "Irregular plural"),
    ]
}

pub fn default_differences() -> Vec<String> {
    [
        "Stemming uses algorithmic rules to chop off word endings, sometimes resulting in non-words.",
        "Lemmatization uses linguistic knowledge to return proper dictionary forms.",
        "Stemming is faster but less accurate than lemmatization.",
        "Lemmatization considers the word's context and part of speech.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let table = ExampleTable::new();
        assert_eq!(table.rows.len(), 10);
        assert_eq!(table.differences.len(), 4);
        assert_eq!(table.source, ExampleSource::Defaults);

        let are = table.rows.iter().find(|r| r.word == "are").unwrap();
        assert_eq!(are.stem, "are");
        assert_eq!(are.lemma, "be");
    }

    #[test]
    fn test_replace_overrides_defaults() {
        let mut table = ExampleTable::new();
        table.replace(
            vec![ExampleRow::new("geese", "gees", "goose", "Irregular plural")],
            vec!["Only one difference".to_string()],
        );

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].lemma, "goose");
        assert_eq!(table.differences, vec!["Only one difference".to_string()]);
        assert_eq!(table.source, ExampleSource::Backend);
    }

    #[test]
    fn test_set_stem_out_of_range_is_ignored() {
        let mut table = ExampleTable::new();
        table.set_stem(42, "nope".to_string());
        assert_eq!(table.rows, default_rows());
        assert_eq!(table.source, ExampleSource::Defaults);
    }

    #[test]
    fn test_set_lemma() {
        let mut table = ExampleTable::new();
        table.set_lemma(1, "well".to_string());
        assert_eq!(table.rows[1].lemma, "well");
        assert_eq!(table.rows[1].stem, "better");
        assert_eq!(table.source, ExampleSource::Enriched);
    }
}
