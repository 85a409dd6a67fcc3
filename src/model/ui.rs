//! UI state - presentation state separate from domain data

/// Result tab in the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Tokens,
    StemLemma,
    Pos,
    Entities,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![Tab::Tokens, Tab::StemLemma, Tab::Pos, Tab::Entities]
    }

    pub fn name(&self) -> &str {
        match self {
            Tab::Tokens => "Tokenization",
            Tab::StemLemma => "Stemming & Lemmatization",
            Tab::Pos => "POS Tagging",
            Tab::Entities => "Entity Recognition",
        }
    }

    /// Text shown in the panel before anything has been processed
    pub fn placeholder(&self) -> &str {
        match self {
            Tab::Tokens => "Process text to see tokens",
            Tab::StemLemma => "Process text to see stemming and lemmatization comparison",
            Tab::Pos => "Process text to see part-of-speech tags",
            Tab::Entities => "Process text to see named entities",
        }
    }

    /// Tab by zero-based position, as used by the number keys
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::all().get(index).copied()
    }

    pub fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn previous(&self) -> Tab {
        let tabs = Tab::all();
        let current = self.index();
        if current == 0 {
            tabs[tabs.len() - 1]
        } else {
            tabs[current - 1]
        }
    }
}

/// Where key presses go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keys are commands (tabs, process, quit…)
    #[default]
    Navigate,
    /// Keys edit the input text
    Edit,
}
