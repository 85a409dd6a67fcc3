//! Input text buffer edited by the user

/// The text the user wants processed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputText {
    text: String,
}

impl InputText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn newline(&mut self) {
        self.text.push('\n');
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Append pasted text, normalising Windows line endings
    pub fn paste(&mut self, pasted: &str) {
        self.text.push_str(&pasted.replace("\r\n", "\n").replace('\r', "\n"));
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Empty or whitespace-only input is never sent
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl From<&str> for InputText {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}
