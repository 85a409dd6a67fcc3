//! Modal stack for managing overlays

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Only the top modal receives input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Whether `modal` is anywhere on the stack
    pub fn contains(&self, modal: &Modal) -> bool {
        self.stack.contains(modal)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
