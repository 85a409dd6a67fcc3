//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for polling background work
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next result tab
    NextTab,
    /// Move to previous result tab
    PrevTab,
    /// Jump to a tab by position
    SelectTab(usize),
    /// Scroll the result panel up one line
    ScrollUp,
    /// Scroll the result panel down one line
    ScrollDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────
    /// Start editing the input text
    EnterEditMode,
    /// Stop editing the input text
    ExitEditMode,
    /// Add character to the input
    InputChar(char),
    /// Add a line break to the input
    InputNewline,
    /// Remove last character from the input
    InputBackspace,
    /// Append pasted text to the input
    Paste(String),
    /// Clear the input
    ClearInput,

    // ─────────────────────────────────────────────────────────────────────────
    // Processing
    // ─────────────────────────────────────────────────────────────────────────
    /// Send the input to the backend
    ProcessText,
    /// Show or hide the comparison examples
    ToggleExamples,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::SelectTab(i) => write!(f, "SelectTab({})", i),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::EnterEditMode => write!(f, "EnterEditMode"),
            Action::ExitEditMode => write!(f, "ExitEditMode"),
            Action::InputChar(c) => write!(f, "InputChar('{}')", c),
            Action::InputNewline => write!(f, "InputNewline"),
            Action::InputBackspace => write!(f, "InputBackspace"),
            Action::Paste(text) => write!(f, "Paste({} chars)", text.chars().count()),
            Action::ClearInput => write!(f, "ClearInput"),
            Action::ProcessText => write!(f, "ProcessText"),
            Action::ToggleExamples => write!(f, "ToggleExamples"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
        }
    }
}
