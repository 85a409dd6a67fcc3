//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key_event` / `handle_paste` - Convert events to Actions
/// 2. `update` - Process Actions and update state
/// 3. `draw` - Render the component
pub trait Component {
    /// Initialize the component
    ///
    /// Called once before the first draw.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    ///
    /// The component should not modify state here - just return
    /// the appropriate Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Handle a bracketed paste, returning an optional Action
    fn handle_paste(&mut self, text: String) -> Result<Option<Action>> {
        let _ = text;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// Can return a follow-up Action.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    ///
    /// This method should be pure rendering - no state changes.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
