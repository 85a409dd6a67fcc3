//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl HelpDialog {
    /// Scroll back to the top, for reopening
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let total = content.len();
        let dialog_area = centered_popup(area, 56, total as u16 + 2);
        frame.render_widget(Clear, dialog_area);

        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        // Render scrollbar if content exceeds visible area
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Helper to add a section header
    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    // Helper to add a shortcut line
    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    // Editing
    add_section(&mut lines, "Editing");
    add_shortcut(&mut lines, "i / e", "Start editing the input");
    add_shortcut(&mut lines, "Esc", "Stop editing");
    add_shortcut(&mut lines, "Enter", "New line (while editing)");
    add_shortcut(&mut lines, "Ctrl+u", "Clear input (while editing)");
    add_shortcut(&mut lines, "c", "Clear input");

    // Processing
    add_section(&mut lines, "Processing");
    add_shortcut(&mut lines, "p / Enter", "Process text");
    add_shortcut(&mut lines, "Ctrl+r", "Process text (while editing)");

    // Results
    add_section(&mut lines, "Results");
    add_shortcut(&mut lines, "Tab", "Next tab");
    add_shortcut(&mut lines, "Shift+Tab", "Previous tab");
    add_shortcut(&mut lines, "1-4", "Jump to tab");
    add_shortcut(&mut lines, "j / ↓", "Scroll down");
    add_shortcut(&mut lines, "k / ↑", "Scroll up");
    add_shortcut(&mut lines, "x", "Show/hide stemming examples");

    // Application
    add_section(&mut lines, "Application");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    // Footer
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_and_close() {
        let mut dialog = HelpDialog::default();
        dialog.handle_key_event(key(KeyCode::Char('j'))).unwrap();
        dialog.handle_key_event(key(KeyCode::PageDown)).unwrap();
        assert_eq!(dialog.scroll_offset, 11);
        dialog.handle_key_event(key(KeyCode::PageUp)).unwrap();
        dialog.handle_key_event(key(KeyCode::Up)).unwrap();
        dialog.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(dialog.scroll_offset, 0);

        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('?'))).unwrap(),
            Some(Action::CloseModal)
        );
    }

    #[test]
    fn test_help_lists_process_shortcut() {
        let content = build_help_content();
        let found = content.iter().any(|line| {
            line.spans.iter().any(|s| s.content == "Process text")
        });
        assert!(found);
    }
}
