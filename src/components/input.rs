//! Input component - the text area the user types or pastes into

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Enter text for preprocessing...";

/// Text input box
#[derive(Default)]
pub struct InputComponent {
    /// Snapshot of the input text to render
    text: String,
    /// Whether keys currently edit the text
    editing: bool,
}

impl InputComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the state to render
    pub fn set_state(&mut self, text: &str, editing: bool) {
        if self.text != text {
            self.text = text.to_string();
        }
        self.editing = editing;
    }

    /// Number of rows `text` occupies when wrapped to `width` columns
    ///
    /// With `cursor` set the last line carries one extra column for the
    /// cursor glyph.
    fn wrapped_height(text: &str, width: usize, cursor: bool) -> usize {
        if width == 0 {
            return 0;
        }
        let line_count = text.split('\n').count();
        text.split('\n')
            .enumerate()
            .map(|(i, line)| {
                let extra = usize::from(cursor && i + 1 == line_count);
                (UnicodeWidthStr::width(line) + extra).max(1).div_ceil(width)
            })
            .sum()
    }
}

impl Component for InputComponent {
    /// Keys while editing; everything printable goes into the text
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Char('c') if ctrl => Some(Action::ForceQuit),
            KeyCode::Char('r') if ctrl => Some(Action::ProcessText),
            KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Action::InputChar(c)),
            KeyCode::Enter => Some(Action::InputNewline),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Esc => Some(Action::ExitEditMode),
            _ => None,
        };
        Ok(action)
    }

    fn handle_paste(&mut self, text: String) -> Result<Option<Action>> {
        Ok(Some(Action::Paste(text)))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (border_color, title) = if self.editing {
            (Color::Cyan, " Input (Esc to stop editing, Ctrl+R to process) ")
        } else {
            (Color::DarkGray, " Input (i to edit) ")
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title)
            .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD));

        let lines: Vec<Line> = if self.text.is_empty() && !self.editing {
            vec![Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))]
        } else {
            let mut lines: Vec<Line> = self
                .text
                .split('\n')
                .map(|l| Line::from(l.to_string()))
                .collect();
            if self.editing {
                if let Some(last) = lines.last_mut() {
                    last.spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
                }
            }
            lines
        };

        // Keep the end of the text (where typing happens) in view
        let inner_width = area.width.saturating_sub(2) as usize;
        let inner_height = area.height.saturating_sub(2) as usize;
        let total = Self::wrapped_height(&self.text, inner_width, self.editing);
        let scroll = total.saturating_sub(inner_height) as u16;

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        frame.render_widget(paragraph, area);
        Ok(())
    }
}
