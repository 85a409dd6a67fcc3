//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Quit confirmation dialog
///
/// Warns when a processing request is still in flight; its result is
/// dropped on exit.
#[derive(Default)]
pub struct QuitDialog {
    processing: bool,
}

impl QuitDialog {
    pub fn set_processing(&mut self, processing: bool) {
        self.processing = processing;
    }

    fn content(&self) -> Vec<Line<'static>> {
        let mut content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Quit nlp-tui?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        if self.processing {
            content.push(Line::from(Span::styled(
                "A request is still processing",
                Style::default().fg(Color::Yellow),
            )));
        } else {
            content.push(Line::from(""));
        }

        content.push(Line::from(vec![
            Span::styled(
                " y/Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit  "),
            Span::styled(
                " n/Esc ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Stay"),
        ]));

        content
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Action::ConfirmModal)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Esc => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 40, 7);

        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(self.content())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Quit ")
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
