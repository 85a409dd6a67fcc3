//! Home component - Main application screen
//!
//! Displays the input box, process button, result tabs and status bars.
//! Owns tab and focus state.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_main_layout, InputComponent, ResultsComponent};
use crate::model::{ExampleSource, ExampleTable, Focus, InputText, ResultSet, Tab};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Home component for the main application view
pub struct HomeComponent {
    /// Current active tab
    pub active_tab: Tab,

    /// Where key presses go
    pub focus: Focus,

    /// Whether the comparison examples are shown on the stemming tab
    pub show_examples: bool,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Tokens,
            focus: Focus::Navigate,
            show_examples: false,
        }
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
    }

    pub fn select_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::from_index(index) {
            self.active_tab = tab;
        }
    }

    pub fn toggle_examples(&mut self) {
        self.show_examples = !self.show_examples;
    }

    pub fn is_editing(&self) -> bool {
        self.focus == Focus::Edit
    }

    pub fn enter_edit_mode(&mut self) {
        self.focus = Focus::Edit;
    }

    pub fn exit_edit_mode(&mut self) {
        self.focus = Focus::Navigate;
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }

            // Input
            KeyCode::Char('i') | KeyCode::Char('e') => Some(Action::EnterEditMode),
            KeyCode::Char('c') => Some(Action::ClearInput),
            KeyCode::Char('p') | KeyCode::Enter => Some(Action::ProcessText),

            // Tabs
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char(c @ '1'..='4') => Some(Action::SelectTab(c as usize - '1' as usize)),

            // Scrolling
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),

            // View toggles
            KeyCode::Char('x') => Some(Action::ToggleExamples),

            // Modals
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            _ => None,
        };
        Ok(action)
    }

    fn handle_paste(&mut self, text: String) -> Result<Option<Action>> {
        Ok(Some(Action::Paste(text)))
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub input: &'a InputText,
    pub results: &'a ResultSet,
    pub examples: &'a ExampleTable,
    pub loading: bool,
    pub api_url: &'a str,
    pub last_processed: Option<&'a DateTime<Local>>,
    pub status_message: Option<&'a str>,
}

/// Label of the process button
pub fn process_label(loading: bool) -> &'static str {
    if loading {
        "Processing..."
    } else {
        "Process Text"
    }
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    input: &mut InputComponent,
    results: &mut ResultsComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_title(frame, layout.title);

    input.set_state(ctx.input.as_str(), home.is_editing());
    input.draw(frame, layout.input)?;

    render_process_button(frame, layout.process, ctx);
    render_tabs(frame, layout.tabs, home);

    results.draw_with_results(
        frame,
        layout.panel,
        home.active_tab,
        ctx.results,
        ctx.examples,
        home.show_examples,
    )?;

    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, home);

    Ok(())
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Text Preprocessing",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_process_button(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let disabled = ctx.loading || ctx.input.is_blank();
    let style = if disabled {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(Line::from(Span::styled(
        format!("  {}  ", process_label(ctx.loading)),
        style,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(button, area);
}

fn render_tabs(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let all_tabs = Tab::all();
    let titles: Vec<String> = all_tabs
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{} {}", i + 1, t.name()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(home.active_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", ctx.api_url),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    let examples_label = match ctx.examples.source {
        ExampleSource::Defaults => "examples: defaults",
        ExampleSource::Backend => "examples: backend",
        ExampleSource::Enriched => "examples: enriched",
    };
    spans.push(Span::styled(
        format!("{} ", examples_label),
        Style::default().fg(Color::DarkGray),
    ));

    spans.push(Span::styled(
        format!("{} chars ", ctx.input.char_count()),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(at) = ctx.last_processed {
        spans.push(Span::styled(
            format!("processed {} ", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let key = |k: &str, color: Color| {
        Span::styled(
            format!(" {} ", k),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let help_spans = if home.is_editing() {
        vec![
            key("Esc", Color::Yellow),
            Span::raw("Done  "),
            key("Ctrl+R", Color::Green),
            Span::raw("Process  "),
            key("Ctrl+U", Color::Cyan),
            Span::raw("Clear"),
        ]
    } else {
        vec![
            key("q", Color::Yellow),
            Span::raw("Quit "),
            key("i", Color::Cyan),
            Span::raw("Edit "),
            key("p", Color::Green),
            Span::raw("Process "),
            key("Tab", Color::Cyan),
            Span::raw("Next tab "),
            key("x", Color::Cyan),
            Span::raw("Examples "),
            key("c", Color::Cyan),
            Span::raw("Clear "),
            key("?", Color::White),
            Span::raw("Help"),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(help_spans)), area);
}
