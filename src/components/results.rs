//! Results component - the tabbed result panels
//!
//! Tokens, POS tags and entities render as wrapped chips. The stemming tab
//! puts stems and lemmas side by side, with the comparison examples and the
//! explanatory notes below.

use crate::action::Action;
use crate::component::Component;
use crate::model::{ExampleTable, Labeled, ResultSet, Tab};
use anyhow::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const EXPLANATION: &[(&str, &str)] = &[
    (
        "Stemming",
        " is a simple process that removes or replaces word suffixes to arrive at a common base form of the word. It uses a set of rules without considering the context or part of speech.",
    ),
    (
        "Lemmatization",
        " is a more sophisticated process that considers the word's context, part of speech, and uses vocabulary and morphological analysis to return the base dictionary form of a word (the lemma).",
    ),
    (
        "",
        "While stemming is faster and requires less computational resources, lemmatization is more accurate but slower and more resource-intensive. The choice between them depends on your specific needs.",
    ),
    (
        "When to use stemming:",
        " When processing speed is important and some inaccuracy is acceptable.",
    ),
    (
        "When to use lemmatization:",
        " When accuracy is critical and you need proper dictionary forms.",
    ),
];

/// Maximum width of a single example table column
const MAX_COLUMN_WIDTH: usize = 40;

// ═══════════════════════════════════════════════════════════════════════════════
// Line Builders
// ═══════════════════════════════════════════════════════════════════════════════

fn chip(text: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default().fg(Color::White).bg(Color::DarkGray),
    )
}

fn tag(text: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn placeholder(text: &str) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))]
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Tokens as a single wrapping line of chips
pub fn token_lines(tokens: &[String]) -> Vec<Line<'static>> {
    let mut spans = Vec::with_capacity(tokens.len() * 2);
    for token in tokens {
        spans.push(chip(token));
        spans.push(Span::raw(" "));
    }
    vec![Line::from(spans)]
}

/// `(text, label)` pairs as chips followed by their label
pub fn labeled_lines(pairs: &[Labeled]) -> Vec<Line<'static>> {
    let mut spans = Vec::with_capacity(pairs.len() * 3);
    for (text, label) in pairs {
        spans.push(chip(text));
        spans.push(tag(label));
        spans.push(Span::raw("  "));
    }
    vec![Line::from(spans)]
}

fn pad(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - text_width))
    }
}

/// Key differences followed by the comparison table
pub fn example_table_lines(table: &ExampleTable) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Key Differences:")];
    for difference in &table.differences {
        lines.push(Line::from(format!("  • {}", difference)));
    }
    lines.push(Line::from(""));

    let headers = [
        "Original Word",
        "Stemming Result",
        "Lemmatization Result",
        "Explanation",
    ];
    let mut widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    for row in &table.rows {
        let cells = [&row.word, &row.stem, &row.lemma, &row.explanation];
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }
    for width in &mut widths {
        *width = (*width).min(MAX_COLUMN_WIDTH);
    }

    let header_spans: Vec<Span> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| {
            Span::styled(
                format!(" {} │", pad(h, *w)),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    lines.push(Line::from(header_spans));

    let separator: String = widths
        .iter()
        .map(|w| format!("{}┼", "─".repeat(w + 2)))
        .collect();
    lines.push(Line::from(Span::styled(
        separator,
        Style::default().fg(Color::DarkGray),
    )));

    for (index, row) in table.rows.iter().enumerate() {
        let style = if index % 2 == 0 {
            Style::default()
        } else {
            Style::default().fg(Color::Gray)
        };
        let cells = [&row.word, &row.stem, &row.lemma, &row.explanation];
        let spans: Vec<Span> = cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, w))| {
                let cell_style = if col == 0 {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style
                };
                Span::styled(format!(" {} │", pad(cell, *w)), cell_style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

/// Rows `lines` take when wrapped to `width` columns
fn wrapped_rows(lines: &[Line], width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    lines.iter().map(|line| line.width().max(1).div_ceil(width)).sum()
}

fn explanation_lines() -> Vec<Line<'static>> {
    let mut lines = vec![heading("Understanding the Difference")];
    for (strong, rest) in EXPLANATION {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(strong.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(rest.to_string()),
        ]));
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════════
// Results Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Renders the active result tab
#[derive(Default)]
pub struct ResultsComponent {
    /// Scroll offset of the scrollable part of the panel
    pub scroll: usize,
    /// Largest useful offset for the content last drawn
    max_scroll: usize,
}

impl ResultsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    /// Bound scrolling to the content about to be drawn
    ///
    /// The last row can be scrolled to the top, no further.
    fn fit_to_content(&mut self, lines: &[Line], width: u16) {
        self.max_scroll = wrapped_rows(lines, width).saturating_sub(1);
        self.scroll = self.scroll.min(self.max_scroll);
    }

    fn scroll_offset(&self) -> u16 {
        u16::try_from(self.scroll).unwrap_or(u16::MAX)
    }

    /// Lines for the single-section tabs
    pub fn tab_lines(tab: Tab, results: &ResultSet) -> Vec<Line<'static>> {
        match tab {
            Tab::Tokens if results.tokens.is_empty() => placeholder(tab.placeholder()),
            Tab::Tokens => token_lines(&results.tokens),
            Tab::Pos if results.pos.is_empty() => placeholder(tab.placeholder()),
            Tab::Pos => labeled_lines(&results.pos),
            Tab::Entities if !results.entities.is_empty() => labeled_lines(&results.entities),
            Tab::Entities if !results.tokens.is_empty() => placeholder("No entities found"),
            Tab::Entities => placeholder(tab.placeholder()),
            Tab::StemLemma => Vec::new(),
        }
    }

    /// Lines below the stem/lemma columns
    pub fn stem_lemma_notes(examples: &ExampleTable, show_examples: bool) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if show_examples {
            lines.extend(example_table_lines(examples));
            lines.push(Line::from(""));
        }
        lines.extend(explanation_lines());
        lines
    }

    pub fn draw_with_results(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        tab: Tab,
        results: &ResultSet,
        examples: &ExampleTable,
        show_examples: bool,
    ) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", tab.name()));

        if tab != Tab::StemLemma {
            let lines = Self::tab_lines(tab, results);
            self.fit_to_content(&lines, area.width.saturating_sub(2));
            let paragraph = Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll_offset(), 0));
            frame.render_widget(paragraph, area);
            return Ok(());
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let toggle_hint = if show_examples {
            "x Hide Examples"
        } else {
            "x Show Examples"
        };

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Percentage(35),
                Constraint::Min(0),
            ])
            .split(inner);

        let header = Line::from(vec![
            Span::styled("Comparison  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" {} ", toggle_hint),
                Style::default().fg(Color::Black).bg(Color::White),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), sections[0]);

        if results.stemmed.is_empty() {
            frame.render_widget(
                Paragraph::new(placeholder(tab.placeholder())).wrap(Wrap { trim: false }),
                sections[1],
            );
        } else {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(sections[1]);

            let stemming = Paragraph::new(token_lines(&results.stemmed))
                .block(Block::default().borders(Borders::RIGHT).title(" Stemming "))
                .wrap(Wrap { trim: false });
            let lemmatization = Paragraph::new(token_lines(&results.lemmatized))
                .block(Block::default().title(" Lemmatization "))
                .wrap(Wrap { trim: false });

            frame.render_widget(stemming, columns[0]);
            frame.render_widget(lemmatization, columns[1]);
        }

        let notes_lines = Self::stem_lemma_notes(examples, show_examples);
        self.fit_to_content(&notes_lines, sections[2].width);
        let notes = Paragraph::new(notes_lines)
            .block(Block::default().borders(Borders::TOP))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset(), 0));
        frame.render_widget(notes, sections[2]);

        Ok(())
    }
}

impl Component for ResultsComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(1).min(self.max_scroll),
            Action::NextTab | Action::PrevTab | Action::SelectTab(_) => self.reset_scroll(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the results; see draw_with_results
        Ok(())
    }
}
