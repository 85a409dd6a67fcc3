//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components and the
//! background services but does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, HelpDialog, HomeComponent, HomeRenderContext, InputComponent, QuitDialog,
    ResultsComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{DomainState, ExampleSource, ProcessOutcome};
use crate::services::{ExampleLoader, NlpBackend, TextProcessor};
use anyhow::Result;
use chrono::Local;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Domain state (business data)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// NLP service shared with the background workers
    backend: Arc<dyn NlpBackend>,

    /// Five-endpoint processing requests
    pub processor: TextProcessor,

    /// Comparison examples, loaded once at startup
    pub example_loader: ExampleLoader,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Backend base URL, for the status bar
    pub api_url: String,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub input: InputComponent,
    pub results: ResultsComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App talking to `backend`
    ///
    /// Nothing touches the network until `init`.
    pub fn new(config: &Config, backend: Arc<dyn NlpBackend>) -> App {
        App {
            domain: DomainState::new(),
            modals: ModalStack::new(),
            processor: TextProcessor::new(Arc::clone(&backend)),
            backend,
            example_loader: ExampleLoader::idle(),
            should_quit: false,
            status_message: None,
            api_url: config.base_url().to_string(),
            home: HomeComponent::new(),
            input: InputComponent::new(),
            results: ResultsComponent::new(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Pre-fill the input box
    pub fn with_text(mut self, text: &str) -> App {
        self.domain.input.paste(text);
        self
    }

    /// Kick off a processing request for the current input
    fn process_input(&mut self) {
        if self.processor.start(self.domain.input.as_str()) {
            self.status_message = None;
        }
    }

    /// Apply finished background work
    fn poll_background(&mut self) {
        if let Some(outcome) = self.processor.poll(&mut self.domain.results) {
            match outcome {
                ProcessOutcome::Updated => {
                    self.domain.last_processed = Some(Local::now());
                    self.status_message = None;
                }
                ProcessOutcome::Failed(_) => {
                    self.status_message = Some("Processing failed, results unchanged".to_string());
                }
            }
        }

        if !self.example_loader.is_finished()
            && self.example_loader.poll(&mut self.domain.examples)
        {
            tracing::debug!("Comparison examples updated ({:?})", self.domain.examples.source);
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => {
                self.quit_dialog.set_processing(self.processor.is_loading());
                self.quit_dialog.draw(frame, area)?;
            }
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    /// Start loading the comparison examples
    fn init(&mut self) -> Result<()> {
        let words = self
            .domain
            .examples
            .rows
            .iter()
            .map(|row| row.word.clone())
            .collect();
        self.example_loader = ExampleLoader::spawn(Arc::clone(&self.backend), words);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else if self.home.is_editing() {
            self.input.handle_key_event(key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn handle_paste(&mut self, text: String) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        if self.home.is_editing() {
            self.input.handle_paste(text)
        } else {
            self.home.handle_paste(text)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.poll_background(),
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextTab => {
                self.home.next_tab();
                self.results.update(action)?;
            }
            Action::PrevTab => {
                self.home.previous_tab();
                self.results.update(action)?;
            }
            Action::SelectTab(index) => {
                self.home.select_tab(index);
                self.results.update(action)?;
            }
            Action::ScrollUp | Action::ScrollDown => {
                self.results.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Input
            // ─────────────────────────────────────────────────────────────────
            Action::EnterEditMode => self.home.enter_edit_mode(),
            Action::ExitEditMode => self.home.exit_edit_mode(),
            Action::InputChar(c) => self.domain.input.push(c),
            Action::InputNewline => self.domain.input.newline(),
            Action::InputBackspace => self.domain.input.backspace(),
            Action::Paste(text) => {
                self.domain.input.paste(&text);
                self.home.enter_edit_mode();
            }
            Action::ClearInput => self.domain.input.clear(),

            // ─────────────────────────────────────────────────────────────────
            // Processing
            // ─────────────────────────────────────────────────────────────────
            Action::ProcessText => self.process_input(),
            Action::ToggleExamples => self.home.toggle_examples(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                if !self.modals.contains(&Modal::Help) {
                    self.help_dialog.reset();
                    self.modals.push(Modal::Help);
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if let Some(Modal::QuitConfirm) = self.modals.top() {
                    self.should_quit = true;
                }
                self.modals.pop();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let examples_note = match self.domain.examples.source {
            ExampleSource::Defaults if !self.example_loader.is_finished() => {
                Some("Loading examples...")
            }
            _ => None,
        };

        // Build render context
        let ctx = HomeRenderContext {
            input: &self.domain.input,
            results: &self.domain.results,
            examples: &self.domain.examples,
            loading: self.processor.is_loading(),
            api_url: &self.api_url,
            last_processed: self.domain.last_processed.as_ref(),
            status_message: self.status_message.as_deref().or(examples_note),
        };

        // Draw home screen with components
        draw_home_screen(
            frame,
            area,
            &mut self.home,
            &mut self.input,
            &mut self.results,
            &ctx,
        )?;

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Focus, Tab};
    use crate::services::testing::FakeBackend;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::thread;
    use std::time::{Duration, Instant};

    fn app_with(backend: FakeBackend) -> (App, Arc<FakeBackend>) {
        let backend = Arc::new(backend);
        let app = App::new(&Config::default(), backend.clone());
        (app, backend)
    }

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        if let Some(action) = app.handle_key_event(key).unwrap() {
            app.update(action).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(Action::InputChar(c)).unwrap();
        }
    }

    /// Tick until no request is in flight
    fn settle(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.processor.is_loading() {
            assert!(Instant::now() < deadline, "processing did not finish");
            thread::sleep(Duration::from_millis(5));
            app.update(Action::Tick).unwrap();
        }
    }

    #[test]
    fn test_blank_input_makes_no_calls() {
        let (mut app, backend) = app_with(FakeBackend::new());

        app.update(Action::ProcessText).unwrap();
        type_text(&mut app, "   \n ");
        app.update(Action::ProcessText).unwrap();

        assert!(!app.processor.is_loading());
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn test_process_replaces_results() {
        let (mut app, backend) = app_with(FakeBackend::new());
        type_text(&mut app, "cats running");

        app.update(Action::ProcessText).unwrap();
        assert!(app.processor.is_loading());
        settle(&mut app);

        assert_eq!(backend.call_count(), 5);
        assert_eq!(app.domain.results.tokens, vec!["cats", "running"]);
        assert_eq!(app.domain.results.stemmed, vec!["cat", "run"]);
        assert!(app.domain.last_processed.is_some());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_second_request_while_loading_is_ignored() {
        let (backend, release) = FakeBackend::new().gated();
        let (mut app, backend) = app_with(backend);
        type_text(&mut app, "hello");

        app.update(Action::ProcessText).unwrap();
        app.update(Action::ProcessText).unwrap();
        release.send(()).unwrap();
        drop(release);
        settle(&mut app);

        assert_eq!(backend.call_count(), 5);
    }

    #[test]
    fn test_failure_keeps_results_and_sets_status() {
        let (mut app, _backend) = app_with(FakeBackend::new().failing("pos_tagging"));
        app.domain.results.tokens = vec!["earlier".to_string()];
        type_text(&mut app, "new text");

        app.update(Action::ProcessText).unwrap();
        settle(&mut app);

        assert_eq!(app.domain.results.tokens, vec!["earlier"]);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Processing failed, results unchanged")
        );
    }

    #[test]
    fn test_examples_load_on_init() {
        let (mut app, _backend) = app_with(
            FakeBackend::new().with_comparison(&[("ran", "ran", "run", "irregular")], &["d"]),
        );
        app.init().unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while !app.example_loader.is_finished() {
            assert!(Instant::now() < deadline, "examples did not load");
            thread::sleep(Duration::from_millis(5));
            app.update(Action::Tick).unwrap();
        }

        assert_eq!(app.domain.examples.source, ExampleSource::Backend);
        assert_eq!(app.domain.examples.rows.len(), 1);
        assert_eq!(app.domain.examples.rows[0].lemma, "run");
    }

    #[test]
    fn test_edit_mode_routes_keys_to_input() {
        let (mut app, _backend) = app_with(FakeBackend::new());

        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.home.focus, Focus::Edit);

        // 'q' is text while editing
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.domain.input.as_str(), "q\nx");
        assert!(app.modals.is_empty());

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.home.focus, Focus::Navigate);
        assert_eq!(app.domain.input.as_str(), "q\n");
    }

    #[test]
    fn test_paste_enters_edit_mode() {
        let (mut app, _backend) = app_with(FakeBackend::new());

        if let Some(action) = app.handle_paste("pasted text".to_string()).unwrap() {
            app.update(action).unwrap();
        }

        assert_eq!(app.domain.input.as_str(), "pasted text");
        assert_eq!(app.home.focus, Focus::Edit);
    }

    #[test]
    fn test_tab_keys() {
        let (mut app, _backend) = app_with(FakeBackend::new());
        app.results.scroll = 4;

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.home.active_tab, Tab::StemLemma);
        assert_eq!(app.results.scroll, 0);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.home.active_tab, Tab::Entities);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.home.active_tab, Tab::Pos);
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let (mut app, _backend) = app_with(FakeBackend::new());

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_opens_once() {
        let (mut app, _backend) = app_with(FakeBackend::new());

        app.update(Action::OpenHelp).unwrap();
        app.update(Action::OpenHelp).unwrap();
        app.update(Action::CloseModal).unwrap();

        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_with_text_prefills_input() {
        let backend = Arc::new(FakeBackend::new());
        let app = App::new(&Config::default(), backend).with_text("The mice ran");
        assert_eq!(app.domain.input.as_str(), "The mice ran");
    }
}
