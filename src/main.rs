//! nlp-tui - A terminal UI for text preprocessing
//!
//! This is the main entry point for the nlp-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod cli;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::cli::Cli;
use crate::component::Component;
use crate::config::Config;
use crate::services::HttpBackend;
use crate::tui::Tui;
use anyhow::Result;
use clap::Parser;
use crossterm::event::Event;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli);

    // Logging is best effort; the UI works without it
    if let Some(log_path) = cli.log_file.clone().or_else(logging::default_log_path) {
        if let Err(err) = logging::init(&log_path) {
            eprintln!("Logging disabled: {:#}", err);
        }
    }
    let backend = Arc::new(HttpBackend::from_config(&config)?);
    tracing::info!("Starting nlp-tui against {}", backend.base_url());

    // Create app state
    let mut app = App::new(&config, backend);
    if let Some(ref text) = cli.text {
        app = app.with_text(text);
    }
    app.init()?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting after error: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("Exiting");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!("Draw error: {:#}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Paste(text) => app.handle_paste(text)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
