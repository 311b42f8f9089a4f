//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and translates keyboard events into store actions and navigation.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner turns.
//! - **Idle**: sleeps up to 500ms, only redraws on events, finished fetches
//!   or terminal resize.

mod browser;
mod component;
mod components;
mod event;
mod fetch;
mod ui;

pub use browser::{Browser, Flow, TuiState};
pub use event::TuiEvent;
pub use fetch::{FetchOutcome, FetchTask, spawn_fetch};

use log::{info, warn};
use std::io::stdout;
use std::sync::Arc;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::source::{BookSource, MockSource};
use crate::core::state::Store;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Cursor sits in the search box
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Build the book source described by the config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn BookSource> {
    let catalog = Catalog::generate(config.catalog_size);
    Arc::new(MockSource::new(catalog, config.page_size).with_latency(config.latency))
}

/// Run the browser until the user quits. Must be called from within a
/// tokio runtime; fetches are spawned onto it.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut browser = Browser::new(Store::new(), build_source(&config));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    browser.mount();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = browser.store.state().is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| browser.draw(f, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while loading (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if browser.handle_event(&event) == Flow::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Finished fetches
        if browser.drain_outcomes() {
            needs_redraw = true;
        }
    }

    info!(
        "Shutting down after {} store actions",
        browser.store.dispatched()
    );
    browser.shutdown();

    ratatui::restore();
    Ok(())
}
