//! Watch-mode application state and logic
//!
//! Stands in for the host page: a raw-mode terminal whose keystrokes
//! drive the monitor one complete pass at a time, with the alert block
//! rendered beside the live board. One event queue, one handler; a pass
//! always finishes before the next event is read.

use crate::core::BACKSPACE_KEY_CODE;
use crate::engine::Monitor;
use crate::report::Violation;
use crate::state::StateStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Key code fed through for events the buffer ignores
///
/// The pass still runs (storage is re-read) but the buffer stays put.
const IGNORED_KEY_CODE: u8 = 0;

/// Application state for watch mode
pub struct App<S: StateStore> {
    pub monitor: Monitor<S>,
    pub violations: Vec<Violation>,
    pub should_quit: bool,
}

impl<S: StateStore> App<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            monitor: Monitor::new(store),
            violations: Vec::new(),
            should_quit: false,
        }
    }

    /// Run one pass for a raw key code and keep its report
    pub fn press(&mut self, code: u8) {
        self.violations = self.monitor.handle_key(code);
    }

    /// Clear the typed letters and re-check
    pub fn clear_attempt(&mut self) {
        self.monitor.reset_attempt();
        self.violations = self.monitor.revalidate();
    }

    /// Map a terminal key event to a raw key code, or intercept it
    fn handle_event(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_attempt();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.press(c.to_ascii_uppercase() as u8);
            }
            KeyCode::Backspace => {
                self.press(BACKSPACE_KEY_CODE);
            }
            _ => {
                self.press(IGNORED_KEY_CODE);
            }
        }
    }
}

/// Run the watch-mode TUI
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_watch<S: StateStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: StateStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    // First read before any keystroke, so the board shows immediately
    app.violations = app.monitor.revalidate();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_event(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
