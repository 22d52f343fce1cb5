//! Terminal session guard.
//!
//! Owns raw mode and the alternate screen for the lifetime of a run and restores
//! the terminal on drop, including when the loop exits through an error.

use crate::error::{PlayloopError, Result};
use ratatui::crossterm::{
    cursor::{Hide, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io;

/// RAII guard for the interactive terminal
pub struct TerminalSession {
    key_release_events: bool,
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen.
    ///
    /// Key release events are only delivered by terminals that speak the keyboard
    /// enhancement protocol; the flags are requested whenever it is available.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| PlayloopError::terminal("failed to enable raw mode", e))?;
        let mut session = Self {
            key_release_events: false,
            active: true,
        };

        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .map_err(|e| PlayloopError::terminal("failed to enter alternate screen", e))?;

        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )
            .map_err(|e| PlayloopError::terminal("failed to enable key release events", e))?;
            session.key_release_events = true;
            log::debug!("keyboard enhancement enabled, key releases will be reported");
        } else {
            log::warn!(
                "terminal does not report key releases; movement only stops on a new key press"
            );
        }

        Ok(session)
    }

    /// Whether the terminal reports key releases.
    pub fn reports_key_releases(&self) -> bool {
        self.key_release_events
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut stdout = io::stdout();
        if self.key_release_events {
            execute!(stdout, PopKeyboardEnhancementFlags)?;
        }
        execute!(stdout, LeaveAlternateScreen, Show)?;
        disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
