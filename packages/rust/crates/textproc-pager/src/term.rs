//! Terminal capabilities the pager depends on.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, size};

use crate::error::PagerError;

/// Fallback when the terminal size cannot be queried.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// A keypress, as far as the pager cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Space bar: show another full screen.
    Space,
    /// Return/Enter: show one more line.
    Enter,
    /// Anything else: stop paging.
    Other,
}

/// Size and input of the display the pager writes to.
pub trait Terminal {
    /// Height in rows.
    fn lines(&self) -> usize;
    /// Width in columns.
    fn cols(&self) -> usize;
    /// Block until a single key is pressed.
    ///
    /// # Errors
    /// Returns an error when input cannot be read.
    fn read_key(&mut self) -> Result<Key, PagerError>;
}

/// [`Terminal`] backed by crossterm.
#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl CrosstermTerminal {
    /// Create a terminal handle.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn dimensions() -> (u16, u16) {
        size().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "terminal size unavailable; using 80x24");
            DEFAULT_SIZE
        })
    }
}

impl Terminal for CrosstermTerminal {
    fn lines(&self) -> usize {
        usize::from(Self::dimensions().1)
    }

    fn cols(&self) -> usize {
        usize::from(Self::dimensions().0)
    }

    fn read_key(&mut self) -> Result<Key, PagerError> {
        enable_raw_mode().map_err(|e| PagerError::Terminal(format!("enable raw mode: {e}")))?;
        let key = next_key();
        disable_raw_mode().map_err(|e| PagerError::Terminal(format!("disable raw mode: {e}")))?;
        Ok(key?)
    }
}

fn next_key() -> std::io::Result<Key> {
    loop {
        if let CrosstermEvent::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(map_key_code(code));
        }
    }
}

fn map_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Enter | KeyCode::Char('\r' | '\n') => Key::Enter,
        _ => Key::Other,
    }
}
