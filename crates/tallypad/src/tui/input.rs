//! Keyboard input handling
//!
//! Fixed key mapping: digits and `.` enter characters, `+ - * /` enter
//! operators, `%` takes percent, Enter or `=` evaluates, Backspace
//! deletes, Escape clears.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Operation;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Enter a digit or decimal point
    Digit(char),
    /// Enter an operator
    Operator(Operation),
    /// Evaluate the expression
    Evaluate,
    /// Take percent of the expression
    Percent,
    /// Delete the last character
    Backspace,
    /// Reset the display
    Clear,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ ('0'..='9' | '.')) => KeyAction::Digit(c),
            KeyCode::Char('%') => KeyAction::Percent,
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Evaluate,
            KeyCode::Char(c) => Operation::from_char(c)
                .map_or(KeyAction::None, KeyAction::Operator),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Esc => KeyAction::Clear,
            _ => KeyAction::None,
        }
    }
}
