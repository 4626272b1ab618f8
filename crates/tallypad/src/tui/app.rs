//! Application state
//!
//! Ties the expression accumulator to the keypad: keyboard actions and
//! button clicks both route to the same accumulator operations, and the
//! matching keypad button is highlighted for visual feedback.

use crate::core::Accumulator;
use crate::tui::input::KeyAction;
use crate::tui::keypad::{ButtonAction, Keypad};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// Expression accumulator
    acc: Accumulator,
    /// The on-screen keypad
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new application
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current display string
    #[must_use]
    pub fn display(&self) -> &str {
        self.acc.buffer()
    }

    /// Returns whether the display is showing the error token
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.acc.is_error()
    }

    /// Returns the keypad
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Processes a keyboard action
    pub fn handle_key(&mut self, action: KeyAction) {
        self.keypad.release_all();
        match action {
            KeyAction::Digit(c) => {
                self.acc.push_digit(c);
                self.keypad.highlight_label(c);
            }
            KeyAction::Operator(op) => {
                self.acc.push_operator(op);
                self.keypad.highlight_label(op.symbol());
            }
            KeyAction::Evaluate => {
                self.acc.evaluate();
                self.keypad.highlight_label('=');
            }
            KeyAction::Percent => {
                self.acc.percent();
                self.keypad.highlight_label('%');
            }
            KeyAction::Backspace => {
                self.acc.backspace();
                self.keypad.highlight_label('⌫');
            }
            KeyAction::Clear => {
                self.acc.clear();
                self.keypad.highlight_label('C');
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Processes a keypad button press
    pub fn handle_button(&mut self, action: ButtonAction) {
        let key = match action {
            ButtonAction::Digit(d) => {
                KeyAction::Digit(char::from_digit(u32::from(d), 10).unwrap_or('0'))
            }
            ButtonAction::Decimal => KeyAction::Digit('.'),
            ButtonAction::Operator(op) => KeyAction::Operator(op),
            ButtonAction::Equals => KeyAction::Evaluate,
            ButtonAction::Percent => KeyAction::Percent,
            ButtonAction::Backspace => KeyAction::Backspace,
            ButtonAction::Clear => KeyAction::Clear,
        };
        self.handle_key(key);
    }
}
