//! Tallypad - a keypad-driven arithmetic calculator for the terminal
//!
//! The expression core accumulates a display buffer from digit and
//! operator presses, evaluates it with standard operator precedence, and
//! shows the result. The TUI frontend (feature `tui`, on by default)
//! wires a clickable keypad and a keyboard mapping to that core.
//!
//! # Example
//!
//! ```rust
//! use tallypad::prelude::*;
//!
//! let mut acc = Accumulator::new();
//! acc.push_digit('1');
//! acc.push_digit('0');
//! acc.push_operator(Operation::Divide);
//! acc.push_digit('3');
//! acc.evaluate();
//! assert_eq!(acc.buffer(), "3.333333333333");
//! assert_eq!(acc.last_result(), Some(3.333333333333));
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{format_value, Evaluator};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{Accumulator, CalcError, CalcResult, Operation, ERROR_TOKEN};

    #[cfg(feature = "tui")]
    pub use crate::tui::{ButtonAction, CalculatorApp, InputHandler, KeyAction, Keypad};
}
