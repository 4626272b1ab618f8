//! Expression accumulator
//!
//! Owns the display buffer and applies the entry rules: digit and
//! operator appends, decimal-point placement, backspace, percent, and
//! evaluation. The buffer is always non-empty and defaults to `"0"`.

use crate::core::evaluator::{format_value, Evaluator};
use crate::core::Operation;

/// Literal shown when evaluation fails; cleared only by [`Accumulator::clear`]
pub const ERROR_TOKEN: &str = "Error";

const OPERATOR_CHARS: [char; 4] = ['+', '-', '*', '/'];

/// Accumulates the expression text and evaluates it on demand
#[derive(Debug)]
pub struct Accumulator {
    /// Display buffer, never empty
    buffer: String,
    /// Most recent successful evaluation
    last_result: Option<f64>,
    /// Whether the last action was a successful evaluation
    just_evaluated: bool,
    /// Expression evaluator
    evaluator: Evaluator,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Creates a fresh accumulator showing `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: "0".to_string(),
            last_result: None,
            just_evaluated: false,
            evaluator: Evaluator::new(),
        }
    }

    /// Returns the current buffer contents
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns the most recent successful evaluation
    #[must_use]
    pub const fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Returns whether the last action was a successful evaluation
    #[must_use]
    pub const fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Returns whether the buffer holds the error token
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.buffer == ERROR_TOKEN
    }

    /// Appends a digit or a decimal point.
    ///
    /// After a result, a digit starts a fresh expression (`.` starts
    /// `"0."`). A lone leading `"0"` is replaced rather than extended.
    /// A decimal point is allowed once per numeric token; directly after
    /// an operator it starts a new `0.` token.
    pub fn push_digit(&mut self, d: char) {
        debug_assert!(d.is_ascii_digit() || d == '.');
        if self.is_error() {
            return;
        }

        if self.just_evaluated {
            self.buffer = if d == '.' { "0.".to_string() } else { d.to_string() };
            self.just_evaluated = false;
            return;
        }

        if d == '.' {
            if self.ends_with_operator() {
                self.buffer.push_str("0.");
            } else if !self.current_token().contains('.') {
                self.buffer.push('.');
            }
            return;
        }

        if self.buffer == "0" {
            self.buffer = d.to_string();
        } else {
            self.buffer.push(d);
        }
    }

    /// Appends an operator.
    ///
    /// After a result the operator continues from that result. A trailing
    /// operator is replaced, so the buffer never holds two in a row.
    pub fn push_operator(&mut self, op: Operation) {
        if self.is_error() {
            return;
        }

        if self.just_evaluated {
            if let Some(value) = self.last_result {
                self.buffer = format_value(value);
            }
            self.just_evaluated = false;
        }

        if self.ends_with_operator() {
            self.buffer.pop();
        }
        self.buffer.push(op.symbol());
    }

    /// Removes the last character; right after a result it resets instead.
    /// The buffer falls back to `"0"` rather than becoming empty.
    pub fn backspace(&mut self) {
        if self.is_error() {
            return;
        }

        if self.just_evaluated {
            self.clear();
            return;
        }

        self.buffer.pop();
        if self.buffer.is_empty() {
            self.buffer.push('0');
        }
    }

    /// Resets to `"0"`, clearing the last result and the evaluated flag
    pub fn clear(&mut self) {
        self.buffer = "0".to_string();
        self.last_result = None;
        self.just_evaluated = false;
    }

    /// Evaluates the buffer and divides the result by 100
    pub fn percent(&mut self) {
        self.finish(|value| value / 100.0);
    }

    /// Evaluates the buffer and replaces it with the result
    pub fn evaluate(&mut self) {
        self.finish(|value| value);
    }

    fn finish(&mut self, adjust: impl FnOnce(f64) -> f64) {
        if self.is_error() {
            return;
        }

        match self.evaluator.evaluate_str(&self.buffer) {
            Ok(value) => {
                let value = adjust(value);
                self.buffer = format_value(value);
                self.last_result = Some(value);
                self.just_evaluated = true;
            }
            Err(_) => {
                // Both failure classes surface identically; clear() is
                // the only way out.
                self.buffer = ERROR_TOKEN.to_string();
                self.just_evaluated = false;
            }
        }
    }

    fn ends_with_operator(&self) -> bool {
        self.buffer.ends_with(OPERATOR_CHARS)
    }

    /// The numeric token under entry: buffer text since the last operator
    fn current_token(&self) -> &str {
        self.buffer
            .rsplit(OPERATOR_CHARS)
            .next()
            .unwrap_or(self.buffer.as_str())
    }
}
