//! AST evaluator and the full buffer-evaluation pipeline
//!
//! `evaluate_str` is the calculator's single evaluation boundary: it
//! tolerates an expression ending mid-entry (trailing operators are
//! stripped), rejects anything outside the display character set, and
//! rounds the result to suppress floating-point noise.

use crate::core::operations::check_finite;
use crate::core::parser::{AstNode, Parser, Tokenizer};
use crate::core::{CalcError, CalcResult};

/// Number of decimal places kept in results
const ROUND_DECIMALS: f64 = 1e12;

/// Characters that may dangle at the end of an expression mid-entry
const TRAILING_CHARS: [char; 6] = ['+', '-', '*', '/', '%', '.'];

/// Evaluator for buffer expressions
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the raw (unrounded) result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Negate(inner) => Ok(-self.evaluate(inner)?),
            AstNode::Percent(inner) => Ok(self.evaluate(inner)? / 100.0),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                op.apply(left_val, right_val)
            }
        }
    }

    /// Evaluates a display-buffer expression.
    ///
    /// Pipeline: blank input is 0; glyph operators normalize to ASCII
    /// during tokenization; a trailing run of operator/decimal characters
    /// is stripped; the result must be finite and is rounded to 12
    /// decimal places.
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        if input.trim().is_empty() {
            return Ok(0.0);
        }

        let stripped = input.trim_end().trim_end_matches(TRAILING_CHARS);
        if stripped.trim().is_empty() {
            // Nothing but operators: an expression, not a blank display
            return Err(CalcError::EmptyExpression);
        }

        let tokens = Tokenizer::new(stripped).tokenize()?;
        let ast = Parser::new(tokens).parse()?;
        let value = self.evaluate(&ast)?;
        check_finite(value).map(round_result)
    }
}

/// Rounds to 12 decimal places to suppress floating-point noise
fn round_result(value: f64) -> f64 {
    (value * ROUND_DECIMALS).round() / ROUND_DECIMALS
}

/// Formats a result the way the display shows it.
///
/// Shortest round-trip form: integers render bare (`4`), fractions keep
/// only significant digits (`0.05`, `3.333333333333`).
#[must_use]
pub fn format_value(value: f64) -> String {
    // Avoid a lone "-0" on the display
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
