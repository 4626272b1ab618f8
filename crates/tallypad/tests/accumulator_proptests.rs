//! Property-based tests for the expression accumulator
//!
//! Random button sequences exercise the buffer invariants that unit
//! tests only spot-check.

use proptest::prelude::*;
use tallypad::prelude::*;

/// A button press, as the accumulator sees it
#[derive(Debug, Clone, Copy)]
enum Press {
    Digit(char),
    Decimal,
    Operator(Operation),
    Evaluate,
    Percent,
    Backspace,
    Clear,
}

// ===== Strategy definitions =====

/// Generate any valid digit character
fn digit_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        Just('0'),
        Just('1'),
        Just('2'),
        Just('3'),
        Just('4'),
        Just('5'),
        Just('6'),
        Just('7'),
        Just('8'),
        Just('9')
    ]
}

/// Generate any operator
fn operator_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide)
    ]
}

/// Generate any button press
fn press_strategy() -> impl Strategy<Value = Press> {
    prop_oneof![
        digit_strategy().prop_map(Press::Digit),
        Just(Press::Decimal),
        operator_strategy().prop_map(Press::Operator),
        Just(Press::Evaluate),
        Just(Press::Percent),
        Just(Press::Backspace),
        Just(Press::Clear),
    ]
}

fn apply(acc: &mut Accumulator, press: Press) {
    match press {
        Press::Digit(c) => acc.push_digit(c),
        Press::Decimal => acc.push_digit('.'),
        Press::Operator(op) => acc.push_operator(op),
        Press::Evaluate => acc.evaluate(),
        Press::Percent => acc.percent(),
        Press::Backspace => acc.backspace(),
        Press::Clear => acc.clear(),
    }
}

// ===== Buffer invariants =====

proptest! {
    /// The buffer is never empty, no matter the press sequence
    #[test]
    fn prop_buffer_never_empty(presses in prop::collection::vec(press_strategy(), 0..64)) {
        let mut acc = Accumulator::new();
        for press in presses {
            apply(&mut acc, press);
            prop_assert!(!acc.buffer().is_empty());
        }
    }

    /// The buffer never contains two adjacent operator characters
    #[test]
    fn prop_no_adjacent_operators(presses in prop::collection::vec(press_strategy(), 0..64)) {
        let mut acc = Accumulator::new();
        for press in presses {
            apply(&mut acc, press);
            let chars: Vec<char> = acc.buffer().chars().collect();
            for pair in chars.windows(2) {
                let both_ops = "+*/".contains(pair[0]) && "+*/-".contains(pair[1]);
                prop_assert!(!both_ops, "adjacent operators in {:?}", acc.buffer());
            }
        }
    }

    /// Clear always restores the initial display
    #[test]
    fn prop_clear_restores_zero(presses in prop::collection::vec(press_strategy(), 0..32)) {
        let mut acc = Accumulator::new();
        for press in presses {
            apply(&mut acc, press);
        }
        acc.clear();
        prop_assert_eq!(acc.buffer(), "0");
        prop_assert!(!acc.is_error());
    }

    /// Backspacing a single remaining character leaves "0"
    #[test]
    fn prop_backspace_single_char(d in digit_strategy()) {
        let mut acc = Accumulator::new();
        acc.push_digit(d);
        acc.backspace();
        prop_assert_eq!(acc.buffer(), "0");
    }

    /// A digit sequence without a leading zero is displayed verbatim
    #[test]
    fn prop_digit_sequence_identity(
        first in prop_oneof![
            Just('1'), Just('2'), Just('3'), Just('4'), Just('5'),
            Just('6'), Just('7'), Just('8'), Just('9')
        ],
        rest in prop::collection::vec(digit_strategy(), 0..10),
    ) {
        let mut acc = Accumulator::new();
        acc.push_digit(first);
        for d in &rest {
            acc.push_digit(*d);
        }
        let expected: String = std::iter::once(first).chain(rest).collect();
        prop_assert_eq!(acc.buffer(), expected);
    }

    /// Once in the error state, only Clear changes the buffer
    #[test]
    fn prop_error_state_frozen(presses in prop::collection::vec(press_strategy(), 0..32)) {
        let mut acc = Accumulator::new();
        acc.push_digit('1');
        acc.push_operator(Operation::Divide);
        acc.push_digit('0');
        acc.evaluate();
        prop_assert_eq!(acc.buffer(), ERROR_TOKEN);

        for press in presses {
            if matches!(press, Press::Clear) {
                break;
            }
            apply(&mut acc, press);
            prop_assert_eq!(acc.buffer(), ERROR_TOKEN);
        }
    }
}

// ===== Evaluation properties =====

proptest! {
    /// Evaluating a bare integer returns it unchanged
    #[test]
    fn prop_bare_integer_roundtrip(n in 0u32..1_000_000) {
        let mut acc = Accumulator::new();
        for c in n.to_string().chars() {
            acc.push_digit(c);
        }
        acc.evaluate();
        prop_assert_eq!(acc.buffer(), n.to_string());
    }

    /// Adding zero never changes an integer
    #[test]
    fn prop_add_zero_identity(n in 0u32..1_000_000) {
        let mut acc = Accumulator::new();
        for c in n.to_string().chars() {
            acc.push_digit(c);
        }
        acc.push_operator(Operation::Add);
        acc.push_digit('0');
        acc.evaluate();
        prop_assert_eq!(acc.buffer(), n.to_string());
    }

    /// Evaluation is idempotent: a second Evaluate keeps the result
    #[test]
    fn prop_evaluate_idempotent(a in 0u32..10_000, b in 0u32..10_000) {
        let mut acc = Accumulator::new();
        for c in a.to_string().chars() {
            acc.push_digit(c);
        }
        acc.push_operator(Operation::Add);
        for c in b.to_string().chars() {
            acc.push_digit(c);
        }
        acc.evaluate();
        let first = acc.buffer().to_string();
        acc.evaluate();
        prop_assert_eq!(acc.buffer(), first);
    }

    /// Percent after an integer divides it by 100
    #[test]
    fn prop_percent_divides_by_100(n in 1u32..1_000_000) {
        let mut acc = Accumulator::new();
        for c in n.to_string().chars() {
            acc.push_digit(c);
        }
        acc.percent();
        prop_assert_eq!(acc.last_result(), Some(f64::from(n) / 100.0));
    }
}
