//! The calculator input state machine
//!
//! Keystrokes accumulate into the current operand; choosing an operator
//! parks the operand and arms the operator; chained operations resolve
//! left to right, with no precedence.

use crate::error::CalcError;
use crate::operator::Operator;

/// Maximum number of characters an operand can grow to while typing.
///
/// The cap applies to typed input only; computed results may be longer.
pub const MAX_OPERAND_LEN: usize = 15;

/// Display text shown after a failed calculation.
pub const ERROR_DISPLAY: &str = "Error";

/// Lifecycle phase of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Digits extend the current operand.
    #[default]
    Editing,
    /// An operator or result was just committed; the next digit starts a
    /// fresh operand.
    Replace,
    /// A calculation failed. Arithmetic is parked until the state is cleared
    /// or a fresh operand is started.
    Error,
}

/// A discrete calculator input, as produced by buttons or keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// A binary operator
    Operator(Operator),
    /// Resolve the pending operation
    Equals,
    /// Reset all state
    Clear,
    /// Delete the last typed character
    Backspace,
}

/// The calculator input state machine.
///
/// Holds the operand being typed, at most one pending operator and the
/// operand parked before it. Every operation returns the new display
/// string. `5 + 3 * 2 =` resolves to `(5 + 3) * 2 = 16`, not `5 + 6`.
///
/// # Example
///
/// ```rust
/// use tenkey::prelude::*;
///
/// let mut calc = Calculator::new();
/// calc.input_digit(5);
/// calc.input_operator(Operator::Add);
/// calc.input_digit(3);
/// assert_eq!(calc.calculate(), "8");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Text of the operand being typed, or the last committed result
    current: String,
    /// Operand parked when an operator was chosen
    previous: Option<f64>,
    /// Operator awaiting its second operand
    pending: Option<Operator>,
    /// Lifecycle phase
    phase: Phase,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in its initial state, displaying "0".
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            pending: None,
            phase: Phase::Editing,
        }
    }

    /// Current operand exactly as the display field should show it.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.current
    }

    /// Operand parked while an operator is pending.
    #[must_use]
    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    /// Operator awaiting its second operand.
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True when the next digit starts a fresh operand rather than
    /// extending the current one.
    #[must_use]
    pub fn awaiting_new_operand(&self) -> bool {
        !matches!(self.phase, Phase::Editing)
    }

    /// True while the display shows the error text.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.phase == Phase::Error
    }

    /// Routes one input to the matching operation.
    pub fn press(&mut self, input: Input) -> &str {
        match input {
            Input::Digit(d) => self.input_digit(d),
            Input::Decimal => self.input_decimal(),
            Input::Operator(op) => self.input_operator(op),
            Input::Equals => self.calculate(),
            Input::Clear => self.clear_all(),
            Input::Backspace => self.delete_last(),
        }
    }

    /// Types one digit into the current operand.
    ///
    /// Starts a fresh operand after an operator, a result or an error;
    /// replaces a bare "0"; otherwise appends, ignoring digits that would
    /// push the operand past [`MAX_OPERAND_LEN`]. Values above 9 are
    /// ignored.
    pub fn input_digit(&mut self, digit: u8) -> &str {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return &self.current;
        };
        if self.awaiting_new_operand() || self.current == "0" {
            self.current.clear();
            self.current.push(ch);
            self.phase = Phase::Editing;
        } else if self.current.len() < MAX_OPERAND_LEN {
            self.current.push(ch);
        }
        &self.current
    }

    /// Types the decimal point.
    ///
    /// Accepted once per operand; a fresh operand starts as "0.".
    pub fn input_decimal(&mut self) -> &str {
        if self.awaiting_new_operand() {
            self.current.clear();
            self.current.push_str("0.");
            self.phase = Phase::Editing;
        } else if !self.current.contains('.') && self.current.len() < MAX_OPERAND_LEN {
            self.current.push('.');
        }
        &self.current
    }

    /// Chooses an operator, resolving any operation already pending.
    ///
    /// The first operator press parks the current operand. A later press
    /// applies the pending operator to the parked and current operands
    /// first, so chains resolve left to right. Ignored in the Error phase.
    pub fn input_operator(&mut self, op: Operator) -> &str {
        if self.phase == Phase::Error {
            return &self.current;
        }
        let value = self.current_value();
        match (self.previous, self.pending) {
            (Some(prev), Some(pending)) => match pending.apply(prev, value) {
                Ok(result) => {
                    self.current = result.to_string();
                    self.previous = Some(result);
                }
                Err(CalcError::DivideByZero) => return self.enter_error(),
            },
            _ => self.previous = Some(value),
        }
        self.pending = Some(op);
        self.phase = Phase::Replace;
        &self.current
    }

    /// Resolves the pending operation.
    ///
    /// No-op when no operator is pending, which also makes a second press
    /// of equals harmless. Ignored in the Error phase (nothing is pending
    /// there).
    pub fn calculate(&mut self) -> &str {
        let (Some(prev), Some(pending)) = (self.previous, self.pending) else {
            return &self.current;
        };
        match pending.apply(prev, self.current_value()) {
            Ok(result) => {
                self.current = result.to_string();
                self.previous = None;
                self.pending = None;
                self.phase = Phase::Replace;
            }
            Err(CalcError::DivideByZero) => {
                self.enter_error();
            }
        }
        &self.current
    }

    /// Resets all state to the initial values.
    pub fn clear_all(&mut self) -> &str {
        *self = Self::new();
        &self.current
    }

    /// Removes the last character of the current operand.
    ///
    /// A single remaining character resets the display to "0". Ignored in
    /// the Error phase; the error text is not editable.
    pub fn delete_last(&mut self) -> &str {
        if self.phase == Phase::Error {
            return &self.current;
        }
        if self.current.len() > 1 {
            self.current.pop();
        } else {
            self.current.clear();
            self.current.push('0');
        }
        &self.current
    }

    /// Parses the display text. Typed operands and committed results are
    /// always valid float literals; the zero fallback covers the remnants
    /// backspace can leave behind (a bare "-" from an edited result).
    fn current_value(&self) -> f64 {
        self.current.parse().unwrap_or_default()
    }

    fn enter_error(&mut self) -> &str {
        self.current.clear();
        self.current.push_str(ERROR_DISPLAY);
        self.previous = None;
        self.pending = None;
        self.phase = Phase::Error;
        &self.current
    }
}
