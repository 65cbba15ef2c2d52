//! Keyboard input handling
//!
//! A pure mapping from key events to calculator inputs; the state machine
//! itself never sees the terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tenkey::{Calculator, Input, Operator};

use crate::error::{TuiError, TuiResult};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an input to the calculator
    Press(Input),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
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
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => Self::input_for_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Input::Equals),
            KeyCode::Esc => KeyAction::Press(Input::Clear),
            KeyCode::Backspace => KeyAction::Press(Input::Backspace),
            _ => KeyAction::None,
        }
    }

    /// Maps a plain keystroke character to a calculator input.
    ///
    /// Shared by the key handler and the `--keys` replay mode. `x` and `×`
    /// multiply, `÷` divides, `c` clears, `<` deletes.
    #[must_use]
    pub fn input_for_char(c: char) -> Option<Input> {
        match c {
            '0'..='9' => Some(Input::Digit(c as u8 - b'0')),
            '.' => Some(Input::Decimal),
            '+' => Some(Input::Operator(Operator::Add)),
            '-' => Some(Input::Operator(Operator::Subtract)),
            '*' | 'x' | '×' => Some(Input::Operator(Operator::Multiply)),
            '/' | '÷' => Some(Input::Operator(Operator::Divide)),
            '=' => Some(Input::Equals),
            'c' | 'C' => Some(Input::Clear),
            '<' => Some(Input::Backspace),
            _ => None,
        }
    }
}

/// Replays a keystroke string through a fresh calculator and returns the
/// final display string.
///
/// Whitespace is skipped; any other character without a mapping is an
/// error. This is what `tenkey --keys "5+3="` runs.
pub fn replay_keys(keys: &str) -> TuiResult<String> {
    let mut calc = Calculator::new();
    for c in keys.chars() {
        if c.is_whitespace() {
            continue;
        }
        let input = InputHandler::input_for_char(c).ok_or(TuiError::InvalidKey { key: c })?;
        let disp = calc.press(input);
        tracing::debug!(key = %c, display = disp, "replayed key");
    }
    Ok(calc.display().to_string())
}
