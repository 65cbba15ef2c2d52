//! Application state for the terminal frontend

use tenkey::{Calculator, Input};

use crate::input::KeyAction;
use crate::keypad::Keypad;

/// Calculator application state.
///
/// Owns the core state machine and the frontend-only bits: the keypad
/// highlight and the quit flag. All mutation happens through
/// [`handle_action`](Self::handle_action) and
/// [`handle_click`](Self::handle_click), one event at a time.
#[derive(Debug)]
pub struct App {
    /// Core input state machine
    calc: Calculator,
    /// On-screen button grid
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new app in the calculator's initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calc: Calculator::new(),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Returns the core calculator.
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Returns the keypad.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Current display string.
    #[must_use]
    pub fn display(&self) -> &str {
        self.calc.display()
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies one key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(input) => self.press(input),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Routes a mouse click at terminal cell (x, y) to the keypad.
    ///
    /// Clicks outside the grid only release the highlight.
    pub fn handle_click(&mut self, x: u16, y: u16) {
        let Some(index) = self.keypad.hit_test(crate::ui::KEYPAD_ORIGIN, x, y) else {
            self.keypad.release_all();
            return;
        };
        if let Some(input) = self.keypad.get_button(index).map(|b| b.input) {
            self.press(input);
        }
    }

    fn press(&mut self, input: Input) {
        self.keypad.highlight(input);
        let disp = self.calc.press(input);
        tracing::debug!(?input, display = disp, "input applied");
    }
}
