//! On-screen keypad for the calculator
//!
//! The button grid mirrors a desk calculator's ten-key layout. Buttons can
//! be clicked with the mouse and light up when the matching key is pressed.

use tenkey::{Input, Operator};

/// Width of one button cell in terminal columns, gap included.
pub const BUTTON_WIDTH: u16 = 4;
/// Height of one button cell in terminal rows.
pub const BUTTON_HEIGHT: u16 = 2;

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The character shown on the button
    pub label: char,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
    /// The calculator input this button emits
    pub input: Input,
}

impl KeypadButton {
    fn new(label: char, input: Input) -> Self {
        Self {
            label,
            pressed: false,
            input,
        }
    }

    /// Creates a digit button.
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self::new(
            char::from_digit(u32::from(d), 10).unwrap_or('?'),
            Input::Digit(d),
        )
    }

    /// Creates an operator button.
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self::new(
            op.symbol().chars().next().unwrap_or('?'),
            Input::Operator(op),
        )
    }

    /// Creates the decimal point button.
    #[must_use]
    pub fn decimal() -> Self {
        Self::new('.', Input::Decimal)
    }

    /// Creates the equals button.
    #[must_use]
    pub fn equals() -> Self {
        Self::new('=', Input::Equals)
    }

    /// Creates the clear button.
    #[must_use]
    pub fn clear() -> Self {
        Self::new('C', Input::Clear)
    }

    /// Creates the backspace button.
    #[must_use]
    pub fn backspace() -> Self {
        Self::new('<', Input::Backspace)
    }

    /// Sets the pressed state.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout - 4 columns, 5 rows, last row half-filled:
///
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ / ]
/// [ 4 ] [ 5 ] [ 6 ] [ * ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ = ] [ + ]
/// [ C ] [ < ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: 7 8 9 /
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Divide),
            // Row 1: 4 5 6 *
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Multiply),
            // Row 2: 1 2 3 -
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Subtract),
            // Row 3: 0 . = +
            KeypadButton::digit(0),
            KeypadButton::decimal(),
            KeypadButton::equals(),
            KeypadButton::operator(Operator::Add),
            // Row 4: C <
            KeypadButton::clear(),
            KeypadButton::backspace(),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a mutable button by index.
    pub fn get_button_mut(&mut self, index: usize) -> Option<&mut KeypadButton> {
        self.buttons.get_mut(index)
    }

    /// Gets a button by row and column; empty grid cells yield `None`.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Grid position of a button index.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.buttons.len() {
            Some((index / self.cols, index % self.cols))
        } else {
            None
        }
    }

    /// Finds the button emitting the given input.
    #[must_use]
    pub fn find_button(&self, input: Input) -> Option<usize> {
        self.buttons.iter().position(|b| b.input == input)
    }

    /// Sets a button as pressed by index.
    pub fn press_button(&mut self, index: usize) {
        if let Some(button) = self.buttons.get_mut(index) {
            button.set_pressed(true);
        }
    }

    /// Releases all buttons.
    pub fn release_all(&mut self) {
        for button in &mut self.buttons {
            button.set_pressed(false);
        }
    }

    /// Highlights the button emitting the given input, releasing the rest.
    pub fn highlight(&mut self, input: Input) {
        self.release_all();
        if let Some(index) = self.find_button(input) {
            self.press_button(index);
        }
    }

    /// Index of the currently pressed button, if any.
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Returns an iterator over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, button)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), button)
        })
    }

    /// Maps a click at terminal cell (x, y) to a button index, given the
    /// cell of the top-left button. Clicks outside the grid, or on the
    /// empty cells of the last row, yield `None`.
    #[must_use]
    pub fn hit_test(&self, origin: (u16, u16), x: u16, y: u16) -> Option<usize> {
        let (ox, oy) = origin;
        if x < ox || y < oy {
            return None;
        }
        let col = usize::from((x - ox) / BUTTON_WIDTH);
        let row = usize::from((y - oy) / BUTTON_HEIGHT);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let index = row * self.cols + col;
        if index < self.buttons.len() {
            Some(index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: (u16, u16) = (3, 5);

    // ===== KeypadButton tests =====

    #[test]
    fn test_digit_button_creation() {
        for d in 0..=9 {
            let button = KeypadButton::digit(d);
            assert_eq!(button.label, char::from_digit(u32::from(d), 10).unwrap());
            assert!(!button.pressed);
            assert_eq!(button.input, Input::Digit(d));
        }
    }

    #[test]
    fn test_operator_button_labels() {
        assert_eq!(KeypadButton::operator(Operator::Add).label, '+');
        assert_eq!(KeypadButton::operator(Operator::Subtract).label, '-');
        assert_eq!(KeypadButton::operator(Operator::Multiply).label, '*');
        assert_eq!(KeypadButton::operator(Operator::Divide).label, '/');
    }

    #[test]
    fn test_special_buttons() {
        assert_eq!(KeypadButton::decimal().input, Input::Decimal);
        assert_eq!(KeypadButton::equals().input, Input::Equals);
        assert_eq!(KeypadButton::clear().input, Input::Clear);
        assert_eq!(KeypadButton::backspace().input, Input::Backspace);
    }

    #[test]
    fn test_button_pressed_state() {
        let mut button = KeypadButton::digit(5);
        assert!(!button.pressed);
        button.set_pressed(true);
        assert!(button.pressed);
        button.set_pressed(false);
        assert!(!button.pressed);
    }

    // ===== Layout tests =====

    #[test]
    fn test_keypad_has_eighteen_buttons() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 18);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_row_layout() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().label, '7');
        assert_eq!(keypad.get_button_at(0, 3).unwrap().label, '/');
        assert_eq!(keypad.get_button_at(1, 3).unwrap().label, '*');
        assert_eq!(keypad.get_button_at(2, 3).unwrap().label, '-');
        assert_eq!(keypad.get_button_at(3, 0).unwrap().label, '0');
        assert_eq!(keypad.get_button_at(3, 2).unwrap().label, '=');
        assert_eq!(keypad.get_button_at(4, 0).unwrap().label, 'C');
        assert_eq!(keypad.get_button_at(4, 1).unwrap().label, '<');
    }

    #[test]
    fn test_last_row_empty_cells() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(4, 2).is_none());
        assert!(keypad.get_button_at(4, 3).is_none());
        assert!(keypad.get_button_at(5, 0).is_none());
    }

    #[test]
    fn test_every_input_has_a_button() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(keypad.find_button(Input::Digit(d)).is_some(), "digit {d}");
        }
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert!(keypad.find_button(Input::Operator(op)).is_some());
        }
        assert!(keypad.find_button(Input::Decimal).is_some());
        assert!(keypad.find_button(Input::Equals).is_some());
        assert!(keypad.find_button(Input::Clear).is_some());
        assert!(keypad.find_button(Input::Backspace).is_some());
    }

    #[test]
    fn test_position_roundtrip() {
        let keypad = Keypad::new();
        for index in 0..keypad.button_count() {
            let (row, col) = keypad.position(index).unwrap();
            assert_eq!(
                keypad.get_button_at(row, col).unwrap().label,
                keypad.get_button(index).unwrap().label
            );
        }
        assert!(keypad.position(18).is_none());
    }

    // ===== Highlight tests =====

    #[test]
    fn test_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.press_button(0);
        assert!(keypad.get_button(0).unwrap().pressed);
        assert_eq!(keypad.pressed_index(), Some(0));
        keypad.release_all();
        assert_eq!(keypad.pressed_index(), None);
    }

    #[test]
    fn test_highlight_presses_exactly_one() {
        let mut keypad = Keypad::new();
        keypad.press_button(0);
        keypad.press_button(5);
        keypad.highlight(Input::Digit(2));
        let pressed = keypad.buttons().filter(|b| b.pressed).count();
        assert_eq!(pressed, 1);
        let index = keypad.pressed_index().unwrap();
        assert_eq!(keypad.get_button(index).unwrap().label, '2');
    }

    #[test]
    fn test_buttons_with_positions_covers_grid() {
        let keypad = Keypad::new();
        let positions: Vec<_> = keypad.buttons_with_positions().collect();
        assert_eq!(positions.len(), 18);
        assert_eq!(positions[0].0, (0, 0));
        assert_eq!(positions[17].0, (4, 1));
    }

    // ===== Hit test tests =====

    #[test]
    fn test_hit_test_top_left_button() {
        let keypad = Keypad::new();
        let index = keypad.hit_test(ORIGIN, 3, 5).unwrap();
        assert_eq!(keypad.get_button(index).unwrap().label, '7');
    }

    #[test]
    fn test_hit_test_within_cell() {
        let keypad = Keypad::new();
        // Anywhere inside the 4x2 cell resolves to the same button
        assert_eq!(keypad.hit_test(ORIGIN, 3, 5), keypad.hit_test(ORIGIN, 6, 6));
    }

    #[test]
    fn test_hit_test_each_column() {
        let keypad = Keypad::new();
        let labels: Vec<char> = (0..4)
            .map(|col| {
                let index = keypad.hit_test(ORIGIN, 3 + col * BUTTON_WIDTH, 5).unwrap();
                keypad.get_button(index).unwrap().label
            })
            .collect();
        assert_eq!(labels, vec!['7', '8', '9', '/']);
    }

    #[test]
    fn test_hit_test_last_row() {
        let keypad = Keypad::new();
        let y = 5 + 4 * BUTTON_HEIGHT;
        let index = keypad.hit_test(ORIGIN, 3, y).unwrap();
        assert_eq!(keypad.get_button(index).unwrap().label, 'C');
    }

    #[test]
    fn test_hit_test_outside_grid() {
        let keypad = Keypad::new();
        assert_eq!(keypad.hit_test(ORIGIN, 0, 0), None);
        assert_eq!(keypad.hit_test(ORIGIN, 2, 5), None);
        assert_eq!(keypad.hit_test(ORIGIN, 100, 5), None);
        assert_eq!(keypad.hit_test(ORIGIN, 3, 100), None);
    }

    #[test]
    fn test_hit_test_empty_last_row_cells() {
        let keypad = Keypad::new();
        let y = 5 + 4 * BUTTON_HEIGHT;
        assert_eq!(keypad.hit_test(ORIGIN, 3 + 2 * BUTTON_WIDTH, y), None);
        assert_eq!(keypad.hit_test(ORIGIN, 3 + 3 * BUTTON_WIDTH, y), None);
    }
}
