//! Frame rendering and terminal painting
//!
//! `render` draws the whole calculator into a plain [`Frame`]; `paint`
//! flushes a frame to the terminal and overlays the two styled bits (the
//! pressed button and the error display) on top.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tenkey::{Calculator, ERROR_DISPLAY};

use crate::app::App;
use crate::frame::Frame;
use crate::keypad::{BUTTON_HEIGHT, BUTTON_WIDTH};

/// Total width of the rendered calculator, borders included.
pub const FRAME_WIDTH: u16 = 26;
/// Total height of the rendered calculator, help line included.
pub const FRAME_HEIGHT: u16 = 16;
/// Terminal cell of the top-left keypad button.
pub const KEYPAD_ORIGIN: (u16, u16) = (3, 5);

/// Row of the pending-operation status text.
const STATUS_ROW: u16 = 1;
/// Row of the display field.
const DISPLAY_ROW: u16 = 2;
/// Columns available between the side borders and their padding.
const INNER_WIDTH: usize = 22;

/// Renders the application into a plain text frame.
#[must_use]
pub fn render(app: &App) -> Frame {
    let mut frame = Frame::new(FRAME_WIDTH, FRAME_HEIGHT);
    draw_borders(&mut frame);

    let status = status_text(app.calculator());
    frame.write_str(2, STATUS_ROW, &format!("{:>width$}", status, width = INNER_WIDTH));

    let display = clip_display(app.display(), INNER_WIDTH);
    frame.write_str(2, DISPLAY_ROW, &format!("{:>width$}", display, width = INNER_WIDTH));

    for ((row, col), button) in app.keypad().buttons_with_positions() {
        let x = KEYPAD_ORIGIN.0 + col as u16 * BUTTON_WIDTH;
        let y = KEYPAD_ORIGIN.1 + row as u16 * BUTTON_HEIGHT;
        frame.write_str(x, y, &format!("[{}]", button.label));
    }

    frame.write_str(1, FRAME_HEIGHT - 1, "q quit  esc clear  < del");
    frame
}

/// Paints the rendered frame to the terminal.
///
/// The pressed keypad button is overlaid in reverse video and the display
/// field turns red in the error state.
pub fn paint<W: Write>(out: &mut W, app: &App) -> io::Result<()> {
    let frame = render(app);
    for (y, line) in frame.to_lines().iter().enumerate() {
        queue!(
            out,
            MoveTo(0, y as u16),
            Clear(ClearType::CurrentLine),
            Print(line)
        )?;
    }

    if app.calculator().is_error() {
        queue!(
            out,
            MoveTo(2, DISPLAY_ROW),
            SetForegroundColor(Color::Red),
            Print(format!("{:>width$}", ERROR_DISPLAY, width = INNER_WIDTH)),
            ResetColor
        )?;
    }

    if let Some((x, y, label)) = pressed_cell(app) {
        queue!(
            out,
            MoveTo(x, y),
            SetAttribute(Attribute::Reverse),
            Print(label),
            SetAttribute(Attribute::Reset)
        )?;
    }

    out.flush()
}

/// Terminal cell and label of the currently pressed keypad button.
fn pressed_cell(app: &App) -> Option<(u16, u16, String)> {
    let keypad = app.keypad();
    let index = keypad.pressed_index()?;
    let (row, col) = keypad.position(index)?;
    let button = keypad.get_button(index)?;
    let x = KEYPAD_ORIGIN.0 + col as u16 * BUTTON_WIDTH;
    let y = KEYPAD_ORIGIN.1 + row as u16 * BUTTON_HEIGHT;
    Some((x, y, format!("[{}]", button.label)))
}

/// Formats the parked operand and pending operator, e.g. "8 +".
fn status_text(calc: &Calculator) -> String {
    match (calc.previous(), calc.pending_operator()) {
        (Some(previous), Some(op)) => format!("{} {}", previous, op.symbol()),
        _ => String::new(),
    }
}

/// Clips an overlong display value to the field width.
fn clip_display(display: &str, width: usize) -> String {
    if display.chars().count() <= width {
        display.to_string()
    } else {
        let head: String = display.chars().take(width - 1).collect();
        format!("{head}…")
    }
}

fn draw_borders(frame: &mut Frame) {
    let inner = usize::from(FRAME_WIDTH) - 2;
    let title = "─ tenkey ";
    let top = format!("┌{}{}┐", title, "─".repeat(inner - title.chars().count()));
    frame.write_str(0, 0, &top);

    for y in 1..FRAME_HEIGHT - 2 {
        frame.set(0, y, '│');
        frame.set(FRAME_WIDTH - 1, y, '│');
    }
    frame.write_str(0, 3, &format!("├{}┤", "─".repeat(inner)));
    frame.write_str(0, FRAME_HEIGHT - 2, &format!("└{}┘", "─".repeat(inner)));
}
