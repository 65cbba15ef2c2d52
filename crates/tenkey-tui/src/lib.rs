//! Terminal frontend for the tenkey calculator
//!
//! Translates key presses and keypad mouse clicks into core calculator
//! inputs, renders the machine's display string into a text frame and
//! paints it with crossterm. A headless `--keys` mode replays a keystroke
//! string and prints the final display, which is also how the binary tests
//! drive the whole stack.

// Allow common test patterns in this crate's test modules
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]

pub mod app;
pub mod cli;
pub mod error;
pub mod frame;
pub mod input;
pub mod keypad;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use error::{TuiError, TuiResult};
pub use frame::Frame;
pub use input::{replay_keys, InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton};
