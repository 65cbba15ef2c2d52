//! Tenkey - keypad calculator core
//!
//! The input state machine behind a button-driven desk calculator: raw
//! keystrokes accumulate into operands, one operator can be pending at a
//! time, and chained operations resolve left to right (`5 + 3 * 2 =` is
//! `16`, not `11`). The crate is I/O-free; frontends feed it [`Input`]
//! events and render the display string it hands back.
//!
//! # Example
//!
//! ```rust
//! use tenkey::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press(Input::Digit(5));
//! calc.press(Input::Operator(Operator::Add));
//! calc.press(Input::Digit(3));
//! assert_eq!(calc.press(Input::Equals), "8");
//!
//! // Division by zero parks the machine in a recoverable error state
//! calc.press(Input::Operator(Operator::Divide));
//! calc.press(Input::Digit(0));
//! assert_eq!(calc.press(Input::Equals), "Error");
//! assert!(calc.is_error());
//! ```

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
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod error;
pub mod operator;
pub mod state;

pub use error::{CalcError, CalcResult};
pub use operator::Operator;
pub use state::{Calculator, Input, Phase, ERROR_DISPLAY, MAX_OPERAND_LEN};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::operator::Operator;
    pub use crate::state::{Calculator, Input, Phase, ERROR_DISPLAY, MAX_OPERAND_LEN};
}
