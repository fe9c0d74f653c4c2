//! Superbit - ternary bit registers
//!
//! A register is a fixed-order sequence of cells. Each cell holds a concrete
//! bit or an undetermined marker, and the register can list every concrete
//! bit-string consistent with its cells.
//!
//! # Model
//!
//! ```text
//! State    = 0 | 1 | ?            (? = undetermined, no amplitudes)
//! Cell     = one State
//! Register = [Cell; n]            (grows / shrinks at the tail)
//! expand   : Register -> [String] (2^k strings for k undetermined cells)
//! ```
//!
//! # Expansion Order
//!
//! Cells are visited left to right and an undetermined cell takes its `0`
//! branch before its `1` branch, so the leftmost undetermined cell varies
//! slowest:
//!
//! | Cells | Expansions |
//! |-------|------------|
//! | `011` | `011` |
//! | `?1?` | `010`, `011`, `110`, `111` |
//! | `??`  | `00`, `01`, `10`, `11` |
//!
//! # Example
//!
//! ```
//! use superbit::{Register, State};
//!
//! let mut register = Register::new(3).unwrap();
//! register.set_cell(1, State::One).unwrap();
//!
//! assert_eq!(register.to_string(), "?1?");
//! assert_eq!(register.enumerate(), ["010", "011", "110", "111"]);
//!
//! // Raw values are validated.
//! assert!(register.set_cell(0, 2u8).is_err());
//! assert!(register.get_cell(3).is_err());
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` / `Deserialize` for [`State`], [`Cell`] and
//!   [`Register`]. A register serialises as its cell sequence.
//!
//! # Logging
//!
//! Mutations emit `tracing` events at `TRACE`, rejected calls and the start of
//! an enumeration at `DEBUG`. No subscriber is installed by this crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Cell-level data types (state, cell)
mod core;

// Error taxonomy
pub mod error;

// Registers and their expansion
pub mod register;

pub use crate::core::cell;
pub use crate::core::state;

pub use crate::core::cell::Cell;
pub use crate::core::state::{State, UNKNOWN_SYMBOL};
pub use error::{Error, Result};
pub use register::{Expansions, Register};

/// Prelude module for convenient imports.
///
/// ```
/// use superbit::prelude::*;
///
/// let register: Register = "1?".parse().unwrap();
/// assert_eq!(register.get_cell(0), Ok(State::One));
/// ```
pub mod prelude {
    pub use crate::core::cell::Cell;
    pub use crate::core::state::State;
    pub use crate::error::{Error, Result};
    pub use crate::register::{Expansions, Register};
}
