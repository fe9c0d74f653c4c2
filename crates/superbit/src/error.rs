//! Error taxonomy for cells and registers.
//!
//! Every variant is a caller contract violation raised at the point of the
//! offending call. Nothing is retried, clamped, or truncated.

use core::convert::Infallible;

use thiserror::Error;

/// Errors raised by [`Cell`](crate::Cell) and [`Register`](crate::Register).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value outside `{0, 1, Unknown}` was supplied.
    #[error("invalid state {value}: must be 0, 1, or unknown")]
    InvalidState {
        /// Rendering of the rejected value.
        value: String,
    },

    /// A register was requested with a non-positive number of cells.
    #[error("invalid register size {requested}: must be positive")]
    InvalidSize {
        /// The requested number of cells.
        requested: usize,
    },

    /// An index outside `[0, len)` was supplied.
    #[error("cell index {index} out of range for register of length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Register length at the time of the call.
        len: usize,
    },

    /// A cell was removed from a register that has none.
    #[error("cannot remove a cell from an empty register")]
    EmptyRegister,
}

impl Error {
    pub(crate) fn invalid_state(value: impl core::fmt::Display) -> Self {
        Self::InvalidState {
            value: value.to_string(),
        }
    }
}

// Lets `State -> State` (infallible) flow through the same generic setters
// as the validated raw conversions.
impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            Error::invalid_state(2).to_string(),
            "invalid state 2: must be 0, 1, or unknown"
        );
        assert_eq!(
            Error::IndexOutOfRange { index: 5, len: 3 }.to_string(),
            "cell index 5 out of range for register of length 3"
        );
        assert_eq!(
            Error::InvalidSize { requested: 0 }.to_string(),
            "invalid register size 0: must be positive"
        );
    }
}
