//! A single register cell.

use core::fmt;

use super::state::State;
use crate::error::{Error, Result};

/// One cell of a [`Register`](crate::Register).
///
/// Holds exactly one [`State`]. Every mutation goes through [`Cell::set`],
/// which validates raw inputs the same way construction does.
///
/// # Example
///
/// ```
/// use superbit::{Cell, State};
///
/// let mut cell = Cell::default();
/// assert!(cell.is_unknown());
///
/// cell.set(1u8).unwrap();
/// assert_eq!(cell.state(), State::One);
/// assert!(cell.set(3u8).is_err());
/// assert_eq!(cell.to_string(), "1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Cell {
    state: State,
}

impl Cell {
    /// An undetermined cell.
    pub const UNKNOWN: Self = Self {
        state: State::Unknown,
    };

    /// Creates a cell from any value convertible into a [`State`].
    ///
    /// Typed states never fail; raw `u8`, `Option<u8>` and `char` values fail
    /// with [`Error::InvalidState`] outside the ternary alphabet.
    pub fn new<V>(initial: V) -> Result<Self>
    where
        V: TryInto<State>,
        Error: From<V::Error>,
    {
        Ok(Self {
            state: initial.try_into()?,
        })
    }

    /// Creates an undetermined cell.
    #[inline]
    #[must_use]
    pub const fn unknown() -> Self {
        Self::UNKNOWN
    }

    /// Replaces the stored state. On error the cell is left untouched.
    pub fn set<V>(&mut self, value: V) -> Result<()>
    where
        V: TryInto<State>,
        Error: From<V::Error>,
    {
        self.state = value.try_into()?;
        Ok(())
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// True iff the cell is undetermined.
    #[inline]
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.state.is_unknown()
    }

    /// Concrete bit, or `None` if undetermined.
    #[inline]
    #[must_use]
    pub const fn bit(&self) -> Option<bool> {
        self.state.bit()
    }
}

impl From<State> for Cell {
    #[inline]
    fn from(state: State) -> Self {
        Self { state }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}
