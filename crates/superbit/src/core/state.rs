//! The ternary cell state.
//!
//! A cell is either a concrete bit or undetermined. "Undetermined" is a plain
//! label here: there are no amplitudes and nothing ever collapses it except an
//! explicit set.

use core::fmt;

use crate::error::{Error, Result};

/// Pattern symbol for an undetermined cell.
pub const UNKNOWN_SYMBOL: char = '?';

/// One of exactly three cell states.
///
/// Raw inputs (`u8`, `Option<u8>`, `char`) convert through [`TryFrom`] and are
/// rejected with [`Error::InvalidState`] when they name anything else.
///
/// # Example
///
/// ```
/// use superbit::State;
///
/// assert_eq!(State::try_from(1u8), Ok(State::One));
/// assert_eq!(State::try_from(None::<u8>), Ok(State::Unknown));
/// assert!(State::try_from(2u8).is_err());
/// assert_eq!(State::Unknown.to_string(), "(0 & 1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    /// Concrete bit 0.
    Zero,
    /// Concrete bit 1.
    One,
    /// Undetermined; expands into both 0 and 1.
    #[default]
    Unknown,
}

impl State {
    /// Returns the concrete bit, or `None` if undetermined.
    #[inline]
    #[must_use]
    pub const fn bit(self) -> Option<bool> {
        match self {
            Self::Zero => Some(false),
            Self::One => Some(true),
            Self::Unknown => None,
        }
    }

    /// Returns true iff the state is [`State::Unknown`].
    #[inline]
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Single-character pattern symbol: `'0'`, `'1'` or `'?'`.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Unknown => UNKNOWN_SYMBOL,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0"),
            Self::One => f.write_str("1"),
            Self::Unknown => f.write_str("(0 & 1)"),
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(bit: bool) -> Self {
        if bit {
            Self::One
        } else {
            Self::Zero
        }
    }
}

impl TryFrom<u8> for State {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(Error::invalid_state(other)),
        }
    }
}

impl TryFrom<Option<u8>> for State {
    type Error = Error;

    fn try_from(value: Option<u8>) -> Result<Self> {
        value.map_or(Ok(Self::Unknown), Self::try_from)
    }
}

impl TryFrom<char> for State {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            UNKNOWN_SYMBOL => Ok(Self::Unknown),
            other => Err(Error::invalid_state(format_args!("{other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown() {
        assert_eq!(State::default(), State::Unknown);
        assert!(State::default().is_unknown());
    }

    #[test]
    fn raw_conversions() {
        assert_eq!(State::try_from(0u8), Ok(State::Zero));
        assert_eq!(State::try_from(1u8), Ok(State::One));
        assert_eq!(State::try_from(Some(0u8)), Ok(State::Zero));
        assert_eq!(State::try_from(None::<u8>), Ok(State::Unknown));
        assert_eq!(State::try_from('?'), Ok(State::Unknown));
        assert_eq!(State::from(true), State::One);
    }

    #[test]
    fn rejects_out_of_alphabet_values() {
        for raw in 2..=u8::MAX {
            assert!(matches!(
                State::try_from(raw),
                Err(Error::InvalidState { .. })
            ));
        }
        assert_eq!(
            State::try_from(Some(7u8)),
            Err(Error::InvalidState { value: "7".into() })
        );
        assert_eq!(
            State::try_from('x'),
            Err(Error::InvalidState {
                value: "'x'".into()
            })
        );
    }

    #[test]
    fn labels_are_unambiguous() {
        assert_eq!(State::Zero.to_string(), "0");
        assert_eq!(State::One.to_string(), "1");
        assert_eq!(State::Unknown.to_string(), "(0 & 1)");
        assert_eq!(State::Zero.symbol(), '0');
        assert_eq!(State::Unknown.symbol(), '?');
    }
}
