//! Registers: ordered, exclusively owned sequences of cells.
//!
//! A register grows and shrinks one cell at a time at its tail, reads and
//! writes cells by bounds-checked index, and expands its undetermined cells
//! into every concrete bit-string consistent with the determined ones.
//!
//! # Pattern notation
//!
//! A register renders as one symbol per cell, `'0'`, `'1'`, or `'?'` for an
//! undetermined cell, and parses back from the same notation.
//!
//! ```
//! use superbit::Register;
//!
//! let register: Register = "?1?".parse().unwrap();
//! assert_eq!(register.to_string(), "?1?");
//! assert_eq!(register.enumerate(), ["010", "011", "110", "111"]);
//! ```

mod expand;


use core::fmt::{self, Write as _};
use core::str::FromStr;

use crate::core::cell::Cell;
use crate::core::state::State;
use crate::error::{Error, Result};

pub use expand::Expansions;

/// An ordered sequence of [`Cell`]s, index `0..len`.
///
/// Created with a positive number of undetermined cells. Removal may later
/// empty it; an empty register enumerates to nothing.
///
/// The register defines no internal synchronisation. Share it across threads
/// behind a single lock held for each mutating call, and for
/// [`enumerate`](Self::enumerate) when it must observe one consistent state.
///
/// # Example
///
/// ```
/// use superbit::{Register, State};
///
/// let mut register = Register::new(3).unwrap();
/// register.set_cell(1, State::One).unwrap();
/// assert_eq!(register.get_cell(1), Ok(State::One));
/// assert_eq!(register.enumerate(), ["010", "011", "110", "111"]);
///
/// register.add_cell();
/// assert_eq!(register.len(), 4);
/// assert_eq!(register.expansion_count(), Some(8));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Register {
    cells: Vec<Cell>,
}

impl Register {
    /// Creates a register of `size` undetermined cells.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            tracing::debug!(size, "rejected register size");
            return Err(Error::InvalidSize { requested: size });
        }
        Ok(Self {
            cells: vec![Cell::UNKNOWN; size],
        })
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if every cell has been removed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Appends one undetermined cell at the tail.
    pub fn add_cell(&mut self) {
        self.cells.push(Cell::UNKNOWN);
        tracing::trace!(len = self.cells.len(), "cell appended");
    }

    /// Removes and returns the tail cell.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRegister`] if there is no cell to remove.
    pub fn remove_cell(&mut self) -> Result<Cell> {
        let Some(cell) = self.cells.pop() else {
            tracing::debug!("rejected removal from empty register");
            return Err(Error::EmptyRegister);
        };
        tracing::trace!(len = self.cells.len(), removed = %cell, "cell removed");
        Ok(cell)
    }

    /// Sets the cell at `index`.
    ///
    /// The index is checked before the value.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`, then
    /// [`Error::InvalidState`] if `value` is outside the ternary alphabet.
    pub fn set_cell<V>(&mut self, index: usize, value: V) -> Result<()>
    where
        V: TryInto<State>,
        Error: From<V::Error>,
    {
        let len = self.cells.len();
        let Some(cell) = self.cells.get_mut(index) else {
            tracing::debug!(index, len, "rejected cell index");
            return Err(Error::IndexOutOfRange { index, len });
        };
        cell.set(value)?;
        tracing::trace!(index, state = %cell, "cell set");
        Ok(())
    }

    /// Returns the state of the cell at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get_cell(&self, index: usize) -> Result<State> {
        self.cells
            .get(index)
            .map(Cell::state)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
    }

    /// Returns an owned copy of the cells. Mutating it leaves the register
    /// unchanged.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    /// Iterates over the cells in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of undetermined cells.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_unknown()).count()
    }

    /// Number of strings [`enumerate`](Self::enumerate) returns: `2^k` for
    /// `k` undetermined cells, `0` when empty, `None` past `u128`.
    #[must_use]
    pub fn expansion_count(&self) -> Option<u128> {
        expand::expansion_count(&self.cells)
    }

    /// Every concrete bit-string consistent with the current cells.
    ///
    /// Cells are visited left to right; an undetermined cell yields its `0`
    /// branch before its `1` branch. Each string has length [`len`](Self::len).
    /// An empty register returns an empty vector. The register is not
    /// modified, so repeated calls return the same sequence.
    ///
    /// The result holds `2^k` strings for `k` undetermined cells; prefer
    /// [`expansions`](Self::expansions) when `k` is large.
    #[must_use]
    pub fn enumerate(&self) -> Vec<String> {
        tracing::debug!(
            len = self.cells.len(),
            unknown = self.unknown_count(),
            "enumerating register"
        );
        expand::enumerate(&self.cells)
    }

    /// Lazily yields the same sequence as [`enumerate`](Self::enumerate).
    pub fn expansions(&self) -> Expansions<'_> {
        Expansions::new(&self.cells)
    }
}

impl<'a> IntoIterator for &'a Register {
    type Item = &'a Cell;
    type IntoIter = core::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cells
            .iter()
            .try_for_each(|cell| f.write_char(cell.state().symbol()))
    }
}

impl FromStr for Register {
    type Err = Error;

    fn from_str(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::InvalidSize { requested: 0 });
        }
        let cells = pattern
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Cell::new(symbol).map_err(|err| match err {
                    Error::InvalidState { value } => Error::InvalidState {
                        value: format!("{value} at position {position}"),
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { cells })
    }
}
