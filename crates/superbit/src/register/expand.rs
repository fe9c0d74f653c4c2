//! Enumeration of the concrete bit-strings a register admits.
//!
//! Both routines visit cells left to right and take the `0` branch of an
//! undetermined cell before the `1` branch, so the leftmost undetermined cell
//! varies slowest. [`enumerate`] collects eagerly from a work stack; [`Expansions`]
//! walks the same sequence lazily with an odometer.
//!
//! ```text
//! cells  ? 1 ?
//!        ├─0─ 1 ─┬─0─▶ 010
//!        │       └─1─▶ 011
//!        └─1─ 1 ─┬─0─▶ 110
//!                └─1─▶ 111
//! ```

use core::iter::FusedIterator;

use crate::core::cell::Cell;

#[inline]
const fn bit_symbol(bit: bool) -> char {
    if bit {
        '1'
    } else {
        '0'
    }
}

/// Number of strings `cells` expands into: `2^k` for `k` undetermined cells,
/// `0` for no cells, `None` if it does not fit in a `u128`.
pub(crate) fn expansion_count(cells: &[Cell]) -> Option<u128> {
    if cells.is_empty() {
        return Some(0);
    }
    let unknown = cells.iter().filter(|c| c.is_unknown()).count();
    u32::try_from(unknown)
        .ok()
        .and_then(|k| 1u128.checked_shl(k))
}

/// Collects every expansion of `cells`, depth-first.
///
/// Driven by an explicit work stack, so long registers cost heap rather than
/// call-stack depth.
pub(crate) fn enumerate(cells: &[Cell]) -> Vec<String> {
    let mut out = Vec::new();
    if cells.is_empty() {
        return out;
    }
    let mut partial = String::with_capacity(cells.len());
    // (depth, bit) choices still to visit. The `1` branch is pushed under the
    // `0` branch so `0` pops first.
    let mut pending: Vec<(usize, bool)> = Vec::new();
    push_branches(&mut pending, cells, 0);
    while let Some((depth, bit)) = pending.pop() {
        partial.truncate(depth);
        partial.push(bit_symbol(bit));
        let next = depth + 1;
        if next == cells.len() {
            out.push(partial.clone());
        } else {
            push_branches(&mut pending, cells, next);
        }
    }
    out
}

fn push_branches(pending: &mut Vec<(usize, bool)>, cells: &[Cell], depth: usize) {
    match cells[depth].bit() {
        Some(bit) => pending.push((depth, bit)),
        None => {
            pending.push((depth, true));
            pending.push((depth, false));
        }
    }
}

/// Lazy iterator over a register's expansions.
///
/// Yields exactly the sequence [`Register::enumerate`](crate::Register::enumerate)
/// returns, one string at a time. Created by
/// [`Register::expansions`](crate::Register::expansions).
///
/// `size_hint` reports the exact number of strings left while that number
/// fits in a `usize`, and `(usize::MAX, None)` past it. The iterator is not an
/// [`ExactSizeIterator`] because a register with 64 or more undetermined cells
/// has no `usize` length to report.
///
/// # Example
///
/// ```
/// use superbit::Register;
///
/// let register: Register = "?1?".parse().unwrap();
/// let mut it = register.expansions();
/// assert_eq!(it.next().as_deref(), Some("010"));
/// assert_eq!(it.next().as_deref(), Some("011"));
/// assert_eq!(it.count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Expansions<'a> {
    cells: &'a [Cell],
    // Indices of undetermined cells, left to right.
    unknown: Vec<usize>,
    // Next string to yield, as bits; `None` once exhausted.
    bits: Option<Vec<bool>>,
    remaining: Option<u128>,
}

impl<'a> Expansions<'a> {
    pub(crate) fn new(cells: &'a [Cell]) -> Self {
        let unknown = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_unknown())
            .map(|(i, _)| i)
            .collect();
        let bits = (!cells.is_empty())
            .then(|| cells.iter().map(|c| c.bit().unwrap_or(false)).collect());
        Self {
            cells,
            unknown,
            bits,
            remaining: expansion_count(cells),
        }
    }

    /// Number of cells in each yielded string.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    // Odometer step: the rightmost undetermined position is least significant.
    fn advance(bits: &mut [bool], unknown: &[usize]) -> bool {
        for &pos in unknown.iter().rev() {
            if bits[pos] {
                bits[pos] = false;
            } else {
                bits[pos] = true;
                return true;
            }
        }
        false
    }
}

impl Iterator for Expansions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let bits = self.bits.as_mut()?;
        let current = bits.iter().copied().map(bit_symbol).collect();
        if !Self::advance(bits, &self.unknown) {
            self.bits = None;
        }
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Expansions<'_> {}
