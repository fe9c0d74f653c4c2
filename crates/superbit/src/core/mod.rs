//! Cell-level data types: the ternary state and the cell that holds it.

pub mod cell;
pub mod state;
