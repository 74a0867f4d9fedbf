//! The board: cell contents, lakes, and line-of-sight queries.

pub mod grid;

pub use grid::{Board, Cell, Occupant};
