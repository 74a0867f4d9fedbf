//! Pieces: kinds, per-kind rules, and runtime piece state.
//!
//! - `PieceKind`: the twelve piece types and their fixed rank, movement and
//!   special attack target
//! - `Piece`: a unit on the board (position, alive flag)
//! - `PieceFactory`: builds pieces from kinds or kind names

pub mod kind;
pub mod piece;
pub mod factory;

pub use kind::{Movement, PieceKind};
pub use piece::{AttackOutcome, Piece, PieceStatus};
pub use factory::PieceFactory;
