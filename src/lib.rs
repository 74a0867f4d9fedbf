//! # stratego-engine
//!
//! Rules engine for a two-player, hidden-piece grid strategy game in the
//! style of Stratego.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No transport, persistence or rendering. A session
//!    layer calls the synchronous API on `GameRegistry` and gets back plain
//!    values (`bool`, `AttackOutcome`, `ArmyView`).
//!
//! 2. **Negative Results, Not Panics**: Illegal moves, attacks and setups
//!    come back as `false` / `Unsuccessful`. Every check has a `check_*`
//!    twin that returns a `RuleError` explaining the refusal.
//!
//! 3. **Closed Piece Variants**: A piece's behavior is selected by matching
//!    on its `Movement` and `special_target`, both derived from its kind.
//!
//! ## Architecture
//!
//! - **Armies are the source of truth** for pieces; the `Board` is an
//!   occupancy index kept in step by the engine.
//!
//! - **Lakes are never empty**, so the "destination must be empty" rule
//!   alone keeps pieces off them.
//!
//! - **Persistent Data Structures**: armies use `im::Vector`, so cloning a
//!   `Game` for a snapshot is cheap.
//!
//! ## Modules
//!
//! - `core`: coordinates, ids, sides, configuration, errors, RNG
//! - `pieces`: piece kinds, runtime pieces, the piece factory
//! - `army`: a side's player and roster
//! - `board`: cells, lakes, line-of-sight
//! - `rules`: setup validation and the `Game` engine
//! - `session`: `GameRegistry`, the entry point for callers

pub mod core;
pub mod pieces;
pub mod army;
pub mod board;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Composition, Coordinate, GameConfig, GameId, GameRng, RuleError, Side, SideMap,
};

pub use crate::pieces::{AttackOutcome, Movement, Piece, PieceFactory, PieceKind, PieceStatus};

pub use crate::army::{ArmyEntry, Player, PlayerStatus};

pub use crate::board::{Board, Cell, Occupant};

pub use crate::rules::{ArmyView, Game, GamePhase, GameStatus, PieceDescriptor};

pub use crate::session::GameRegistry;
