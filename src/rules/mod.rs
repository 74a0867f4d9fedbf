//! Rules engine: setup validation, legality, and combat for one game.
//!
//! - `setup`: setup descriptors, composition checks, random arrangements
//! - `engine`: `Game`, which owns the board and both players
//!
//! The engine never calls into the session layer; the registry calls into it.

pub mod engine;
pub mod setup;

pub use engine::{ArmyView, Game, GamePhase, GameStatus};
pub use setup::{random_setup, validate_composition, PieceDescriptor};
