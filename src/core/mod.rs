//! Core engine types: coordinates, ids, sides, configuration, errors, RNG.
//!
//! These are the leaf building blocks shared by pieces, armies, the board and
//! the rules engine.

pub mod coord;
pub mod id;
pub mod side;
pub mod config;
pub mod error;
pub mod rng;

pub use coord::{Coordinate, Path};
pub use id::GameId;
pub use side::{Side, SideMap};
pub use config::{Composition, GameConfig, STANDARD_LAKES};
pub use error::RuleError;
pub use rng::GameRng;
