//! Armies: a side's player and its roster of pieces.

pub mod player;

pub use player::{ArmyEntry, Player, PlayerStatus};
