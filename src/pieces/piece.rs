//! Piece instances - runtime piece state.
//!
//! A `Piece` is a single unit on the board. Its movement shape and special
//! attack target are carried as plain fields filled in by `PieceFactory`;
//! behavior is selected by matching on them.
//!
//! Legality (bounds, obstacles, occupancy) lives in the engine. A piece only
//! knows its own geometric reach and how it fares against a defender kind.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::{Movement, PieceKind};
use crate::core::Coordinate;

/// Result of an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackOutcome {
    /// The attack was refused; nothing changed.
    Unsuccessful,
    /// Defender captured, attacker moves into its cell.
    Won,
    /// Attacker captured, defender stays.
    Lost,
    /// Both captured.
    Draw,
}

impl AttackOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AttackOutcome::Unsuccessful => "unsuccessful",
            AttackOutcome::Won => "won",
            AttackOutcome::Lost => "lost",
            AttackOutcome::Draw => "draw",
        }
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public view of a live piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceStatus {
    pub kind: PieceKind,
    pub position: Coordinate,
    pub rank: u8,
}

/// A piece on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) rank: u8,
    pub(crate) position: Coordinate,
    pub(crate) alive: bool,
    pub(crate) movement: Movement,
    pub(crate) special_target: Option<PieceKind>,
}

impl Piece {
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[must_use]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    #[must_use]
    pub fn special_target(&self) -> Option<PieceKind> {
        self.special_target
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.movement != Movement::Immobile
    }

    /// Overwrite the position. The caller has already checked legality.
    pub fn move_to(&mut self, position: Coordinate) -> Coordinate {
        self.position = position;
        self.position
    }

    /// Check the target fits this piece's movement shape.
    ///
    /// Obstacles and board bounds are not considered.
    #[must_use]
    pub fn can_reach(&self, target: Coordinate) -> bool {
        match self.movement {
            Movement::Immobile => false,
            Movement::Adjacent => self.position.is_adjacent(target),
            Movement::Straight => {
                self.position.is_straight_line(target) && self.position != target
            }
        }
    }

    /// Resolve an attack by this piece against a defender of `defender` kind.
    ///
    /// Only the attacker's special target counts: a spy attacking a marshal
    /// wins, a marshal attacking a spy wins on rank.
    #[must_use]
    pub fn resolve_attack(&self, defender: PieceKind) -> AttackOutcome {
        if self.special_target == Some(defender) {
            return AttackOutcome::Won;
        }

        let defender_rank = defender.rank();
        if self.rank == defender_rank {
            AttackOutcome::Draw
        } else if defender_rank < self.rank {
            AttackOutcome::Won
        } else {
            AttackOutcome::Lost
        }
    }

    /// Mark the piece captured. Idempotent.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    #[must_use]
    pub fn status(&self) -> PieceStatus {
        PieceStatus {
            kind: self.kind,
            position: self.position,
            rank: self.rank,
        }
    }
}
