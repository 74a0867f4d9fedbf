//! Rule violations.
//!
//! The public engine API reports violations as `false` or
//! `AttackOutcome::Unsuccessful`. The `check_*` methods return a `RuleError`
//! instead, so callers and logs can tell *why* an action was refused.

use thiserror::Error;

use super::coord::Coordinate;
use super::side::Side;
use crate::pieces::PieceKind;

/// Why the engine refused an action or an input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("malformed coordinate {0:?}, expected \"row_col\"")]
    InvalidCoordinate(String),

    #[error("unknown piece kind {0:?}")]
    UnknownKind(String),

    #[error("unknown side {0:?}")]
    UnknownSide(String),

    #[error("{0} is outside the board")]
    OutOfBounds(Coordinate),

    #[error("{from} -> {to} is not along a row or column")]
    Diagonal { from: Coordinate, to: Coordinate },

    #[error("{side} has no piece at {at}")]
    NoPieceOfSide { side: Side, at: Coordinate },

    #[error("path is blocked at {0}")]
    PathBlocked(Coordinate),

    #[error("destination {0} is not empty")]
    DestinationOccupied(Coordinate),

    #[error("no enemy piece at {0}")]
    NoEnemyAt(Coordinate),

    #[error("{kind} at {from} cannot reach {to}")]
    Unreachable {
        kind: PieceKind,
        from: Coordinate,
        to: Coordinate,
    },

    #[error("setup has {actual} pieces, expected {expected}")]
    SetupSize { expected: usize, actual: usize },

    #[error("setup has {actual} {kind}, expected {expected}")]
    SetupComposition {
        kind: PieceKind,
        expected: usize,
        actual: usize,
    },

    #[error("cannot place a piece on {0}")]
    CellUnavailable(Coordinate),

    #[error("{0} has already arranged its pieces")]
    AlreadyArranged(Side),

    #[error("no {0} player has joined")]
    MissingPlayer(Side),

    #[error("{0} is already taken")]
    SideTaken(Side),

    #[error("game is not in progress")]
    NotInProgress,
}
