//! Piece kinds and the fixed per-kind rules.
//!
//! Everything about a piece that never changes is a function of its kind:
//! rank, movement shape, and the special attack target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::RuleError;

/// A piece type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Flag,
    Bomb,
    Marshal,
    Miner,
    Scout,
    General,
    Spy,
    Sergeant,
    Colonel,
    Lieutenant,
    Captain,
    Major,
}

/// How a piece is allowed to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    /// Never moves, never attacks (flag, bomb).
    Immobile,
    /// One cell up, down, left or right.
    Adjacent,
    /// Any distance along a row or column (scout).
    Straight,
}

impl PieceKind {
    pub const ALL: [PieceKind; 12] = [
        PieceKind::Flag,
        PieceKind::Bomb,
        PieceKind::Marshal,
        PieceKind::Miner,
        PieceKind::Scout,
        PieceKind::General,
        PieceKind::Spy,
        PieceKind::Sergeant,
        PieceKind::Colonel,
        PieceKind::Lieutenant,
        PieceKind::Captain,
        PieceKind::Major,
    ];

    /// Combat strength. Flag is the weakest, bomb the strongest.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            PieceKind::Flag => 0,
            PieceKind::Spy => 1,
            PieceKind::Scout => 2,
            PieceKind::Miner => 3,
            PieceKind::Sergeant => 4,
            PieceKind::Lieutenant => 5,
            PieceKind::Captain => 6,
            PieceKind::Major => 7,
            PieceKind::Colonel => 8,
            PieceKind::General => 9,
            PieceKind::Marshal => 10,
            PieceKind::Bomb => 11,
        }
    }

    #[must_use]
    pub const fn movement(self) -> Movement {
        match self {
            PieceKind::Flag | PieceKind::Bomb => Movement::Immobile,
            PieceKind::Scout => Movement::Straight,
            _ => Movement::Adjacent,
        }
    }

    /// The kind this piece beats unconditionally when it attacks.
    #[must_use]
    pub const fn special_target(self) -> Option<PieceKind> {
        match self {
            PieceKind::Spy => Some(PieceKind::Marshal),
            PieceKind::Miner => Some(PieceKind::Bomb),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Flag => "flag",
            PieceKind::Bomb => "bomb",
            PieceKind::Marshal => "marshal",
            PieceKind::Miner => "miner",
            PieceKind::Scout => "scout",
            PieceKind::General => "general",
            PieceKind::Spy => "spy",
            PieceKind::Sergeant => "sergeant",
            PieceKind::Colonel => "colonel",
            PieceKind::Lieutenant => "lieutenant",
            PieceKind::Captain => "captain",
            PieceKind::Major => "major",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| RuleError::UnknownKind(s.to_string()))
    }
}
