//! Game identifiers.
//!
//! Ids are handed out sequentially by the `GameRegistry`, starting at 1. The
//! boundary layer carries them as plain decimal strings (e.g. in a cookie).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a game within a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u32);

impl GameId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_basics() {
        let id = GameId::new(4);
        assert_eq!(id.raw(), 4);
        assert_eq!(id.next(), GameId::new(5));
        assert_eq!(id.to_string(), "4");
        assert_eq!("4".parse::<GameId>(), Ok(id));
        assert!("four".parse::<GameId>().is_err());
    }

    #[test]
    fn test_game_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&GameId::new(12)).unwrap(), "12");
    }
}
