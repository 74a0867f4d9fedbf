//! Sides and per-side data storage.
//!
//! ## Side
//!
//! The two competing players, `red` (the host) and `blue` (the joiner).
//!
//! ## SideMap
//!
//! Per-side storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::RuleError;

/// One of the two competing sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    /// Both sides, host first.
    pub const ALL: [Side; 2] = [Side::Red, Side::Blue];

    /// Get the 0-based index (red = 0, blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Lowercase name used at the boundary.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Side::Red => "red",
            Side::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Side::Red),
            "blue" => Ok(Side::Blue),
            other => Err(RuleError::UnknownSide(other.to_string())),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use stratego_engine::core::{Side, SideMap};
///
/// let mut arranged: SideMap<bool> = SideMap::with_value(false);
/// arranged[Side::Blue] = true;
///
/// assert!(!arranged[Side::Red]);
/// assert!(arranged[Side::Blue]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Red), factory(Side::Blue)],
        }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, red first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Check whether `predicate` holds for both sides.
    pub fn all(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.data.iter().all(predicate)
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::Red.index(), 0);
        assert_eq!(Side::Blue.index(), 1);
        assert_eq!(Side::Red.opponent(), Side::Blue);
        assert_eq!(Side::Blue.opponent(), Side::Red);
        assert_eq!(format!("{}", Side::Blue), "blue");
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!("red".parse::<Side>(), Ok(Side::Red));
        assert_eq!("blue".parse::<Side>(), Ok(Side::Blue));
        assert_eq!(
            "green".parse::<Side>(),
            Err(RuleError::UnknownSide("green".to_string()))
        );
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|s| s.index() * 10);

        assert_eq!(map[Side::Red], 0);
        assert_eq!(map[Side::Blue], 10);
    }

    #[test]
    fn test_side_map_mutation_and_all() {
        let mut map: SideMap<bool> = SideMap::with_value(false);
        assert!(!map.all(|v| *v));

        map[Side::Red] = true;
        assert!(!map.all(|v| *v));

        map[Side::Blue] = true;
        assert!(map.all(|v| *v));
    }

    #[test]
    fn test_side_map_iter() {
        let map: SideMap<&str> = SideMap::new(|s| s.name());
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Red, &"red"), (Side::Blue, &"blue")]);
    }

    #[test]
    fn test_side_serialization() {
        let json = serde_json::to_string(&Side::Red).unwrap();
        assert_eq!(json, "\"red\"");
        let back: Side = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(back, Side::Blue);
    }
}
