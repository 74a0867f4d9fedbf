//! Game configuration types.
//!
//! - `Composition`: how many pieces of each kind a side must arrange
//! - `GameConfig`: board size, lake cells, composition, setup sequencing
//!
//! `GameConfig::default()` is the standard 10×10 game with two 2×2 lakes and
//! the ten-piece army.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::coord::Coordinate;
use crate::pieces::PieceKind;

/// Expected number of pieces per kind in a side's setup.
///
/// ## Example
///
/// ```
/// use stratego_engine::core::Composition;
/// use stratego_engine::pieces::PieceKind;
///
/// let army = Composition::standard();
/// assert_eq!(army.total(), 10);
/// assert_eq!(army.count(PieceKind::Bomb), 2);
/// assert_eq!(army.count(PieceKind::Colonel), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    counts: FxHashMap<PieceKind, usize>,
}

impl Composition {
    /// Create an empty composition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One flag, two bombs, one marshal, two miners, two scouts, one
    /// general and one spy.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with(PieceKind::Flag, 1)
            .with(PieceKind::Bomb, 2)
            .with(PieceKind::Marshal, 1)
            .with(PieceKind::Miner, 2)
            .with(PieceKind::Scout, 2)
            .with(PieceKind::General, 1)
            .with(PieceKind::Spy, 1)
    }

    /// Set the expected count for a kind. A count of zero removes it.
    #[must_use]
    pub fn with(mut self, kind: PieceKind, count: usize) -> Self {
        if count == 0 {
            self.counts.remove(&kind);
        } else {
            self.counts.insert(kind, count);
        }
        self
    }

    /// Expected count for a kind (zero if the kind is not part of the army).
    #[must_use]
    pub fn count(&self, kind: PieceKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of pieces.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Every kind with its count, in `PieceKind` order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, usize)> + '_ {
        PieceKind::ALL
            .into_iter()
            .filter_map(|kind| self.counts.get(&kind).map(|&n| (kind, n)))
    }

    /// Expand into a flat list of kinds, `count` copies each.
    #[must_use]
    pub fn kinds(&self) -> Vec<PieceKind> {
        self.iter()
            .flat_map(|(kind, n)| std::iter::repeat(kind).take(n))
            .collect()
    }
}

/// Lake cells of the standard board: two 2×2 blocks in the middle rows.
pub const STANDARD_LAKES: [Coordinate; 8] = [
    Coordinate::new(2, 4),
    Coordinate::new(3, 4),
    Coordinate::new(2, 5),
    Coordinate::new(3, 5),
    Coordinate::new(6, 4),
    Coordinate::new(7, 4),
    Coordinate::new(6, 5),
    Coordinate::new(7, 5),
];

/// Complete configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: i32,
    pub cols: i32,

    /// Permanently impassable cells.
    pub lakes: Vec<Coordinate>,

    /// Pieces each side must arrange.
    pub composition: Composition,

    /// Rows a side's automatic setup is drawn from, per side (red, blue).
    pub home_rows: [std::ops::Range<i32>; 2],

    /// Require both sides to arrange before the game starts.
    ///
    /// When false, the first successful arrangement completes setup and the
    /// caller is responsible for sequencing the second side.
    pub require_both_setups: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            lakes: STANDARD_LAKES.to_vec(),
            composition: Composition::standard(),
            home_rows: [0..4, 6..10],
            require_both_setups: true,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set board dimensions.
    #[must_use]
    pub fn with_size(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    #[must_use]
    pub fn with_lakes(mut self, lakes: Vec<Coordinate>) -> Self {
        self.lakes = lakes;
        self
    }

    #[must_use]
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    #[must_use]
    pub fn with_home_rows(mut self, red: std::ops::Range<i32>, blue: std::ops::Range<i32>) -> Self {
        self.home_rows = [red, blue];
        self
    }

    /// Let a single arrangement complete setup.
    #[must_use]
    pub fn single_setup(mut self) -> Self {
        self.require_both_setups = false;
        self
    }

    /// Check a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, at: Coordinate) -> bool {
        at.within_bounds(self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_composition() {
        let army = Composition::standard();
        assert_eq!(army.total(), 10);
        assert_eq!(army.count(PieceKind::Flag), 1);
        assert_eq!(army.count(PieceKind::Miner), 2);
        assert_eq!(army.count(PieceKind::Major), 0);
        assert_eq!(army.kinds().len(), 10);
    }

    #[test]
    fn test_composition_with_zero_removes() {
        let army = Composition::standard().with(PieceKind::Spy, 0);
        assert_eq!(army.total(), 9);
        assert!(army.iter().all(|(kind, _)| kind != PieceKind::Spy));
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.cols), (10, 10));
        assert_eq!(config.lakes.len(), 8);
        assert!(config.require_both_setups);
        assert!(config.contains(Coordinate::new(9, 9)));
        assert!(!config.contains(Coordinate::new(10, 9)));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_size(6, 6)
            .with_lakes(vec![])
            .with_home_rows(0..2, 4..6)
            .single_setup();

        assert_eq!(config.rows, 6);
        assert!(config.lakes.is_empty());
        assert_eq!(config.home_rows[1], 4..6);
        assert!(!config.require_both_setups);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
