//! Piece construction.
//!
//! `PieceFactory` turns a kind (or a kind name from the boundary) into a
//! fully populated `Piece`, filling in rank, movement and special target.

use super::kind::PieceKind;
use super::piece::Piece;
use crate::core::{Coordinate, RuleError};

/// Builds pieces from kinds or kind names.
///
/// ## Example
///
/// ```
/// use stratego_engine::core::Coordinate;
/// use stratego_engine::pieces::{Movement, PieceFactory, PieceKind};
///
/// let spy = PieceFactory::from_name("spy", Coordinate::new(9, 3)).unwrap();
/// assert_eq!(spy.kind(), PieceKind::Spy);
/// assert_eq!(spy.movement(), Movement::Adjacent);
/// assert_eq!(spy.special_target(), Some(PieceKind::Marshal));
///
/// assert!(PieceFactory::from_name("dragon", Coordinate::new(0, 0)).is_err());
/// ```
pub struct PieceFactory;

impl PieceFactory {
    /// Create a live piece of `kind` at `position`.
    #[must_use]
    pub fn create(kind: PieceKind, position: Coordinate) -> Piece {
        Piece {
            kind,
            rank: kind.rank(),
            position,
            alive: true,
            movement: kind.movement(),
            special_target: kind.special_target(),
        }
    }

    /// Create a piece from a kind name such as `"scout"`.
    pub fn from_name(name: &str, position: Coordinate) -> Result<Piece, RuleError> {
        let kind = name.parse()?;
        Ok(Self::create(kind, position))
    }
}
