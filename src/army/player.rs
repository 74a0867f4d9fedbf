//! A side's roster of pieces.
//!
//! `Player` owns every piece a side has arranged, in arrangement order.
//! Captured pieces stay in the roster with `alive = false` but are invisible
//! to every position-based lookup, so a captured piece's former cell is free.
//!
//! The roster is an `im::Vector`, so cloning a `Player` (and therefore a
//! whole `Game`) is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, RuleError, Side};
use crate::pieces::{AttackOutcome, Piece, PieceFactory, PieceKind, PieceStatus};

/// Kind and position of a live piece, as exposed to the boundary layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArmyEntry {
    pub kind: PieceKind,
    pub position: Coordinate,
}

/// Public summary of a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub name: String,
    pub side: Side,
    pub army: Vec<ArmyEntry>,
}

/// One side's player and its army.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    side: Side,
    army: Vector<Piece>,
}

impl Player {
    /// Create a player with an empty army.
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
            army: Vector::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Add a new piece of `kind` at `position`.
    ///
    /// Returns the number of live pieces afterwards. Refuses (without
    /// changing anything) if a live piece already stands there.
    pub fn add_piece(&mut self, kind: PieceKind, position: Coordinate) -> Result<usize, RuleError> {
        if self.piece_at(position).is_some() {
            return Err(RuleError::CellUnavailable(position));
        }
        self.army.push_back(PieceFactory::create(kind, position));
        Ok(self.live_count())
    }

    /// Add a piece by kind name, as received from the boundary layer.
    pub fn add_named_piece(&mut self, name: &str, position: Coordinate) -> Result<usize, RuleError> {
        let kind = name.parse()?;
        self.add_piece(kind, position)
    }

    /// Move the live piece at `from` to `to`.
    ///
    /// Fails if there is no live piece at `from` or the target does not fit
    /// the piece's movement shape. Board occupancy is the engine's concern.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> bool {
        match self.piece_at_mut(from) {
            Some(piece) if piece.can_reach(to) => {
                piece.move_to(to);
                true
            }
            _ => false,
        }
    }

    /// Capture the live piece at `position`, returning its kind.
    pub fn kill_piece(&mut self, position: Coordinate) -> Option<PieceKind> {
        let piece = self.piece_at_mut(position)?;
        piece.kill();
        Some(piece.kind())
    }

    /// Status of the live piece at `position`.
    #[must_use]
    pub fn piece_status_at(&self, position: Coordinate) -> Option<PieceStatus> {
        self.piece_at(position).map(Piece::status)
    }

    /// Kind and position of every live piece, in army order.
    #[must_use]
    pub fn army_snapshot(&self) -> Vec<ArmyEntry> {
        self.live_pieces()
            .map(|p| ArmyEntry {
                kind: p.kind(),
                position: p.position(),
            })
            .collect()
    }

    /// How the live piece at `attacker` would fare against `defender`.
    #[must_use]
    pub fn attack_status(&self, attacker: Coordinate, defender: PieceKind) -> Option<AttackOutcome> {
        self.piece_at(attacker).map(|p| p.resolve_attack(defender))
    }

    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        PlayerStatus {
            name: self.name.clone(),
            side: self.side,
            army: self.army_snapshot(),
        }
    }

    /// Check whether any live piece of `kind` remains.
    #[must_use]
    pub fn has_live(&self, kind: PieceKind) -> bool {
        self.live_pieces().any(|p| p.kind() == kind)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live_pieces().count()
    }

    /// Every piece ever added, captured ones included.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.army.iter()
    }

    /// The live piece at `position`.
    #[must_use]
    pub fn piece_at(&self, position: Coordinate) -> Option<&Piece> {
        self.live_pieces().find(|p| p.position() == position)
    }

    fn piece_at_mut(&mut self, position: Coordinate) -> Option<&mut Piece> {
        self.army
            .iter_mut()
            .find(|p| p.is_alive() && p.position() == position)
    }

    fn live_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.army.iter().filter(|p| p.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_new_player_status() {
        let player = Player::new("venky", Side::Red);
        assert_eq!(
            player.status(),
            PlayerStatus {
                name: "venky".to_string(),
                side: Side::Red,
                army: vec![],
            }
        );
    }

    #[test]
    fn test_add_piece() {
        let mut player = Player::new("venky", Side::Red);
        assert_eq!(player.add_piece(PieceKind::Marshal, c(0, 0)), Ok(1));
        assert_eq!(player.add_piece(PieceKind::Scout, c(0, 1)), Ok(2));
    }

    #[test]
    fn test_add_piece_rejects_taken_cell() {
        let mut player = Player::new("venky", Side::Red);
        player.add_piece(PieceKind::Marshal, c(0, 0)).unwrap();

        assert_eq!(
            player.add_piece(PieceKind::Spy, c(0, 0)),
            Err(RuleError::CellUnavailable(c(0, 0)))
        );
        assert_eq!(player.live_count(), 1);
    }

    #[test]
    fn test_add_named_piece_rejects_unknown_kind() {
        let mut player = Player::new("venky", Side::Red);
        assert_eq!(
            player.add_named_piece("dragon", c(9, 9)),
            Err(RuleError::UnknownKind("dragon".to_string()))
        );
        assert_eq!(player.live_count(), 0);
        assert_eq!(player.add_named_piece("scout", c(9, 9)), Ok(1));
    }

    #[test]
    fn test_move_piece() {
        let mut player = Player::new("venky", Side::Red);
        player.add_piece(PieceKind::Marshal, c(0, 0)).unwrap();

        assert!(player.move_piece(c(0, 0), c(0, 1)));
        assert!(player.piece_status_at(c(0, 0)).is_none());
        assert_eq!(player.piece_status_at(c(0, 1)).map(|s| s.position), Some(c(0, 1)));
    }

    #[test]
    fn test_move_missing_piece() {
        let mut player = Player::new("venky", Side::Red);
        player.add_piece(PieceKind::Marshal, c(9, 9)).unwrap();
        assert!(!player.move_piece(c(0, 0), c(0, 1)));
    }

    #[test]
    fn test_move_immovable_piece() {
        let mut player = Player::new("venky", Side::Red);
        player.add_piece(PieceKind::Bomb, c(0, 1)).unwrap();
        assert!(!player.move_piece(c(0, 1), c(0, 2)));
        assert!(player.piece_status_at(c(0, 1)).is_some());
    }

    #[test]
    fn test_move_out_of_reach() {
        let mut player = Player::new("venky", Side::Red);
        player.add_piece(PieceKind::General, c(0, 0)).unwrap();
        assert!(!player.move_piece(c(0, 0), c(0, 2)));
    }

    #[test]
    fn test_kill_piece_hides_it() {
        let mut player = Player::new("venky", Side::Blue);
        player.add_piece(PieceKind::Spy, c(9, 3)).unwrap();
        player.add_piece(PieceKind::Flag, c(9, 9)).unwrap();

        assert_eq!(player.kill_piece(c(9, 3)), Some(PieceKind::Spy));
        assert_eq!(player.kill_piece(c(9, 3)), None);
        assert!(player.piece_status_at(c(9, 3)).is_none());
        assert_eq!(player.live_count(), 1);
        assert_eq!(player.pieces().count(), 2);
        assert!(!player.has_live(PieceKind::Spy));

        // The freed cell can be reused.
        assert_eq!(player.add_piece(PieceKind::Scout, c(9, 3)), Ok(2));
    }

    #[test]
    fn test_army_snapshot_keeps_order() {
        let mut player = Player::new("venky", Side::Blue);
        player.add_piece(PieceKind::Flag, c(9, 9)).unwrap();
        player.add_piece(PieceKind::Scout, c(6, 6)).unwrap();
        player.add_piece(PieceKind::Bomb, c(9, 8)).unwrap();
        player.kill_piece(c(6, 6));

        assert_eq!(
            player.army_snapshot(),
            vec![
                ArmyEntry { kind: PieceKind::Flag, position: c(9, 9) },
                ArmyEntry { kind: PieceKind::Bomb, position: c(9, 8) },
            ]
        );
    }

    #[test]
    fn test_attack_status() {
        let mut player = Player::new("venky", Side::Red);
        player.add_piece(PieceKind::Spy, c(4, 4)).unwrap();

        assert_eq!(player.attack_status(c(4, 4), PieceKind::Marshal), Some(AttackOutcome::Won));
        assert_eq!(player.attack_status(c(4, 4), PieceKind::Spy), Some(AttackOutcome::Draw));
        assert_eq!(player.attack_status(c(5, 5), PieceKind::Spy), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut player = Player::new("venky", Side::Red);
        player.add_piece(PieceKind::Scout, c(0, 0)).unwrap();

        let snapshot = player.clone();
        player.move_piece(c(0, 0), c(0, 5));

        assert!(snapshot.piece_at(c(0, 0)).is_some());
        assert!(player.piece_at(c(0, 0)).is_none());
    }
}
