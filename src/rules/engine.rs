//! The rules engine for a single game.
//!
//! `Game` owns the board and both players and is the only place where
//! legality is decided and state changes:
//!
//! - **Setup**: each side submits its whole army once; the composition and
//!   every cell are validated before anything is placed.
//! - **Movement**: along a row or column, through empty cells only, onto an
//!   empty cell, within the piece's movement shape.
//! - **Combat**: along a clear line onto an enemy piece the attacker could
//!   otherwise reach; the attacker's `resolve_attack` decides the outcome.
//!
//! Every rule violation comes back as `false` or
//! `AttackOutcome::Unsuccessful`. The `check_*` methods return the
//! `RuleError` instead; the boolean operations log it at `debug`.
//!
//! ## Example
//!
//! ```
//! use stratego_engine::core::{Coordinate, GameConfig, GameId, Side};
//! use stratego_engine::pieces::{AttackOutcome, PieceKind};
//! use stratego_engine::rules::{Game, PieceDescriptor};
//!
//! let config = GameConfig::default()
//!     .with_composition(stratego_engine::core::Composition::new().with(PieceKind::Scout, 1));
//! let mut game = Game::new(GameId::new(1), "ada", config);
//! game.add_player(Side::Blue, "grace");
//!
//! let at = |row, col| Coordinate::new(row, col);
//! assert!(game.arrange_setup(Side::Red, &[PieceDescriptor::new(PieceKind::Scout, at(0, 0))]));
//! assert!(game.arrange_setup(Side::Blue, &[PieceDescriptor::new(PieceKind::Scout, at(9, 0))]));
//!
//! assert!(game.move_piece(Side::Red, at(0, 0), at(5, 0)));
//! assert_eq!(game.attack(Side::Blue, at(9, 0), at(5, 0)), AttackOutcome::Draw);
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::army::{ArmyEntry, Player, PlayerStatus};
use crate::board::{Board, Occupant};
use crate::core::{Coordinate, GameConfig, GameId, GameRng, RuleError, Side, SideMap};
use crate::pieces::{AttackOutcome, PieceKind};

use super::setup::{random_setup, validate_composition, PieceDescriptor};

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Only the host has joined.
    AwaitingOpponent,
    /// Both players present, armies not yet arranged.
    Setup,
    /// Moves and attacks are accepted.
    InProgress,
    /// A flag has been captured.
    Finished { winner: Side },
}

/// A side's view of both armies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmyView {
    pub side: Side,
    pub self_army: Vec<ArmyEntry>,
    pub opponent_army: Vec<ArmyEntry>,
}

/// Public summary of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub id: GameId,
    pub phase: GamePhase,
    pub players: Vec<PlayerStatus>,
}

/// State and rules of one game.
///
/// Cloning is cheap (armies are persistent vectors), so callers can keep
/// snapshots.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    config: GameConfig,
    players: SideMap<Option<Player>>,
    board: Board,
    arranged: SideMap<bool>,
    setup_done: bool,
}

impl Game {
    /// Create a game hosted by `host_name`, who plays red.
    pub fn new(id: GameId, host_name: impl Into<String>, config: GameConfig) -> Self {
        let board = Board::new(config.rows, config.cols, &config.lakes);
        let mut players = SideMap::with_value(None);
        players[Side::Red] = Some(Player::new(host_name, Side::Red));

        info!("[Game {}] created", id);

        Self {
            id,
            config,
            players,
            board,
            arranged: SideMap::with_value(false),
            setup_done: false,
        }
    }

    /// Reset to a fresh `rows` × `cols` board with the configured lakes.
    ///
    /// Players stay joined but lose their armies, and both sides must
    /// arrange again.
    pub fn init_board(&mut self, rows: i32, cols: i32) {
        self.config.rows = rows;
        self.config.cols = cols;
        self.board = Board::new(rows, cols, &self.config.lakes);

        for side in Side::ALL {
            if let Some(player) = self.players[side].take() {
                self.players[side] = Some(Player::new(player.name(), side));
            }
        }
        self.arranged = SideMap::with_value(false);
        self.setup_done = false;
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, side: Side) -> Option<&Player> {
        self.players[side].as_ref()
    }

    // === Players ===

    /// Check `side` can be joined by a new player.
    pub fn check_join(&self, side: Side) -> Result<(), RuleError> {
        if self.players[side].is_some() {
            return Err(RuleError::SideTaken(side));
        }
        Ok(())
    }

    /// Seat a player on `side`. Returns false if the side is taken.
    pub fn add_player(&mut self, side: Side, name: impl Into<String>) -> bool {
        if let Err(err) = self.check_join(side) {
            debug!("[Game {}] join refused: {}", self.id, err);
            return false;
        }

        let player = Player::new(name, side);
        info!("[Game {}] {} joined as {}", self.id, player.name(), side);
        self.players[side] = Some(player);
        true
    }

    /// Check both sides are seated.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.all(Option::is_some)
    }

    // === Lifecycle ===

    #[must_use]
    pub fn is_setup_done(&self) -> bool {
        self.setup_done
    }

    #[must_use]
    pub fn has_arranged(&self, side: Side) -> bool {
        self.arranged[side]
    }

    /// The side that captured its opponent's flag, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if !self.setup_done || self.config.composition.count(PieceKind::Flag) == 0 {
            return None;
        }

        Side::ALL.into_iter().find(|side| {
            let opponent = side.opponent();
            self.arranged[opponent]
                && self
                    .player(opponent)
                    .is_some_and(|p| !p.has_live(PieceKind::Flag))
        })
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if let Some(winner) = self.winner() {
            GamePhase::Finished { winner }
        } else if !self.is_full() {
            GamePhase::AwaitingOpponent
        } else if !self.setup_done {
            GamePhase::Setup
        } else {
            GamePhase::InProgress
        }
    }

    fn check_in_progress(&self) -> Result<(), RuleError> {
        match self.phase() {
            GamePhase::InProgress => Ok(()),
            _ => Err(RuleError::NotInProgress),
        }
    }

    // === Setup ===

    /// Validate a setup for `side` without applying it.
    pub fn check_setup(&self, side: Side, descriptors: &[PieceDescriptor]) -> Result<(), RuleError> {
        if self.players[side].is_none() {
            return Err(RuleError::MissingPlayer(side));
        }
        if self.arranged[side] {
            return Err(RuleError::AlreadyArranged(side));
        }

        validate_composition(descriptors, &self.config.composition)?;

        for (i, descriptor) in descriptors.iter().enumerate() {
            let at = descriptor.position;
            if !self.board.contains(at) {
                return Err(RuleError::OutOfBounds(at));
            }
            if !self.board.is_empty(at) || descriptors[..i].iter().any(|d| d.position == at) {
                return Err(RuleError::CellUnavailable(at));
            }
        }

        Ok(())
    }

    /// Place `side`'s army. Nothing changes unless the whole setup is valid.
    pub fn arrange_setup(&mut self, side: Side, descriptors: &[PieceDescriptor]) -> bool {
        let result = self
            .check_setup(side, descriptors)
            .and_then(|()| self.apply_setup(side, descriptors));

        match result {
            Ok(()) => true,
            Err(err) => {
                debug!("[Game {}] {} setup refused: {}", self.id, side, err);
                false
            }
        }
    }

    /// Draw a random valid setup for `side` from its home rows.
    pub fn random_setup(&self, side: Side, rng: &mut GameRng) -> Result<Vec<PieceDescriptor>, RuleError> {
        let rows = self.config.home_rows[side.index()].clone();
        random_setup(&self.board, rows, &self.config.composition, rng)
    }

    fn apply_setup(&mut self, side: Side, descriptors: &[PieceDescriptor]) -> Result<(), RuleError> {
        let player = self.players[side]
            .as_mut()
            .ok_or(RuleError::MissingPlayer(side))?;

        for descriptor in descriptors {
            player.add_piece(descriptor.kind, descriptor.position)?;
            self.board.place(
                descriptor.position,
                Occupant {
                    side,
                    kind: descriptor.kind,
                },
            );
        }

        self.arranged[side] = true;
        self.setup_done = if self.config.require_both_setups {
            self.arranged.all(|done| *done)
        } else {
            true
        };

        info!("[Game {}] {} arranged {} pieces", self.id, side, descriptors.len());
        if self.setup_done {
            info!("[Game {}] setup complete", self.id);
        }
        Ok(())
    }

    // === Legality ===

    /// Checks shared by moves and attacks: bounds, straight line, own piece
    /// at `from`, clear path.
    fn check_line(&self, side: Side, from: Coordinate, to: Coordinate) -> Result<(), RuleError> {
        for at in [from, to] {
            if !self.board.contains(at) {
                return Err(RuleError::OutOfBounds(at));
            }
        }
        if !from.is_straight_line(to) {
            return Err(RuleError::Diagonal { from, to });
        }
        if self.board.occupant(from).map(|o| o.side) != Some(side) {
            return Err(RuleError::NoPieceOfSide { side, at: from });
        }
        if let Some(obstacle) = self.board.first_obstacle(from, to) {
            return Err(RuleError::PathBlocked(obstacle));
        }
        Ok(())
    }

    /// Explain why `side` may not move `from` → `to`.
    ///
    /// Only board state is considered; the piece's own movement shape is
    /// checked when the move is applied.
    pub fn check_move(&self, side: Side, from: Coordinate, to: Coordinate) -> Result<(), RuleError> {
        self.check_line(side, from, to)?;
        if !self.board.is_empty(to) {
            return Err(RuleError::DestinationOccupied(to));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_legal_move(&self, side: Side, from: Coordinate, to: Coordinate) -> bool {
        self.check_move(side, from, to).is_ok()
    }

    /// Explain why `side` may not attack `to` from `from`.
    pub fn check_attack(&self, side: Side, from: Coordinate, to: Coordinate) -> Result<(), RuleError> {
        self.check_line(side, from, to)?;
        match self.board.occupant(to) {
            Some(defender) if defender.side != side => Ok(()),
            _ => Err(RuleError::NoEnemyAt(to)),
        }
    }

    #[must_use]
    pub fn is_legal_attack(&self, side: Side, from: Coordinate, to: Coordinate) -> bool {
        self.check_attack(side, from, to).is_ok()
    }

    // === Actions ===

    /// Move a piece. Returns true only if the move was legal and applied.
    pub fn move_piece(&mut self, side: Side, from: Coordinate, to: Coordinate) -> bool {
        match self.try_move(side, from, to) {
            Ok(()) => true,
            Err(err) => {
                debug!("[Game {}] {} move {} -> {} refused: {}", self.id, side, from, to, err);
                false
            }
        }
    }

    fn try_move(&mut self, side: Side, from: Coordinate, to: Coordinate) -> Result<(), RuleError> {
        self.check_in_progress()?;
        self.check_move(side, from, to)?;
        self.relocate(side, from, to)
    }

    /// Move the piece on both the roster and the board.
    fn relocate(&mut self, side: Side, from: Coordinate, to: Coordinate) -> Result<(), RuleError> {
        let player = self.players[side]
            .as_mut()
            .ok_or(RuleError::MissingPlayer(side))?;

        if !player.move_piece(from, to) {
            let kind = player
                .piece_at(from)
                .map(|p| p.kind())
                .ok_or(RuleError::NoPieceOfSide { side, at: from })?;
            return Err(RuleError::Unreachable { kind, from, to });
        }

        self.board.relocate(from, to);
        Ok(())
    }

    /// Attack the enemy piece at `to` with the piece at `from`.
    ///
    /// - `Draw`: both pieces are captured, both cells end up empty
    /// - `Won`: the defender is captured and the attacker moves into `to`
    /// - `Lost`: the attacker is captured, the defender stays
    /// - `Unsuccessful`: the attack was illegal and nothing changed
    pub fn attack(&mut self, side: Side, from: Coordinate, to: Coordinate) -> AttackOutcome {
        match self.try_attack(side, from, to) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("[Game {}] {} attack {} -> {} refused: {}", self.id, side, from, to, err);
                AttackOutcome::Unsuccessful
            }
        }
    }

    fn try_attack(&mut self, side: Side, from: Coordinate, to: Coordinate) -> Result<AttackOutcome, RuleError> {
        self.check_in_progress()?;
        self.check_attack(side, from, to)?;

        let player = self.player(side).ok_or(RuleError::MissingPlayer(side))?;
        let attacker = player
            .piece_at(from)
            .ok_or(RuleError::NoPieceOfSide { side, at: from })?;
        if !attacker.can_reach(to) {
            return Err(RuleError::Unreachable {
                kind: attacker.kind(),
                from,
                to,
            });
        }

        let defender = self.board.occupant(to).ok_or(RuleError::NoEnemyAt(to))?;
        let outcome = attacker.resolve_attack(defender.kind);
        let attacker_kind = attacker.kind();

        info!(
            "[Game {}] {} {} attacks {} {} at {}: {}",
            self.id, side, attacker_kind, defender.side, defender.kind, to, outcome
        );

        match outcome {
            AttackOutcome::Draw => {
                self.capture(defender.side, to);
                self.capture(side, from);
            }
            AttackOutcome::Won => {
                self.capture(defender.side, to);
                self.relocate(side, from, to)?;
            }
            AttackOutcome::Lost => {
                self.capture(side, from);
            }
            AttackOutcome::Unsuccessful => {}
        }

        if let Some(winner) = self.winner() {
            info!("[Game {}] {} captured the flag", self.id, winner);
        }

        Ok(outcome)
    }

    /// Remove a piece from the board and mark it captured in its army.
    fn capture(&mut self, side: Side, at: Coordinate) {
        self.board.vacate(at);
        if let Some(player) = self.players[side].as_mut() {
            player.kill_piece(at);
        }
    }

    // === Views ===

    /// Both armies from `side`'s point of view.
    ///
    /// Returns `None` if nobody plays `side`; a missing opponent shows as an
    /// empty army.
    #[must_use]
    pub fn army_view(&self, side: Side) -> Option<ArmyView> {
        let own = self.player(side)?;
        let opponent_army = self
            .player(side.opponent())
            .map(Player::army_snapshot)
            .unwrap_or_default();

        Some(ArmyView {
            side,
            self_army: own.army_snapshot(),
            opponent_army,
        })
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            id: self.id,
            phase: self.phase(),
            players: self
                .players
                .iter()
                .filter_map(|(_, p)| p.as_ref().map(Player::status))
                .collect(),
        }
    }
}
