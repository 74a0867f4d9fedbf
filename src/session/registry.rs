//! Registry of active games.
//!
//! `GameRegistry` is the entry point for the session layer: it owns every
//! game by id and forwards each call to the right `Game`. It is plain owned
//! state; callers keep it wherever they keep the rest of their application
//! state and pass `&mut` access in.
//!
//! Unknown game ids degrade to negative results (`false`, `None`,
//! `AttackOutcome::Unsuccessful`) and are logged at `warn`.
//!
//! ## Example
//!
//! ```
//! use stratego_engine::core::{Coordinate, Side};
//! use stratego_engine::session::GameRegistry;
//!
//! let mut registry = GameRegistry::new(42);
//! let id = registry.create_game("ada");
//! assert!(registry.add_player(id, Side::Blue, "grace"));
//! assert!(registry.is_full(id));
//!
//! assert!(registry.auto_arrange(id, Side::Red));
//! assert!(registry.auto_arrange(id, Side::Blue));
//! assert!(registry.is_setup_done(id));
//!
//! let view = registry.get_army(id, Side::Red).unwrap();
//! assert_eq!(view.self_army.len(), 10);
//! ```

use log::{info, warn};
use rustc_hash::FxHashMap;

use crate::core::{Coordinate, GameConfig, GameId, GameRng, Side};
use crate::pieces::AttackOutcome;
use crate::rules::{ArmyView, Game, PieceDescriptor};

/// Owns all games of a process, keyed by id.
#[derive(Clone, Debug)]
pub struct GameRegistry {
    games: FxHashMap<GameId, Game>,
    next_id: GameId,
    config: GameConfig,
    rng: GameRng,
}

impl GameRegistry {
    /// Create a registry for standard games.
    ///
    /// `seed` drives automatic setups.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Create a registry whose games all use `config`.
    #[must_use]
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        Self {
            games: FxHashMap::default(),
            next_id: GameId::new(1),
            config,
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Lobby ===

    /// Start a game hosted by `host_name` (red) and return its id.
    pub fn create_game(&mut self, host_name: &str) -> GameId {
        let id = self.next_id;
        self.next_id = id.next();
        self.games.insert(id, Game::new(id, host_name, self.config.clone()));
        info!("[Registry] {} hosts game {}", host_name, id);
        id
    }

    /// Seat `name` on `side` of game `id`.
    pub fn add_player(&mut self, id: GameId, side: Side, name: &str) -> bool {
        self.game_mut(id)
            .is_some_and(|game| game.add_player(side, name))
    }

    #[must_use]
    pub fn is_full(&self, id: GameId) -> bool {
        self.lookup(id).is_some_and(Game::is_full)
    }

    /// Drop a finished or abandoned game.
    pub fn remove_game(&mut self, id: GameId) -> Option<Game> {
        let removed = self.games.remove(&id);
        if removed.is_some() {
            info!("[Registry] game {} removed", id);
        }
        removed
    }

    // === Setup ===

    pub fn arrange_setup(&mut self, id: GameId, side: Side, descriptors: &[PieceDescriptor]) -> bool {
        self.game_mut(id)
            .is_some_and(|game| game.arrange_setup(side, descriptors))
    }

    /// Arrange a random valid army for `side` in its home rows.
    pub fn auto_arrange(&mut self, id: GameId, side: Side) -> bool {
        let mut rng = self.rng.fork();
        let Some(game) = self.game_mut(id) else {
            return false;
        };

        match game.random_setup(side, &mut rng) {
            Ok(setup) => game.arrange_setup(side, &setup),
            Err(err) => {
                warn!("[Registry] game {}: no room to arrange {}: {}", id, side, err);
                false
            }
        }
    }

    #[must_use]
    pub fn is_setup_done(&self, id: GameId) -> bool {
        self.lookup(id).is_some_and(Game::is_setup_done)
    }

    // === Play ===

    pub fn move_piece(&mut self, id: GameId, side: Side, from: Coordinate, to: Coordinate) -> bool {
        self.game_mut(id)
            .is_some_and(|game| game.move_piece(side, from, to))
    }

    pub fn attack(&mut self, id: GameId, side: Side, from: Coordinate, to: Coordinate) -> AttackOutcome {
        self.game_mut(id)
            .map_or(AttackOutcome::Unsuccessful, |game| game.attack(side, from, to))
    }

    #[must_use]
    pub fn get_army(&self, id: GameId, side: Side) -> Option<ArmyView> {
        self.lookup(id)?.army_view(side)
    }

    // === Lookup ===

    #[must_use]
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn lookup(&self, id: GameId) -> Option<&Game> {
        let game = self.games.get(&id);
        if game.is_none() {
            warn!("[Registry] unknown game {}", id);
        }
        game
    }

    fn game_mut(&mut self, id: GameId) -> Option<&mut Game> {
        let game = self.games.get_mut(&id);
        if game.is_none() {
            warn!("[Registry] unknown game {}", id);
        }
        game
    }
}
