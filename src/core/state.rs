//! Game state: the single value threaded through every state handler.
//!
//! ## GameState
//!
//! - Configuration and derived pool size
//! - The draw pile
//! - Every player's hand
//! - The active player (always a valid seat)
//! - Completed sets, keyed by rank
//! - Turn counter and action history
//! - RNG
//!
//! Every card of the pool lives in exactly one of: the deck, a hand, or a
//! set. `card_count()` always equals `pool_size()`.

use im::Vector;
use rustc_hash::FxHashMap;

use super::action::{Action, ActionRecord};
use super::config::{ConfigError, GameConfig};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, Deck, Rank};
use crate::error::ContractViolation;

/// Completed sets, keyed by rank.
pub type SetTable = FxHashMap<Rank, Vec<Card>>;

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,

    /// Draw pile (top = end).
    pub deck: Deck,

    /// Seats in id order.
    pub players: PlayerMap<Player>,

    /// Whose turn it is. Only changed through `set_active_player`.
    active_player: PlayerId,

    /// Completed sets on the table.
    pub sets: SetTable,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Every action taken, oldest first.
    pub action_history: Vector<ActionRecord>,

    /// Deterministic RNG.
    pub rng: GameRng,
}

impl GameState {
    /// Create a fresh table: unshuffled pool, empty hands, player 0 active.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Ok(Self {
            deck: Deck::with_decks(config.deck_count),
            players: PlayerMap::new(config.player_count, Player::new),
            active_player: PlayerId::new(0),
            sets: SetTable::default(),
            turn_number: 1,
            action_history: Vector::new(),
            rng,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    // === Players ===

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Make `player` active. Rejects seats that don't exist.
    pub fn set_active_player(&mut self, player: PlayerId) -> Result<(), ContractViolation> {
        self.check_player(player)?;
        self.active_player = player;
        Ok(())
    }

    /// Check that `player` names a seat at this table.
    pub fn check_player(&self, player: PlayerId) -> Result<(), ContractViolation> {
        match self.players.get(player) {
            Some(_) => Ok(()),
            None => Err(ContractViolation::PlayerOutOfRange {
                player,
                player_count: self.player_count(),
            }),
        }
    }

    /// The active player's seat.
    #[must_use]
    pub fn active(&self) -> &Player {
        &self.players[self.active_player]
    }

    pub fn active_mut(&mut self) -> &mut Player {
        &mut self.players[self.active_player]
    }

    // === History ===

    /// Record an action taken this turn.
    pub fn record_action(&mut self, player: PlayerId, action: Action) {
        self.action_history
            .push_back(ActionRecord::new(player, action, self.turn_number));
    }

    // === Conservation ===

    /// Cards in the pool at game start.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.config.pool_size()
    }

    /// Cards currently in the deck, all hands and all sets.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|(_, p)| p.hand.len()).sum();
        let in_sets: usize = self.sets.values().map(Vec::len).sum();
        self.deck.len() + in_hands + in_sets
    }

    /// Sorted snapshot of every card on the table, wherever it sits.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.deck.cards().to_vec();
        for (_, player) in self.players.iter() {
            cards.extend_from_slice(&player.hand);
        }
        for set in self.sets.values() {
            cards.extend_from_slice(set);
        }
        cards.sort();
        cards
    }
}
