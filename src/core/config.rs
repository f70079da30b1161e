//! Game configuration.
//!
//! A `GameConfig` fixes the table size, hand size and deck pool before the
//! game state is built. Validation happens once, up front, so a bad
//! configuration fails before any card is dealt.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::STANDARD_DECK_SIZE;

/// Default number of seats.
pub const DEFAULT_PLAYER_COUNT: usize = 4;
/// Cards dealt to each player.
pub const DEFAULT_HAND_SIZE: usize = 7;
/// Standard decks in the pool.
pub const DEFAULT_DECK_COUNT: usize = 1;
/// Largest pool accepted, in standard decks.
pub const MAX_DECK_COUNT: usize = 64;

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count {0} is outside 2..=255")]
    PlayerCount(usize),
    #[error("hand size must be at least 1")]
    EmptyHand,
    #[error("at least one deck is required")]
    NoDecks,
    #[error("{count} decks requested, at most {max} supported")]
    TooManyDecks { count: usize, max: usize },
    #[error("dealing {players} hands of {hand_size} needs {needed} cards but the pool has {pool}")]
    PoolTooSmall {
        players: usize,
        hand_size: usize,
        needed: usize,
        pool: usize,
    },
}

/// Table configuration.
///
/// ## Example
///
/// ```
/// use go_fish::core::GameConfig;
///
/// let config = GameConfig::default().with_players(3).with_seed(42);
/// assert!(config.validate().is_ok());
///
/// let crowded = GameConfig::default().with_players(8);
/// assert!(crowded.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Cards dealt to each player at the start.
    pub hand_size: usize,

    /// Standard 52-card decks concatenated into the pool.
    pub deck_count: usize,

    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            hand_size: DEFAULT_HAND_SIZE,
            deck_count: DEFAULT_DECK_COUNT,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_decks(mut self, count: usize) -> Self {
        self.deck_count = count;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total cards in the pool. Saturates for unvalidated deck counts.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.deck_count.saturating_mul(STANDARD_DECK_SIZE)
    }

    /// Check that the table can be dealt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=255).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.deck_count == 0 {
            return Err(ConfigError::NoDecks);
        }
        if self.deck_count > MAX_DECK_COUNT {
            return Err(ConfigError::TooManyDecks {
                count: self.deck_count,
                max: MAX_DECK_COUNT,
            });
        }

        // Saturated products are still larger than any valid pool.
        let needed = self.player_count.saturating_mul(self.hand_size);
        if needed > self.pool_size() {
            return Err(ConfigError::PoolTooSmall {
                players: self.player_count,
                hand_size: self.hand_size,
                needed,
                pool: self.pool_size(),
            });
        }

        Ok(())
    }
}
