//! Core engine types: players, state, actions, RNG, configuration.
//!
//! This module contains the building blocks every state handler shares.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind, ActionRecord};
pub use config::{ConfigError, GameConfig};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, SetTable};
