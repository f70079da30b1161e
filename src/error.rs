//! Crate-level error types.

use thiserror::Error;

use crate::cards::DeckError;
use crate::core::{ConfigError, PlayerId};
use crate::machine::MachineError;

/// A collaborator handed the core a value it promised to validate.
///
/// These are bugs in the input layer, not rule violations, so the core
/// reports them instead of re-prompting.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("{player} is out of range for a {player_count}-player game")]
    PlayerOutOfRange { player: PlayerId, player_count: usize },
    #[error("{0} asked themselves")]
    SelfTarget(PlayerId),
}

/// Errors that can end a game.
#[derive(Debug, Error)]
pub enum GoFishError {
    #[error(transparent)]
    Machine(#[from] MachineError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),
}

/// Result type for game operations
pub type Result<T> = std::result::Result<T, GoFishError>;
