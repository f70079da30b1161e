//! # go-fish
//!
//! A Go Fish rules engine driven by a generic named-state machine.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: The `GameState` is moved through exactly one handler at
//!    a time. No handler keeps a reference across a transition.
//!
//! 2. **Closed Actions**: Players choose `Action::Pass` or
//!    `Action::Inquire { target, rank }`; handlers match exhaustively.
//!
//! 3. **I/O at the Edges**: Input and rendering sit behind the
//!    `PlayerInput` and `GameObserver` traits. The core emits typed
//!    `GameEvent`s and never prints.
//!
//! ## Modules
//!
//! - `cards`: Ranks, suits, cards and the deck
//! - `core`: Players, state, actions, RNG, configuration
//! - `machine`: Named-state driver
//! - `rules`: Meld algorithm, events, input collaborators
//! - `games`: Go Fish handlers and wiring

pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod machine;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Color, Deck, DeckError, Rank, Suit};

pub use crate::core::{
    Action, ActionKind, ActionRecord, ConfigError, GameConfig, GameRng, GameState,
    Player, PlayerId, PlayerMap,
};

pub use crate::error::{ContractViolation, GoFishError};

pub use crate::machine::{Finished, MachineError, StateMachine, StateName};

pub use crate::rules::{
    EventLog, GameEvent, GameObserver, LogObserver, PlayerInput, PlayerView, RandomBot,
    ScriptedInput,
};

pub use crate::games::go_fish::{play, play_limited, GameOutcome};
