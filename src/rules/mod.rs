//! Turn resolution and the collaborator seams.
//!
//! - `meld`: grouping by rank and set extraction (pure)
//! - `events`: `GameEvent` and the `GameObserver` output trait
//! - `input`: `PlayerInput`, the player's view, scripted and bot inputs
//!
//! The handlers in `games::go_fish` call into these but the rules never
//! touch the state machine directly.

pub mod events;
pub mod input;
pub mod meld;

pub use events::{EventLog, GameEvent, GameObserver, LogObserver};
pub use input::{PlayerInput, PlayerView, RandomBot, ScriptedInput};
pub use meld::{extract_sets, group_by_rank, MeldReport, RankGroups, MIN_SET_SIZE};
