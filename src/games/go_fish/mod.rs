//! Go Fish.
//!
//! Rules as played here:
//! - Every player is dealt a hand (7 cards by default) from a shuffled pool
//! - Player 0 starts; play then moves to the previous seat
//! - On your turn: pass, or ask another player for a rank. They hand over
//!   every card of that rank, or you go fish and draw one
//! - Three or more cards of one rank are laid down as a set; a leftover
//!   card whose rank is already on the table joins that set
//! - The active player wins when their hand is empty after laying down
//!
//! Drawing from an empty deck does nothing.

mod game;
mod handlers;

pub use game::{go_fish_machine, play, play_limited, GameOutcome, GoFishMachine};
pub use handlers::{
    deal, draw, inquire, make_sets, next_player, pick_starting_player, player_win, take_turn,
    Collaborators, Step,
};

/// State names registered with the driver.
pub mod states {
    pub const DEAL_PLAYERS: &str = "deal_players";
    pub const PICK_STARTING_PLAYER: &str = "pick_starting_player";
    pub const TAKE_TURN: &str = "take_turn";
    pub const NEXT_PLAYER: &str = "next_player";
    pub const PLAYER_WIN: &str = "player_win";
}
