//! Card system: ranks, suits, cards and the draw pile.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`, `Color`: card faces (color is derived from suit)
//! - `Card`: immutable `Copy` record
//! - `Deck`: ordered stack with shuffle, draw, insert and deal
//!
//! Multi-deck pools are built by concatenating fresh standard decks.

pub mod card;
pub mod deck;

pub use card::{Card, Color, ParseCardError, ParseRankError, Rank, Suit};
pub use deck::{standard_cards, Deck, DeckError, STANDARD_DECK_SIZE};
