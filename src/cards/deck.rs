//! Ordered draw pile.
//!
//! The deck is a stack: the top is the end of the backing `Vec`, so draws
//! and deals pop from the end.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in one standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// Errors raised by deck operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("cannot draw from an empty deck")]
    Empty,
    #[error("requested {requested} cards but only {available} remain")]
    InsufficientCards { requested: usize, available: usize },
}

/// Build a fresh standard 52-card sequence.
///
/// Returns a new `Vec` on every call; nothing is shared between decks.
#[must_use]
pub fn standard_cards() -> Vec<Card> {
    Rank::ALL
        .into_iter()
        .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
        .collect()
}

/// An ordered stack of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck from an explicit sequence. The last card is the top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// A single unshuffled standard deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_decks(1)
    }

    /// A pool of `count` standard decks concatenated in order.
    #[must_use]
    pub fn with_decks(count: usize) -> Self {
        let mut cards = Vec::with_capacity(count * STANDARD_DECK_SIZE);
        for _ in 0..count {
            cards.extend(standard_cards());
        }
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Uniformly permute the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Insert a card at a uniform index in `[1, len]`.
    ///
    /// Index 0 is never chosen unless the deck is empty, which keeps the
    /// bottom card in place.
    pub fn insert_at_random_position(&mut self, card: Card, rng: &mut GameRng) {
        let idx = if self.cards.is_empty() {
            0
        } else {
            rng.gen_range_usize(1..self.cards.len() + 1)
        };
        self.cards.insert(idx, card);
    }

    pub fn insert_at_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Remove the top `n` cards and return them as a hand.
    ///
    /// The returned cards keep their deck order (former top card last).
    pub fn deal_hand(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        let split = self.cards.len() - n;
        Ok(self.cards.split_off(split))
    }
}
