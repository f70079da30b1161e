//! Card model: ranks, suits and the derived suit color.
//!
//! Cards are plain `Copy` values. Multi-deck pools contain duplicate
//! `(rank, suit)` pairs, so a card has no identity beyond its face.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A card's face value, independent of suit.
///
/// Declared in the traditional Go Fish order, ace high first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
    Eight,
    Seven,
    Six,
    Five,
    Four,
    Three,
    Two,
}

impl Rank {
    /// All 13 ranks, ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    /// Short symbol used on card faces.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::King => "K",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::Ten => "10",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Seven => "7",
            Rank::Six => "6",
            Rank::Five => "5",
            Rank::Four => "4",
            Rank::Three => "3",
            Rank::Two => "2",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Text did not name one of the 13 ranks.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("`{0}` is not a rank (expected A, K, Q, J or 10-2)")]
pub struct ParseRankError(pub String);

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseRankError(trimmed.to_string()))
    }
}

/// Suit color. Always derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// One of the four suits, each bound to a fixed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Spades,
    Hearts,
    Clubs,
}

impl Suit {
    /// All four suits in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Suit::Diamonds => "♦",
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Clubs => "♣",
        };
        f.write_str(repr)
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "♦" | "d" | "diamond" | "diamonds" => Ok(Suit::Diamonds),
            "♠" | "s" | "spade" | "spades" => Ok(Suit::Spades),
            "♥" | "h" | "heart" | "hearts" => Ok(Suit::Hearts),
            "♣" | "c" | "club" | "clubs" => Ok(Suit::Clubs),
            _ => Err(ParseCardError::Suit(trimmed.to_string())),
        }
    }
}

/// Text did not name a card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("no card given")]
    Empty,
    #[error(transparent)]
    Rank(#[from] ParseRankError),
    #[error("`{0}` is not a suit (expected ♦ ♠ ♥ ♣, D S H C or a suit name)")]
    Suit(String),
}

/// An immutable playing card.
///
/// Color is not stored: it is always `suit.color()`, so it can never
/// disagree with the suit.
///
/// ```
/// use go_fish::cards::{Card, Color, Rank, Suit};
///
/// let card = Card::new(Rank::Ten, Suit::Hearts);
/// assert_eq!(card.color(), Color::Red);
/// assert_eq!(card.to_string(), "10♥");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Accepts the `Display` form (`10♥`), a rank and suit letter (`QS`), or
/// a rank followed by a suit word (`10 hearts`, `Q of spades`).
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let words: Vec<&str> = trimmed.split_whitespace().collect();

        let (rank, suit) = match words.as_slice() {
            [] => return Err(ParseCardError::Empty),
            [face] => {
                // Suit is the last character: `10♥`, `AS`.
                let Some((split, _)) = face.char_indices().last() else {
                    return Err(ParseCardError::Empty);
                };
                face.split_at(split)
            }
            [rank, .., suit] => (*rank, *suit),
        };

        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}
