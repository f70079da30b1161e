//! Game events and the output collaborator.
//!
//! Handlers describe what happened as `GameEvent` values and hand them to a
//! `GameObserver`. Rendering is the observer's business; the `Display`
//! impl is a plain-text default for consoles and logs.

use log::info;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::cards::{Card, Rank};
use crate::core::PlayerId;

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Every player received `cards_each` cards.
    Dealt { players: usize, cards_each: usize },
    /// A turn began. Carries the active player's hand for display.
    TurnStarted {
        player: PlayerId,
        turn: u32,
        hand: Vec<Card>,
    },
    Passed { player: PlayerId },
    Asked {
        player: PlayerId,
        target: PlayerId,
        rank: Rank,
    },
    Transferred {
        from: PlayerId,
        to: PlayerId,
        cards: SmallVec<[Card; 4]>,
    },
    /// Go fish. `drawn` is `None` when the deck was empty.
    WentFishing {
        player: PlayerId,
        drawn: Option<Card>,
    },
    SetCompleted {
        player: PlayerId,
        rank: Rank,
        cards: Vec<Card>,
    },
    AddedToSet { player: PlayerId, card: Card },
    PlayerWon { player: PlayerId },
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dealt {
                players,
                cards_each,
            } => write!(f, "Dealt {cards_each} cards to each of {players} players"),
            Self::TurnStarted { player, turn, hand } => {
                write!(f, "Turn {turn}: {player}'s turn. Hand: {}", join_cards(hand))
            }
            Self::Passed { player } => write!(f, "{player} passes"),
            Self::Asked {
                player,
                target,
                rank,
            } => write!(f, "{player} asks {target} for {rank}s"),
            Self::Transferred { from, to, cards } => {
                write!(f, "{from} hands {to} {}", join_cards(cards))
            }
            Self::WentFishing {
                player,
                drawn: Some(card),
            } => write!(f, "Go fish! {player} drew {card}"),
            Self::WentFishing { player, drawn: None } => {
                write!(f, "Go fish! The deck is empty, {player} draws nothing")
            }
            Self::SetCompleted { player, rank, cards } => {
                write!(f, "{player} put down a set of {rank}s: {}", join_cards(cards))
            }
            Self::AddedToSet { player, card } => {
                write!(f, "{player} added {card} to the set of {}s", card.rank)
            }
            Self::PlayerWon { player } => write!(f, "{player} wins!"),
        }
    }
}

/// The output collaborator.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

/// Records every event in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events matching a predicate.
    pub fn filter<'a>(&'a self, pred: impl Fn(&GameEvent) -> bool + 'a) -> impl Iterator<Item = &'a GameEvent> {
        self.events.iter().filter(move |e| pred(e))
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Forwards every event to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn notify(&mut self, event: &GameEvent) {
        info!("{event}");
    }
}
