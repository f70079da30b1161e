//! The input collaborator and the inputs shipped with the crate.
//!
//! An input sees only what the active player may see, and must return an
//! already-valid `Action`. Re-prompting on bad user input happens here,
//! never in the core.

use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::cards::Card;
use crate::core::{Action, ActionKind, GameRng, GameState, PlayerId};

/// What the active player can see when choosing an action.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    pub player: PlayerId,
    pub hand: &'a [Card],
    pub player_count: usize,
    pub turn: u32,
    pub offered: &'a [ActionKind],
}

impl<'a> PlayerView<'a> {
    /// View for the active player of `state`.
    #[must_use]
    pub fn of(state: &'a GameState, offered: &'a [ActionKind]) -> Self {
        let player = state.active_player();
        Self {
            player,
            hand: &state.active().hand,
            player_count: state.player_count(),
            turn: state.turn_number,
            offered,
        }
    }

    /// Every seat except the viewer's.
    pub fn opponents(&self) -> impl Iterator<Item = PlayerId> + '_ {
        PlayerId::all(self.player_count).filter(move |&p| p != self.player)
    }

    #[must_use]
    pub fn is_offered(&self, kind: ActionKind) -> bool {
        self.offered.contains(&kind)
    }
}

/// The input collaborator.
pub trait PlayerInput {
    /// Pick one of `view.offered` and fill in its arguments.
    fn choose_action(&mut self, view: &PlayerView<'_>) -> Action;
}

/// Plays a fixed queue of actions, then passes forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    actions: VecDeque<Action>,
}

impl ScriptedInput {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl PlayerInput for ScriptedInput {
    fn choose_action(&mut self, _view: &PlayerView<'_>) -> Action {
        self.actions.pop_front().unwrap_or(Action::Pass)
    }
}

/// Seeded bot: asks a random opponent for a random rank it holds.
///
/// Passes when its hand is empty or inquiring isn't offered.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl PlayerInput for RandomBot {
    fn choose_action(&mut self, view: &PlayerView<'_>) -> Action {
        if !view.is_offered(ActionKind::Inquire) {
            return Action::Pass;
        }

        let opponents: SmallVec<[PlayerId; 8]> = view.opponents().collect();
        let (Some(&target), Some(card)) = (self.rng.choose(&opponents), self.rng.choose(view.hand))
        else {
            return Action::Pass;
        };

        Action::inquire(target, card.rank)
    }
}
