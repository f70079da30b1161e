//! Turn actions.
//!
//! The action set is closed: a player either passes or asks another player
//! for a rank. Input collaborators pick one of the offered `ActionKind`s and
//! fill in the arguments; the turn handler applies it with an exhaustive
//! match.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Rank;

/// The kinds of action a player can be offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Pass,
    Inquire,
}

impl ActionKind {
    /// Every kind offered on a normal turn, in menu order.
    pub const ALL: [ActionKind; 2] = [ActionKind::Pass, ActionKind::Inquire];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Pass => "pass",
            ActionKind::Inquire => "inquire",
        }
    }
}

/// A complete turn action.
///
/// ```
/// use go_fish::cards::Rank;
/// use go_fish::core::{Action, ActionKind, PlayerId};
///
/// let ask = Action::inquire(PlayerId::new(2), Rank::Queen);
/// assert_eq!(ask.kind(), ActionKind::Inquire);
/// assert_eq!(Action::Pass.kind(), ActionKind::Pass);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Do nothing this turn.
    Pass,
    /// Ask `target` for every card of `rank`.
    Inquire { target: PlayerId, rank: Rank },
}

impl Action {
    #[must_use]
    pub const fn inquire(target: PlayerId, rank: Rank) -> Self {
        Action::Inquire { target, rank }
    }

    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::Pass => ActionKind::Pass,
            Action::Inquire { .. } => ActionKind::Inquire,
        }
    }
}

/// A recorded action with the turn it was taken on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind() {
        assert_eq!(Action::Pass.kind(), ActionKind::Pass);
        assert_eq!(
            Action::inquire(PlayerId::new(1), Rank::Ace).kind(),
            ActionKind::Inquire
        );
        assert_eq!(ActionKind::Inquire.name(), "inquire");
    }

    #[test]
    fn test_action_equality() {
        let a1 = Action::inquire(PlayerId::new(1), Rank::Five);
        let a2 = Action::inquire(PlayerId::new(1), Rank::Five);
        let a3 = Action::inquire(PlayerId::new(2), Rank::Five);

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
        assert_ne!(a1, Action::Pass);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::new(1), Action::inquire(PlayerId::new(0), Rank::Jack), 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
