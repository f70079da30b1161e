//! Wiring the handlers into a state machine and running a game.

use log::info;

use super::handlers::{deal, next_player, pick_starting_player, player_win, take_turn, Collaborators};
use super::states;
use crate::core::{GameConfig, GameState, PlayerId};
use crate::error::{GoFishError, Result};
use crate::machine::StateMachine;
use crate::rules::{GameObserver, PlayerInput};

/// The Go Fish machine type.
pub type GoFishMachine<'a> = StateMachine<GameState, Collaborators<'a>, GoFishError>;

/// A finished game.
#[derive(Clone, Debug)]
pub struct GameOutcome {
    pub winner: PlayerId,
    /// Handlers invoked, including the final `player_win`.
    pub steps: usize,
    pub state: GameState,
}

/// Build the five-state Go Fish machine, starting at `deal_players`.
#[must_use]
pub fn go_fish_machine<'a>() -> GoFishMachine<'a> {
    let mut machine = GoFishMachine::new();
    machine
        .add_state(states::DEAL_PLAYERS, deal, false)
        .add_state(states::PICK_STARTING_PLAYER, pick_starting_player, false)
        .add_state(states::TAKE_TURN, take_turn, false)
        .add_state(states::NEXT_PLAYER, next_player, false)
        .add_state(states::PLAYER_WIN, player_win, true)
        .set_start(states::DEAL_PLAYERS);
    machine
}

/// Set up a table from `config` and play until someone wins.
///
/// ## Example
///
/// ```
/// use go_fish::core::GameConfig;
/// use go_fish::games::go_fish::play;
/// use go_fish::rules::{EventLog, RandomBot};
///
/// let mut bot = RandomBot::new(7);
/// let mut log = EventLog::new();
/// let outcome = play(GameConfig::default().with_seed(7), &mut bot, &mut log).unwrap();
///
/// assert!(outcome.state.players[outcome.winner].hand.is_empty());
/// assert_eq!(outcome.state.card_count(), outcome.state.pool_size());
/// ```
pub fn play<'a>(
    config: GameConfig,
    input: &'a mut dyn PlayerInput,
    observer: &'a mut dyn GameObserver,
) -> Result<GameOutcome> {
    run(config, None, input, observer)
}

/// Like `play`, but give up with `MachineError::StepLimitExceeded` after
/// `max_steps` handler calls.
pub fn play_limited<'a>(
    config: GameConfig,
    max_steps: usize,
    input: &'a mut dyn PlayerInput,
    observer: &'a mut dyn GameObserver,
) -> Result<GameOutcome> {
    run(config, Some(max_steps), input, observer)
}

fn run<'a>(
    config: GameConfig,
    max_steps: Option<usize>,
    input: &'a mut dyn PlayerInput,
    observer: &'a mut dyn GameObserver,
) -> Result<GameOutcome> {
    let state = GameState::new(config)?;
    info!(
        "starting go fish: {} players, seed {}",
        state.player_count(),
        state.rng.seed()
    );

    let mut machine = go_fish_machine();
    if let Some(limit) = max_steps {
        machine = machine.with_step_limit(limit);
    }

    let mut io = Collaborators { input, observer };
    let finished = machine.run(state, &mut io)?;

    Ok(GameOutcome {
        winner: finished.value.active_player(),
        steps: finished.steps,
        state: finished.value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Deck, Rank, Suit};
    use crate::core::Action;
    use crate::machine::{MachineError, StateName};
    use crate::rules::{EventLog, GameEvent, RandomBot, ScriptedInput};

    #[test]
    fn test_machine_registers_states() {
        let machine = go_fish_machine();
        assert!(machine.is_end_state(&StateName::from("PLAYER_WIN")));
        assert!(!machine.is_end_state(&StateName::from(states::TAKE_TURN)));
    }

    #[test]
    fn test_bots_play_to_completion() {
        let mut bot = RandomBot::new(3);
        let mut log = EventLog::new();

        let outcome =
            play_limited(GameConfig::default().with_seed(3), 100_000, &mut bot, &mut log).unwrap();

        assert!(outcome.state.players[outcome.winner].hand.is_empty());
        assert_eq!(outcome.state.card_count(), outcome.state.pool_size());
        assert_eq!(
            log.events.last(),
            Some(&GameEvent::PlayerWon {
                player: outcome.winner
            })
        );
        assert!(matches!(log.events[0], GameEvent::Dealt { .. }));
    }

    #[test]
    fn test_invalid_config_fails_before_dealing() {
        let mut input = ScriptedInput::default();
        let mut log = EventLog::new();

        let err = play(GameConfig::default().with_players(9), &mut input, &mut log).unwrap_err();

        assert!(matches!(err, GoFishError::Config(_)));
        assert!(log.events.is_empty());
    }

    #[test]
    fn test_step_limit_stops_passing_players() {
        let mut input = ScriptedInput::default();
        let mut log = EventLog::new();

        let err = play_limited(GameConfig::default().with_seed(1), 50, &mut input, &mut log)
            .unwrap_err();

        assert!(matches!(
            err,
            GoFishError::Machine(MachineError::StepLimitExceeded(50))
        ));
    }

    #[test]
    fn test_running_machine_on_rigged_table() {
        // Two players, two cards each, rigged so player 0 wins on the first turn.
        let config = GameConfig::default()
            .with_players(2)
            .with_hand_size(2)
            .with_seed(0);
        let mut state = GameState::new(config).unwrap();
        state.players[PlayerId::new(0)].hand = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
        ];
        state.players[PlayerId::new(1)].hand = vec![Card::new(Rank::Ace, Suit::Clubs)];
        state.deck = Deck::default();

        // The collaborators must outlive the machine that borrows them.
        let mut input = ScriptedInput::new([Action::inquire(PlayerId::new(1), Rank::Ace)]);
        let mut log = EventLog::new();

        let mut machine = go_fish_machine();
        machine.set_start(states::PICK_STARTING_PLAYER);

        let mut io = Collaborators {
            input: &mut input,
            observer: &mut log,
        };

        let finished = machine.run(state, &mut io).unwrap();

        assert_eq!(finished.state, StateName::from(states::PLAYER_WIN));
        assert_eq!(finished.value.active_player(), PlayerId::new(0));
        assert_eq!(finished.value.sets[&Rank::Ace].len(), 3);
        // pick, take_turn, player_win
        assert_eq!(finished.steps, 3);
    }
}
