//! State handlers.
//!
//! Each registered handler takes the game state by value and returns the
//! next state name with the updated state. `inquire`, `draw` and
//! `make_sets` are the turn's building blocks, called from `take_turn`.

use log::{debug, info, warn};

use super::states;
use crate::cards::Rank;
use crate::core::{Action, ActionKind, GameState, PlayerId};
use crate::error::{ContractViolation, Result};
use crate::machine::Transition;
use crate::rules::{extract_sets, GameEvent, GameObserver, PlayerInput, PlayerView};

/// The two collaborators every handler may talk to.
pub struct Collaborators<'a> {
    pub input: &'a mut dyn PlayerInput,
    pub observer: &'a mut dyn GameObserver,
}

/// Handler return type.
pub type Step = Result<Transition<GameState>>;

/// Shuffle the pool and deal every player a hand.
///
/// Running out of cards here is fatal: the configuration promised enough.
pub fn deal(mut state: GameState, io: &mut Collaborators<'_>) -> Step {
    let hand_size = state.config().hand_size;

    state.deck.shuffle(&mut state.rng);
    for player in state.players.values_mut() {
        player.hand = state.deck.deal_hand(hand_size)?;
    }

    debug!(
        "dealt {hand_size} cards to {} players, {} left in deck",
        state.player_count(),
        state.deck.len()
    );
    io.observer.notify(&GameEvent::Dealt {
        players: state.player_count(),
        cards_each: hand_size,
    });

    Ok((states::PICK_STARTING_PLAYER.into(), state))
}

/// Player 0 always starts.
pub fn pick_starting_player(mut state: GameState, _io: &mut Collaborators<'_>) -> Step {
    state.set_active_player(PlayerId::new(0))?;
    Ok((states::TAKE_TURN.into(), state))
}

/// Show the hand, apply the chosen action, then lay down sets.
pub fn take_turn(mut state: GameState, io: &mut Collaborators<'_>) -> Step {
    let player = state.active_player();
    io.observer.notify(&GameEvent::TurnStarted {
        player,
        turn: state.turn_number,
        hand: state.active().hand.clone(),
    });

    let action = io
        .input
        .choose_action(&PlayerView::of(&state, &ActionKind::ALL));
    state.record_action(player, action);

    let state = match action {
        Action::Pass => {
            io.observer.notify(&GameEvent::Passed { player });
            state
        }
        Action::Inquire { target, rank } => inquire(state, target, rank, io)?,
    };

    make_sets(state, io)
}

/// Ask `target` for every card of `rank`; go fish if they have none.
pub fn inquire(
    mut state: GameState,
    target: PlayerId,
    rank: Rank,
    io: &mut Collaborators<'_>,
) -> Result<GameState> {
    let asker = state.active_player();
    state.check_player(target)?;
    if target == asker {
        return Err(ContractViolation::SelfTarget(asker).into());
    }

    io.observer.notify(&GameEvent::Asked {
        player: asker,
        target,
        rank,
    });

    let taken = state.players[target].take_rank(rank);
    if taken.is_empty() {
        return Ok(draw(state, io));
    }

    debug!("{target} gives {asker} {} x {rank}", taken.len());
    state.active_mut().hand.extend_from_slice(&taken);
    io.observer.notify(&GameEvent::Transferred {
        from: target,
        to: asker,
        cards: taken,
    });

    Ok(state)
}

/// Go fish: the active player draws one card.
///
/// An empty deck makes this a no-op.
pub fn draw(mut state: GameState, io: &mut Collaborators<'_>) -> GameState {
    let player = state.active_player();

    let drawn = match state.deck.draw() {
        Ok(card) => {
            state.active_mut().hand.push(card);
            Some(card)
        }
        Err(err) => {
            warn!("{player} went fishing: {err}; skipping the draw");
            None
        }
    };

    io.observer.notify(&GameEvent::WentFishing { player, drawn });
    state
}

/// Move the active player's melds to the table; an empty hand wins.
pub fn make_sets(mut state: GameState, io: &mut Collaborators<'_>) -> Step {
    let player = state.active_player();
    let report = extract_sets(&mut state.players[player].hand, &mut state.sets);
    if report.is_empty() {
        debug!("{player} has nothing to lay down");
    }

    for (rank, cards) in report.completed {
        info!("{player} completed a set of {rank}s");
        io.observer.notify(&GameEvent::SetCompleted {
            player,
            rank,
            cards,
        });
    }
    for card in report.added {
        io.observer.notify(&GameEvent::AddedToSet { player, card });
    }

    if state.active().hand.is_empty() {
        Ok((states::PLAYER_WIN.into(), state))
    } else {
        Ok((states::NEXT_PLAYER.into(), state))
    }
}

/// Pass the turn to the previous seat, wrapping 0 to the last seat.
pub fn next_player(mut state: GameState, _io: &mut Collaborators<'_>) -> Step {
    let current = state.active_player().index();
    let previous = if current == 0 {
        state.player_count() - 1
    } else {
        current - 1
    };

    state.set_active_player(PlayerId::new(previous as u8))?;
    state.turn_number += 1;

    Ok((states::TAKE_TURN.into(), state))
}

/// Announce the winner. Registered as the end state.
pub fn player_win(state: GameState, io: &mut Collaborators<'_>) -> Step {
    let player = state.active_player();
    info!("{player} won on turn {}", state.turn_number);
    io.observer.notify(&GameEvent::PlayerWon { player });
    Ok((states::PLAYER_WIN.into(), state))
}
