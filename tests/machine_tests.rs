//! The driver used for something other than cards.
//!
//! A small sentence classifier: each state consumes one word and decides
//! where to go next.

use go_fish::machine::{MachineError, StateMachine, StateName, Transition};
use thiserror::Error;

#[derive(Debug, Error)]
enum ParseError {
    #[error(transparent)]
    Machine(#[from] MachineError),
    #[error("ran out of words")]
    OutOfWords,
}

/// Words still to read, plus the states visited on the way.
#[derive(Debug, Default)]
struct Trace {
    visited: Vec<String>,
}

type Words = Vec<&'static str>;
type Classifier = StateMachine<Words, Trace, ParseError>;

fn next_word(mut words: Words) -> Result<(&'static str, Words), ParseError> {
    if words.is_empty() {
        return Err(ParseError::OutOfWords);
    }
    let word = words.remove(0);
    Ok((word, words))
}

fn classifier() -> Classifier {
    let mut machine = Classifier::new();
    machine
        .add_state(
            "Start",
            |words, trace: &mut Trace| -> Result<Transition<Words>, ParseError> {
                trace.visited.push("start".into());
                let (word, rest) = next_word(words)?;
                let next = if word == "Rust" { "subject" } else { "error_state" };
                Ok((next.into(), rest))
            },
            false,
        )
        .add_state(
            "Subject",
            |words, trace: &mut Trace| -> Result<Transition<Words>, ParseError> {
                trace.visited.push("subject".into());
                let (word, rest) = next_word(words)?;
                let next = if word == "is" { "verb" } else { "error_state" };
                Ok((next.into(), rest))
            },
            false,
        )
        .add_state(
            "Verb",
            |words, trace: &mut Trace| -> Result<Transition<Words>, ParseError> {
                trace.visited.push("verb".into());
                let (word, rest) = next_word(words)?;
                let next = match word {
                    "great" | "fast" => "pos_state",
                    "slow" | "ugly" => "neg_state",
                    _ => "error_state",
                };
                Ok((next.into(), rest))
            },
            false,
        )
        .add_state("pos_state", |w, _: &mut Trace| Ok(("pos_state".into(), w)), true)
        .add_state("neg_state", |w, _: &mut Trace| Ok(("neg_state".into(), w)), true)
        .add_state("error_state", |w, _: &mut Trace| Ok(("error_state".into(), w)), true)
        .set_start("START");
    machine
}

#[test]
fn test_positive_sentence() {
    let mut trace = Trace::default();
    let finished = classifier()
        .run(vec!["Rust", "is", "fast"], &mut trace)
        .unwrap();

    assert_eq!(finished.state, StateName::from("POS_STATE"));
    assert!(finished.value.is_empty());
    assert_eq!(trace.visited, ["start", "subject", "verb"]);
    // three word states plus the end state
    assert_eq!(finished.steps, 4);
}

#[test]
fn test_negative_sentence() {
    let mut trace = Trace::default();
    let finished = classifier()
        .run(vec!["Rust", "is", "slow", "today"], &mut trace)
        .unwrap();

    assert_eq!(finished.state.as_str(), "neg_state");
    assert_eq!(finished.value, vec!["today"]);
}

#[test]
fn test_unexpected_word_ends_in_error_state() {
    let mut trace = Trace::default();
    let finished = classifier()
        .run(vec!["Rust", "was", "great"], &mut trace)
        .unwrap();

    assert_eq!(finished.state.as_str(), "error_state");
    assert_eq!(trace.visited, ["start", "subject"]);
    assert_eq!(finished.value, vec!["great"]);
}

#[test]
fn test_handler_error_stops_the_run() {
    let mut trace = Trace::default();
    let err = classifier().run(vec!["Rust"], &mut trace).unwrap_err();

    assert!(matches!(err, ParseError::OutOfWords));
    assert_eq!(trace.visited, ["start", "subject"]);
}

#[test]
fn test_step_limit_applies_to_any_machine() {
    let mut trace = Trace::default();
    let err = classifier()
        .with_step_limit(2)
        .run(vec!["Rust", "is", "great"], &mut trace)
        .unwrap_err();

    assert!(matches!(
        err,
        ParseError::Machine(MachineError::StepLimitExceeded(2))
    ));
}

#[test]
fn test_transition_to_unregistered_state() {
    let mut machine = classifier();
    machine.add_state(
        "subject",
        |w, _: &mut Trace| Ok(("object".into(), w)),
        false,
    );

    let mut trace = Trace::default();
    let err = machine.run(vec!["Rust", "is"], &mut trace).unwrap_err();

    match err {
        ParseError::Machine(MachineError::UnknownState(name)) => assert_eq!(name.as_str(), "object"),
        other => panic!("expected unknown state, got {other:?}"),
    }
}
