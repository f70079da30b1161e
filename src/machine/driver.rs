//! Named-state driver.
//!
//! Handlers receive the threaded value by move plus a mutable context, and
//! return the name of the next state together with the updated value. The
//! driver stops after running a declared end state's handler.

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use thiserror::Error;

/// Canonical (lowercase) state identifier.
///
/// Names are case-insensitive: `"TAKE_TURN"` and `"take_turn"` are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateName(String);

impl StateName {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_ascii_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StateName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors raised by the driver itself.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("initialization error: no start state set")]
    NoStartState,
    #[error("initialization error: at least one state must be an end state")]
    NoEndState,
    #[error("no handler registered for state `{0}`")]
    UnknownState(StateName),
    #[error("run exceeded {0} steps")]
    StepLimitExceeded(usize),
}

impl MachineError {
    /// True for errors raised before any handler runs because the
    /// machine was never fully declared.
    #[must_use]
    pub fn is_initialization(&self) -> bool {
        matches!(self, MachineError::NoStartState | MachineError::NoEndState)
    }
}

/// Value returned by a handler: next state plus the updated value.
pub type Transition<T> = (StateName, T);

/// A boxed state handler.
pub type Handler<T, C, E> = Box<dyn Fn(T, &mut C) -> Result<Transition<T>, E>>;

/// Result of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finished<T> {
    /// The end state that stopped the run.
    pub state: StateName,
    /// The value returned by the end state's handler.
    pub value: T,
    /// Handlers invoked, including the end state.
    pub steps: usize,
}

/// A transition table from state names to handlers.
///
/// ## Example
///
/// ```
/// use go_fish::machine::{MachineError, StateMachine};
///
/// let mut machine: StateMachine<u32, (), MachineError> = StateMachine::new();
/// machine
///     .add_state("count", |n, _| {
///         let next = if n + 1 >= 3 { "done" } else { "count" };
///         Ok((next.into(), n + 1))
///     }, false)
///     .add_state("DONE", |n, _| Ok(("done".into(), n)), true)
///     .set_start("count");
///
/// let finished = machine.run(0, &mut ()).unwrap();
/// assert_eq!(finished.value, 3);
/// assert_eq!(finished.state.as_str(), "done");
/// ```
pub struct StateMachine<T, C, E> {
    handlers: FxHashMap<StateName, Handler<T, C, E>>,
    start: Option<StateName>,
    end_states: FxHashSet<StateName>,
    step_limit: Option<usize>,
}

impl<T, C, E> Default for StateMachine<T, C, E> {
    fn default() -> Self {
        Self {
            handlers: FxHashMap::default(),
            start: None,
            end_states: FxHashSet::default(),
            step_limit: None,
        }
    }
}

impl<T, C, E> StateMachine<T, C, E>
where
    E: From<MachineError>,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with `StepLimitExceeded` instead of invoking more than
    /// `limit` handlers.
    #[must_use]
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Register a handler. Re-registering a name replaces its handler.
    pub fn add_state<F>(&mut self, name: impl Into<StateName>, handler: F, end_state: bool) -> &mut Self
    where
        F: Fn(T, &mut C) -> Result<Transition<T>, E> + 'static,
    {
        let name = name.into();
        if end_state {
            self.end_states.insert(name.clone());
        } else {
            self.end_states.remove(&name);
        }
        self.handlers.insert(name, Box::new(handler));
        self
    }

    pub fn set_start(&mut self, name: impl Into<StateName>) -> &mut Self {
        self.start = Some(name.into());
        self
    }

    #[must_use]
    pub fn is_end_state(&self, name: &StateName) -> bool {
        self.end_states.contains(name)
    }

    /// Run from the start state until an end state's handler has run.
    pub fn run(&self, initial: T, ctx: &mut C) -> Result<Finished<T>, E> {
        let mut current = self.start.clone().ok_or(MachineError::NoStartState)?;
        if self.end_states.is_empty() {
            return Err(MachineError::NoEndState.into());
        }

        let mut value = initial;
        let mut steps = 0usize;

        loop {
            let handler = self
                .handlers
                .get(&current)
                .ok_or_else(|| MachineError::UnknownState(current.clone()))?;

            if let Some(limit) = self.step_limit {
                if steps >= limit {
                    return Err(MachineError::StepLimitExceeded(limit).into());
                }
            }

            trace!("running state `{current}`");
            let (next, updated) = handler(value, ctx)?;
            value = updated;
            steps += 1;

            if self.is_end_state(&current) {
                debug!("reached end state `{current}` after {steps} steps");
                return Ok(Finished {
                    state: current,
                    value,
                    steps,
                });
            }

            debug!("transition `{current}` -> `{next}`");
            current = next;
        }
    }
}
