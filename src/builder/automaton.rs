//! Builder for constructing automata.

use crate::core::{Automaton, AutomatonError, Symbol};
use tracing::debug;

/// Builder for constructing automata with a fluent API.
///
/// Calls are only recorded. `build` applies them through the automaton's
/// own construction operations: states first, then the start state, then
/// transitions in call order. Because states are registered before any
/// transition, states and transitions may be declared in any order.
pub struct AutomatonBuilder<S: Symbol> {
    states: Vec<(String, bool)>,
    start: Option<String>,
    transitions: Vec<(String, S, String)>,
}

impl<S: Symbol> AutomatonBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            start: None,
            transitions: Vec::new(),
        }
    }

    /// Declare a state.
    pub fn state(mut self, name: impl Into<String>, is_accept: bool) -> Self {
        self.states.push((name.into(), is_accept));
        self
    }

    /// Declare an accepting state.
    pub fn accepting(self, name: impl Into<String>) -> Self {
        self.state(name, true)
    }

    /// Set the start state (required).
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Add one transition.
    pub fn transition(mut self, from: impl Into<String>, symbol: S, to: impl Into<String>) -> Self {
        self.transitions.push((from.into(), symbol, to.into()));
        self
    }

    /// Add the same `from -> to` move for every symbol in `symbols`.
    pub fn transitions<I>(mut self, from: impl Into<String>, symbols: I, to: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let from = from.into();
        let to = to.into();
        for symbol in symbols {
            self.transitions.push((from.clone(), symbol, to.clone()));
        }
        self
    }

    /// Make `name` stay put on every symbol in `symbols`.
    pub fn self_loops<I>(self, name: impl Into<String>, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let name = name.into();
        self.transitions(name.clone(), symbols, name)
    }

    /// Build the automaton.
    ///
    /// Returns the first construction error, or
    /// [`AutomatonError::NotInitialized`] if no start state was given.
    pub fn build(self) -> Result<Automaton<S>, AutomatonError> {
        let start = self.start.ok_or(AutomatonError::NotInitialized)?;

        let mut automaton = Automaton::new();
        for (name, is_accept) in self.states {
            automaton.add_state(name, is_accept)?;
        }
        automaton.set_start(&start)?;
        for (from, symbol, to) in self.transitions {
            automaton.add_transition(&from, symbol, &to)?;
        }

        debug!(states = automaton.len(), start = %start, "automaton built");
        Ok(automaton)
    }
}

impl<S: Symbol> Default for AutomatonBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
