//! The automaton model: a flat state table plus a designated start state.
//!
//! States are registered by name and addressed internally by [`StateId`].
//! Transitions are stored as id-to-id maps on each state, so back-edges and
//! self-loops are just entries in a table.

use super::error::AutomatonError;
use super::state::{State, StateId};
use super::Symbol;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Deterministic finite automaton over symbols of type `S`.
///
/// The automaton is mutated only while it is being constructed. Simulation
/// borrows it immutably, so any number of simulations may share one
/// automaton across threads once construction is done.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Automaton;
///
/// let mut dfa = Automaton::new();
/// dfa.add_state("even", true).unwrap();
/// dfa.add_state("odd", false).unwrap();
/// dfa.set_start("even").unwrap();
///
/// for symbol in ['0', '1'] {
///     dfa.add_transition("even", symbol, "odd").unwrap();
///     dfa.add_transition("odd", symbol, "even").unwrap();
/// }
///
/// assert_eq!(dfa.simulate("".chars()), Ok(true));
/// assert_eq!(dfa.simulate("0".chars()), Ok(false));
/// assert_eq!(dfa.simulate("01".chars()), Ok(true));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: Symbol> {
    states: Vec<State<S>>,
    index: HashMap<String, StateId>,
    start: Option<StateId>,
}

impl<S: Symbol> Default for Automaton<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> Automaton<S> {
    /// Create an empty automaton with no start state.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            index: HashMap::new(),
            start: None,
        }
    }

    /// Register a new state and return its handle.
    ///
    /// Fails with [`AutomatonError::DuplicateState`] if the name is taken.
    pub fn add_state(
        &mut self,
        name: impl Into<String>,
        is_accept: bool,
    ) -> Result<StateId, AutomatonError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(AutomatonError::DuplicateState { name });
        }

        let id = StateId(self.states.len());
        self.index.insert(name.clone(), id);
        self.states.push(State::new(name, is_accept));
        Ok(id)
    }

    /// Mark the named state as the start state.
    pub fn set_start(&mut self, name: &str) -> Result<(), AutomatonError> {
        let id = self.resolve(name)?;
        self.start = Some(id);
        Ok(())
    }

    /// Register that `from` moves to `to` on `symbol`.
    ///
    /// Both endpoints must already exist; nothing is created implicitly.
    /// Redefining an existing `(from, symbol)` pair replaces its target.
    pub fn add_transition(&mut self, from: &str, symbol: S, to: &str) -> Result<(), AutomatonError> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        let previous = self.states[source.0].insert_transition(symbol.clone(), target);
        if let Some(previous) = previous.filter(|previous| *previous != target) {
            debug!(
                from,
                ?symbol,
                replaced = self.states[previous.0].name(),
                to,
                "transition redefined"
            );
        }
        Ok(())
    }

    /// Check whether a state with this name is registered.
    pub fn contains_state(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Check whether the named state is accepting.
    pub fn is_accepting(&self, name: &str) -> Result<bool, AutomatonError> {
        self.resolve(name).map(|id| self.states[id.0].is_accept())
    }

    /// Name of the state reached from `from` on `symbol`, if a transition exists.
    pub fn transition(&self, from: &str, symbol: &S) -> Result<Option<&str>, AutomatonError> {
        let source = self.resolve(from)?;
        Ok(self.states[source.0]
            .transition(symbol)
            .map(|target| self.states[target.0].name()))
    }

    /// Handle of the named state.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    /// State behind a handle, or `None` if the handle is out of range.
    ///
    /// Handles are plain indices and carry no owner. A handle issued by a
    /// different automaton is not detected: if its index is in range it
    /// resolves to whatever state this automaton registered at that index.
    pub fn state(&self, id: StateId) -> Option<&State<S>> {
        self.states.get(id.0)
    }

    /// The designated start state, once set.
    pub fn start_state(&self) -> Option<&State<S>> {
        self.start.map(|id| &self.states[id.0])
    }

    pub fn start_id(&self) -> Option<StateId> {
        self.start
    }

    /// All states in registration order.
    pub fn states(&self) -> impl Iterator<Item = &State<S>> + '_ {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Every symbol that labels at least one transition.
    pub fn alphabet(&self) -> HashSet<&S> {
        self.states
            .iter()
            .flat_map(|state| state.transitions().map(|(symbol, _)| symbol))
            .collect()
    }

    /// Decide whether `input` is accepted. See [`crate::simulation::simulate`].
    pub fn simulate<I>(&self, input: I) -> Result<bool, AutomatonError>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        crate::simulation::simulate(self, input)
    }

    pub(crate) fn resolve(&self, name: &str) -> Result<StateId, AutomatonError> {
        self.state_id(name)
            .ok_or_else(|| AutomatonError::unknown(name))
    }

    /// Ids handed to this method always come from this automaton's own tables.
    pub(crate) fn state_at(&self, id: StateId) -> &State<S> {
        &self.states[id.0]
    }
}
