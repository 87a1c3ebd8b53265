//! States of an automaton and the handles that address them.

use super::Symbol;
use indexmap::IndexMap;
use std::fmt;

/// Stable handle to a state inside the automaton that created it.
///
/// Handles are plain indices into the automaton's state table, so cyclic
/// transition graphs never form ownership cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in its automaton's state table.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named state with its accept flag and outgoing transitions.
///
/// Each symbol maps to at most one target. Inserting a second target for
/// the same symbol replaces the first but keeps its original position, so
/// transitions always iterate in the order their symbols were first defined.
#[derive(Clone, Debug)]
pub struct State<S: Symbol> {
    name: String,
    is_accept: bool,
    transitions: IndexMap<S, StateId>,
}

impl<S: Symbol> State<S> {
    pub(crate) fn new(name: String, is_accept: bool) -> Self {
        Self {
            name,
            is_accept,
            transitions: IndexMap::new(),
        }
    }

    /// The state's unique name within its automaton.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether ending the input here accepts it.
    pub fn is_accept(&self) -> bool {
        self.is_accept
    }

    /// Target of the transition on `symbol`, if one is defined.
    pub fn transition(&self, symbol: &S) -> Option<StateId> {
        self.transitions.get(symbol).copied()
    }

    /// All outgoing transitions, in the order their symbols were first defined.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, StateId)> + '_ {
        self.transitions.iter().map(|(symbol, target)| (symbol, *target))
    }

    /// Returns the previous target when the symbol was already mapped.
    pub(crate) fn insert_transition(&mut self, symbol: S, target: StateId) -> Option<StateId> {
        self.transitions.insert(symbol, target)
    }
}
