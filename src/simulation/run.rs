//! Record of a single simulation.

use crate::core::{Automaton, State, StateId, Symbol};

/// Why a simulation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// Every input symbol was consumed.
    Exhausted,

    /// The current state had no transition for the symbol at input position `at`.
    MissingTransition { at: usize },
}

/// The states visited while replaying one input sequence.
///
/// The path always starts with the start state and grows by one entry per
/// consumed symbol.
#[derive(Clone, Debug)]
pub struct Run<'a, S: Symbol> {
    automaton: &'a Automaton<S>,
    path: Vec<StateId>,
    halt: Halt,
}

impl<'a, S: Symbol> Run<'a, S> {
    pub(crate) fn new(automaton: &'a Automaton<S>, path: Vec<StateId>, halt: Halt) -> Self {
        debug_assert!(!path.is_empty(), "a run always contains the start state");
        Self {
            automaton,
            path,
            halt,
        }
    }

    /// The verdict: all input consumed and the last state is accepting.
    pub fn accepted(&self) -> bool {
        self.halt == Halt::Exhausted && self.final_state().is_accept()
    }

    pub fn halt(&self) -> Halt {
        self.halt
    }

    /// Number of symbols consumed before the run stopped.
    pub fn consumed(&self) -> usize {
        self.path.len() - 1
    }

    pub fn path(&self) -> &[StateId] {
        &self.path
    }

    /// Names of the visited states, start state first.
    pub fn path_names(&self) -> Vec<&'a str> {
        let automaton = self.automaton;
        self.path
            .iter()
            .map(|id| automaton.state_at(*id).name())
            .collect()
    }

    /// The state the run ended in.
    pub fn final_state(&self) -> &'a State<S> {
        let last = self.path[self.path.len() - 1];
        self.automaton.state_at(last)
    }
}
