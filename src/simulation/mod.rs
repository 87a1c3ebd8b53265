//! Simulation of a built automaton over an input sequence.
//!
//! Simulation is a pure function of the automaton and the input. It reads
//! the automaton through a shared reference and keeps its only mutable
//! state (the current state) on the stack, so repeated or concurrent calls
//! always agree.

mod run;

pub use run::{Halt, Run};

use crate::core::{Automaton, AutomatonError, StateId, Symbol};
use std::borrow::Borrow;

/// Decide whether `input` is accepted by `automaton`.
///
/// Symbols are consumed strictly left to right starting at the start state.
/// A symbol with no transition from the current state rejects the input
/// immediately. Otherwise the verdict is the accept flag of the state
/// reached after the last symbol, which for an empty input is the start
/// state itself.
///
/// Fails with [`AutomatonError::NotInitialized`] if no start state is set.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Automaton;
/// use dfa_engine::simulation::simulate;
///
/// let mut dfa = Automaton::new();
/// dfa.add_state("start", false).unwrap();
/// dfa.add_state("seen_a", true).unwrap();
/// dfa.set_start("start").unwrap();
/// dfa.add_transition("start", 'a', "seen_a").unwrap();
///
/// assert_eq!(simulate(&dfa, "a".chars()), Ok(true));
/// assert_eq!(simulate(&dfa, "".chars()), Ok(false));
/// // No transition on 'b': rejected, not an error.
/// assert_eq!(simulate(&dfa, "b".chars()), Ok(false));
/// ```
pub fn simulate<S, I>(automaton: &Automaton<S>, input: I) -> Result<bool, AutomatonError>
where
    S: Symbol,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    let (last, halt) = walk(automaton, input, |_| {})?;
    Ok(halt == Halt::Exhausted && automaton.state_at(last).is_accept())
}

/// Replay `input` and keep the visited path alongside the verdict.
///
/// Shares its stepping routine with [`simulate`], so
/// `trace(a, w)?.accepted()` always equals `simulate(a, w)?`.
pub fn trace<S, I>(automaton: &Automaton<S>, input: I) -> Result<Run<'_, S>, AutomatonError>
where
    S: Symbol,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    let mut path = Vec::new();
    let (_, halt) = walk(automaton, input, |state| path.push(state))?;
    Ok(Run::new(automaton, path, halt))
}

/// Step through `input` from the start state, reporting every state entered
/// (the start state first) to `visit`. Returns the last state and why the
/// walk stopped.
fn walk<S, I, F>(
    automaton: &Automaton<S>,
    input: I,
    mut visit: F,
) -> Result<(StateId, Halt), AutomatonError>
where
    S: Symbol,
    I: IntoIterator,
    I::Item: Borrow<S>,
    F: FnMut(StateId),
{
    let mut current = automaton
        .start_id()
        .ok_or(AutomatonError::NotInitialized)?;
    visit(current);

    for (position, symbol) in input.into_iter().enumerate() {
        let symbol = symbol.borrow();
        let from = automaton.state_at(current);
        let Some(next) = from.transition(symbol) else {
            tracing::trace!(
                state = from.name(),
                ?symbol,
                position,
                "no transition, rejecting"
            );
            return Ok((current, Halt::MissingTransition { at: position }));
        };

        tracing::trace!(
            from = from.name(),
            ?symbol,
            to = automaton.state_at(next).name(),
            "step"
        );
        visit(next);
        current = next;
    }

    Ok((current, Halt::Exhausted))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts words over {a, b} that end in 'b'; 'x' is left undefined.
    fn ends_in_b() -> Automaton<char> {
        let mut dfa = Automaton::new();
        dfa.add_state("other", false).unwrap();
        dfa.add_state("after_b", true).unwrap();
        dfa.set_start("other").unwrap();
        for from in ["other", "after_b"] {
            dfa.add_transition(from, 'a', "other").unwrap();
            dfa.add_transition(from, 'b', "after_b").unwrap();
        }
        dfa
    }

    #[test]
    fn simulate_without_start_fails() {
        let mut dfa: Automaton<char> = Automaton::new();
        dfa.add_state("q0", true).unwrap();

        assert_eq!(simulate(&dfa, "".chars()), Err(AutomatonError::NotInitialized));
        assert!(matches!(
            trace(&dfa, "a".chars()),
            Err(AutomatonError::NotInitialized)
        ));
    }

    #[test]
    fn empty_input_yields_start_flag() {
        let dfa = ends_in_b();

        assert_eq!(simulate(&dfa, "".chars()), Ok(false));

        let mut accepting = Automaton::<char>::new();
        accepting.add_state("only", true).unwrap();
        accepting.set_start("only").unwrap();
        assert_eq!(simulate(&accepting, "".chars()), Ok(true));
    }

    #[test]
    fn verdict_follows_final_state() {
        let dfa = ends_in_b();

        assert_eq!(simulate(&dfa, "ab".chars()), Ok(true));
        assert_eq!(simulate(&dfa, "ba".chars()), Ok(false));
        assert_eq!(simulate(&dfa, "aabab".chars()), Ok(true));
    }

    #[test]
    fn missing_transition_rejects_even_from_accepting_state() {
        let dfa = ends_in_b();

        assert_eq!(simulate(&dfa, "bx".chars()), Ok(false));
        assert_eq!(simulate(&dfa, "xb".chars()), Ok(false));
    }

    #[test]
    fn accepts_borrowed_symbols() {
        let dfa = ends_in_b();
        let input = vec!['a', 'b'];

        assert_eq!(simulate(&dfa, &input), Ok(true));
        assert_eq!(dfa.simulate(input), Ok(true));
    }

    #[test]
    fn simulate_and_trace_agree_after_halting_in_accepting_state() {
        let dfa = ends_in_b();

        let run = trace(&dfa, "bx".chars()).unwrap();

        assert!(run.final_state().is_accept());
        assert_eq!(run.halt(), Halt::MissingTransition { at: 1 });
        assert!(!run.accepted());
        assert_eq!(simulate(&dfa, "bx".chars()), Ok(run.accepted()));
    }

    #[test]
    fn trace_records_path() {
        let dfa = ends_in_b();

        let run = trace(&dfa, "abb".chars()).unwrap();

        assert!(run.accepted());
        assert_eq!(run.halt(), Halt::Exhausted);
        assert_eq!(run.consumed(), 3);
        assert_eq!(
            run.path_names(),
            vec!["other", "other", "after_b", "after_b"]
        );
        assert_eq!(run.final_state().name(), "after_b");
    }

    #[test]
    fn trace_stops_at_missing_transition() {
        let dfa = ends_in_b();

        let run = trace(&dfa, "abxb".chars()).unwrap();

        assert!(!run.accepted());
        assert_eq!(run.halt(), Halt::MissingTransition { at: 2 });
        assert_eq!(run.consumed(), 2);
        assert_eq!(run.final_state().name(), "after_b");
    }

    #[test]
    fn trace_of_empty_input_is_start_state() {
        let dfa = ends_in_b();

        let run = trace(&dfa, "".chars()).unwrap();

        assert_eq!(run.path().len(), 1);
        assert_eq!(run.path_names(), vec!["other"]);
        assert!(!run.accepted());
    }
}
