//! Ready-made automata.
//!
//! Every preset is assembled purely through [`AutomatonBuilder`], and every
//! state gets a transition for every alphabet symbol. Symbols outside the
//! alphabet are left undefined, so inputs containing them are rejected.

use crate::builder::AutomatonBuilder;
use crate::core::{Automaton, Symbol};

/// The alphabet the stock presets are defined over.
pub const DEFAULT_ALPHABET: [char; 5] = ['0', '1', 'a', 'b', 'c'];

/// Name of the absorbing state of [`contains_substring`].
pub const ACCEPT_STATE: &str = "q_accept";

/// Which input lengths a parity automaton accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

/// Accepts words over `alphabet` that contain `pattern` as a contiguous run.
///
/// State `q{i}` means the longest suffix read so far that is also a prefix
/// of the pattern has length `i`. On a mismatch the automaton falls back
/// along the pattern's failure links instead of restarting, so overlapping
/// prefixes such as `aab` inside `aaab` are not missed. Once the whole
/// pattern has been seen the automaton stays in [`ACCEPT_STATE`].
///
/// # Example
///
/// ```rust
/// use dfa_engine::presets::{contains_substring, DEFAULT_ALPHABET};
///
/// let pattern: Vec<char> = "ab".chars().collect();
/// let dfa = contains_substring(&pattern, &DEFAULT_ALPHABET);
///
/// assert_eq!(dfa.simulate("0ab1".chars()), Ok(true));
/// assert_eq!(dfa.simulate("ba".chars()), Ok(false));
/// ```
pub fn contains_substring<S: Symbol>(pattern: &[S], alphabet: &[S]) -> Automaton<S> {
    let failure = failure_links(pattern);
    let name = |matched: usize| {
        if matched == pattern.len() {
            ACCEPT_STATE.to_string()
        } else {
            format!("q{matched}")
        }
    };

    let mut builder = AutomatonBuilder::new().start(name(0));
    for matched in 0..pattern.len() {
        builder = builder.state(name(matched), false);
        for symbol in alphabet {
            let next = advance(pattern, &failure, matched, symbol);
            builder = builder.transition(name(matched), symbol.clone(), name(next));
        }
    }

    builder
        .accepting(ACCEPT_STATE)
        .self_loops(ACCEPT_STATE, alphabet.iter().cloned())
        .build()
        .expect("substring automaton should always build")
}

/// Accepts words over `alphabet` whose length has the given parity.
pub fn length_parity<S: Symbol>(alphabet: &[S], parity: Parity) -> Automaton<S> {
    AutomatonBuilder::new()
        .state("q0", parity == Parity::Even)
        .state("q1", parity == Parity::Odd)
        .start("q0")
        .transitions("q0", alphabet.iter().cloned(), "q1")
        .transitions("q1", alphabet.iter().cloned(), "q0")
        .build()
        .expect("parity automaton should always build")
}

/// Words over [`DEFAULT_ALPHABET`] containing `abc`.
pub fn contains_abc() -> Automaton<char> {
    contains_substring(&['a', 'b', 'c'], &DEFAULT_ALPHABET)
}

/// Words over [`DEFAULT_ALPHABET`] of even length, including the empty word.
pub fn even_length() -> Automaton<char> {
    length_parity(&DEFAULT_ALPHABET, Parity::Even)
}

/// Words over [`DEFAULT_ALPHABET`] of odd length.
pub fn odd_length() -> Automaton<char> {
    length_parity(&DEFAULT_ALPHABET, Parity::Odd)
}

// failure[i]: length of the longest proper prefix of pattern[..=i] that is also its suffix.
fn failure_links<S: Symbol>(pattern: &[S]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut k = 0;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = failure[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        failure[i] = k;
    }
    failure
}

fn advance<S: Symbol>(pattern: &[S], failure: &[usize], mut matched: usize, symbol: &S) -> usize {
    loop {
        if pattern[matched] == *symbol {
            return matched + 1;
        }
        if matched == 0 {
            return 0;
        }
        matched = failure[matched - 1];
    }
}
