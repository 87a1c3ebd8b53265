//! End-to-end scenarios for the stock presets and construction errors.

use dfa_engine::presets::{self, contains_substring, DEFAULT_ALPHABET};
use dfa_engine::{simulate, Automaton, AutomatonError};
use std::sync::Arc;
use std::thread;

fn accepts(dfa: &Automaton<char>, word: &str) -> bool {
    simulate(dfa, word.chars()).unwrap()
}

#[test]
fn contains_abc_scenarios() {
    let dfa = presets::contains_abc();

    assert!(!accepts(&dfa, "ab"));
    assert!(accepts(&dfa, "abcabc"));
    assert!(!accepts(&dfa, ""));
    assert!(accepts(&dfa, "01abc10"));
    assert!(accepts(&dfa, "aababcc"));
    assert!(!accepts(&dfa, "acbcab"));
}

#[test]
fn contains_abc_with_filler_symbols_in_alphabet() {
    let mut alphabet = DEFAULT_ALPHABET.to_vec();
    alphabet.extend(['x', 'y']);
    let dfa = contains_substring(&['a', 'b', 'c'], &alphabet);

    assert!(accepts(&dfa, "xxabcyy"));
    assert!(!accepts(&dfa, "xxabyc"));
}

#[test]
fn filler_symbols_outside_default_alphabet_reject() {
    let dfa = presets::contains_abc();

    assert!(!accepts(&dfa, "xxabcyy"));
}

#[test]
fn even_length_scenarios() {
    let dfa = presets::even_length();

    assert!(accepts(&dfa, ""));
    assert!(!accepts(&dfa, "0"));
    assert!(accepts(&dfa, "01"));
    assert!(!accepts(&dfa, "abc"));
}

#[test]
fn odd_length_scenarios() {
    let dfa = presets::odd_length();

    assert!(accepts(&dfa, "a"));
    assert!(!accepts(&dfa, "ab"));
    assert!(!accepts(&dfa, ""));
    assert!(accepts(&dfa, "c01"));
}

#[test]
fn unknown_target_state_is_an_error() {
    let mut dfa = Automaton::new();
    dfa.add_state("q0", false).unwrap();

    let result = dfa.add_transition("q0", 'a', "q1");

    assert!(matches!(
        result,
        Err(AutomatonError::UnknownState { name }) if name == "q1"
    ));
}

#[test]
fn duplicate_state_is_an_error() {
    let mut dfa: Automaton<char> = Automaton::new();
    dfa.add_state("q0", false).unwrap();

    let result = dfa.add_state("q0", false);

    assert!(matches!(
        result,
        Err(AutomatonError::DuplicateState { name }) if name == "q0"
    ));
}

#[test]
fn simulating_before_set_start_is_an_error() {
    let mut dfa: Automaton<char> = Automaton::new();
    dfa.add_state("q0", true).unwrap();

    assert_eq!(
        simulate(&dfa, "a".chars()),
        Err(AutomatonError::NotInitialized)
    );
    assert_eq!(
        AutomatonError::NotInitialized.to_string(),
        "Start state not set. Call set_start(name) before simulating"
    );
}

#[test]
fn presets_are_shared_across_threads() {
    let dfa = Arc::new(presets::contains_abc());
    let words = ["abc", "ab", "0abc", "cab", "aabc", "bca"];

    let handles: Vec<_> = words
        .iter()
        .map(|word| {
            let dfa = Arc::clone(&dfa);
            let word = word.to_string();
            thread::spawn(move || dfa.simulate(word.chars()))
        })
        .collect();

    let verdicts: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    assert_eq!(verdicts, vec![true, false, true, false, true, false]);
}
