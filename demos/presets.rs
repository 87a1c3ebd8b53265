//! Preset Automata
//!
//! This example runs the stock presets over a handful of words.
//!
//! Key concepts:
//! - Presets are ordinary automata assembled through the builder
//! - A symbol outside the preset alphabet rejects the word
//! - `trace` shows the states a word walks through
//!
//! Run with: cargo run --example presets

use dfa_engine::presets::{self, contains_substring, DEFAULT_ALPHABET};
use dfa_engine::{trace, Automaton, AutomatonError};

fn report(label: &str, dfa: &Automaton<char>, words: &[&str]) -> Result<(), AutomatonError> {
    println!("--- {label} ---");
    for word in words {
        let verdict = if dfa.simulate(word.chars())? {
            "Accepted"
        } else {
            "Rejected"
        };
        println!("{word:>10?} => {verdict}");
    }
    println!();
    Ok(())
}

fn main() -> Result<(), AutomatonError> {
    println!("=== Preset Automata Example ===\n");

    report(
        "contains 'abc'",
        &presets::contains_abc(),
        &["", "ab", "abcabc", "01abc10", "xxabcyy"],
    )?;
    report("even length", &presets::even_length(), &["", "0", "01", "abc"])?;
    report("odd length", &presets::odd_length(), &["a", "ab", "c01"])?;

    // Widening the alphabet lets filler symbols through.
    let mut alphabet = DEFAULT_ALPHABET.to_vec();
    alphabet.extend(['x', 'y']);
    let widened = contains_substring(&['a', 'b', 'c'], &alphabet);
    report("contains 'abc' over {0,1,a,b,c,x,y}", &widened, &["xxabcyy"])?;

    let contains_abc = presets::contains_abc();
    let run = trace(&contains_abc, "aabc".chars())?;
    println!("Path for \"aabc\": {}", run.path_names().join(" -> "));
    println!("Halt: {:?}, accepted: {}", run.halt(), run.accepted());

    println!("\n=== Example Complete ===");
    Ok(())
}
