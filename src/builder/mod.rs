//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the `dfa!` macro. Both
//! funnel into the automaton's own `add_state`, `set_start`, and
//! `add_transition`, so they enforce the same construction rules.

pub mod automaton;
pub mod macros;

pub use automaton::AutomatonBuilder;
