//! dfa-engine: deterministic finite automata you build and then run.
//!
//! An [`Automaton`] is a table of named states with accept flags and a
//! deterministic transition function. It is assembled once, then handed to
//! the simulator together with an input sequence to get an accept/reject
//! verdict. Simulation never mutates the automaton, so a built automaton
//! can be shared freely between threads.
//!
//! # Core Concepts
//!
//! - **Automaton**: states, transitions, and a start state, keyed by name
//! - **Simulation**: left-to-right replay of an input; a missing transition rejects
//! - **Builder**: fluent construction and the `dfa!` macro
//! - **Presets**: substring detection and length parity automata
//! - **Snapshots**: JSON and binary persistence with validated restore
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::{simulate, AutomatonBuilder, AutomatonError};
//!
//! let dfa = AutomatonBuilder::new()
//!     .state("start", false)
//!     .state("seen_1", false)
//!     .accepting("seen_11")
//!     .start("start")
//!     .transition("start", '0', "start")
//!     .transition("start", '1', "seen_1")
//!     .transition("seen_1", '0', "start")
//!     .transition("seen_1", '1', "seen_11")
//!     .self_loops("seen_11", ['0', '1'])
//!     .build()?;
//!
//! assert!(simulate(&dfa, "0110".chars())?);
//! assert!(!simulate(&dfa, "0101".chars())?);
//! # Ok::<(), AutomatonError>(())
//! ```

pub mod builder;
pub mod core;
pub mod presets;
pub mod simulation;
pub mod snapshot;

// Re-export commonly used types
pub use builder::AutomatonBuilder;
pub use crate::core::{Automaton, AutomatonError, State, StateId, Symbol};
pub use simulation::{simulate, trace, Halt, Run};
pub use snapshot::{Snapshot, SnapshotError};
