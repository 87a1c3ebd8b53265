//! Core automaton types.
//!
//! This module contains the automaton model:
//! - `State` and its `StateId` handle
//! - `Automaton`, the state table with its start state
//! - `AutomatonError`, the construction and simulation error taxonomy
//!
//! Construction is the only phase that mutates an automaton.

mod automaton;
mod error;
mod state;

pub use automaton::Automaton;
pub use error::AutomatonError;
pub use state::{State, StateId};

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for transition keys.
///
/// Any cloneable, hashable, comparable type works: `char`, `u8`, enums,
/// interned tokens. The engine never restricts the alphabet itself.
///
/// Beyond `Eq + Hash`, keys must also be `Clone` and `Debug`. `Clone` lets
/// the builder, presets, and snapshots copy symbols into transition
/// tables; `Debug` lets construction and simulation log the symbol they
/// are handling. Snapshot encoding additionally needs `Serialize` and
/// `DeserializeOwned`.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}
