//! Errors raised by automaton construction and simulation.

use thiserror::Error;

/// Errors that can occur when building or simulating an automaton.
///
/// Every variant signals a caller bug. None of them is raised for a
/// missing transition or an empty input, which are ordinary rejections
/// and acceptances respectively.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("State '{name}' is already registered")]
    DuplicateState { name: String },

    #[error("State '{name}' is not registered")]
    UnknownState { name: String },

    #[error("Start state not set. Call set_start(name) before simulating")]
    NotInitialized,
}

impl AutomatonError {
    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownState {
            name: name.to_string(),
        }
    }
}
