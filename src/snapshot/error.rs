//! Snapshot error types.

use crate::core::AutomatonError;
use thiserror::Error;

/// Errors that can occur while saving or restoring a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot format version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot content does not describe a well-formed automaton
    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] AutomatonError),
}
