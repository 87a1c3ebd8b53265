//! Saving and restoring automata.
//!
//! A snapshot is a plain, serializable description of a built automaton:
//! its states, accept flags, transitions, and start state. Restoring a
//! snapshot replays it through the normal construction operations, so a
//! hand-edited snapshot with duplicate names or dangling targets is
//! rejected the same way a bad builder call would be. This makes JSON
//! snapshots usable as configuration files for automata.

use crate::core::{Automaton, Symbol};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// One state and its outgoing transitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "S: Deserialize<'de>"))]
pub struct StateSpec<S> {
    pub name: String,

    #[serde(default)]
    pub accept: bool,

    /// `(symbol, target state name)` pairs, in definition order
    #[serde(default)]
    pub transitions: Vec<(S, String)>,
}

/// Serializable description of an automaton.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot<S> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,

    /// Name of the start state, if one was set
    pub start: Option<String>,

    /// States in registration order
    pub states: Vec<StateSpec<S>>,
}

impl<S: Symbol> Automaton<S> {
    /// Capture this automaton as a snapshot.
    pub fn snapshot(&self) -> Snapshot<S> {
        let states = self
            .states()
            .map(|state| StateSpec {
                name: state.name().to_string(),
                accept: state.is_accept(),
                transitions: state
                    .transitions()
                    .map(|(symbol, target)| {
                        (symbol.clone(), self.state_at(target).name().to_string())
                    })
                    .collect(),
            })
            .collect();

        Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            start: self.start_state().map(|state| state.name().to_string()),
            states,
        }
    }
}

impl<S: Symbol + Serialize> Automaton<S> {
    /// Serialize this automaton as a JSON snapshot.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        self.snapshot().to_json()
    }
}

impl<S: Symbol + DeserializeOwned> Automaton<S> {
    /// Load an automaton from a JSON snapshot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::core::Automaton;
    ///
    /// let json = r#"{
    ///     "version": 1,
    ///     "id": "00000000-0000-0000-0000-000000000000",
    ///     "created_at": "2024-01-01T00:00:00Z",
    ///     "start": "q0",
    ///     "states": [
    ///         { "name": "q0", "transitions": [["a", "q1"]] },
    ///         { "name": "q1", "accept": true }
    ///     ]
    /// }"#;
    ///
    /// let dfa: Automaton<char> = Automaton::from_json(json).unwrap();
    /// assert_eq!(dfa.simulate("a".chars()), Ok(true));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Snapshot::from_json(json)?.restore()
    }
}

impl<S: Symbol> Snapshot<S> {
    /// Rebuild the automaton this snapshot describes.
    pub fn restore(&self) -> Result<Automaton<S>, SnapshotError> {
        self.check_version()?;

        let mut automaton = Automaton::new();
        for spec in &self.states {
            automaton.add_state(spec.name.clone(), spec.accept)?;
        }
        if let Some(start) = &self.start {
            automaton.set_start(start)?;
        }
        for spec in &self.states {
            for (symbol, target) in &spec.transitions {
                automaton.add_transition(&spec.name, symbol.clone(), target)?;
            }
        }

        debug!(id = %self.id, states = automaton.len(), "snapshot restored");
        Ok(automaton)
    }

    fn check_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }
}

impl<S: Serialize> Snapshot<S> {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Serialize to the compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }
}

impl<S: Symbol + DeserializeOwned> Snapshot<S> {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }
}
