//! Snapshot Round Trip
//!
//! This example saves an automaton as JSON and binary, then restores it.
//!
//! Key concepts:
//! - Snapshots list transitions in definition order, so output is stable
//! - Restoring replays the normal construction calls
//! - A snapshot with a dangling target is rejected on restore
//!
//! Run with: cargo run --example snapshot_roundtrip

use dfa_engine::presets;
use dfa_engine::{Automaton, Snapshot, SnapshotError};

fn main() -> Result<(), SnapshotError> {
    println!("=== Snapshot Round Trip Example ===\n");

    let original = presets::even_length();
    let json = original.to_json()?;
    println!("JSON snapshot:\n{json}\n");

    let restored: Automaton<char> = Automaton::from_json(&json)?;
    for word in ["", "0", "01"] {
        println!(
            "{word:?}: original={:?} restored={:?}",
            original.simulate(word.chars()),
            restored.simulate(word.chars())
        );
    }

    let bytes = original.snapshot().to_binary()?;
    let from_binary = Snapshot::<char>::from_binary(&bytes)?.restore()?;
    println!("\nBinary snapshot: {} bytes, {} states restored", bytes.len(), from_binary.len());

    let mut broken = original.snapshot();
    broken.states[0].transitions.push(('a', "missing".to_string()));
    match broken.restore() {
        Ok(_) => println!("Unexpectedly restored a broken snapshot"),
        Err(err) => println!("Broken snapshot rejected: {err}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
