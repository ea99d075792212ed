//! Small shared helpers used across the crate.

use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock time in milliseconds since the Unix epoch. Used to stamp
/// orders and snapshots; never used in the matching path itself, which is
/// driven entirely by price-time priority and acceptance sequence.
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
