//! Append-only event journal trait for deterministic replay.
//!
//! The [`Journal`] trait defines the contract for persisting
//! [`SequencerEvent`] instances to durable storage. Implementations must
//! guarantee write-ahead semantics: an event is considered committed only
//! after [`append`](Journal::append) returns `Ok(())`.
//!
//! See `FileJournal` (in the `file_journal` module) for the default
//! memory-mapped file implementation.

use super::error::JournalError;
use super::types::SequencerEvent;

/// Size of the fixed-size entry header in bytes.
///
/// Layout: `[4 bytes entry_length][8 bytes sequence_num][8 bytes timestamp_ns]`
pub const ENTRY_HEADER_SIZE: usize = 4 + 8 + 8;

/// Size of the CRC32 trailer appended to each entry in bytes.
pub const ENTRY_CRC_SIZE: usize = 4;

/// Total overhead per journal entry (header + CRC trailer) in bytes.
pub const ENTRY_OVERHEAD: usize = ENTRY_HEADER_SIZE + ENTRY_CRC_SIZE;

/// A single journal entry as read back from storage: the deserialized
/// event plus the CRC32 stored alongside it on disk.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub event: SequencerEvent,
    pub stored_crc: u32,
}

/// Type alias for the iterator returned by [`Journal::read_from`]. Each
/// item is either a successfully decoded [`JournalEntry`] or a
/// [`JournalError`] (e.g. corrupt CRC, deserialization failure).
pub type JournalReadIter = Box<dyn Iterator<Item = Result<JournalEntry, JournalError>>>;

/// An append-only event journal for deterministic replay. The journal is
/// the foundation of the write-ahead log pattern: every event must be
/// persisted before its result is returned to the caller.
///
/// Requires `Send + Sync` so the journal can be shared across async task
/// boundaries. The intended usage pattern is single-writer (one task per
/// symbol) with concurrent readers (replay, monitoring).
pub trait Journal: Send + Sync {
    /// Appends an event to the journal. Must be durably persisted (and
    /// flushed) before this method returns.
    fn append(&self, event: &SequencerEvent) -> Result<(), JournalError>;

    /// Reads events starting from `sequence` (inclusive), in sequence
    /// order. Empty if `sequence` is beyond the last written entry.
    fn read_from(&self, sequence: u64) -> Result<JournalReadIter, JournalError>;

    /// The sequence number of the last entry, or `None` if empty.
    #[must_use]
    fn last_sequence(&self) -> Option<u64>;

    /// Verifies every entry's CRC32 checksum. Returns the first
    /// [`JournalError::CorruptEntry`] encountered, or an I/O error if
    /// segment files cannot be read.
    fn verify_integrity(&self) -> Result<(), JournalError>;
}
