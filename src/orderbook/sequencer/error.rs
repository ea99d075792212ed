//! Error types for the journal subsystem.
//!
//! [`JournalError`] covers all failure modes of the append-only event
//! journal, including I/O errors, corruption, and capacity issues.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur within the journal subsystem.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JournalError {
    /// An I/O error occurred while reading or writing journal files.
    #[error("journal I/O error{}: {message}", path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    /// A journal entry failed CRC32 integrity verification.
    #[error(
        "corrupt journal entry at sequence {sequence}: expected CRC {expected_crc:#010x}, got {actual_crc:#010x}"
    )]
    CorruptEntry {
        sequence: u64,
        expected_crc: u32,
        actual_crc: u32,
    },

    /// The journal entry payload could not be deserialized.
    #[error("journal deserialization error at sequence {sequence}: {message}")]
    DeserializationError { sequence: u64, message: String },

    /// The journal entry payload could not be serialized.
    #[error("journal serialization error: {message}")]
    SerializationError { message: String },

    /// A segment file is too small to hold the entry being appended.
    #[error(
        "journal entry too large: {entry_bytes} bytes exceeds segment size {segment_size} bytes"
    )]
    EntryTooLarge {
        entry_bytes: usize,
        segment_size: usize,
    },

    /// The journal directory does not exist or is not accessible.
    #[error("invalid journal directory: {}", path.display())]
    InvalidDirectory { path: PathBuf },

    /// An internal mutex was poisoned (another thread panicked while
    /// holding the lock).
    #[error("journal internal mutex poisoned")]
    MutexPoisoned,

    /// The requested sequence number was not found in the journal.
    #[error("sequence {sequence} not found in journal")]
    SequenceNotFound { sequence: u64 },

    /// The journal entry has an invalid header (truncated or malformed).
    #[error("invalid journal entry header at offset {offset}: {message}")]
    InvalidEntryHeader { offset: usize, message: String },
}

impl From<std::io::Error> for JournalError {
    #[cold]
    fn from(err: std::io::Error) -> Self {
        JournalError::Io {
            message: err.to_string(),
            path: None,
        }
    }
}
