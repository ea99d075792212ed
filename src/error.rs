//! Top-level engine error type: wraps the per-book error together with
//! failures that only make sense at the facade level (unknown symbol).

use crate::orderbook::error::BookError;
use crate::orderbook::snapshot::SnapshotError;
use thiserror::Error;

/// Errors raised by [`crate::engine::Engine`] operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No book has been registered for this symbol.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// An error from the book-level state machine.
    #[error(transparent)]
    Book(#[from] BookError),

    /// An error producing or restoring a snapshot.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
