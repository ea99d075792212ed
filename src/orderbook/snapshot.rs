//! Self-describing, versioned, checksummed book snapshots.
//!
//! Grounded on the teacher's `OrderBookSnapshotPackage` (version field +
//! sha2 checksum over the serialized payload), adapted to this crate's
//! local `Order`/`PriceLevel` types. This replaces the pickle-based
//! persistence in the system this engine supersedes, which could not
//! detect truncation or a schema mismatch between writer and reader.

use crate::config::BookConfig;
use crate::decimal::Price;
use crate::orderbook::book::Book;
use crate::orderbook::order::Order;
use crate::orderbook::price_level::PriceLevel;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised while producing or restoring a snapshot package.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("unsupported snapshot version: {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

/// Format version for [`OrderBookSnapshotPackage`]. Bump whenever the
/// shape of [`OrderBookSnapshot`] changes in a way older readers can't
/// tolerate.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// One price level's worth of resting orders, in FIFO order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceLevelSnapshot {
    pub price: Price,
    pub orders: Vec<Order>,
}

/// The full state of one symbol's book at a point in time: both sides'
/// resting orders, the last trade price, and every inert trigger order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    pub symbol: String,
    pub timestamp: u64,
    pub bids: Vec<PriceLevelSnapshot>,
    pub asks: Vec<PriceLevelSnapshot>,
    pub last_trade_price: Option<Price>,
    /// Inert stop/stop-limit/take-profit orders, in no particular order.
    pub triggers: Vec<Order>,
    pub config: BookConfig,
    /// The event sequence number to resume from after restoring, so
    /// published events never reuse a number from before the snapshot.
    pub next_event_sequence: u64,
}

impl OrderBookSnapshot {
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.iter().map(|l| l.price).max()
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.asks.iter().map(|l| l.price).min()
    }
}

/// A snapshot wrapped with a schema version and a checksum of its
/// contents, so a reader can detect truncation, bit rot, or a
/// writer/reader version mismatch before trusting the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshotPackage {
    pub version: u32,
    pub snapshot: OrderBookSnapshot,
    pub checksum: String,
}

impl OrderBookSnapshotPackage {
    pub fn new(snapshot: OrderBookSnapshot) -> Result<Self, SnapshotError> {
        let checksum = Self::compute_checksum(&snapshot)?;
        Ok(Self {
            version: SNAPSHOT_FORMAT_VERSION,
            snapshot,
            checksum,
        })
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(data: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Checks the version and checksum without consuming the package.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_FORMAT_VERSION,
            });
        }
        let computed = Self::compute_checksum(&self.snapshot)?;
        if computed != self.checksum {
            return Err(SnapshotError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual: computed,
            });
        }
        Ok(())
    }

    pub fn into_snapshot(self) -> Result<OrderBookSnapshot, SnapshotError> {
        self.validate()?;
        Ok(self.snapshot)
    }

    fn compute_checksum(snapshot: &OrderBookSnapshot) -> Result<String, SnapshotError> {
        let payload = serde_json::to_vec(snapshot)?;
        let mut hasher = Sha256::new();
        hasher.update(payload);
        Ok(format!("{:x}", hasher.finalize()))
    }
}

impl Book {
    /// Captures the current state of this book as a snapshot. Does not
    /// mutate `self` — the event-sequence counter keeps counting forward
    /// from wherever it was.
    pub fn snapshot(&self, timestamp: u64) -> OrderBookSnapshot {
        let bids = self
            .bid_levels()
            .map(|(price, level)| PriceLevelSnapshot {
                price: *price,
                orders: level.iter().cloned().collect(),
            })
            .collect();
        let asks = self
            .ask_levels()
            .map(|(price, level)| PriceLevelSnapshot {
                price: *price,
                orders: level.iter().cloned().collect(),
            })
            .collect();

        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp,
            bids,
            asks,
            last_trade_price: self.last_trade_price,
            triggers: self.triggers.orders(),
            config: self.config.clone(),
            next_event_sequence: self.peek_event_sequence(),
        }
    }

    /// Rebuilds a book from a validated snapshot. Order acceptance
    /// sequence numbers are reassigned in the snapshot's stored order so
    /// FIFO priority within each level survives the round-trip; the event
    /// sequence counter resumes from `snapshot.next_event_sequence`.
    pub fn restore(snapshot: OrderBookSnapshot) -> Self {
        let mut book = Book::new(snapshot.symbol, snapshot.config);
        book.last_trade_price = snapshot.last_trade_price;

        for level in snapshot.bids.into_iter().chain(snapshot.asks.into_iter()) {
            for order in level.orders {
                book.next_order_sequence = book.next_order_sequence.max(order.sequence + 1);
                book.add_resting(order);
            }
        }
        for order in snapshot.triggers {
            book.next_order_sequence = book.next_order_sequence.max(order.sequence + 1);
            book.register_trigger(order);
        }
        book.next_event_sequence = snapshot.next_event_sequence;
        book
    }
}
