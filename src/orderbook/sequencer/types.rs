//! Core types for the sequencer subsystem: the command a caller submits,
//! the result the engine produces, and the sequenced event recorded to
//! the journal for deterministic replay.

use crate::orderbook::matching::MatchOutcome;
use crate::orderbook::order::{Id, Order};
use serde::{Deserialize, Serialize};

/// A command submitted for total-ordered execution against a single
/// symbol's book. Each variant maps to one engine-facade operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SequencerCommand {
    /// Submit a new order.
    Submit(Order),
    /// Cancel an existing order by id.
    Cancel { symbol: String, order_id: Id },
}

/// The outcome of executing a [`SequencerCommand`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SequencerResult {
    /// An order was accepted (it may have matched, rested, or both).
    Accepted {
        order_id: Id,
        trade_count: usize,
        resting: bool,
    },
    /// An order was cancelled.
    Cancelled { order_id: Id },
    /// The command was rejected.
    Rejected { reason: String },
}

impl SequencerResult {
    pub fn from_match_outcome(order_id: Id, outcome: &MatchOutcome) -> Self {
        SequencerResult::Accepted {
            order_id,
            trade_count: outcome.trades.len(),
            resting: outcome.resting_order_id.is_some(),
        }
    }
}

/// A sequenced event recorded to the journal after processing a command.
/// `sequence_num`/`timestamp_ns` let a reader replay commands in the
/// exact order and timing they were originally applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequencerEvent {
    pub sequence_num: u64,
    pub timestamp_ns: u64,
    pub command: SequencerCommand,
    pub result: SequencerResult,
}
