//! Wire-format market data events: trades, best-bid-offer changes, and
//! incremental depth updates. Every event carries a per-symbol, strictly
//! increasing `sequence` number so a subscriber can detect a gap (a
//! dropped message) or reordering in transit.

use crate::decimal::{Price, Qty};
use crate::orderbook::order::{Id, Side};
use serde::{Deserialize, Serialize};

/// A single execution, published once per trade produced by a
/// `process_order` call (including trigger-cascade trades).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEvent {
    pub sequence: u64,
    pub symbol: String,
    pub price: Price,
    pub quantity: Qty,
    pub maker_order_id: Id,
    pub taker_order_id: Id,
    pub aggressor_side: Side,
    pub timestamp: u64,
}

/// A change to the best bid and/or offer. Published whenever a
/// `process_order` call moves either best price, even if no trade
/// occurred (e.g. a new best-priced resting order).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BboEvent {
    pub sequence: u64,
    pub best_bid: Option<Price>,
    pub best_bid_qty: Option<Qty>,
    pub best_ask: Option<Price>,
    pub best_ask_qty: Option<Qty>,
    pub timestamp: u64,
}

/// A single price level's aggregate quantity changed (or was added /
/// removed). `quantity = None` signals the level is now empty and should
/// be removed from a subscriber's local book.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct L2Update {
    pub sequence: u64,
    pub side: Side,
    pub price: Price,
    pub quantity: Option<Qty>,
    pub timestamp: u64,
}
