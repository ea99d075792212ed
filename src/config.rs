//! Engine- and book-level configuration: tick/lot sizes, order-size bounds,
//! fee schedule, and the bounded trigger-cascade depth.

use crate::decimal::{Price, Qty};
use crate::orderbook::fees::FeeSchedule;
use serde::{Deserialize, Serialize};

/// Default bound on how many stop/take-profit orders a single trade may
/// cascade-activate before the engine stops and requires a follow-up
/// submission to continue (spec §4.2.5).
pub const DEFAULT_MAX_TRIGGER_CASCADE: usize = 64;

/// Per-symbol configuration: price/quantity granularity, size bounds, fees,
/// and the trigger-cascade bound. One `BookConfig` is captured by each
/// [`crate::orderbook::book::Book`] at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookConfig {
    /// Smallest allowed price increment. `None` disables tick validation.
    pub tick_size: Option<Price>,
    /// Smallest allowed quantity increment. `None` disables lot validation.
    pub lot_size: Option<Qty>,
    pub min_order_qty: Option<Qty>,
    pub max_order_qty: Option<Qty>,
    pub fee_schedule: FeeSchedule,
    /// Upper bound on triggers activated by a single incoming order, to
    /// keep a pathological stop cascade from blocking the event loop.
    pub max_trigger_cascade: usize,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            tick_size: None,
            lot_size: None,
            min_order_qty: None,
            max_order_qty: None,
            fee_schedule: FeeSchedule::zero_fee(),
            max_trigger_cascade: DEFAULT_MAX_TRIGGER_CASCADE,
        }
    }
}

/// Top-level engine configuration, shared across all symbols unless a
/// symbol is given its own [`BookConfig`] via [`crate::engine::Engine::add_symbol`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub default_book_config: BookConfig,
    /// How many price levels `top_n`/depth snapshots expose by default.
    pub default_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_book_config: BookConfig::default(),
            default_depth: 10,
        }
    }
}
