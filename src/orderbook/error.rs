//! Book-internal error types.

use crate::decimal::{Price, Qty};
use crate::orderbook::order::{Id, Side};
use thiserror::Error;

/// Errors raised by operations on a single [`crate::orderbook::book::Book`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BookError {
    /// Target order not present in the book.
    #[error("order not found: {0}")]
    OrderNotFound(Id),

    /// Attempted to rest a `Limit` order that would cross the opposite
    /// side's best price (i.e. it is actually marketable and should have
    /// matched first).
    #[error("price {price} on {side} would cross opposite best {opposite_price}")]
    PriceCrossing {
        price: Price,
        side: Side,
        opposite_price: Price,
    },

    /// Order price is not a multiple of the configured tick size.
    #[error("price {price} is not a multiple of tick size {tick_size}")]
    InvalidTickSize { price: Price, tick_size: Price },

    /// Order quantity is not a multiple of the configured lot size.
    #[error("quantity {quantity} is not a multiple of lot size {lot_size}")]
    InvalidLotSize { quantity: Qty, lot_size: Qty },

    /// Order quantity falls outside the configured min/max range.
    #[error("quantity {quantity} out of range [{min:?}, {max:?}]")]
    OrderSizeOutOfRange {
        quantity: Qty,
        min: Option<Qty>,
        max: Option<Qty>,
    },

    /// This symbol's book has been quarantined after an invariant
    /// violation and rejects further submissions until cleared.
    #[error("book for this symbol is quarantined pending operator intervention")]
    Quarantined,

    /// A required invariant failed to hold after a `process_order` call.
    /// Surfaced to the control plane; the symbol is quarantined.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
