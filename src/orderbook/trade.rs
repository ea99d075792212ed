//! A single execution record.

use crate::decimal::{Price, Qty};
use crate::orderbook::order::{Id, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable record of a single execution. `price` is always the
/// maker's (resting) price — the taker gets price improvement, never the
/// reverse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: Uuid,
    pub symbol: String,
    pub price: Price,
    pub quantity: Qty,
    pub maker_order_id: Id,
    pub taker_order_id: Id,
    /// The incoming order's side; the aggressor is always the taker.
    pub aggressor_side: Side,
    pub timestamp: u64,
    /// Absolute fee amount charged to the maker, if a `FeeSchedule` is
    /// configured. Negative means a rebate. Computed once, never mutated.
    pub maker_fee: Option<Decimal>,
    /// Absolute fee amount charged to the taker, if a `FeeSchedule` is
    /// configured. Computed once, never mutated.
    pub taker_fee: Option<Decimal>,
}

impl Trade {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: impl Into<String>,
        price: Price,
        quantity: Qty,
        maker_order_id: Id,
        taker_order_id: Id,
        aggressor_side: Side,
        timestamp: u64,
        maker_fee: Option<Decimal>,
        taker_fee: Option<Decimal>,
    ) -> Self {
        Self {
            trade_id: Uuid::new_v4(),
            symbol: symbol.into(),
            price,
            quantity,
            maker_order_id,
            taker_order_id,
            aggressor_side,
            timestamp,
            maker_fee,
            taker_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn trade_records_maker_price_and_aggressor() {
        let t = Trade::new(
            "BTC/USD",
            Price::new(dec!(100)).unwrap(),
            Qty::new(dec!(1)).unwrap(),
            Id::new(),
            Id::new(),
            Side::Buy,
            1_700_000_000_000,
            None,
            None,
        );
        assert_eq!(t.price.value(), dec!(100));
        assert_eq!(t.aggressor_side, Side::Buy);
        assert!(t.maker_fee.is_none());
    }
}
