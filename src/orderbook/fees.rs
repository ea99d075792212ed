//! Fee schedule: pure configuration, never trade state.
//!
//! Fees are expressed in basis points (bps), where 1 bps = 0.01% = 0.0001.
//! Negative values represent rebates (common for maker fees to provide
//! liquidity). `FeeSchedule` only ever produces *rates*; the absolute fee
//! amount charged to a given trade (`rate × price × quantity`) is computed
//! once, at trade-creation time, and stored on the `Trade` itself — it is
//! never recomputed or held in two places at once (see `Trade::maker_fee`/
//! `taker_fee` in `trade.rs`).

use crate::decimal::{Price, Qty};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configurable fee schedule for maker and taker fees, in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Maker fee in basis points (negative = rebate).
    pub maker_fee_bps: i32,
    /// Taker fee in basis points (always non-negative in practice, but not
    /// enforced — a negative taker fee is unusual, not invalid).
    pub taker_fee_bps: i32,
}

impl FeeSchedule {
    pub fn new(maker_fee_bps: i32, taker_fee_bps: i32) -> Self {
        Self {
            maker_fee_bps,
            taker_fee_bps,
        }
    }

    pub fn zero_fee() -> Self {
        Self::new(0, 0)
    }

    pub fn is_zero_fee(&self) -> bool {
        self.maker_fee_bps == 0 && self.taker_fee_bps == 0
    }

    /// Computes the absolute fee amount for one execution: `notional × rate`,
    /// where `notional = price × quantity` and `rate = bps / 10_000`.
    /// Positive results are charges; negative results are rebates.
    pub fn maker_fee(&self, price: Price, quantity: Qty) -> Decimal {
        Self::fee_amount(price, quantity, self.maker_fee_bps)
    }

    pub fn taker_fee(&self, price: Price, quantity: Qty) -> Decimal {
        Self::fee_amount(price, quantity, self.taker_fee_bps)
    }

    fn fee_amount(price: Price, quantity: Qty, bps: i32) -> Decimal {
        let notional = price.value() * quantity.value();
        notional * Decimal::from(bps) / Decimal::from(10_000)
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::zero_fee()
    }
}
