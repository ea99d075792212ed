//! Per-symbol two-sided order book: sorted price levels, FIFO queues, and
//! the auxiliary indices the matching state machine and facade rely on.

use crate::config::BookConfig;
use crate::decimal::{Price, Qty};
use crate::orderbook::error::BookError;
use crate::orderbook::order::{Id, Order, Side};
use crate::orderbook::price_level::PriceLevel;
use crate::orderbook::trigger::TriggerTable;
use dashmap::DashMap;
use std::collections::BTreeMap;
use tracing::trace;

/// A single symbol's book: bids and asks as sorted price levels, an order
/// index for O(1) cancel, the last trade price, and the trigger table for
/// inert stop/take-profit orders.
///
/// A lock-free `SkipMap` gives no benefit here: the engine facade already
/// serializes every call into a book behind one per-symbol mutex, so a
/// plain balanced BST is the right structure for the sorted side indices
/// (see DESIGN.md).
pub struct Book {
    pub(crate) symbol: String,
    pub(crate) bids: BTreeMap<Price, PriceLevel>,
    pub(crate) asks: BTreeMap<Price, PriceLevel>,
    /// O(1) order lookup for `cancel`: id -> (side, price).
    pub(crate) order_index: DashMap<Id, (Side, Price)>,
    pub(crate) last_trade_price: Option<Price>,
    pub(crate) triggers: TriggerTable,
    pub(crate) config: BookConfig,
    /// Monotonically increasing acceptance counter; breaks ties within a
    /// price level and becomes `Order::sequence`.
    pub(crate) next_order_sequence: u64,
    /// Monotonically increasing per-symbol event sequence number, attached
    /// to every emitted trade/BBO/depth event so subscribers can detect
    /// gaps or reordering.
    pub(crate) next_event_sequence: u64,
    /// Set after an invariant violation; further submissions are rejected
    /// until an operator clears it.
    pub(crate) quarantined: bool,
}

impl Book {
    pub fn new(symbol: impl Into<String>, config: BookConfig) -> Self {
        Self {
            symbol: symbol.into(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            order_index: DashMap::new(),
            last_trade_price: None,
            triggers: TriggerTable::new(),
            config,
            next_order_sequence: 0,
            next_event_sequence: 0,
            quarantined: false,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    pub fn is_quarantined(&self) -> bool {
        self.quarantined
    }

    pub fn clear_quarantine(&mut self) {
        self.quarantined = false;
    }

    pub fn next_order_sequence(&mut self) -> u64 {
        let seq = self.next_order_sequence;
        self.next_order_sequence += 1;
        seq
    }

    pub fn next_event_sequence(&mut self) -> u64 {
        let seq = self.next_event_sequence;
        self.next_event_sequence += 1;
        seq
    }

    /// The next event sequence number that would be handed out, without
    /// consuming it. Used when snapshotting.
    pub fn peek_event_sequence(&self) -> u64 {
        self.next_event_sequence
    }

    pub fn last_trade_price(&self) -> Option<Price> {
        self.last_trade_price
    }

    pub(crate) fn set_last_trade_price(&mut self, price: Price) {
        self.last_trade_price = Some(price);
    }

    /// Best (highest) resting bid price, O(1) via `BTreeMap`'s max.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// Best (lowest) resting ask price, O(1) via `BTreeMap`'s min.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// Bid levels in best-first (descending price) order.
    pub fn bid_levels(&self) -> impl DoubleEndedIterator<Item = (&Price, &PriceLevel)> {
        self.bids.iter().rev()
    }

    /// Ask levels in best-first (ascending price) order.
    pub fn ask_levels(&self) -> impl DoubleEndedIterator<Item = (&Price, &PriceLevel)> {
        self.asks.iter()
    }

    pub(crate) fn levels(&self, side: Side) -> &BTreeMap<Price, PriceLevel> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(crate) fn levels_mut(&mut self, side: Side) -> &mut BTreeMap<Price, PriceLevel> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Returns, for each side, the first `n` prices (best-first) and the
    /// aggregate remaining quantity at each.
    pub fn top_n(&self, n: usize) -> (Vec<(Price, Qty)>, Vec<(Price, Qty)>) {
        let bids = self
            .bid_levels()
            .take(n)
            .map(|(p, level)| (*p, level.total_remaining()))
            .collect();
        let asks = self
            .ask_levels()
            .take(n)
            .map(|(p, level)| (*p, level.total_remaining()))
            .collect();
        (bids, asks)
    }

    /// Sum of `remaining` over `opposite_side` levels marketable against
    /// `limit_price` (or the whole side, if `limit_price` is `None`).
    /// Walks best-price-first and stops at the first non-marketable level
    /// — used by the FOK precheck, which must short-circuit rather than
    /// sum the entire side.
    pub fn depth_marketable(&self, opposite_side: Side, limit_price: Option<Price>) -> Qty {
        let levels: Box<dyn Iterator<Item = (&Price, &PriceLevel)>> = match opposite_side {
            Side::Buy => Box::new(self.bid_levels()),
            Side::Sell => Box::new(self.ask_levels()),
        };
        let mut total = Qty::zero().value();
        for (price, level) in levels {
            let marketable = match limit_price {
                None => true,
                Some(limit) => match opposite_side {
                    // Opposite side is bids: marketable while bid price >= limit.
                    Side::Buy => *price >= limit,
                    // Opposite side is asks: marketable while ask price <= limit.
                    Side::Sell => *price <= limit,
                },
            };
            if !marketable {
                break;
            }
            total += level.total_remaining().value();
        }
        Qty::new_unchecked(total)
    }

    /// Rests a `Limit` order with positive remaining quantity. Precondition
    /// (enforced by the matching state machine, not here): the insertion
    /// must not cross the opposite side's best price.
    pub fn add_resting(&mut self, order: Order) {
        let side = order.side;
        let price = order
            .limit_price
            .expect("add_resting requires a priced order");
        let id = order.id;
        trace!(symbol = %self.symbol, %id, %side, %price, "resting order");
        let levels = self.levels_mut(side);
        levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(order);
        self.order_index.insert(id, (side, price));
    }

    /// Registers a fresh trigger order id/price/side into the order index
    /// so `cancel` can find it; the order itself lives in `self.triggers`.
    pub fn register_trigger(&mut self, order: Order) {
        self.triggers.register(order);
    }

    /// Removes an order from wherever it rests (book side or trigger
    /// table). O(1) lookup via `order_index` for resting orders.
    pub fn cancel(&mut self, id: Id) -> Result<Order, BookError> {
        if let Some((_, (side, price))) = self.order_index.remove(&id) {
            let levels = self.levels_mut(side);
            let level = levels.get_mut(&price).ok_or(BookError::OrderNotFound(id))?;
            let removed = level.remove(id).ok_or(BookError::OrderNotFound(id))?;
            if level.is_empty() {
                levels.remove(&price);
            }
            trace!(symbol = %self.symbol, %id, "canceled resting order");
            return Ok(removed);
        }
        if let Some(order) = self.triggers.cancel(id) {
            trace!(symbol = %self.symbol, %id, "canceled trigger order");
            return Ok(order);
        }
        Err(BookError::OrderNotFound(id))
    }

    /// Removes the price level entirely if it has become empty, dropping
    /// it from the sorted index.
    pub(crate) fn drop_if_empty(&mut self, side: Side, price: Price) {
        let levels = self.levels_mut(side);
        if levels.get(&price).is_some_and(PriceLevel::is_empty) {
            levels.remove(&price);
        }
    }

    /// Checks the order-book invariants: no crossed book, no empty price
    /// level left in the index, every resting order has positive
    /// remaining quantity. A failure here is what triggers quarantine.
    pub fn check_invariants(&self) -> Result<(), BookError> {
        if let (Some(bid), Some(ask)) = (self.best_bid(), self.best_ask())
            && bid >= ask
        {
            return Err(BookError::InvariantViolation(format!(
                "crossed book: best_bid {bid} >= best_ask {ask}"
            )));
        }
        for (price, level) in self.bids.iter().chain(self.asks.iter()) {
            if level.is_empty() {
                return Err(BookError::InvariantViolation(format!(
                    "empty price level left in index at {price}"
                )));
            }
            for order in level.iter() {
                if order.remaining().is_zero() {
                    return Err(BookError::InvariantViolation(format!(
                        "resting order {} has zero remaining",
                        order.id
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orderbook::order::OrderType;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn limit_order(side: Side, price: Decimal, qty: Decimal, seq: u64) -> Order {
        Order {
            id: Id::new(),
            symbol: "BTC/USD".into(),
            side,
            order_type: OrderType::Limit,
            quantity: Qty::new(qty).unwrap(),
            limit_price: Some(Price::new(price).unwrap()),
            stop_price: None,
            sequence: seq,
            timestamp: 0,
            filled: Qty::zero(),
        }
    }

    #[test]
    fn best_bid_ask_track_extremes() {
        let mut book = Book::new("BTC/USD", BookConfig::default());
        book.add_resting(limit_order(Side::Buy, dec!(99), dec!(1), 0));
        book.add_resting(limit_order(Side::Buy, dec!(100), dec!(1), 1));
        book.add_resting(limit_order(Side::Sell, dec!(105), dec!(1), 2));
        book.add_resting(limit_order(Side::Sell, dec!(101), dec!(1), 3));

        assert_eq!(book.best_bid().unwrap().value(), dec!(100));
        assert_eq!(book.best_ask().unwrap().value(), dec!(101));
    }

    #[test]
    fn cancel_removes_order_and_empty_level() {
        let mut book = Book::new("BTC/USD", BookConfig::default());
        let order = limit_order(Side::Buy, dec!(100), dec!(1), 0);
        let id = order.id;
        book.add_resting(order);
        assert!(book.best_bid().is_some());

        let removed = book.cancel(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(book.best_bid().is_none());
        assert!(book.cancel(id).is_err());
    }

    #[test]
    fn depth_marketable_stops_at_first_non_marketable_level() {
        let mut book = Book::new("BTC/USD", BookConfig::default());
        book.add_resting(limit_order(Side::Sell, dec!(100), dec!(1), 0));
        book.add_resting(limit_order(Side::Sell, dec!(101), dec!(1), 1));
        book.add_resting(limit_order(Side::Sell, dec!(102), dec!(1), 2));

        let depth = book.depth_marketable(Side::Sell, Some(Price::new(dec!(101)).unwrap()));
        assert_eq!(depth.value(), dec!(2));
    }

    #[test]
    fn invariants_hold_on_fresh_book() {
        let book = Book::new("BTC/USD", BookConfig::default());
        assert!(book.check_invariants().is_ok());
    }
}
