//! The trigger table: holds `Stop`/`StopLimit`/`TakeProfit` orders while
//! they are inert, and scans them for activation against the last trade
//! price.
//!
//! Grounded on the teacher's `SpecialOrderTracker` (repricing.rs), which
//! tracks pegged/trailing-stop order ids in side tables keyed off market
//! moves; here the table is keyed by the direction in which a trigger
//! fires so a scan is a single `BTreeMap` range split, not a full pass.

use crate::decimal::Price;
use crate::orderbook::order::{Id, Order, OrderType, Side};
use std::collections::BTreeMap;
use tracing::trace;

/// The direction of market movement that fires a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Fires once the last trade price rises to or above the stop price.
    Ascending,
    /// Fires once the last trade price falls to or below the stop price.
    Descending,
}

/// Derives the activation direction for a trigger order, per the
/// type/side combinations in spec §4.2.5:
///
/// | order type  | side | fires when                       |
/// |-------------|------|-----------------------------------|
/// | Stop        | Buy  | last trade >= stop_price           |
/// | Stop        | Sell | last trade <= stop_price           |
/// | StopLimit   | Buy  | last trade >= stop_price           |
/// | StopLimit   | Sell | last trade <= stop_price           |
/// | TakeProfit  | Buy  | last trade <= stop_price            |
/// | TakeProfit  | Sell | last trade >= stop_price            |
fn direction_of(order_type: OrderType, side: Side) -> Direction {
    match (order_type, side) {
        (OrderType::Stop | OrderType::StopLimit, Side::Buy) => Direction::Ascending,
        (OrderType::Stop | OrderType::StopLimit, Side::Sell) => Direction::Descending,
        (OrderType::TakeProfit, Side::Buy) => Direction::Descending,
        (OrderType::TakeProfit, Side::Sell) => Direction::Ascending,
        (other, _) => panic!("{other} is not a trigger order type"),
    }
}

/// Holds inert stop/stop-limit/take-profit orders until the market moves
/// through their stop price, at which point they are handed back to the
/// matching state machine as `Market` (for `Stop`/`TakeProfit`) or `Limit`
/// (for `StopLimit`) orders.
#[derive(Debug, Default)]
pub struct TriggerTable {
    ascending: BTreeMap<Price, Vec<Order>>,
    descending: BTreeMap<Price, Vec<Order>>,
    index: std::collections::HashMap<Id, Direction>,
}

impl TriggerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All currently-inert trigger orders, for snapshotting. No particular
    /// order is guaranteed.
    pub fn orders(&self) -> Vec<Order> {
        self.ascending
            .values()
            .chain(self.descending.values())
            .flatten()
            .cloned()
            .collect()
    }

    /// Registers an inert trigger order. Panics if `order.order_type` is
    /// not a trigger type or `stop_price` is absent — both are validated
    /// before an order ever reaches the trigger table.
    pub fn register(&mut self, order: Order) {
        let stop_price = order.stop_price.expect("trigger order requires stop_price");
        let direction = direction_of(order.order_type, order.side);
        self.index.insert(order.id, direction);
        let bucket = match direction {
            Direction::Ascending => &mut self.ascending,
            Direction::Descending => &mut self.descending,
        };
        trace!(id = %order.id, %stop_price, "registered trigger order");
        bucket.entry(stop_price).or_default().push(order);
    }

    /// Removes a trigger order by id, wherever it sits.
    pub fn cancel(&mut self, id: Id) -> Option<Order> {
        let direction = self.index.remove(&id)?;
        let bucket = match direction {
            Direction::Ascending => &mut self.ascending,
            Direction::Descending => &mut self.descending,
        };
        for (price, orders) in bucket.iter_mut() {
            if let Some(pos) = orders.iter().position(|o| o.id == id) {
                let order = orders.remove(pos);
                let price = *price;
                if orders.is_empty() {
                    bucket.remove(&price);
                }
                return Some(order);
            }
        }
        None
    }

    /// Pops every trigger order that fires against `last_trade_price`, up
    /// to `max` orders, best-price-first (closest to the trade price
    /// first). Callers re-scan after re-injecting the returned orders,
    /// since a cascade trade can move the price again.
    pub fn scan_activations(&mut self, last_trade_price: Price, max: usize) -> Vec<Order> {
        let mut activated = Vec::new();

        let ascending_keys: Vec<Price> = self
            .ascending
            .range(..=last_trade_price)
            .map(|(p, _)| *p)
            .collect();
        for price in ascending_keys {
            if activated.len() >= max {
                break;
            }
            if let Some(orders) = self.ascending.remove(&price) {
                for order in orders {
                    self.index.remove(&order.id);
                    activated.push(order);
                    if activated.len() >= max {
                        break;
                    }
                }
            }
        }

        let descending_keys: Vec<Price> = self
            .descending
            .range(last_trade_price..)
            .map(|(p, _)| *p)
            .collect();
        for price in descending_keys {
            if activated.len() >= max {
                break;
            }
            if let Some(orders) = self.descending.remove(&price) {
                for order in orders {
                    self.index.remove(&order.id);
                    activated.push(order);
                    if activated.len() >= max {
                        break;
                    }
                }
            }
        }

        if !activated.is_empty() {
            trace!(count = activated.len(), %last_trade_price, "activated triggers");
        }
        activated
    }
}
