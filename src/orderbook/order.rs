//! Order identity, the closed order-type/side tagged unions, and the
//! mutable fill state of a single order.

use crate::decimal::{Price, Qty};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A unique, opaque order identifier, stable across the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Id(Uuid);

impl Id {
    /// Generates a fresh, random order identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the book an order sits on (or, for an incoming order,
/// which side it aggresses from).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The opposite side, i.e. the side an order of this side matches against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// The closed set of order types this engine understands. Dispatch on this
/// tag is by `match`, never by inheritance/polymorphism (spec §9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Match immediately against the book at any available price; cancel
    /// whatever remains unfilled.
    Market,
    /// Match at the given limit price or better; any unfilled remainder
    /// rests on the book.
    Limit,
    /// Immediate-Or-Cancel: match what is available now at the limit
    /// price, cancel the rest. Never rests.
    Ioc,
    /// Fill-Or-Kill: fill the entire quantity immediately or cancel
    /// everything. Never rests, never partially fills.
    Fok,
    /// Inert until the last trade price crosses `stop_price`, then
    /// re-injected as a `Market` order.
    Stop,
    /// Inert until the last trade price crosses `stop_price`, then
    /// re-injected as a `Limit` order at `limit_price`.
    StopLimit,
    /// Inert until the last trade price crosses `stop_price` in the
    /// take-profit direction, then re-injected as a `Market` order.
    TakeProfit,
}

impl OrderType {
    /// Whether this order type ever rests on the book when only partially
    /// filled. Only `Limit` does; everything else cancels its residual.
    pub fn rests_on_partial_fill(self) -> bool {
        matches!(self, OrderType::Limit)
    }

    /// Whether this order type belongs in the trigger table rather than
    /// being matched directly.
    pub fn is_trigger(self) -> bool {
        matches!(
            self,
            OrderType::Stop | OrderType::StopLimit | OrderType::TakeProfit
        )
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderType::Market => "market",
            OrderType::Limit => "limit",
            OrderType::Ioc => "ioc",
            OrderType::Fok => "fok",
            OrderType::Stop => "stop",
            OrderType::StopLimit => "stop_limit",
            OrderType::TakeProfit => "take_profit",
        };
        write!(f, "{s}")
    }
}

/// An order accepted by the engine: immutable identity plus mutable fill
/// state. `quantity` never changes after acceptance; `filled` only grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Id,
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    /// Immutable original quantity.
    pub quantity: Qty,
    /// Required for `Limit`/`StopLimit`; absent otherwise.
    pub limit_price: Option<Price>,
    /// Required for `Stop`/`StopLimit`/`TakeProfit`; absent otherwise.
    pub stop_price: Option<Price>,
    /// Monotonic acceptance sequence number, assigned by the book. Breaks
    /// ties within a price level (earliest first).
    pub sequence: u64,
    /// Wall-clock acceptance time in milliseconds since the epoch.
    pub timestamp: u64,
    /// How much of `quantity` has been matched so far. `0 <= filled <= quantity`.
    pub filled: Qty,
}

impl Order {
    /// `quantity - filled`. Never negative by construction.
    pub fn remaining(&self) -> Qty {
        Qty::new_unchecked(self.quantity.value() - self.filled.value())
    }

    /// Records a fill, growing `filled` by `amount`. The caller is
    /// responsible for ensuring `amount <= remaining()`.
    pub fn apply_fill(&mut self, amount: Qty) {
        self.filled = Qty::new_unchecked(self.filled.value() + amount.value());
    }

    pub fn is_fully_filled(&self) -> bool {
        self.remaining().is_zero()
    }
}
