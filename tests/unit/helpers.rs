//! Shared order-construction helpers for the scenario/law/property tests.

use clob_engine::decimal::{Price, Qty};
use clob_engine::orderbook::order::{Id, Order, OrderType, Side};
use rust_decimal::Decimal;

pub fn limit(symbol: &str, side: Side, price: Decimal, qty: Decimal) -> Order {
    Order {
        id: Id::new(),
        symbol: symbol.to_string(),
        side,
        order_type: OrderType::Limit,
        quantity: Qty::new(qty).unwrap(),
        limit_price: Some(Price::new(price).unwrap()),
        stop_price: None,
        sequence: 0,
        timestamp: 0,
        filled: Qty::zero(),
    }
}

pub fn market(symbol: &str, side: Side, qty: Decimal) -> Order {
    Order {
        id: Id::new(),
        symbol: symbol.to_string(),
        side,
        order_type: OrderType::Market,
        quantity: Qty::new(qty).unwrap(),
        limit_price: None,
        stop_price: None,
        sequence: 0,
        timestamp: 0,
        filled: Qty::zero(),
    }
}

pub fn ioc(symbol: &str, side: Side, price: Decimal, qty: Decimal) -> Order {
    Order {
        id: Id::new(),
        symbol: symbol.to_string(),
        side,
        order_type: OrderType::Ioc,
        quantity: Qty::new(qty).unwrap(),
        limit_price: Some(Price::new(price).unwrap()),
        stop_price: None,
        sequence: 0,
        timestamp: 0,
        filled: Qty::zero(),
    }
}

pub fn fok(symbol: &str, side: Side, price: Decimal, qty: Decimal) -> Order {
    Order {
        id: Id::new(),
        symbol: symbol.to_string(),
        side,
        order_type: OrderType::Fok,
        quantity: Qty::new(qty).unwrap(),
        limit_price: Some(Price::new(price).unwrap()),
        stop_price: None,
        sequence: 0,
        timestamp: 0,
        filled: Qty::zero(),
    }
}

pub fn stop(symbol: &str, side: Side, stop_price: Decimal, qty: Decimal) -> Order {
    Order {
        id: Id::new(),
        symbol: symbol.to_string(),
        side,
        order_type: OrderType::Stop,
        quantity: Qty::new(qty).unwrap(),
        limit_price: None,
        stop_price: Some(Price::new(stop_price).unwrap()),
        sequence: 0,
        timestamp: 0,
        filled: Qty::zero(),
    }
}
