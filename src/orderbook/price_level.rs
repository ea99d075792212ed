//! A single price level: the FIFO queue of resting orders at one price.

use crate::decimal::{Price, Qty};
use crate::orderbook::order::{Id, Order};
use std::collections::VecDeque;

/// The FIFO of resting orders at a single price. Pop-front on full fills,
/// push-back on insert; cancel may remove from the middle (rare, O(k)).
#[derive(Debug, Default)]
pub struct PriceLevel {
    price: Option<Price>,
    orders: VecDeque<Order>,
}

impl PriceLevel {
    pub fn new(price: Price) -> Self {
        Self {
            price: Some(price),
            orders: VecDeque::new(),
        }
    }

    pub fn price(&self) -> Option<Price> {
        self.price
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Appends a resting order to the back of the FIFO.
    pub fn push_back(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    /// The order at the head of the FIFO, i.e. the next one to match.
    pub fn front_mut(&mut self) -> Option<&mut Order> {
        self.orders.front_mut()
    }

    /// Removes the head of the FIFO (used once it is fully filled).
    pub fn pop_front(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    /// Removes a specific order by id, wherever it sits in the queue.
    /// O(k) in the number of orders at this level.
    pub fn remove(&mut self, id: Id) -> Option<Order> {
        let pos = self.orders.iter().position(|o| o.id == id)?;
        self.orders.remove(pos)
    }

    /// Sum of `remaining()` across every order at this level.
    pub fn total_remaining(&self) -> Qty {
        let sum = self
            .orders
            .iter()
            .map(|o| o.remaining().value())
            .fold(Qty::zero().value(), |acc, v| acc + v);
        Qty::new_unchecked(sum)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}
