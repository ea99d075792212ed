//! The engine facade: one book per symbol, created lazily, each
//! serialized behind its own `tokio::sync::Mutex` so concurrent callers on
//! different symbols never contend, while callers on the same symbol are
//! strictly ordered — the source of every event's per-symbol sequence
//! number and the reason match/cancel results are never interleaved
//! mid-publish.

use crate::config::{BookConfig, EngineConfig};
use crate::decimal::Price;
use crate::error::EngineError;
use crate::orderbook::book::Book;
use crate::orderbook::events::{BboEvent, TradeEvent};
use crate::orderbook::order::{Id, Order};
use crate::orderbook::snapshot::OrderBookSnapshotPackage;
use crate::orderbook::validation::validate_submission;
use crate::orderbook::{MatchOutcome, process_order};
use crate::utils::current_time_millis;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Everything a successful submission produced, in wire-ready form.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub order_id: Id,
    pub trades: Vec<TradeEvent>,
    pub bbo: Option<BboEvent>,
    pub resting: bool,
    pub activated_order_ids: Vec<Id>,
}

/// Multi-symbol order book engine. Each symbol's [`Book`] is created on
/// first use (spec: lazy per-symbol creation) and lives behind its own
/// mutex, so two symbols never block each other.
pub struct Engine {
    books: DashMap<String, Arc<Mutex<Book>>>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            books: DashMap::new(),
            config,
        }
    }

    /// Registers a symbol with an explicit configuration, replacing the
    /// engine-wide default for that symbol. No-op for a symbol that
    /// already has a book (use the existing book's config instead).
    pub fn add_symbol(&self, symbol: impl Into<String>, config: BookConfig) {
        let symbol = symbol.into();
        self.books
            .entry(symbol.clone())
            .or_insert_with(|| Arc::new(Mutex::new(Book::new(symbol, config))));
    }

    fn book_handle(&self, symbol: &str) -> Arc<Mutex<Book>> {
        self.books
            .entry(symbol.to_string())
            .or_insert_with(|| {
                Arc::new(Mutex::new(Book::new(
                    symbol.to_string(),
                    self.config.default_book_config.clone(),
                )))
            })
            .clone()
    }

    /// Accepts an order, running it to completion (matching, resting, and
    /// any trigger cascade) against the serialized per-symbol book.
    pub async fn submit(&self, mut order: Order) -> Result<SubmitOutcome, EngineError> {
        let symbol = order.symbol.clone();
        let handle = self.book_handle(&symbol);
        let mut book = handle.lock().await;

        validate_submission(&order, book.config())?;

        order.sequence = book.next_order_sequence();
        order.timestamp = current_time_millis();
        let order_id = order.id;
        let best_before = (book.best_bid(), book.best_ask());
        let outcome: MatchOutcome = process_order(&mut book, order)?;

        let trades = outcome
            .trades
            .iter()
            .map(|t| TradeEvent {
                sequence: book.next_event_sequence(),
                symbol: t.symbol.clone(),
                price: t.price,
                quantity: t.quantity,
                maker_order_id: t.maker_order_id,
                taker_order_id: t.taker_order_id,
                aggressor_side: t.aggressor_side,
                timestamp: t.timestamp,
            })
            .collect::<Vec<_>>();

        let best_after = (book.best_bid(), book.best_ask());
        let bbo = (best_before != best_after).then(|| self.bbo_event(&mut book, best_after));

        info!(symbol = %symbol, order_id = %order_id, trades = trades.len(), "order processed");

        Ok(SubmitOutcome {
            order_id,
            trades,
            bbo,
            resting: outcome.resting_order_id.is_some(),
            activated_order_ids: outcome.activated_order_ids,
        })
    }

    /// Cancels a resting or inert trigger order.
    pub async fn cancel(&self, symbol: &str, order_id: Id) -> Result<(), EngineError> {
        let handle = self.book_handle(symbol);
        let mut book = handle.lock().await;
        book.cancel(order_id)?;
        Ok(())
    }

    /// The current best bid/offer for a symbol, or `None` for both sides
    /// if the symbol has no registered book yet.
    pub async fn bbo(&self, symbol: &str) -> (Option<Price>, Option<Price>) {
        let Some(entry) = self.books.get(symbol) else {
            return (None, None);
        };
        let handle = entry.clone();
        drop(entry);
        let book = handle.lock().await;
        (book.best_bid(), book.best_ask())
    }

    /// A checksummed, versioned snapshot of a symbol's book.
    pub async fn snapshot(&self, symbol: &str) -> Result<OrderBookSnapshotPackage, EngineError> {
        let handle = self
            .books
            .get(symbol)
            .map(|e| e.clone())
            .ok_or_else(|| EngineError::UnknownSymbol(symbol.to_string()))?;
        let book = handle.lock().await;
        let snapshot = book.snapshot(current_time_millis());
        Ok(OrderBookSnapshotPackage::new(snapshot)?)
    }

    /// Restores a symbol's book from a validated snapshot package,
    /// replacing whatever book (if any) is currently registered.
    pub async fn restore(&self, package: OrderBookSnapshotPackage) -> Result<(), EngineError> {
        let snapshot = package.into_snapshot()?;
        let symbol = snapshot.symbol.clone();
        let book = Book::restore(snapshot);
        self.books.insert(symbol, Arc::new(Mutex::new(book)));
        Ok(())
    }

    fn bbo_event(&self, book: &mut Book, (bid, ask): (Option<Price>, Option<Price>)) -> BboEvent {
        let (bids, asks) = book.top_n(1);
        BboEvent {
            sequence: book.next_event_sequence(),
            best_bid: bid,
            best_bid_qty: bids.first().map(|(_, q)| *q),
            best_ask: ask,
            best_ask_qty: asks.first().map(|(_, q)| *q),
            timestamp: current_time_millis(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Qty;
    use crate::orderbook::order::{OrderType, Side};
    use rust_decimal_macros::dec;

    fn limit(symbol: &str, side: Side, price: rust_decimal::Decimal, qty: rust_decimal::Decimal) -> Order {
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

    #[tokio::test]
    async fn submits_and_matches_across_calls() {
        let engine = Engine::default();
        engine
            .submit(limit("BTC/USD", Side::Sell, dec!(100), dec!(5)))
            .await
            .unwrap();

        let outcome = engine
            .submit(limit("BTC/USD", Side::Buy, dec!(100), dec!(2)))
            .await
            .unwrap();

        assert_eq!(outcome.trades.len(), 1);
        let (bid, ask) = engine.bbo("BTC/USD").await;
        assert!(bid.is_none());
        assert_eq!(ask.unwrap().value(), dec!(100));
    }

    #[tokio::test]
    async fn unknown_symbol_snapshot_errors() {
        let engine = Engine::default();
        assert!(matches!(
            engine.snapshot("NOPE").await,
            Err(EngineError::UnknownSymbol(_))
        ));
    }

    #[tokio::test]
    async fn cancel_removes_resting_order() {
        let engine = Engine::default();
        let order = limit("BTC/USD", Side::Buy, dec!(99), dec!(1));
        let id = order.id;
        engine.submit(order).await.unwrap();
        engine.cancel("BTC/USD", id).await.unwrap();
        let (bid, _) = engine.bbo("BTC/USD").await;
        assert!(bid.is_none());
    }
}
