//! # clob-engine
//!
//! An in-memory, single-venue central limit order book matching engine
//! core: a per-symbol price-time-priority book and matching state
//! machine, fronted by a multi-symbol [`engine::Engine`] facade.
//!
//! ## Key properties
//!
//! - **Price-time priority**: within a price level, earlier-accepted
//!   orders fill first. Across levels, the best price always fills first.
//! - **Per-symbol serialization, not global locking**: each symbol's
//!   [`orderbook::book::Book`] lives behind its own `tokio::sync::Mutex`,
//!   so unrelated symbols never contend with each other.
//! - **Exact decimal arithmetic**: [`decimal::Price`]/[`decimal::Qty`]
//!   wrap `rust_decimal::Decimal` — no floating point anywhere on the
//!   matching path.
//! - **Seven order types**: `Market`, `Limit`, `Ioc`, `Fok`, `Stop`,
//!   `StopLimit`, `TakeProfit`, dispatched by closed `match`, never by
//!   trait objects or inheritance.
//! - **Self-describing snapshots**: versioned, checksummed book
//!   snapshots for warm restart, grounded on a SHA-256 payload digest.
//! - **Append-only journal** (behind the `journal` feature): CRC32-
//!   checked, memory-mapped event log for deterministic replay.
//!
//! ## Quick start
//!
//! ```no_run
//! use clob_engine::engine::Engine;
//! use clob_engine::config::EngineConfig;
//! use clob_engine::orderbook::order::{Id, Order, OrderType, Side};
//! use clob_engine::decimal::{Price, Qty};
//! use rust_decimal_macros::dec;
//!
//! # async fn run() {
//! let engine = Engine::new(EngineConfig::default());
//!
//! let order = Order {
//!     id: Id::new(),
//!     symbol: "BTC/USD".to_string(),
//!     side: Side::Buy,
//!     order_type: OrderType::Limit,
//!     quantity: Qty::new(dec!(1)).unwrap(),
//!     limit_price: Some(Price::new(dec!(50_000)).unwrap()),
//!     stop_price: None,
//!     sequence: 0,
//!     timestamp: 0,
//!     filled: Qty::zero(),
//! };
//!
//! let outcome = engine.submit(order).await.unwrap();
//! println!("trades: {}", outcome.trades.len());
//! # }
//! ```
//!
//! ## Status
//!
//! This crate implements the matching core and its ambient concerns
//! (config, errors, logging, persistence). It does not include a wire
//! protocol, a network listener, or a client SDK — those are
//! deliberately out of scope; see `DESIGN.md`.

pub mod config;
pub mod decimal;
pub mod engine;
pub mod error;
pub mod orderbook;
pub mod prelude;
mod utils;

pub use decimal::{DecimalError, Price, Qty};
pub use engine::{Engine, SubmitOutcome};
pub use error::EngineError;
