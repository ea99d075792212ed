//! The order book core: types, the matching state machine, and
//! persistence/event plumbing for a single symbol.

pub mod book;
pub mod error;
pub mod events;
pub mod fees;
pub mod matching;
pub mod order;
pub mod price_level;
pub mod sequencer;
pub mod serialization;
pub mod snapshot;
pub mod trade;
pub mod trigger;
pub mod validation;

pub use book::Book;
pub use error::BookError;
pub use events::{BboEvent, L2Update, TradeEvent};
pub use fees::FeeSchedule;
pub use matching::{MatchOutcome, process_order};
pub use order::{Id, Order, OrderType, Side};
pub use price_level::PriceLevel;
pub use snapshot::{OrderBookSnapshot, OrderBookSnapshotPackage, PriceLevelSnapshot};
pub use trade::Trade;
