//! Convenient re-exports of the most commonly used types.
//!
//! ```
//! use clob_engine::prelude::*;
//! ```

pub use crate::config::{BookConfig, EngineConfig};
pub use crate::decimal::{DecimalError, Price, Qty};
pub use crate::engine::{Engine, SubmitOutcome};
pub use crate::error::EngineError;
pub use crate::orderbook::book::Book;
pub use crate::orderbook::error::BookError;
pub use crate::orderbook::events::{BboEvent, L2Update, TradeEvent};
pub use crate::orderbook::fees::FeeSchedule;
pub use crate::orderbook::matching::{MatchOutcome, process_order};
pub use crate::orderbook::order::{Id, Order, OrderType, Side};
pub use crate::orderbook::price_level::PriceLevel;
pub use crate::orderbook::sequencer::{
    Journal, JournalEntry, JournalError, JournalReadIter, SequencerCommand, SequencerEvent,
    SequencerResult,
};
pub use crate::orderbook::serialization::{EventSerializer, JsonEventSerializer, SerializationError};
#[cfg(feature = "bincode")]
pub use crate::orderbook::serialization::BincodeEventSerializer;
#[cfg(feature = "journal")]
pub use crate::orderbook::sequencer::FileJournal;
pub use crate::orderbook::snapshot::{OrderBookSnapshot, OrderBookSnapshotPackage, PriceLevelSnapshot};
pub use crate::orderbook::trade::Trade;
