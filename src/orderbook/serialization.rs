//! Pluggable wire-format serialization for published market data events.
//!
//! - [`JsonEventSerializer`] — human-readable JSON (always available)
//! - `BincodeEventSerializer` — compact binary format (requires the
//!   `bincode` feature)
//!
//! Event transports accept any `Arc<dyn EventSerializer>` so the wire
//! format can be chosen at construction time without changing the rest of
//! the publishing path.

use crate::orderbook::events::{BboEvent, L2Update, TradeEvent};
use thiserror::Error;

/// Errors raised while serializing or deserializing an event.
#[derive(Debug, Error)]
#[error("event serialization error: {message}")]
pub struct SerializationError {
    pub message: String,
}

/// A pluggable serializer for the three published event kinds. The format
/// (JSON, Bincode, ...) is an implementation detail so publishers and
/// consumers can negotiate the most efficient wire format.
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async task boundaries via `Arc<dyn EventSerializer>`.
pub trait EventSerializer: Send + Sync + std::fmt::Debug {
    fn serialize_trade(&self, event: &TradeEvent) -> Result<Vec<u8>, SerializationError>;
    fn serialize_bbo(&self, event: &BboEvent) -> Result<Vec<u8>, SerializationError>;
    fn serialize_l2(&self, event: &L2Update) -> Result<Vec<u8>, SerializationError>;

    fn deserialize_trade(&self, data: &[u8]) -> Result<TradeEvent, SerializationError>;
    fn deserialize_bbo(&self, data: &[u8]) -> Result<BboEvent, SerializationError>;
    fn deserialize_l2(&self, data: &[u8]) -> Result<L2Update, SerializationError>;

    /// MIME-like content type identifier, e.g. `"application/json"`.
    fn content_type(&self) -> &'static str;
}

// ─── JSON ───────────────────────────────────────────────────────────────────

/// JSON event serializer using `serde_json`. The default: always
/// available, human-readable, no feature gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEventSerializer;

impl JsonEventSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl EventSerializer for JsonEventSerializer {
    fn serialize_trade(&self, event: &TradeEvent) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(event).map_err(|e| SerializationError { message: e.to_string() })
    }

    fn serialize_bbo(&self, event: &BboEvent) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(event).map_err(|e| SerializationError { message: e.to_string() })
    }

    fn serialize_l2(&self, event: &L2Update) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(event).map_err(|e| SerializationError { message: e.to_string() })
    }

    fn deserialize_trade(&self, data: &[u8]) -> Result<TradeEvent, SerializationError> {
        serde_json::from_slice(data).map_err(|e| SerializationError { message: e.to_string() })
    }

    fn deserialize_bbo(&self, data: &[u8]) -> Result<BboEvent, SerializationError> {
        serde_json::from_slice(data).map_err(|e| SerializationError { message: e.to_string() })
    }

    fn deserialize_l2(&self, data: &[u8]) -> Result<L2Update, SerializationError> {
        serde_json::from_slice(data).map_err(|e| SerializationError { message: e.to_string() })
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

// ─── Bincode ────────────────────────────────────────────────────────────────

/// Bincode event serializer for compact binary payloads. Requires the
/// `bincode` feature.
#[cfg(feature = "bincode")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeEventSerializer;

#[cfg(feature = "bincode")]
impl BincodeEventSerializer {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "bincode")]
impl EventSerializer for BincodeEventSerializer {
    fn serialize_trade(&self, event: &TradeEvent) -> Result<Vec<u8>, SerializationError> {
        bincode::serde::encode_to_vec(event, bincode::config::standard())
            .map_err(|e| SerializationError { message: e.to_string() })
    }

    fn serialize_bbo(&self, event: &BboEvent) -> Result<Vec<u8>, SerializationError> {
        bincode::serde::encode_to_vec(event, bincode::config::standard())
            .map_err(|e| SerializationError { message: e.to_string() })
    }

    fn serialize_l2(&self, event: &L2Update) -> Result<Vec<u8>, SerializationError> {
        bincode::serde::encode_to_vec(event, bincode::config::standard())
            .map_err(|e| SerializationError { message: e.to_string() })
    }

    fn deserialize_trade(&self, data: &[u8]) -> Result<TradeEvent, SerializationError> {
        bincode::serde::decode_from_slice(data, bincode::config::standard())
            .map(|(value, _)| value)
            .map_err(|e| SerializationError { message: e.to_string() })
    }

    fn deserialize_bbo(&self, data: &[u8]) -> Result<BboEvent, SerializationError> {
        bincode::serde::decode_from_slice(data, bincode::config::standard())
            .map(|(value, _)| value)
            .map_err(|e| SerializationError { message: e.to_string() })
    }

    fn deserialize_l2(&self, data: &[u8]) -> Result<L2Update, SerializationError> {
        bincode::serde::decode_from_slice(data, bincode::config::standard())
            .map(|(value, _)| value)
            .map_err(|e| SerializationError { message: e.to_string() })
    }

    fn content_type(&self) -> &'static str {
        "application/x-bincode"
    }
}
