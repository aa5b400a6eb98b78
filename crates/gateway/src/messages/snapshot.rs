//! Raw order book snapshot messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sweep_core::{VenueBook, VenueId};

use crate::error::QuoteError;
use crate::normalizer::QuoteEncoding;

/// A venue's book as returned by its REST API
///
/// Entries are either `[price, quantity, ...]` lists or
/// `{"price": .., "amount": .., ...}` records. Other top-level fields
/// (sequence numbers, timestamps) are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBookSnapshot {
    pub bids: Vec<Value>,
    pub asks: Vec<Value>,
}

/// A raw snapshot tagged with where it came from and how to read it
#[derive(Debug, Clone, PartialEq)]
pub struct VenueSnapshot {
    pub venue: VenueId,
    pub encoding: QuoteEncoding,
    pub raw: RawBookSnapshot,
    pub fetched_at: DateTime<Utc>,
}

impl VenueSnapshot {
    pub fn new(venue: VenueId, encoding: QuoteEncoding, raw: RawBookSnapshot) -> Self {
        Self {
            venue,
            encoding,
            raw,
            fetched_at: Utc::now(),
        }
    }

    /// Normalize with this venue's encoding
    pub fn normalize(&self) -> Result<VenueBook, QuoteError> {
        self.encoding.normalize(&self.raw, &self.venue)
    }
}
