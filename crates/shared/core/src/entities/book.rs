use serde::{Deserialize, Serialize};

use super::price_level::PriceLevel;
use super::venue::VenueId;

/// Both sides of one venue's book after normalization
///
/// Levels keep the venue's own ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueBook {
    pub venue: VenueId,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
}

impl VenueBook {
    pub fn new(venue: VenueId, bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        Self { venue, bids, asks }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
