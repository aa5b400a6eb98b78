use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::side::Side;
use super::venue::VenueId;
use crate::values::{Price, Quantity};

/// One slice of a market order taken from a single price level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub venue: VenueId,
    pub price: Price,
    pub quantity: Quantity,
}

impl Fill {
    /// `price * quantity`, `None` on overflow
    pub fn cost(&self) -> Option<Price> {
        self.price.checked_mul(self.quantity)
    }
}

/// Accumulated fills against one venue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFill {
    /// Total quantity taken from the venue
    pub filled_quantity: Quantity,
    /// Price of the most recent fill from the venue (not an average)
    pub last_price: Price,
}

/// Per-venue fill attribution for one walk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFillBreakdown {
    venues: BTreeMap<VenueId, VenueFill>,
}

impl VenueFillBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fill to its venue's running totals
    pub fn record(&mut self, fill: &Fill) {
        let entry = self.venues.entry(fill.venue.clone()).or_default();
        entry.filled_quantity += fill.quantity;
        entry.last_price = fill.price;
    }

    pub fn get(&self, venue: &VenueId) -> Option<&VenueFill> {
        self.venues.get(venue)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VenueId, &VenueFill)> {
        self.venues.iter()
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    pub fn total_filled(&self) -> Quantity {
        self.venues.values().map(|v| v.filled_quantity).sum()
    }
}

impl FromIterator<Fill> for VenueFillBreakdown {
    fn from_iter<I: IntoIterator<Item = Fill>>(iter: I) -> Self {
        let mut breakdown = Self::new();
        for fill in iter {
            breakdown.record(&fill);
        }
        breakdown
    }
}

/// Outcome of simulating one market order against a ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Side of the simulated order
    pub side: Side,
    /// Quantity the caller asked for
    pub target_quantity: Quantity,
    /// Total cost, rounded once to the configured scale
    pub total_cost: Price,
    /// Portion of the target the ladder could not satisfy
    pub remaining_quantity: Quantity,
    /// Fills in the order they were taken
    pub fills: Vec<Fill>,
    /// Fills attributed to each venue
    pub breakdown: VenueFillBreakdown,
}

impl ExecutionResult {
    pub fn filled_quantity(&self) -> Quantity {
        self.target_quantity - self.remaining_quantity
    }

    pub fn is_fully_filled(&self) -> bool {
        self.remaining_quantity.is_zero()
    }

    /// Exact (unrounded) cost of all fills, `None` on overflow
    pub fn exact_cost(&self) -> Option<Price> {
        self.fills
            .iter()
            .try_fold(Price::ZERO, |total, fill| total.checked_add(fill.cost()?))
    }

    /// Volume-weighted average fill price, if anything was filled
    pub fn average_price(&self) -> Option<Price> {
        let filled = self.filled_quantity();
        if filled.is_zero() {
            return None;
        }
        self.exact_cost()?.checked_div(filled)
    }
}
