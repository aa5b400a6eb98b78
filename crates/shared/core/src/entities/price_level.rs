use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::venue::VenueId;
use crate::values::{Price, Quantity};

/// Rejected price level construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("price must be positive, got {0}")]
    NonPositivePrice(Price),

    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(Quantity),
}

/// A single point of liquidity quoted by one venue
///
/// Price and quantity are always strictly positive. Fields are private so a
/// level cannot be altered once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    venue: VenueId,
    price: Price,
    quantity: Quantity,
}

impl PriceLevel {
    pub fn new(venue: VenueId, price: Price, quantity: Quantity) -> Result<Self, LevelError> {
        if price <= Price::ZERO {
            return Err(LevelError::NonPositivePrice(price));
        }
        if quantity <= Quantity::ZERO {
            return Err(LevelError::NonPositiveQuantity(quantity));
        }
        Ok(Self {
            venue,
            price,
            quantity,
        })
    }

    pub fn venue(&self) -> &VenueId {
        &self.venue
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}
