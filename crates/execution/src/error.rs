//! Execution errors

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid quantity: {quantity} (must be greater than zero)")]
    InvalidQuantity { quantity: Decimal },

    #[error("Invalid cost scale: {scale} (at most {max} decimal places)")]
    InvalidCostScale { scale: u32, max: u32 },

    #[error("Arithmetic overflow while costing {quantity} @ {price}")]
    Overflow { price: Decimal, quantity: Decimal },
}

pub type Result<T> = std::result::Result<T, Error>;
