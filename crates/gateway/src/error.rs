//! Error types for the gateway crate

use sweep_core::{BookSide, VenueId};
use thiserror::Error;

use crate::config::ConfigError;

/// A raw snapshot entry that could not become a price level
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Malformed quote from {venue}: {side}[{index}].{field} = {value} ({reason})")]
    MalformedQuote {
        venue: VenueId,
        side: BookSide,
        index: usize,
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl QuoteError {
    pub fn venue(&self) -> &VenueId {
        match self {
            QuoteError::MalformedQuote { venue, .. } => venue,
        }
    }
}

/// Gateway-level errors (venue operations)
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{venue}: HTTP request failed: {source}")]
    Http {
        venue: VenueId,
        #[source]
        source: reqwest::Error,
    },

    #[error("{venue}: API error {status}: {message}")]
    Api {
        venue: VenueId,
        status: u16,
        message: String,
    },

    #[error("{venue}: failed to parse response: {message}")]
    Parse { venue: VenueId, message: String },

    #[error("{venue}: no response within {timeout_ms}ms")]
    Timeout { venue: VenueId, timeout_ms: u64 },

    #[error("{venue} does not list product {product}")]
    UnsupportedProduct { venue: VenueId, product: String },

    #[error("{venue}: fetch task failed: {message}")]
    Task { venue: VenueId, message: String },

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl GatewayError {
    /// Venue the error relates to, if any
    pub fn venue(&self) -> Option<&VenueId> {
        match self {
            GatewayError::Http { venue, .. }
            | GatewayError::Api { venue, .. }
            | GatewayError::Parse { venue, .. }
            | GatewayError::Timeout { venue, .. }
            | GatewayError::UnsupportedProduct { venue, .. }
            | GatewayError::Task { venue, .. } => Some(venue),
            GatewayError::Quote(e) => Some(e.venue()),
            GatewayError::Config(_) => None,
        }
    }
}
