//! Error types for the runner crate

use sweep_core::VenueId;
use sweep_gateway::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Unsupported product {product} submitted, please select a supported product.")]
    UnsupportedProduct { product: String },

    #[error("No venues selected")]
    NoVenues,

    #[error("All {failed} venues failed, nothing to price against")]
    AllVenuesFailed { failed: usize },

    #[error("Quote aborted, {venue} failed: {source}")]
    VenueFailed {
        venue: VenueId,
        #[source]
        source: GatewayError,
    },

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Execution(#[from] sweep_execution::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
