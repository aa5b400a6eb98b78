//! Venue adapters
//!
//! Each adapter knows one venue's book endpoint, its symbol mapping and the
//! encoding its levels use. Adapters only fetch; normalization happens
//! afterwards so a bad payload can be attributed to its venue.

mod coinbase;
mod gemini;
mod http;
mod kraken;

pub use coinbase::CoinbaseAdapter;
pub use gemini::GeminiAdapter;
pub use http::HttpClient;
pub use kraken::KrakenAdapter;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use sweep_core::VenueId;

use crate::config::{SweepConfigFile, VenueConfig, VenueKind};
use crate::error::GatewayError;
use crate::messages::RawBookSnapshot;
use crate::normalizer::QuoteEncoding;

/// A source of raw order book snapshots for one venue
#[async_trait]
pub trait VenueAdapter: Send + Sync {
    /// Venue every level from this adapter is tagged with
    fn venue(&self) -> &VenueId;

    /// How this venue encodes book levels
    fn encoding(&self) -> QuoteEncoding;

    /// Upper bound on a single fetch
    fn timeout(&self) -> Duration;

    /// Fetch the current book for a product (e.g. "BTCUSD")
    async fn fetch_book(&self, product: &str) -> Result<RawBookSnapshot, GatewayError>;
}

/// Build adapters for the venues selected by `config`, in config order
pub fn build_adapters(
    config: &SweepConfigFile,
    include_optional: bool,
) -> Result<Vec<Arc<dyn VenueAdapter>>, GatewayError> {
    config
        .enabled_venues(include_optional)
        .into_iter()
        .map(|venue| build_adapter(venue, config))
        .collect()
}

fn build_adapter(
    venue: &VenueConfig,
    config: &SweepConfigFile,
) -> Result<Arc<dyn VenueAdapter>, GatewayError> {
    let timeout = venue.timeout(&config.global);
    let client = HttpClient::new(
        venue.venue_id(),
        &venue.rest_url,
        timeout,
        &config.global.user_agent,
    )?;

    let adapter: Arc<dyn VenueAdapter> = match venue.kind {
        VenueKind::Coinbase => Arc::new(CoinbaseAdapter::new(venue.clone(), client, timeout)),
        VenueKind::Gemini => Arc::new(GeminiAdapter::new(venue.clone(), client, timeout)),
        VenueKind::Kraken => Arc::new(KrakenAdapter::new(venue.clone(), client, timeout)),
    };
    Ok(adapter)
}

/// Native symbol for `product` or an UnsupportedProduct error
fn native_symbol<'a>(venue: &'a VenueConfig, product: &str) -> Result<&'a str, GatewayError> {
    venue
        .native_symbol(product)
        .ok_or_else(|| GatewayError::UnsupportedProduct {
            venue: venue.venue_id(),
            product: product.to_string(),
        })
}

/// Configured query parameters as borrowed pairs
fn query_pairs(venue: &VenueConfig) -> Vec<(&str, &str)> {
    venue
        .query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_default_config;

    #[test]
    fn test_build_adapters_follows_config() {
        let config = load_default_config().unwrap();

        let adapters = build_adapters(&config, false).unwrap();
        let venues: Vec<_> = adapters.iter().map(|a| a.venue().clone()).collect();
        assert_eq!(venues, vec![VenueId::gemini(), VenueId::coinbase()]);
        assert_eq!(adapters[0].encoding(), QuoteEncoding::Record);
        assert_eq!(adapters[1].encoding(), QuoteEncoding::List);
        assert_eq!(adapters[0].timeout(), Duration::from_millis(5000));

        let adapters = build_adapters(&config, true).unwrap();
        assert_eq!(adapters.len(), 3);
        assert_eq!(adapters[2].venue(), &VenueId::kraken());
        assert_eq!(adapters[2].encoding(), QuoteEncoding::List);
    }

    #[test]
    fn test_unsupported_product() {
        let config = load_default_config().unwrap();
        let gemini = config.get_venue("gemini").unwrap();

        let err = native_symbol(gemini, "DOGEUSD").unwrap_err();
        assert!(matches!(
            err,
            GatewayError::UnsupportedProduct { ref product, .. } if product == "DOGEUSD"
        ));
        assert_eq!(err.venue(), Some(&VenueId::gemini()));
    }
}
