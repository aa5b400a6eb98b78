use async_trait::async_trait;
use std::time::Duration;
use sweep_core::VenueId;

use super::{HttpClient, VenueAdapter, native_symbol, query_pairs};
use crate::config::VenueConfig;
use crate::error::GatewayError;
use crate::messages::RawBookSnapshot;
use crate::normalizer::QuoteEncoding;

/// Coinbase Exchange public book
///
/// `GET /products/{symbol}/book`, levels are `[price, size, order_id]`.
pub struct CoinbaseAdapter {
    venue: VenueId,
    config: VenueConfig,
    client: HttpClient,
    timeout: Duration,
}

impl CoinbaseAdapter {
    pub fn new(config: VenueConfig, client: HttpClient, timeout: Duration) -> Self {
        CoinbaseAdapter {
            venue: config.venue_id(),
            config,
            client,
            timeout,
        }
    }

    pub fn book_path(symbol: &str) -> String {
        format!("products/{}/book", symbol)
    }
}

#[async_trait]
impl VenueAdapter for CoinbaseAdapter {
    fn venue(&self) -> &VenueId {
        &self.venue
    }

    fn encoding(&self) -> QuoteEncoding {
        QuoteEncoding::List
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn fetch_book(&self, product: &str) -> Result<RawBookSnapshot, GatewayError> {
        let symbol = native_symbol(&self.config, product)?;
        self.client
            .get(&Self::book_path(symbol), &query_pairs(&self.config))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_path() {
        assert_eq!(CoinbaseAdapter::book_path("BTC-USD"), "products/BTC-USD/book");
    }
}
