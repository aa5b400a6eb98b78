use async_trait::async_trait;
use std::time::Duration;
use sweep_core::VenueId;

use super::{HttpClient, VenueAdapter, native_symbol, query_pairs};
use crate::config::VenueConfig;
use crate::error::GatewayError;
use crate::messages::RawBookSnapshot;
use crate::normalizer::QuoteEncoding;

/// Gemini public book
///
/// `GET /v1/book/{symbol}`, levels are `{"price", "amount", "timestamp"}` records.
pub struct GeminiAdapter {
    venue: VenueId,
    config: VenueConfig,
    client: HttpClient,
    timeout: Duration,
}

impl GeminiAdapter {
    pub fn new(config: VenueConfig, client: HttpClient, timeout: Duration) -> Self {
        GeminiAdapter {
            venue: config.venue_id(),
            config,
            client,
            timeout,
        }
    }

    pub fn book_path(symbol: &str) -> String {
        format!("v1/book/{}", symbol)
    }
}

#[async_trait]
impl VenueAdapter for GeminiAdapter {
    fn venue(&self) -> &VenueId {
        &self.venue
    }

    fn encoding(&self) -> QuoteEncoding {
        QuoteEncoding::Record
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
