use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use sweep_core::VenueId;

use super::{HttpClient, VenueAdapter, native_symbol, query_pairs};
use crate::config::VenueConfig;
use crate::error::GatewayError;
use crate::messages::RawBookSnapshot;
use crate::normalizer::QuoteEncoding;

const DEPTH_PATH: &str = "0/public/Depth";

/// Kraken public depth
///
/// `GET /0/public/Depth?pair={symbol}`. The book sits under
/// `result.{key}` where the key is Kraken's own pair name (`XBTUSD` comes
/// back as `XXBTZUSD`). Levels are `[price, volume, timestamp]`.
pub struct KrakenAdapter {
    venue: VenueId,
    config: VenueConfig,
    client: HttpClient,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct DepthResponse {
    #[serde(default)]
    error: Vec<String>,
    #[serde(default)]
    result: BTreeMap<String, RawBookSnapshot>,
}

impl KrakenAdapter {
    pub fn new(config: VenueConfig, client: HttpClient, timeout: Duration) -> Self {
        KrakenAdapter {
            venue: config.venue_id(),
            config,
            client,
            timeout,
        }
    }

    /// Pull the book for `symbol` out of a depth response
    fn extract_book(
        &self,
        mut response: DepthResponse,
        symbol: &str,
    ) -> Result<RawBookSnapshot, GatewayError> {
        if !response.error.is_empty() {
            return Err(GatewayError::Api {
                venue: self.venue.clone(),
                status: 200,
                message: response.error.join("; "),
            });
        }

        let key = self.config.result_key(symbol).unwrap_or(symbol);
        if let Some(book) = response.result.remove(key) {
            return Ok(book);
        }

        // Unknown key mapping: a single returned pair is unambiguous
        if response.result.len() == 1
            && let Some((_, book)) = response.result.pop_first()
        {
            return Ok(book);
        }

        Err(GatewayError::Parse {
            venue: self.venue.clone(),
            message: format!("no book for {} in depth result", key),
        })
    }
}

#[async_trait]
impl VenueAdapter for KrakenAdapter {
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
        let mut query = vec![("pair", symbol)];
        query.extend(query_pairs(&self.config));

        let response: DepthResponse = self.client.get(DEPTH_PATH, &query).await?;
        self.extract_book(response, symbol)
    }
}
