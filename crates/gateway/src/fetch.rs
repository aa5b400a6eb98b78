//! Concurrent snapshot fetching
//!
//! Every venue is fetched in its own task under its own timeout. A slow or
//! failing venue never holds up or fails the others; what to do with a
//! failure is left to the caller.

use log::{debug, warn};
use std::sync::Arc;
use sweep_core::VenueId;
use tokio::task::JoinSet;

use crate::adapters::VenueAdapter;
use crate::error::GatewayError;
use crate::messages::VenueSnapshot;

/// Outcome of fetching one venue
#[derive(Debug)]
pub struct VenueFetch {
    pub venue: VenueId,
    pub result: Result<VenueSnapshot, GatewayError>,
}

/// Fetch `product` from every adapter concurrently.
///
/// Results come back in adapter order regardless of completion order.
pub async fn fetch_snapshots(adapters: &[Arc<dyn VenueAdapter>], product: &str) -> Vec<VenueFetch> {
    let mut tasks = JoinSet::new();

    for (index, adapter) in adapters.iter().enumerate() {
        let adapter = Arc::clone(adapter);
        let product = product.to_string();
        tasks.spawn(async move { (index, fetch_one(adapter.as_ref(), &product).await) });
    }

    let mut slots: Vec<Option<VenueFetch>> = adapters.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, fetch)) => slots[index] = Some(fetch),
            Err(e) => warn!("[FETCH] venue task did not complete: {}", e),
        }
    }

    slots
        .into_iter()
        .zip(adapters)
        .map(|(slot, adapter)| {
            slot.unwrap_or_else(|| VenueFetch {
                venue: adapter.venue().clone(),
                result: Err(GatewayError::Task {
                    venue: adapter.venue().clone(),
                    message: "fetch task aborted".to_string(),
                }),
            })
        })
        .collect()
}

async fn fetch_one(adapter: &dyn VenueAdapter, product: &str) -> VenueFetch {
    let venue = adapter.venue().clone();
    let timeout = adapter.timeout();

    let result = match tokio::time::timeout(timeout, adapter.fetch_book(product)).await {
        Ok(Ok(raw)) => {
            debug!(
                "[FETCH] {} {}: {} bids, {} asks",
                venue,
                product,
                raw.bids.len(),
                raw.asks.len()
            );
            Ok(VenueSnapshot::new(venue.clone(), adapter.encoding(), raw))
        }
        Ok(Err(e)) => Err(e),
        Err(_) => Err(GatewayError::Timeout {
            venue: venue.clone(),
            timeout_ms: timeout.as_millis() as u64,
        }),
    };

    VenueFetch { venue, result }
}
