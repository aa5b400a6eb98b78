//! Quote pipeline
//!
//! One quote is a single pass: fetch every venue concurrently, normalize each
//! snapshot with its venue's encoding, aggregate what survived and walk the
//! combined book once per side. Nothing is kept between quotes.

use log::{info, warn};
use std::collections::BTreeSet;
use std::sync::Arc;
use sweep_core::{ExecutionResult, Quantity, Side, VenueBook, VenueId};
use sweep_execution::{MarketOrderSimulator, aggregate};
use sweep_gateway::{
    FailurePolicy, GatewayError, SweepConfigFile, VenueAdapter, build_adapters, fetch_snapshots,
};

use crate::error::{Result, RunnerError};

/// A venue left out of a quote and why
#[derive(Debug)]
pub struct VenueFailure {
    pub venue: VenueId,
    pub error: GatewayError,
}

/// Buy and sell estimates for one product and quantity
#[derive(Debug)]
pub struct MarketQuote {
    /// Product as quoted (upper case)
    pub product: String,
    /// Market buy swept across the combined asks
    pub buy: ExecutionResult,
    /// Market sell swept across the combined bids
    pub sell: ExecutionResult,
    /// Venues whose books were priced against, in adapter order
    pub venues_used: Vec<VenueId>,
    /// Venues skipped under `FailurePolicy::SkipVenue`
    pub venues_failed: Vec<VenueFailure>,
}

/// Fetch -> normalize -> aggregate -> simulate
pub struct QuotePipeline {
    adapters: Vec<Arc<dyn VenueAdapter>>,
    products: BTreeSet<String>,
    policy: FailurePolicy,
    simulator: MarketOrderSimulator,
}

impl QuotePipeline {
    /// `products` lists what every adapter can map to a native symbol
    pub fn new(
        adapters: Vec<Arc<dyn VenueAdapter>>,
        products: impl IntoIterator<Item = String>,
        policy: FailurePolicy,
        simulator: MarketOrderSimulator,
    ) -> Self {
        Self {
            adapters,
            products: products.into_iter().map(|p| p.to_uppercase()).collect(),
            policy,
            simulator,
        }
    }

    /// Build from venue configuration; optional venues join only when asked
    pub fn from_config(
        config: &SweepConfigFile,
        include_optional: bool,
        simulator: MarketOrderSimulator,
    ) -> Result<Self> {
        let adapters = build_adapters(config, include_optional)?;
        let products = config.supported_products(include_optional);
        Ok(Self::new(
            adapters,
            products,
            config.global.failure_policy,
            simulator,
        ))
    }

    /// Venues this pipeline queries, in order
    pub fn venues(&self) -> Vec<VenueId> {
        self.adapters.iter().map(|a| a.venue().clone()).collect()
    }

    pub fn supports(&self, product: &str) -> bool {
        self.products.contains(&product.to_uppercase())
    }

    pub fn products(&self) -> &BTreeSet<String> {
        &self.products
    }

    /// Price a market buy and a market sell of `quantity` units of `product`.
    ///
    /// Quantity and product are checked before any venue is contacted.
    pub async fn quote(&self, product: &str, quantity: Quantity) -> Result<MarketQuote> {
        if quantity <= Quantity::ZERO {
            return Err(sweep_execution::Error::InvalidQuantity { quantity }.into());
        }
        if !self.supports(product) {
            return Err(RunnerError::UnsupportedProduct {
                product: product.to_string(),
            });
        }
        if self.adapters.is_empty() {
            return Err(RunnerError::NoVenues);
        }

        let product = product.to_uppercase();
        let (books, venues_failed) = self.collect_books(&product).await?;
        if books.is_empty() {
            return Err(RunnerError::AllVenuesFailed {
                failed: venues_failed.len(),
            });
        }
        let venues_used: Vec<VenueId> = books.iter().map(|b| b.venue.clone()).collect();

        let book = aggregate(books);
        let buy = self
            .simulator
            .simulate(quantity, book.ladder_for(Side::Buy), Side::Buy)?;
        let sell = self
            .simulator
            .simulate(quantity, book.ladder_for(Side::Sell), Side::Sell)?;

        info!(
            "[QUOTE] {} {} from {} venue(s): buy {} sell {}",
            quantity,
            product,
            venues_used.len(),
            buy.total_cost,
            sell.total_cost
        );

        Ok(MarketQuote {
            product,
            buy,
            sell,
            venues_used,
            venues_failed,
        })
    }

    /// Fetch and normalize every venue, applying the failure policy
    async fn collect_books(&self, product: &str) -> Result<(Vec<VenueBook>, Vec<VenueFailure>)> {
        let mut books = Vec::with_capacity(self.adapters.len());
        let mut failures = Vec::new();

        for fetched in fetch_snapshots(&self.adapters, product).await {
            let normalized = fetched
                .result
                .and_then(|snapshot| snapshot.normalize().map_err(GatewayError::from));

            match normalized {
                Ok(book) => books.push(book),
                Err(error) => match self.policy {
                    FailurePolicy::SkipVenue => {
                        warn!("[QUOTE] skipping {}: {}", fetched.venue, error);
                        failures.push(VenueFailure {
                            venue: fetched.venue,
                            error,
                        });
                    }
                    FailurePolicy::Abort => {
                        return Err(RunnerError::VenueFailed {
                            venue: fetched.venue,
                            source: error,
                        });
                    }
                },
            }
        }

        Ok((books, failures))
    }
}
