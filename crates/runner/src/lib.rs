//! Sweep Runner - Multi-Venue Market Order Quotes
//!
//! Ties the gateway and execution crates together:
//!
//! - **Pipeline**: fetch every venue, normalize, aggregate, simulate both sides
//! - **Report**: render a quote the way the `sweep` CLI prints it
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────┐   ┌──────────┐   ┌──────────┐
//!   │ Coinbase │   │  Gemini  │   │  Kraken  │  (optional)
//!   └────┬─────┘   └────┬─────┘   └────┬─────┘
//!        │ concurrent fetch, per-venue timeout
//!        └──────────────┼──────────────┘
//!                       ▼
//!              ┌─────────────────┐
//!              │   Normalizer    │  failure policy: skip venue / abort
//!              └────────┬────────┘
//!                       ▼
//!              ┌─────────────────┐
//!              │   Aggregator    │
//!              └────────┬────────┘
//!                 asks  │  bids
//!                       ▼
//!              ┌─────────────────┐
//!              │    Simulator    │  BUY walks asks, SELL walks bids
//!              └────────┬────────┘
//!                       ▼
//!                  MarketQuote
//! ```

pub mod error;
pub mod pipeline;
pub mod report;

// Re-export main types
pub use error::{Result, RunnerError};
pub use pipeline::{MarketQuote, QuotePipeline, VenueFailure};
pub use report::{render_quote, render_side};
