//! Sweep Gateway
//!
//! Gateway layer between venue REST APIs and the execution engine. Provides:
//! - Venue adapters (Coinbase, Gemini, Kraken) that fetch raw book snapshots
//! - Product symbol mapping and venue configuration
//! - Concurrent snapshot fetching with per-venue timeouts
//! - The quote normalizer that turns raw snapshots into tagged price levels
//!
//! ## Architecture
//!
//! ```text
//! External World (Coinbase, Gemini, Kraken)
//!         │ HTTP
//!    ┌────▼─────┐
//!    │ Adapters │  one per enabled venue, fetched concurrently
//!    └────┬─────┘
//!         │ RawBookSnapshot (list-form or record-form)
//!    ┌────▼───────┐
//!    │ Normalizer │  encoding picked by venue kind
//!    └────┬───────┘
//!         │ VenueBook
//!    ┌────▼─────┐
//!    │Execution │
//!    └──────────┘
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod fetch;
pub mod messages;
pub mod normalizer;

// Re-export commonly used types
pub use adapters::{VenueAdapter, build_adapters};
pub use config::{
    ConfigError, FailurePolicy, GlobalConfig, SweepConfigFile, VenueConfig, VenueKind,
    load_config, load_config_from_str, load_default_config,
};
pub use error::{GatewayError, QuoteError};
pub use fetch::{VenueFetch, fetch_snapshots};
pub use messages::{RawBookSnapshot, VenueSnapshot};
pub use normalizer::{QuoteEncoding, normalize};
