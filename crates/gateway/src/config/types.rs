use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use sweep_core::VenueId;

use crate::normalizer::QuoteEncoding;

/// Root configuration for the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfigFile {
    pub venues: Vec<VenueConfig>,
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Which REST API a venue speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueKind {
    Coinbase,
    Gemini,
    Kraken,
}

impl VenueKind {
    /// Level encoding used by this venue's book endpoint
    pub fn encoding(&self) -> QuoteEncoding {
        match self {
            VenueKind::Coinbase | VenueKind::Kraken => QuoteEncoding::List,
            VenueKind::Gemini => QuoteEncoding::Record,
        }
    }
}

/// Configuration for a single venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueConfig {
    /// Unique identifier (e.g., "coinbase", "kraken")
    pub id: String,
    /// Display name
    pub name: String,
    /// API flavour
    pub kind: VenueKind,
    /// Whether this venue may be used at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Optional venues are only queried when the caller asks for them
    #[serde(default)]
    pub optional: bool,
    /// REST API base URL
    pub rest_url: String,
    /// Per-request timeout, falls back to the global default
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Extra query parameters sent with every book request
    #[serde(default)]
    pub query: BTreeMap<String, String>,
    /// Product symbol -> venue-native symbol
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,
    /// Venue-native symbol -> key the book is returned under (Kraken)
    #[serde(default)]
    pub result_keys: BTreeMap<String, String>,
}

impl VenueConfig {
    pub fn venue_id(&self) -> VenueId {
        VenueId::new(&self.id)
    }

    /// Native symbol for a product, matched case-insensitively
    pub fn native_symbol(&self, product: &str) -> Option<&str> {
        self.symbols
            .get(&product.to_uppercase())
            .map(String::as_str)
    }

    pub fn result_key(&self, native_symbol: &str) -> Option<&str> {
        self.result_keys.get(native_symbol).map(String::as_str)
    }

    pub fn timeout(&self, global: &GlobalConfig) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(global.default_timeout_ms))
    }
}

/// What to do when a venue cannot be fetched or normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log it and price against the remaining venues
    #[default]
    SkipVenue,
    /// Fail the whole quote
    Abort,
}

/// Global configuration that applies to all venues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u64,
    /// Handling of venue failures
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    /// User-Agent header (Coinbase rejects requests without one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            default_timeout_ms: default_timeout_ms(),
            failure_policy: FailurePolicy::default(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_user_agent() -> String {
    concat!("sweep/", env!("CARGO_PKG_VERSION")).to_string()
}
