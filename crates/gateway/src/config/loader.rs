use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use thiserror::Error;

use super::types::{SweepConfigFile, VenueConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("No enabled venues in config")]
    NoEnabledVenues,
    #[error("Duplicate venue id: {0}")]
    DuplicateVenue(String),
    #[error("Invalid REST URL for {venue}: {url}")]
    InvalidUrl { venue: String, url: String },
}

/// Load venue configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SweepConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<SweepConfigFile, ConfigError> {
    let config: SweepConfigFile = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<SweepConfigFile, ConfigError> {
    let default_config = include_str!("venues.json");
    load_config_from_str(default_config)
}

impl SweepConfigFile {
    /// Enabled venues, including optional ones only when asked
    pub fn enabled_venues(&self, include_optional: bool) -> Vec<&VenueConfig> {
        self.venues
            .iter()
            .filter(|v| v.enabled && (include_optional || !v.optional))
            .collect()
    }

    /// Get a specific venue by ID
    pub fn get_venue(&self, id: &str) -> Option<&VenueConfig> {
        self.venues.iter().find(|v| v.id.eq_ignore_ascii_case(id))
    }

    /// Products every selected venue can map to a native symbol
    pub fn supported_products(&self, include_optional: bool) -> BTreeSet<String> {
        let venues = self.enabled_venues(include_optional);
        let Some((first, rest)) = venues.split_first() else {
            return BTreeSet::new();
        };

        first
            .symbols
            .keys()
            .filter(|product| rest.iter().all(|v| v.symbols.contains_key(*product)))
            .cloned()
            .collect()
    }

    pub fn is_supported(&self, product: &str, include_optional: bool) -> bool {
        self.supported_products(include_optional)
            .contains(&product.to_uppercase())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled_venues(true).is_empty() {
            return Err(ConfigError::NoEnabledVenues);
        }

        let mut seen = HashSet::new();
        for venue in &self.venues {
            if !seen.insert(venue.venue_id()) {
                return Err(ConfigError::DuplicateVenue(venue.id.clone()));
            }
            if reqwest::Url::parse(&venue.rest_url).is_err() {
                return Err(ConfigError::InvalidUrl {
                    venue: venue.id.clone(),
                    url: venue.rest_url.clone(),
                });
            }
        }
        Ok(())
    }
}
