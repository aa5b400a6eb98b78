use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a trading venue
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct VenueId(String);

impl VenueId {
    pub fn new(id: impl Into<String>) -> Self {
        VenueId(id.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VenueId {
    fn from(s: &str) -> Self {
        VenueId::new(s)
    }
}

impl From<String> for VenueId {
    fn from(s: String) -> Self {
        VenueId::new(s)
    }
}

impl From<VenueId> for String {
    fn from(id: VenueId) -> Self {
        id.0
    }
}

/// Well-known venue identifiers
impl VenueId {
    pub fn coinbase() -> Self {
        VenueId::new("coinbase")
    }

    pub fn gemini() -> Self {
        VenueId::new("gemini")
    }

    pub fn kraken() -> Self {
        VenueId::new("kraken")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_id_is_lowercased() {
        let id = VenueId::new("Gemini");
        assert_eq!(id.as_str(), "gemini");
        assert_eq!(id, VenueId::gemini());
        assert_eq!(id.to_string(), "gemini");
    }

    #[test]
    fn test_venue_id_serde_as_plain_string() {
        let id: VenueId = serde_json::from_str("\"KRAKEN\"").unwrap();
        assert_eq!(id, VenueId::kraken());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"kraken\"");
    }
}
