//! Quote normalization
//!
//! Turns one venue's raw snapshot into venue-tagged [`PriceLevel`]s.
//! The encoding is chosen from the venue's configuration, never guessed from
//! the payload shape.
//!
//! | Encoding | Level shape                                   |
//! |----------|-----------------------------------------------|
//! | `List`   | `["39163.70000", "1.539", 1706044374]`        |
//! | `Record` | `{"price": "39155.01", "amount": "0.1162"}`   |
//!
//! Trailing list items and extra record keys are ignored. Level order is kept
//! exactly as the venue sent it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use sweep_core::{BookSide, LevelError, PriceLevel, VenueBook, VenueId};

use crate::error::QuoteError;
use crate::messages::RawBookSnapshot;

/// How a venue encodes each book level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteEncoding {
    /// `[price, quantity, ...]`
    List,
    /// `{"price": .., "amount": .., ...}`
    Record,
}

impl QuoteEncoding {
    /// Normalize both sides of `raw`, tagging every level with `venue`
    pub fn normalize(self, raw: &RawBookSnapshot, venue: &VenueId) -> Result<VenueBook, QuoteError> {
        let bids = self.normalize_side(&raw.bids, venue, BookSide::Bids)?;
        let asks = self.normalize_side(&raw.asks, venue, BookSide::Asks)?;
        Ok(VenueBook::new(venue.clone(), bids, asks))
    }

    fn normalize_side(
        self,
        entries: &[Value],
        venue: &VenueId,
        side: BookSide,
    ) -> Result<Vec<PriceLevel>, QuoteError> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let at = Location {
                    venue,
                    side,
                    index,
                };
                self.level(entry, &at)
            })
            .collect()
    }

    fn level(self, entry: &Value, at: &Location<'_>) -> Result<PriceLevel, QuoteError> {
        let (price_field, quantity_field) = self.field_names();
        let (price, quantity) = match self {
            QuoteEncoding::List => {
                let items = entry
                    .as_array()
                    .ok_or_else(|| at.malformed("level", entry, "expected a list"))?;
                (items.first(), items.get(1))
            }
            QuoteEncoding::Record => {
                let record = entry
                    .as_object()
                    .ok_or_else(|| at.malformed("level", entry, "expected a record"))?;
                (record.get(price_field), record.get(quantity_field))
            }
        };

        let price = parse_decimal(price, price_field, at)?;
        let quantity = parse_decimal(quantity, quantity_field, at)?;

        PriceLevel::new(at.venue.clone(), price, quantity).map_err(|e| {
            let (field, value) = match &e {
                LevelError::NonPositivePrice(p) => (price_field, *p),
                LevelError::NonPositiveQuantity(q) => (quantity_field, *q),
            };
            at.malformed(field, &value, e.to_string())
        })
    }

    /// Names reported in errors for the price and quantity fields
    fn field_names(self) -> (&'static str, &'static str) {
        match self {
            QuoteEncoding::List => ("price", "quantity"),
            QuoteEncoding::Record => ("price", "amount"),
        }
    }
}

/// Normalize one venue's raw snapshot
pub fn normalize(
    raw: &RawBookSnapshot,
    venue: &VenueId,
    encoding: QuoteEncoding,
) -> Result<VenueBook, QuoteError> {
    encoding.normalize(raw, venue)
}

/// Where in a snapshot a level was read from
struct Location<'a> {
    venue: &'a VenueId,
    side: BookSide,
    index: usize,
}

impl Location<'_> {
    fn malformed(
        &self,
        field: &'static str,
        value: &impl ToString,
        reason: impl Into<String>,
    ) -> QuoteError {
        QuoteError::MalformedQuote {
            venue: self.venue.clone(),
            side: self.side,
            index: self.index,
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Venues send decimals as strings; plain JSON numbers are accepted too.
///
/// Numbers keep their source text (serde_json `arbitrary_precision`), so
/// both forms parse exactly. Input that would be rounded to fit a `Decimal`
/// is rejected.
fn parse_decimal(
    value: Option<&Value>,
    field: &'static str,
    at: &Location<'_>,
) -> Result<Decimal, QuoteError> {
    let value = value.ok_or_else(|| at.malformed(field, &"<missing>", "field not present"))?;
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => return Err(at.malformed(field, other, "expected a decimal string")),
    };

    let parsed = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| at.malformed(field, value, "not a decimal number"))?;

    let kept = parsed.mantissa().unsigned_abs().to_string();
    if significant_digits(&text) != significant_digits(&kept) {
        return Err(at.malformed(field, value, "too many significant digits"));
    }
    Ok(parsed)
}

/// Digits of the mantissa without leading or trailing zeros
fn significant_digits(text: &str) -> String {
    let mantissa = text.split(['e', 'E']).next().unwrap_or(text);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    digits.trim_start_matches('0').trim_end_matches('0').to_string()
}
