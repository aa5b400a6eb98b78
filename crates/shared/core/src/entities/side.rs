use serde::{Deserialize, Serialize};
use std::fmt;

/// Market order side (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The book side a market order on this side consumes.
    /// Buys lift offers, sells hit bids.
    pub fn consumes(&self) -> BookSide {
        match self {
            Side::Buy => BookSide::Asks,
            Side::Sell => BookSide::Bids,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }
}

/// One side of an order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookSide {
    Bids,
    Asks,
}

impl BookSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookSide::Bids => "bids",
            BookSide::Asks => "asks",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BookSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_consumes_opposite_book() {
        assert_eq!(Side::Buy.consumes(), BookSide::Asks);
        assert_eq!(Side::Sell.consumes(), BookSide::Bids);
    }
}
