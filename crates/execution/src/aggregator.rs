//! Liquidity Aggregation
//!
//! Merges normalized venue books into one ladder per side.
//!
//! Aggregation is plain concatenation:
//! - venue order and each venue's internal level order are preserved
//! - equal prices from different venues are NOT merged, each level keeps its
//!   venue tag so fills can be attributed
//! - nothing is sorted here, the simulator owns price priority
//!
//! Which venues take part is decided by the caller. A venue that failed or was
//! disabled is simply absent from the input.

use log::debug;
use sweep_core::{BookSide, Ladder, Side, VenueBook};

/// Bid and ask ladders across all contributing venues
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedBook {
    pub bids: Ladder,
    pub asks: Ladder,
}

impl AggregatedBook {
    pub fn side(&self, side: BookSide) -> &Ladder {
        match side {
            BookSide::Bids => &self.bids,
            BookSide::Asks => &self.asks,
        }
    }

    /// The ladder a market order on `side` consumes
    pub fn ladder_for(&self, side: Side) -> &Ladder {
        self.side(side.consumes())
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

/// Concatenate every venue's bids and asks into two ladders
pub fn aggregate<I>(books: I) -> AggregatedBook
where
    I: IntoIterator<Item = VenueBook>,
{
    let mut aggregated = AggregatedBook::default();

    for book in books {
        debug!(
            "[AGG] {} contributes {} bids, {} asks",
            book.venue,
            book.bids.len(),
            book.asks.len()
        );
        aggregated.bids.extend(book.bids);
        aggregated.asks.extend(book.asks);
    }

    aggregated
}
