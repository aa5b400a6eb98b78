mod book;
mod execution;
mod ladder;
mod price_level;
mod side;
mod venue;

pub use book::VenueBook;
pub use execution::{ExecutionResult, Fill, VenueFill, VenueFillBreakdown};
pub use ladder::Ladder;
pub use price_level::{LevelError, PriceLevel};
pub use side::{BookSide, Side};
pub use venue::VenueId;
