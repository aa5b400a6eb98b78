//! Sweep Core Domain
//!
//! Pure domain types for estimating market order cost across venues.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    BookSide, ExecutionResult, Fill, Ladder, LevelError, PriceLevel, Side, VenueBook,
    VenueFill, VenueFillBreakdown, VenueId,
};
pub use values::{Price, Quantity};
