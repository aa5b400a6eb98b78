//! Wire message types for venue snapshots
//!
//! Raw books are kept as JSON values until the normalizer runs, since the
//! level encoding differs per venue.

pub mod snapshot;

pub use snapshot::{RawBookSnapshot, VenueSnapshot};
