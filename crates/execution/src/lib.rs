//! Sweep Execution
//!
//! Turns per-venue book snapshots into the cost of a market order:
//! - **Liquidity Aggregation**: Concatenates every venue's levels into one bid
//!   ladder and one ask ladder, keeping venue tags
//! - **Market Order Simulation**: Walks a ladder best price first until the
//!   target quantity is filled or liquidity runs out
//!
//! ## Architecture
//!
//! ```text
//! VenueBook (coinbase) ─┐
//! VenueBook (gemini)   ─┼──► ┌──────────────────────────┐
//! VenueBook (kraken)   ─┘    │   Liquidity Aggregator   │
//!                            │   - bid ladder           │
//!                            │   - ask ladder           │
//!                            └────────────┬─────────────┘
//!                                         │ Ladder + Side
//!                            ┌────────────▼─────────────┐
//!                            │  Market Order Simulator  │
//!                            │  - sort best price first │
//!                            │  - greedy fill           │
//!                            │  - round cost once       │
//!                            └────────────┬─────────────┘
//!                                         │
//!                                  ExecutionResult
//! ```
//!
//! Everything here is synchronous and free of shared state, so a simulator
//! can be called from any number of threads at once.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sweep_execution::{aggregate, MarketOrderSimulator};
//! use sweep_core::Side;
//!
//! let book = aggregate(venue_books);
//! let simulator = MarketOrderSimulator::default();
//!
//! let buy = simulator.simulate(dec!(4), book.ladder_for(Side::Buy), Side::Buy)?;
//! println!("{} (unfilled {})", buy.total_cost, buy.remaining_quantity);
//! ```

pub mod aggregator;
pub mod error;
pub mod simulator;

// Re-export main types
pub use aggregator::{AggregatedBook, aggregate};
pub use error::{Error, Result};
pub use simulator::{CostRounding, MAX_COST_SCALE, MarketOrderSimulator, SimulatorConfig};
