//! Market Order Simulation
//!
//! Estimates what a market order would cost if it swept the aggregated book.
//!
//! # Walk
//!
//! ```text
//! BUY  : asks sorted ascending  (cheapest offer first)
//! SELL : bids sorted descending (highest bid first)
//!
//! for each level:
//!     take = min(level.quantity, target - filled)
//!     cost += level.price * take
//!     stop once filled == target
//! ```
//!
//! Sorting is stable on price alone. Equal-priced levels may be taken in any
//! order without changing the cost, since cost only depends on the sum of
//! price * quantity.
//!
//! The exact cost is kept until the walk finishes and is rounded once to
//! `cost_scale` places. Nothing about a walk is stored on the simulator.

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sweep_core::{
    ExecutionResult, Fill, Ladder, Price, PriceLevel, Quantity, Side, VenueFillBreakdown,
};

use crate::error::{Error, Result};

/// How the final cost is rounded to `cost_scale`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostRounding {
    /// Banker's rounding: ties go to the even digit (0.125 -> 0.12)
    #[default]
    HalfEven,
    /// Ties go away from zero (0.125 -> 0.13)
    HalfUp,
}

impl CostRounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            CostRounding::HalfEven => RoundingStrategy::MidpointNearestEven,
            CostRounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

/// Most decimal places a `Decimal` can carry
pub const MAX_COST_SCALE: u32 = 28;

/// Configuration for the market order simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Decimal places of the reported total cost, at most [`MAX_COST_SCALE`]
    pub cost_scale: u32,
    /// Rounding applied to the total cost
    pub rounding: CostRounding,
}

impl SimulatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cost_scale > MAX_COST_SCALE {
            return Err(Error::InvalidCostScale {
                scale: self.cost_scale,
                max: MAX_COST_SCALE,
            });
        }
        Ok(())
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            cost_scale: 2,
            rounding: CostRounding::HalfEven,
        }
    }
}

/// Greedy best-price-first market order simulator
#[derive(Debug, Clone, Default)]
pub struct MarketOrderSimulator {
    config: SimulatorConfig,
}

impl MarketOrderSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Simulate a market order of `target_quantity` against `ladder`.
    ///
    /// `side` picks the walk direction: `Buy` expects the ask ladder and walks
    /// it ascending, `Sell` expects the bid ladder and walks it descending.
    /// An empty or thin ladder is not an error, the unfilled part is reported
    /// in `remaining_quantity`.
    pub fn simulate(
        &self,
        target_quantity: Quantity,
        ladder: &Ladder,
        side: Side,
    ) -> Result<ExecutionResult> {
        if target_quantity <= Quantity::ZERO {
            return Err(Error::InvalidQuantity {
                quantity: target_quantity,
            });
        }
        self.config.validate()?;

        let walk = walk(target_quantity, ladder, side)?;
        let total_cost = self.round_cost(walk.cost);
        let remaining_quantity = target_quantity - walk.filled;
        let breakdown: VenueFillBreakdown = walk.fills.iter().cloned().collect();

        for (venue, fill) in breakdown.iter() {
            debug!(
                "[SIM] {} {} filled {} (last @ {})",
                side.as_str(),
                venue,
                fill.filled_quantity,
                fill.last_price
            );
        }

        let result = ExecutionResult {
            side,
            target_quantity,
            total_cost,
            remaining_quantity,
            fills: walk.fills,
            breakdown,
        };
        debug!(
            "[SIM] {} {} over {} levels: cost {} avg {} remaining {}",
            side.as_str(),
            target_quantity,
            result.fills.len(),
            total_cost,
            result
                .average_price()
                .map_or_else(|| "-".to_string(), |p| p.round_dp(8).to_string()),
            remaining_quantity
        );

        Ok(result)
    }

    /// Round once, then pad so the cost always carries exactly `cost_scale` places
    fn round_cost(&self, cost: Price) -> Price {
        let mut rounded =
            cost.round_dp_with_strategy(self.config.cost_scale, self.config.rounding.strategy());
        rounded.rescale(self.config.cost_scale);
        rounded
    }
}

/// Result of one pass over a ladder, before rounding
struct Walk {
    fills: Vec<Fill>,
    cost: Price,
    filled: Quantity,
}

fn walk(target: Quantity, ladder: &Ladder, side: Side) -> Result<Walk> {
    let mut fills = Vec::new();
    let mut cost = Decimal::ZERO;
    let mut filled = Quantity::ZERO;

    for level in price_priority(ladder, side) {
        let fill = Fill {
            venue: level.venue().clone(),
            price: level.price(),
            quantity: level.quantity().min(target - filled),
        };
        let overflow = || Error::Overflow {
            price: fill.price,
            quantity: fill.quantity,
        };
        cost = fill
            .cost()
            .and_then(|fill_cost| cost.checked_add(fill_cost))
            .ok_or_else(overflow)?;
        filled += fill.quantity;
        fills.push(fill);

        if filled == target {
            break;
        }
    }

    Ok(Walk {
        fills,
        cost,
        filled,
    })
}

/// Levels in the order a market order on `side` would take them
fn price_priority(ladder: &Ladder, side: Side) -> Vec<&PriceLevel> {
    let mut levels: Vec<&PriceLevel> = ladder.iter().collect();
    match side {
        Side::Buy => levels.sort_by(|a, b| a.price().cmp(&b.price())),
        Side::Sell => levels.sort_by(|a, b| b.price().cmp(&a.price())),
    }
    levels
}
