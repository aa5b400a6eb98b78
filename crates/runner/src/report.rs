//! Human-readable quote lines
//!
//! ```text
//! Buy price for 1.5 BTCUSD is 58745.55.
//! Sell order of 15 BTCUSD partially filled. Remaining: 4.685 BTCUSD. Price of 10.315 BTCUSD is 403970.29.
//! ```

use sweep_core::ExecutionResult;

use crate::pipeline::MarketQuote;

/// One line for one side of a quote
pub fn render_side(result: &ExecutionResult, product: &str) -> String {
    let side = result.side.as_str();
    let quantity = result.target_quantity;

    if result.is_fully_filled() {
        format!(
            "{} price for {} {} is {}.",
            side, quantity, product, result.total_cost
        )
    } else {
        format!(
            "{} order of {} {} partially filled. Remaining: {} {}. Price of {} {} is {}.",
            side,
            quantity,
            product,
            result.remaining_quantity.normalize(),
            product,
            result.filled_quantity().normalize(),
            product,
            result.total_cost
        )
    }
}

/// Buy line then sell line
pub fn render_quote(quote: &MarketQuote) -> Vec<String> {
    vec![
        render_side(&quote.buy, &quote.product),
        render_side(&quote.sell, &quote.product),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use sweep_core::{Ladder, PriceLevel, Side, VenueId};
    use sweep_execution::MarketOrderSimulator;

    fn kraken(levels: &[(Decimal, Decimal)]) -> Ladder {
        levels
            .iter()
            .map(|(price, qty)| PriceLevel::new(VenueId::kraken(), *price, *qty).unwrap())
            .collect()
    }

    fn asks() -> Ladder {
        kraken(&[
            (dec!(39163.70000), dec!(1.539)),
            (dec!(39166.60000), dec!(0.020)),
            (dec!(39167.70000), dec!(0.103)),
        ])
    }

    fn bids() -> Ladder {
        kraken(&[
            (dec!(39163.60000), dec!(8.187)),
            (dec!(39162.80000), dec!(0.768)),
            (dec!(39162.40000), dec!(1.360)),
        ])
    }

    fn simulate(quantity: Decimal, ladder: &Ladder, side: Side) -> ExecutionResult {
        MarketOrderSimulator::default()
            .simulate(quantity, ladder, side)
            .unwrap()
    }

    #[test]
    fn test_full_fill_line() {
        let buy = simulate(dec!(1.5), &asks(), Side::Buy);
        assert_eq!(
            render_side(&buy, "BTCUSD"),
            "Buy price for 1.5 BTCUSD is 58745.55."
        );

        let sell = simulate(dec!(6), &bids(), Side::Sell);
        assert_eq!(
            render_side(&sell, "BTCUSD"),
            "Sell price for 6 BTCUSD is 234981.60."
        );
    }

    #[test]
    fn test_partial_fill_line() {
        let buy = simulate(dec!(4), &asks(), Side::Buy);
        assert_eq!(
            render_side(&buy, "BTCUSD"),
            "Buy order of 4 BTCUSD partially filled. Remaining: 2.338 BTCUSD. \
             Price of 1.662 BTCUSD is 65090.54."
        );

        let sell = simulate(dec!(15), &bids(), Side::Sell);
        assert_eq!(
            render_side(&sell, "BTCUSD"),
            "Sell order of 15 BTCUSD partially filled. Remaining: 4.685 BTCUSD. \
             Price of 10.315 BTCUSD is 403970.29."
        );
    }

    #[test]
    fn test_nothing_filled() {
        let sell = simulate(dec!(2), &Ladder::new(), Side::Sell);
        assert_eq!(
            render_side(&sell, "ETHUSD"),
            "Sell order of 2 ETHUSD partially filled. Remaining: 2 ETHUSD. \
             Price of 0 ETHUSD is 0.00."
        );
    }
}
