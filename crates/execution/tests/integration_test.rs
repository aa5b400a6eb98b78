//! Execution Integration Test
//!
//! Tests the full flow:
//! 1. Venues contribute normalized books
//! 2. Aggregator concatenates them into bid/ask ladders
//! 3. Simulator walks each ladder for a buy and a sell
//! 4. Fills, costs and remainders line up across both sides

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::thread;
use sweep_core::{Ladder, PriceLevel, Side, VenueBook, VenueId};
use sweep_execution::{Error, MarketOrderSimulator, aggregate};

fn levels(venue: &VenueId, quotes: &[(Decimal, Decimal)]) -> Vec<PriceLevel> {
    quotes
        .iter()
        .map(|(price, qty)| PriceLevel::new(venue.clone(), *price, *qty).unwrap())
        .collect()
}

fn gemini_book() -> VenueBook {
    let venue = VenueId::gemini();
    VenueBook::new(
        venue.clone(),
        levels(
            &venue,
            &[(dec!(39150.97), dec!(0.03319)), (dec!(39150.36), dec!(0.2987))],
        ),
        levels(
            &venue,
            &[(dec!(39155.01), dec!(0.1162)), (dec!(39155.02), dec!(0.03319))],
        ),
    )
}

fn coinbase_book() -> VenueBook {
    let venue = VenueId::coinbase();
    VenueBook::new(
        venue.clone(),
        levels(
            &venue,
            &[(dec!(40071.98), dec!(0.18687374)), (dec!(40071.97), dec!(0.2))],
        ),
        levels(
            &venue,
            &[(dec!(40072.71), dec!(0.07707)), (dec!(40075.55), dec!(0.0019513))],
        ),
    )
}

fn kraken_book() -> VenueBook {
    let venue = VenueId::kraken();
    VenueBook::new(
        venue.clone(),
        levels(
            &venue,
            &[(dec!(39163.60000), dec!(8.187)), (dec!(39162.80000), dec!(0.768))],
        ),
        levels(
            &venue,
            &[(dec!(39163.70000), dec!(1.539)), (dec!(39166.60000), dec!(0.020))],
        ),
    )
}

/// Deterministic pseudo-random ladder for property checks
fn scrambled_ladder(seed: u64, len: usize) -> Ladder {
    let venues = [VenueId::coinbase(), VenueId::gemini(), VenueId::kraken()];
    let mut state = seed;
    (0..len)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let price = Decimal::new(1_000_000 + (state >> 40) as i64 % 5_000, 2);
            let qty = Decimal::new(1 + (state >> 20) as i64 % 2_000, 3);
            PriceLevel::new(venues[i % venues.len()].clone(), price, qty).unwrap()
        })
        .collect()
}

#[test]
fn test_two_venues_with_third_disabled() {
    let _ = env_logger::try_init();

    // Kraken disabled: its book is simply not passed in
    let book = aggregate([gemini_book(), coinbase_book()]);
    assert_eq!(book.bids.len(), 4);
    assert_eq!(book.asks.len(), 4);

    let book = aggregate([gemini_book(), coinbase_book(), kraken_book()]);
    assert_eq!(book.bids.len(), 6);
    assert_eq!(book.asks.len(), 6);
}

#[test]
fn test_buy_and_sell_across_venues() {
    let _ = env_logger::try_init();

    let book = aggregate([gemini_book(), coinbase_book(), kraken_book()]);
    let simulator = MarketOrderSimulator::default();

    // Buy 0.2: gemini 0.1162 @ 39155.01 + 0.03319 @ 39155.02, then kraken 0.05061 @ 39163.70
    let buy = simulator
        .simulate(dec!(0.2), book.ladder_for(Side::Buy), Side::Buy)
        .unwrap();
    assert!(buy.is_fully_filled());
    assert_eq!(buy.fills.len(), 3);
    assert_eq!(buy.fills[2].venue, VenueId::kraken());
    assert_eq!(buy.fills[2].quantity, dec!(0.05061));
    assert_eq!(
        buy.total_cost,
        (dec!(0.1162) * dec!(39155.01)
            + dec!(0.03319) * dec!(39155.02)
            + dec!(0.05061) * dec!(39163.70))
        .round_dp(2)
    );

    // Sell 0.3: coinbase bids are the best, 0.38687374 available there
    let sell = simulator
        .simulate(dec!(0.3), book.ladder_for(Side::Sell), Side::Sell)
        .unwrap();
    assert!(sell.is_fully_filled());
    assert_eq!(sell.breakdown.len(), 1);
    let coinbase = sell.breakdown.get(&VenueId::coinbase()).unwrap();
    assert_eq!(coinbase.filled_quantity, dec!(0.3));
    assert_eq!(coinbase.last_price, dec!(40071.97));
}

#[test]
fn test_order_larger_than_book() {
    let book = aggregate([gemini_book(), coinbase_book(), kraken_book()]);
    let simulator = MarketOrderSimulator::default();

    let sell = simulator
        .simulate(dec!(16), book.ladder_for(Side::Sell), Side::Sell)
        .unwrap();
    assert_eq!(sell.filled_quantity(), book.bids.total_quantity());
    assert_eq!(sell.remaining_quantity, dec!(16) - book.bids.total_quantity());
    assert_eq!(sell.breakdown.len(), 3);
}

#[test]
fn test_consumed_levels_never_improve() {
    let simulator = MarketOrderSimulator::default();

    for seed in 0..20 {
        let ladder = scrambled_ladder(seed, 25);
        for side in [Side::Buy, Side::Sell] {
            let result = simulator.simulate(dec!(7.5), &ladder, side).unwrap();
            for pair in result.fills.windows(2) {
                match side {
                    Side::Buy => assert!(pair[0].price <= pair[1].price),
                    Side::Sell => assert!(pair[0].price >= pair[1].price),
                }
            }
        }
    }
}

#[test]
fn test_filled_plus_remaining_equals_target() {
    let simulator = MarketOrderSimulator::default();
    let targets = [dec!(0.001), dec!(1), dec!(3.3), dec!(12.5), dec!(100)];

    for seed in 0..10 {
        let ladder = scrambled_ladder(seed, 15);
        for target in targets {
            for side in [Side::Buy, Side::Sell] {
                let result = simulator.simulate(target, &ladder, side).unwrap();
                assert_eq!(
                    result.breakdown.total_filled() + result.remaining_quantity,
                    target
                );
                assert!(result.remaining_quantity >= Decimal::ZERO);
            }
        }
    }
}

#[test]
fn test_simulation_is_repeatable() {
    let simulator = MarketOrderSimulator::default();
    let ladder = scrambled_ladder(42, 30);

    let first = simulator.simulate(dec!(9.75), &ladder, Side::Buy).unwrap();
    let second = simulator.simulate(dec!(9.75), &ladder, Side::Buy).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cost_ignores_venue_order() {
    let simulator = MarketOrderSimulator::default();

    let forward = aggregate([gemini_book(), coinbase_book(), kraken_book()]);
    let reverse = aggregate([kraken_book(), coinbase_book(), gemini_book()]);

    for side in [Side::Buy, Side::Sell] {
        let a = simulator
            .simulate(dec!(5), forward.ladder_for(side), side)
            .unwrap();
        let b = simulator
            .simulate(dec!(5), reverse.ladder_for(side), side)
            .unwrap();
        assert_eq!(a.total_cost, b.total_cost);
        assert_eq!(a.remaining_quantity, b.remaining_quantity);
        assert_eq!(a.breakdown, b.breakdown);
    }
}

#[test]
fn test_concurrent_simulations_share_nothing() {
    let simulator = Arc::new(MarketOrderSimulator::default());
    let ladder = Arc::new(scrambled_ladder(7, 40));
    let expected = simulator.simulate(dec!(11), &ladder, Side::Sell).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let simulator = Arc::clone(&simulator);
            let ladder = Arc::clone(&ladder);
            thread::spawn(move || simulator.simulate(dec!(11), &ladder, Side::Sell).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_invalid_quantity_is_reported_before_walking() {
    let simulator = MarketOrderSimulator::default();
    let err = simulator
        .simulate(dec!(0), &Ladder::new(), Side::Buy)
        .unwrap_err();
    assert_eq!(err, Error::InvalidQuantity { quantity: dec!(0) });
    assert_eq!(
        err.to_string(),
        "Invalid quantity: 0 (must be greater than zero)"
    );
}
