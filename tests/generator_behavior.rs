//! Behavior-driven tests for the synthetic series generator
//!
//! These tests verify HOW the generator shapes a minute-resolution
//! price path: bar counts, timestamp spacing, OHLC bounds, and
//! seed-driven reproducibility.

use candlecall_core::{
    generate_series, GenerationConfig, MINUTES_PER_DAY, SERIES_ANCHOR_EPOCH,
};
use candlecall_tests::seeded;

// =============================================================================
// Series Shape
// =============================================================================

#[test]
fn when_config_requests_n_days_series_has_exactly_n_times_1440_bars() {
    // Given: A three-day generation config
    let config = GenerationConfig::new(3, 100.0, 0.02, 0.0).expect("valid config");

    // When: The series is generated
    let bars = generate_series(&config, &mut seeded(1)).expect("generation succeeds");

    // Then: Every simulated day contributes 1440 minute bars
    assert_eq!(bars.len(), 3 * MINUTES_PER_DAY);
}

#[test]
fn when_series_generated_timestamps_are_contiguous_and_anchored() {
    // Given: A one-day config
    let config = GenerationConfig::new(1, 100.0, 0.02, 0.0).expect("valid config");

    // When: The series is generated
    let bars = generate_series(&config, &mut seeded(2)).expect("generation succeeds");

    // Then: The first bar sits on the reference epoch and every step is 60s
    assert_eq!(bars[0].ts, SERIES_ANCHOR_EPOCH);
    for pair in bars.windows(2) {
        assert_eq!(
            pair[1].ts - pair[0].ts,
            60,
            "bars must be spaced exactly one minute apart"
        );
    }
}

// =============================================================================
// OHLC Invariants
// =============================================================================

#[test]
fn when_series_generated_every_bar_satisfies_ohlc_bounds() {
    // Given: A config with meaningful volatility
    let config = GenerationConfig::new(2, 250.0, 0.05, 0.001).expect("valid config");

    // When: The series is generated
    let bars = generate_series(&config, &mut seeded(3)).expect("generation succeeds");

    // Then: Highs envelop the body from above and lows from below
    for bar in &bars {
        assert!(bar.high >= bar.open.max(bar.close), "high >= body violated");
        assert!(bar.low <= bar.open.min(bar.close), "low <= body violated");
        assert!(bar.low <= bar.high, "low <= high violated");
        assert!(bar.low > 0.0, "prices stay positive");
    }
}

#[test]
fn when_series_generated_each_open_continues_the_prior_close() {
    // Given: Any valid config
    let config = GenerationConfig::new(1, 80.0, 0.03, -0.000_5).expect("valid config");

    // When: The series is generated
    let bars = generate_series(&config, &mut seeded(4)).expect("generation succeeds");

    // Then: The path is gapless, starting from the configured price
    assert_eq!(bars[0].open, 80.0, "first open is the start price");
    for pair in bars.windows(2) {
        assert_eq!(
            pair[1].open, pair[0].close,
            "every open must equal the prior close"
        );
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn when_same_seed_used_twice_series_matches_exactly() {
    // Given: One config and one seed
    let config = GenerationConfig::default();

    // When: Two series are generated from the same seed
    let first = generate_series(&config, &mut seeded(99)).expect("generation succeeds");
    let second = generate_series(&config, &mut seeded(99)).expect("generation succeeds");

    // Then: They are indistinguishable
    assert_eq!(first, second);
}

#[test]
fn when_seeds_differ_series_diverge() {
    // Given: One config and two seeds
    let config = GenerationConfig::new(1, 100.0, 0.02, 0.0).expect("valid config");

    // When: A series is generated from each seed
    let first = generate_series(&config, &mut seeded(5)).expect("generation succeeds");
    let second = generate_series(&config, &mut seeded(6)).expect("generation succeeds");

    // Then: The paths are different
    assert_ne!(first, second);
}

// =============================================================================
// Drift Behavior
// =============================================================================

#[test]
fn when_drift_dominates_volatility_the_path_trends_with_its_sign() {
    // Given: Configs whose daily trend dwarfs the noise term
    let up = GenerationConfig::new(91, 100.0, 0.02, 0.05).expect("valid config");
    let down = GenerationConfig::new(91, 100.0, 0.02, -0.05).expect("valid config");

    // When: Long series are generated
    let rising = generate_series(&up, &mut seeded(7)).expect("generation succeeds");
    let falling = generate_series(&down, &mut seeded(7)).expect("generation succeeds");

    // Then: The terminal close lands on the drift's side of the start
    let rising_close = rising.last().expect("non-empty").close;
    let falling_close = falling.last().expect("non-empty").close;
    assert!(
        rising_close > 100.0,
        "positive drift should trend up, got {rising_close}"
    );
    assert!(
        falling_close < 100.0,
        "negative drift should trend down, got {falling_close}"
    );
}
