//! # Series Statistics Example
//!
//! Generates a raw minute series, checks its realized statistics
//! against the configuration, and shows the aggregated frame sizes.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example series_stats
//! ```
//!
//! ## What it demonstrates
//!
//! - Driving the generator directly with a seeded random source
//! - Computing simple moving averages and realized volatility
//! - Aggregating one minute path into every supported timeframe

use candlecall_core::{aggregate, generate_series, GenerationConfig, MINUTES_PER_DAY};
use fastrand::Rng;

/// Calculate Simple Moving Average over the trailing `period` values.
fn calculate_sma(prices: &[f64], period: usize) -> Option<f64> {
    if prices.len() < period {
        return None;
    }
    let sum: f64 = prices.iter().rev().take(period).sum();
    Some(sum / period as f64)
}

/// Realized daily volatility from minute-to-minute log returns.
fn realized_volatility(closes: &[f64]) -> f64 {
    if closes.len() < 2 {
        return 0.0;
    }
    let returns: Vec<f64> = closes.windows(2).map(|w| (w[1] / w[0]).ln()).collect();
    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / returns.len() as f64;
    variance.sqrt() * (MINUTES_PER_DAY as f64).sqrt()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GenerationConfig::default();
    let mut rng = Rng::with_seed(7);

    println!(
        "📊 Simulating {} days ({} minute bars)...",
        config.total_days,
        config.minute_bars()
    );
    let bars = generate_series(&config, &mut rng)?;

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let high = bars.iter().map(|b| b.high).fold(f64::MIN, f64::max);
    let low = bars.iter().map(|b| b.low).fold(f64::MAX, f64::min);

    println!("\n📈 Path summary:");
    println!("  Start:  ${:.2}", config.start_price);
    println!("  Finish: ${:.2}", closes.last().copied().unwrap_or(0.0));
    println!("  High:   ${high:.2}");
    println!("  Low:    ${low:.2}");

    println!("\n📊 Moving Averages (minutes):");
    println!("  SMA 60:   ${:.2}", calculate_sma(&closes, 60).unwrap_or(0.0));
    println!("  SMA 240:  ${:.2}", calculate_sma(&closes, 240).unwrap_or(0.0));
    println!("  SMA 1440: ${:.2}", calculate_sma(&closes, 1440).unwrap_or(0.0));

    println!("\n📉 Volatility:");
    println!("  Configured daily: {:.4}", config.volatility);
    println!("  Realized daily:   {:.4}", realized_volatility(&closes));

    let set = aggregate(&bars)?;
    println!("\n🗂  Aggregated frames:");
    for (timeframe, frame) in set.iter() {
        let terminal = frame.last().map(|b| b.close).unwrap_or(0.0);
        println!(
            "  {:>3}: {:>6} bars, terminal close ${:.2}",
            timeframe.as_str(),
            frame.len(),
            terminal
        );
    }

    Ok(())
}
