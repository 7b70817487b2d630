//! Synthetic minute-bar generation from a seeded log-price random walk.

use fastrand::Rng;

use crate::domain::{Bar, MINUTES_PER_DAY};
use crate::{EngineError, GenerationConfig};

/// First bar timestamp of every generated series: 2024-01-01T00:00:00 UTC.
pub const SERIES_ANCHOR_EPOCH: i64 = 1_704_067_200;

/// Seconds between consecutive minute bars.
const BAR_SPACING_SECONDS: i64 = 60;

/// Generate `config.total_days * 1440` contiguous minute bars.
///
/// The log price advances each minute by `drift / 1440` plus
/// `volatility / sqrt(1440)` scaled standard-normal noise, so daily
/// statistics match the config regardless of series length. Every bar
/// opens at the prior bar's close; highs and lows add a non-negative
/// intra-bar excursion on top of the open/close body, zero only when the
/// uniform draw is exactly zero.
///
/// The walk is a pure function of `config` and `rng`: seeding the `Rng`
/// reproduces the series bar for bar.
pub fn generate_series(config: &GenerationConfig, rng: &mut Rng) -> Result<Vec<Bar>, EngineError> {
    config.validate()?;

    let steps = config.minute_bars();
    let drift_per_minute = config.drift / MINUTES_PER_DAY as f64;
    let vol_per_minute = config.volatility / (MINUTES_PER_DAY as f64).sqrt();

    let mut bars = Vec::with_capacity(steps);
    let mut log_price = config.start_price.ln();
    let mut open = config.start_price;

    for step in 0..steps {
        log_price += drift_per_minute + vol_per_minute * standard_normal(rng);
        let close = log_price.exp();

        let body_high = open.max(close);
        let body_low = open.min(close);
        let high = body_high * (1.0 + rng.f64() * vol_per_minute);
        let low = body_low * (1.0 - rng.f64() * vol_per_minute);

        let ts = SERIES_ANCHOR_EPOCH + step as i64 * BAR_SPACING_SECONDS;
        bars.push(Bar::new(ts, open, high, low, close)?);

        open = close;
    }

    Ok(bars)
}

/// Standard-normal draw via Box-Muller over two uniform samples.
fn standard_normal(rng: &mut Rng) -> f64 {
    // 1 - f64() keeps the ln argument strictly positive.
    let radius = 1.0 - rng.f64();
    let angle = std::f64::consts::TAU * rng.f64();
    (-2.0 * radius.ln()).sqrt() * angle.cos()
}
