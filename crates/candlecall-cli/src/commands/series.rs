use std::str::FromStr;

use candlecall_core::{aggregate, chart_bars, generate_series, GenerationConfig, Timeframe};
use fastrand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::cli::SeriesArgs;
use crate::error::CliError;

use super::CommandResult;

/// Bar counts beyond this trip a warning instead of silently flooding
/// stdout.
const UNBOUNDED_OUTPUT_WARNING: usize = 10_000;

#[derive(Debug, Serialize)]
struct SeriesResponseData {
    timeframe: Timeframe,
    bar_count: usize,
    bars: Value,
}

pub fn run(args: &SeriesArgs, seed: Option<u64>) -> Result<CommandResult, CliError> {
    let timeframe = Timeframe::from_str(&args.timeframe)?;
    let config = GenerationConfig::new(args.days, args.start_price, args.volatility, args.drift)?;

    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    let mut rng = Rng::with_seed(seed);

    let minute_bars = generate_series(&config, &mut rng)?;
    let series = aggregate(&minute_bars)?;
    let frame = series
        .get(timeframe)
        .ok_or_else(|| CliError::Command(format!("no frame aggregated for {timeframe}")))?;

    let bars = match args.limit {
        Some(limit) if limit < frame.len() => &frame[frame.len() - limit..],
        _ => frame,
    };

    let rendered = if args.chart {
        serde_json::to_value(chart_bars(bars, timeframe))?
    } else {
        serde_json::to_value(bars)?
    };

    let data = serde_json::to_value(SeriesResponseData {
        timeframe,
        bar_count: bars.len(),
        bars: rendered,
    })?;

    let mut result = CommandResult::ok(data).with_seed(seed);
    if args.limit.is_none() && bars.len() > UNBOUNDED_OUTPUT_WARNING {
        result = result.with_warning(format!(
            "emitting {} bars; use --limit to tail the series",
            bars.len()
        ));
    }
    Ok(result)
}
