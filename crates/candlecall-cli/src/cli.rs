//! CLI argument definitions for candlecall.
//!
//! This module contains the command-line interface structure using Clap.
//! The CLI drives the synthetic OHLC engine: full quiz rounds, raw
//! series generation, and timeframe inspection.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `round` | Generate a complete prediction round |
//! | `series` | Generate a synthetic series at one timeframe |
//! | `timeframes` | List supported timeframes |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--seed` | entropy | Seed for reproducible output |
//!
//! # Examples
//!
//! ```bash
//! # Generate a medium round
//! candlecall round
//!
//! # Replay a hard round deterministically
//! candlecall round --difficulty hard --seed 42 --pretty
//!
//! # Emit a week of hourly bars with chart labels
//! candlecall series --days 7 --timeframe 1h --chart
//!
//! # Use strict mode for CI/CD
//! candlecall series --days 91 --strict
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// 🕯️ Candlecall - Synthetic OHLC quiz engine
///
/// Generate reproducible candlestick series, aggregate them across
/// timeframes, and assemble price-prediction rounds with decoy choices.
#[derive(Debug, Parser)]
#[command(
    name = "candlecall",
    author,
    version,
    about = "Synthetic OHLC quiz engine",
    long_about = "Candlecall simulates price history with a seeded log-price random walk and \
turns it into prediction rounds. Features include:\n\
\n\
  • Minute-resolution OHLC generation with configurable drift/volatility\n\
  • Consistent aggregation into 1m through 1M timeframes\n\
  • Quiz rounds that withhold future bars and offer decoy closes\n\
  • Structured JSON output with metadata\n\
\n\
Use 'candlecall <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON object (default)
    /// - ndjson: One JSON object per line
    /// - table: ASCII table format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    ///
    /// Useful for CI/CD pipelines that need strict validation.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Seed for the random source.
    ///
    /// The same seed reproduces the same round or series bar for bar.
    /// Without it a fresh seed is drawn from entropy and echoed in the
    /// output metadata.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 🎯 Generate a complete prediction round.
    ///
    /// Simulates visible history plus a hidden future window, returns
    /// the trimmed per-timeframe series, the withheld answer, and the
    /// shuffled choice labels.
    ///
    /// # Examples
    ///
    ///   candlecall round
    ///   candlecall round --difficulty hard --pretty
    ///   candlecall round --difficulty easy --seed 7 --choices 6
    Round(RoundArgs),

    /// 📊 Generate a synthetic OHLC series.
    ///
    /// Runs the generator directly and emits bars for one timeframe,
    /// raw by default or chart-labelled with --chart.
    ///
    /// # Examples
    ///
    ///   candlecall series
    ///   candlecall series --days 7 --timeframe 1h --limit 48
    ///   candlecall series --volatility 0.05 --drift -0.001 --chart
    Series(SeriesArgs),

    /// 🗂️ List supported timeframes.
    ///
    /// Shows every aggregation granularity with its window size.
    ///
    /// # Examples
    ///
    ///   candlecall timeframes
    ///   candlecall timeframes --verbose
    Timeframes(TimeframesArgs),
}

/// Arguments for the `round` command.
#[derive(Debug, Args)]
pub struct RoundArgs {
    /// Round difficulty.
    ///
    /// Controls how much future is withheld:
    /// - easy: 1 day
    /// - medium: 7 days (default)
    /// - hard: 30 days
    #[arg(long, default_value = "medium")]
    pub difficulty: String,

    /// Number of price choices offered, answer included.
    #[arg(long, default_value_t = 4)]
    pub choices: usize,
}

/// Arguments for the `series` command.
#[derive(Debug, Args)]
pub struct SeriesArgs {
    /// Days of simulated history.
    #[arg(long, default_value_t = 91)]
    pub days: u32,

    /// Opening price of the first minute bar.
    #[arg(long, default_value_t = 100.0)]
    pub start_price: f64,

    /// Daily volatility as a fraction of price (0.02 = 2% per day).
    #[arg(long, default_value_t = 0.02)]
    pub volatility: f64,

    /// Daily trend applied to the log price; negative values trend down.
    #[arg(long, default_value_t = 0.000_2, allow_negative_numbers = true)]
    pub drift: f64,

    /// Timeframe to emit.
    ///
    /// Supported timeframes:
    /// - 1m, 5m, 15m: minutes
    /// - 1h, 4h: hours
    /// - 1d, 1w, 1M: day and coarser
    #[arg(long, default_value = "1m")]
    pub timeframe: String,

    /// Emit only the last N bars.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Apply chart labels: epoch seconds intraday, dates for daily+.
    #[arg(long, default_value_t = false)]
    pub chart: bool,
}

/// Arguments for the `timeframes` command.
#[derive(Debug, Args)]
pub struct TimeframesArgs {
    /// Include window sizes and label kinds.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
