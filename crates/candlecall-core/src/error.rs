use thiserror::Error;

use crate::Timeframe;

/// Validation errors for generation parameters and bar shapes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("total_days must be greater than zero")]
    NonPositiveDays,
    #[error("field '{field}' must be greater than zero, got {value}")]
    NonPositivePrice { field: &'static str, value: f64 },
    #[error("volatility must be greater than zero, got {value}")]
    NonPositiveVolatility { value: f64 },
    #[error("field '{field}' must be finite")]
    NonFiniteField { field: &'static str },

    #[error("invalid timeframe '{value}', expected one of 1m, 5m, 15m, 1h, 4h, 1d, 1w, 1M")]
    InvalidTimeframe { value: String },
    #[error("invalid difficulty '{value}', expected one of easy, medium, hard")]
    InvalidDifficulty { value: String },

    #[error("bar high must be >= low")]
    InvalidBarRange,
    #[error("bar open/close must be within high/low range")]
    InvalidBarBounds,
}

/// Top-level failures produced by the quiz engine.
///
/// A round is never returned partially: any of these aborts the whole
/// pipeline and leaves the caller to decide whether to re-roll.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Generation parameters failed validation.
    #[error(transparent)]
    InvalidConfig(#[from] ValidationError),

    /// Terminal closes diverged across timeframes after aggregation.
    ///
    /// All timeframes derive from one minute path, so this indicates a
    /// trimming or grouping defect rather than bad input.
    #[error(
        "inconsistent aggregation: {timeframe} terminal close {close} deviates from reference {reference} beyond relative tolerance {tolerance}"
    )]
    InconsistentAggregation {
        timeframe: Timeframe,
        close: f64,
        reference: f64,
        tolerance: f64,
    },

    /// A minute series was empty where at least one bar is required.
    #[error("series must contain at least one bar")]
    EmptySeries,

    /// A choice generator broke its contract (answer missing or duplicates).
    #[error("choice contract violated: {reason}")]
    ChoiceContract { reason: String },
}
