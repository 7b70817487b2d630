//! Core engine for candlecall.
//!
//! This crate contains:
//! - Synthetic minute-bar generation from a seeded log-price walk
//! - Fixed-window aggregation into the supported timeframes
//! - Round assembly with future-price withholding and choice labels
//! - Boundary formatting for chart consumers

pub mod aggregate;
pub mod choices;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod generator;
pub mod round;

pub use aggregate::{aggregate, resample, SeriesSet, CLOSE_TOLERANCE};
pub use choices::{ChoiceGenerator, SpreadChoices};
pub use config::GenerationConfig;
pub use domain::{Bar, Timeframe, MINUTES_PER_DAY};
pub use error::{EngineError, ValidationError};
pub use format::{chart_bars, format_price, time_label, ChartBar, TimeLabel};
pub use generator::{generate_series, SERIES_ANCHOR_EPOCH};
pub use round::{
    generate_round, generate_round_with, verify_choice_contract, Difficulty, PredictionRound,
    VISIBLE_DAYS,
};
