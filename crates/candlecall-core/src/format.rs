//! Boundary formatting for chart consumers and choice labels.
//!
//! The engine keeps epoch seconds everywhere; calendar strings and
//! two-decimal price labels exist only at this adapter.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{Bar, Timeframe};

/// Format a price the way the player sees it: fixed two decimals.
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}

/// Chart-facing time value.
///
/// Intraday frames keep raw epoch seconds. Daily and coarser frames use
/// zero-padded `yyyy-MM-dd`, which keeps lexicographic order equal to
/// chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeLabel {
    Unix(i64),
    Date(String),
}

/// Label a timestamp for the given timeframe.
pub fn time_label(ts: i64, timeframe: Timeframe) -> TimeLabel {
    if timeframe.is_daily_or_coarser() {
        TimeLabel::Date(format_date(ts))
    } else {
        TimeLabel::Unix(ts)
    }
}

fn format_date(ts: i64) -> String {
    match OffsetDateTime::from_unix_timestamp(ts) {
        Ok(moment) => format!(
            "{:04}-{:02}-{:02}",
            moment.year(),
            u8::from(moment.month()),
            moment.day()
        ),
        // Out-of-calendar-range timestamps keep the raw seconds.
        Err(_) => ts.to_string(),
    }
}

/// One bar shaped for the charting layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub time: TimeLabel,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Project core bars into chart form for one timeframe.
pub fn chart_bars(bars: &[Bar], timeframe: Timeframe) -> Vec<ChartBar> {
    bars.iter()
        .map(|bar| ChartBar {
            time: time_label(bar.ts, timeframe),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
        })
        .collect()
}
