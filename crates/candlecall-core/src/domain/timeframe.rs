use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Minute bars simulated per day of history.
pub const MINUTES_PER_DAY: usize = 1_440;

/// Supported aggregation granularities for quiz chart data.
///
/// Variant order runs fine to coarse, so the derived `Ord` sorts series
/// maps from `1m` up to `1M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
}

impl Timeframe {
    pub const ALL: [Self; 8] = [
        Self::OneMinute,
        Self::FiveMinutes,
        Self::FifteenMinutes,
        Self::OneHour,
        Self::FourHours,
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
    ];

    /// Number of minute bars folded into one bar of this timeframe.
    ///
    /// The single lookup shared by the resampler and the trimming logic.
    /// A week is a flat 7 days and a month a flat 30: the simulated clock
    /// has no trading calendar.
    pub const fn minutes_per_bar(self) -> usize {
        match self {
            Self::OneMinute => 1,
            Self::FiveMinutes => 5,
            Self::FifteenMinutes => 15,
            Self::OneHour => 60,
            Self::FourHours => 240,
            Self::OneDay => MINUTES_PER_DAY,
            Self::OneWeek => MINUTES_PER_DAY * 7,
            Self::OneMonth => MINUTES_PER_DAY * 30,
        }
    }

    /// True for granularities of one day and coarser, which charts label
    /// with calendar dates instead of clock times.
    pub const fn is_daily_or_coarser(self) -> bool {
        self.minutes_per_bar() >= MINUTES_PER_DAY
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::OneHour => "1h",
            Self::FourHours => "4h",
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1M",
        }
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ValidationError;

    // Case matters for the minute/month pair; the rest accept either case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "1m" => Ok(Self::OneMinute),
            "5m" | "5M" => Ok(Self::FiveMinutes),
            "15m" | "15M" => Ok(Self::FifteenMinutes),
            "1h" | "1H" => Ok(Self::OneHour),
            "4h" | "4H" => Ok(Self::FourHours),
            "1d" | "1D" => Ok(Self::OneDay),
            "1w" | "1W" => Ok(Self::OneWeek),
            "1M" | "1mo" => Ok(Self::OneMonth),
            other => Err(ValidationError::InvalidTimeframe {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timeframe() {
        let timeframe = Timeframe::from_str("4h").expect("must parse");
        assert_eq!(timeframe, Timeframe::FourHours);
    }

    #[test]
    fn minute_and_month_are_case_sensitive() {
        assert_eq!(Timeframe::from_str("1m").expect("minute"), Timeframe::OneMinute);
        assert_eq!(Timeframe::from_str("1M").expect("month"), Timeframe::OneMonth);
    }

    #[test]
    fn rejects_invalid_timeframe() {
        let err = Timeframe::from_str("2h").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTimeframe { .. }));
    }

    #[test]
    fn group_sizes_cover_the_fixed_set() {
        let groups: Vec<usize> = Timeframe::ALL.iter().map(|tf| tf.minutes_per_bar()).collect();
        assert_eq!(groups, vec![1, 5, 15, 60, 240, 1_440, 10_080, 43_200]);
    }
}
