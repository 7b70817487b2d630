use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// OHLC bar for one aggregation interval.
///
/// `ts` is Unix epoch seconds (UTC) of the interval start; calendar-string
/// forms exist only in the [`crate::format`] adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub ts: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    pub fn new(
        ts: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> Result<Self, ValidationError> {
        validate_price("open", open)?;
        validate_price("high", high)?;
        validate_price("low", low)?;
        validate_price("close", close)?;

        if high < low {
            return Err(ValidationError::InvalidBarRange);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidBarBounds);
        }

        Ok(Self {
            ts,
            open,
            high,
            low,
            close,
        })
    }

    /// Upper edge of the open/close body, the floor for `high`.
    pub fn body_high(&self) -> f64 {
        self.open.max(self.close)
    }

    /// Lower edge of the open/close body, the ceiling for `low`.
    pub fn body_low(&self) -> f64 {
        self.open.min(self.close)
    }
}

fn validate_price(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteField { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositivePrice { field, value });
    }
    Ok(())
}
