use serde::{Deserialize, Serialize};

use crate::domain::MINUTES_PER_DAY;
use crate::ValidationError;

/// Tunable parameters for one synthetic price path.
///
/// Immutable per round; a new round gets a fresh config rather than a
/// patched one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Days of simulated history, each contributing 1440 minute bars.
    pub total_days: u32,
    /// Opening price of the very first minute bar.
    pub start_price: f64,
    /// Daily volatility as a fraction of price (0.02 = 2% per day);
    /// scaled per minute by `1 / sqrt(1440)`.
    pub volatility: f64,
    /// Daily trend applied to the log price; signed, so negative values
    /// produce downtrending rounds.
    pub drift: f64,
}

impl GenerationConfig {
    pub fn new(
        total_days: u32,
        start_price: f64,
        volatility: f64,
        drift: f64,
    ) -> Result<Self, ValidationError> {
        let config = Self {
            total_days,
            start_price,
            volatility,
            drift,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-check the invariants `new` enforces; the generator calls this so
    /// literal-built configs cannot bypass validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total_days == 0 {
            return Err(ValidationError::NonPositiveDays);
        }

        for (field, value) in [
            ("start_price", self.start_price),
            ("volatility", self.volatility),
            ("drift", self.drift),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteField { field });
            }
        }

        if self.start_price <= 0.0 {
            return Err(ValidationError::NonPositivePrice {
                field: "start_price",
                value: self.start_price,
            });
        }

        if self.volatility <= 0.0 {
            return Err(ValidationError::NonPositiveVolatility {
                value: self.volatility,
            });
        }

        Ok(())
    }

    /// Minute bars this config generates.
    pub const fn minute_bars(&self) -> usize {
        self.total_days as usize * MINUTES_PER_DAY
    }
}

impl Default for GenerationConfig {
    /// One quarter of history at 2% daily volatility with a mild uptrend.
    fn default() -> Self {
        Self {
            total_days: 91,
            start_price: 100.0,
            volatility: 0.02,
            drift: 0.000_2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        GenerationConfig::default().validate().expect("default must validate");
    }

    #[test]
    fn rejects_zero_days() {
        let err = GenerationConfig::new(0, 100.0, 0.02, 0.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonPositiveDays));
    }

    #[test]
    fn rejects_negative_start_price() {
        let err = GenerationConfig::new(30, -1.0, 0.02, 0.0).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NonPositivePrice {
                field: "start_price",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_volatility() {
        let err = GenerationConfig::new(30, 100.0, 0.0, 0.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonPositiveVolatility { .. }));
    }

    #[test]
    fn rejects_non_finite_drift() {
        let err = GenerationConfig::new(30, 100.0, 0.02, f64::NAN).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteField { field: "drift" }));
    }

    #[test]
    fn accepts_negative_drift() {
        let config = GenerationConfig::new(30, 100.0, 0.02, -0.001).expect("must validate");
        assert_eq!(config.minute_bars(), 30 * 1_440);
    }
}
