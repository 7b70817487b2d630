use candlecall_core::EngineError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] candlecall_core::ValidationError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("command error: {0}")]
    Command(String),

    #[error("strict mode failed: warnings={warning_count}")]
    StrictModeViolation { warning_count: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    TimeFormat(#[from] time::error::Format),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Engine(EngineError::InvalidConfig(_)) => 2,
            Self::StrictModeViolation { .. } => 5,
            Self::Engine(_) | Self::Command(_) | Self::Serialization(_) | Self::TimeFormat(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use candlecall_core::ValidationError;

    use super::*;

    #[test]
    fn invalid_input_exits_with_code_2() {
        let validation = CliError::Validation(ValidationError::NonPositiveDays);
        assert_eq!(validation.exit_code(), 2);

        let config =
            CliError::Engine(EngineError::InvalidConfig(ValidationError::NonPositiveDays));
        assert_eq!(config.exit_code(), 2);
    }

    #[test]
    fn strict_mode_violations_exit_with_code_5() {
        let strict = CliError::StrictModeViolation { warning_count: 1 };
        assert_eq!(strict.exit_code(), 5);
    }

    #[test]
    fn internal_failures_exit_with_code_10() {
        let command = CliError::Command(String::from("unknown flag"));
        assert_eq!(command.exit_code(), 10);

        let engine = CliError::Engine(EngineError::EmptySeries);
        assert_eq!(engine.exit_code(), 10);
    }
}
