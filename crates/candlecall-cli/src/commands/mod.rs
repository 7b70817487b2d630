mod round;
mod series;
mod timeframes;

use std::time::Instant;

use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::envelope::{Envelope, EnvelopeMeta};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub seed: Option<u64>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            seed: None,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let command_result = match &cli.command {
        Command::Round(args) => round::run(args, cli.seed)?,
        Command::Series(args) => series::run(args, cli.seed)?,
        Command::Timeframes(args) => timeframes::run(args)?,
    };

    let CommandResult {
        data,
        warnings,
        seed,
    } = command_result;

    let latency_ms = started.elapsed().as_millis() as u64;
    let mut meta = EnvelopeMeta::new(seed, latency_ms)?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    Ok(Envelope::success(meta, data))
}
