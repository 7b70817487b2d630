use std::str::FromStr;

use candlecall_core::{generate_round_with, Difficulty, SpreadChoices};

use crate::cli::RoundArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &RoundArgs, seed: Option<u64>) -> Result<CommandResult, CliError> {
    if args.choices < 2 {
        return Err(CliError::Command(String::from(
            "--choices must be at least two",
        )));
    }

    let difficulty = Difficulty::from_str(&args.difficulty)?;
    let generator = SpreadChoices {
        count: args.choices,
        ..SpreadChoices::default()
    };
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    let round = generate_round_with(difficulty, seed, &generator)?;

    let data = serde_json::to_value(&round)?;
    Ok(CommandResult::ok(data).with_seed(round.seed))
}
