use candlecall_core::Timeframe;
use serde::Serialize;

use crate::cli::TimeframesArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct TimeframeInfo {
    key: Timeframe,
    minutes_per_bar: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_label: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct TimeframesResponseData {
    timeframes: Vec<TimeframeInfo>,
}

pub fn run(args: &TimeframesArgs) -> Result<CommandResult, CliError> {
    let timeframes = Timeframe::ALL
        .into_iter()
        .map(|key| TimeframeInfo {
            key,
            minutes_per_bar: key.minutes_per_bar(),
            time_label: args.verbose.then(|| {
                if key.is_daily_or_coarser() {
                    "date"
                } else {
                    "unix"
                }
            }),
        })
        .collect::<Vec<_>>();

    let data = serde_json::to_value(TimeframesResponseData { timeframes })?;
    Ok(CommandResult::ok(data))
}
