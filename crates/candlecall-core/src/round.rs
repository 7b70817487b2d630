//! Round assembly: generate, withhold the future, aggregate, offer choices.

use std::fmt;
use std::str::FromStr;

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, SeriesSet};
use crate::choices::{ChoiceGenerator, SpreadChoices};
use crate::domain::MINUTES_PER_DAY;
use crate::format::format_price;
use crate::generator::generate_series;
use crate::{EngineError, GenerationConfig, ValidationError};

/// Days of history the player sees before the withheld window begins.
///
/// Keeps the hardest round at 91 simulated days total.
pub const VISIBLE_DAYS: u32 = 61;

/// How much future the player must see through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Days withheld from the end of the series.
    pub const fn future_days(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 7,
            Self::Hard => 30,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ValidationError::InvalidDifficulty {
                value: value.to_owned(),
            }),
        }
    }
}

/// One complete quiz round: everything the player sees plus the answer
/// key. Replaced wholesale each round, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRound {
    pub difficulty: Difficulty,
    /// Seed that reproduces this round bar for bar.
    pub seed: u64,
    /// Trimmed bars per timeframe; the withheld window never appears here.
    pub series: SeriesSet,
    /// Close of the final hidden minute bar.
    pub answer: f64,
    /// Shuffled two-decimal labels, the answer's among them.
    pub choices: Vec<String>,
}

/// Generate a round with the default choice generator.
///
/// Without an explicit seed, one is drawn from entropy and recorded on
/// the round so any outcome can be replayed.
pub fn generate_round(
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<PredictionRound, EngineError> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    generate_round_with(difficulty, seed, &SpreadChoices::default())
}

/// Generate a round from an explicit seed and choice generator.
///
/// The pipeline runs in a fixed order so a seed fully determines the
/// round: simulate `VISIBLE_DAYS + future_days` of minute bars, record
/// the final close as the answer, drop the future bars from the minute
/// series, aggregate what remains into every timeframe, then draw the
/// choice labels.
pub fn generate_round_with(
    difficulty: Difficulty,
    seed: u64,
    generator: &dyn ChoiceGenerator,
) -> Result<PredictionRound, EngineError> {
    let mut rng = Rng::with_seed(seed);

    let config = GenerationConfig {
        total_days: VISIBLE_DAYS + difficulty.future_days(),
        ..GenerationConfig::default()
    };
    let minute_bars = generate_series(&config, &mut rng)?;

    // Fixed once here, never re-derived after trimming.
    let answer = minute_bars
        .last()
        .map(|bar| bar.close)
        .ok_or(EngineError::EmptySeries)?;

    // Coarse frames are re-derived from the trimmed minute series rather
    // than sliced in place; a days-derived bar count is wrong for weekly
    // and monthly frames.
    let hidden = difficulty.future_days() as usize * MINUTES_PER_DAY;
    let visible = &minute_bars[..minute_bars.len() - hidden];
    let series = aggregate(visible)?;

    let choices = generator.choices(answer, &mut rng);
    verify_choice_contract(answer, &choices)?;

    Ok(PredictionRound {
        difficulty,
        seed,
        series,
        answer,
        choices,
    })
}

/// Check the labels a [`ChoiceGenerator`] returned: the answer's label
/// must appear and no label may repeat.
pub fn verify_choice_contract(answer: f64, choices: &[String]) -> Result<(), EngineError> {
    let answer_label = format_price(answer);
    if !choices.contains(&answer_label) {
        return Err(EngineError::ChoiceContract {
            reason: format!("answer label '{answer_label}' missing from choices"),
        });
    }
    for (index, label) in choices.iter().enumerate() {
        if choices[index + 1..].contains(label) {
            return Err(EngineError::ChoiceContract {
                reason: format!("duplicate label '{label}'"),
            });
        }
    }
    Ok(())
}
