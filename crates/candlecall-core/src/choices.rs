//! Decoy price generation for the multiple-choice answer set.

use fastrand::Rng;

use crate::format::format_price;

/// Percentage draws attempted before falling back to cent stepping.
const MAX_PERCENT_DRAWS: usize = 64;

/// Produces the answer labels offered to the player for one round.
///
/// Implementations must return the true answer's two-decimal label
/// exactly once with no duplicates; the round pipeline re-checks both
/// before a round is released.
pub trait ChoiceGenerator {
    fn choices(&self, answer: f64, rng: &mut Rng) -> Vec<String>;
}

/// Default generator: decoys spread a few percent around the answer so
/// they read plausible next to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadChoices {
    /// Labels returned per round, answer included.
    pub count: usize,
    /// Smallest decoy offset as a fraction of the answer.
    pub min_offset: f64,
    /// Largest decoy offset as a fraction of the answer.
    pub max_offset: f64,
}

impl Default for SpreadChoices {
    fn default() -> Self {
        Self {
            count: 4,
            min_offset: 0.02,
            max_offset: 0.08,
        }
    }
}

impl ChoiceGenerator for SpreadChoices {
    fn choices(&self, answer: f64, rng: &mut Rng) -> Vec<String> {
        let mut labels = vec![format_price(answer)];
        let mut draws = 0;
        let mut cent_steps: u32 = 0;

        while labels.len() < self.count {
            let candidate = if draws < MAX_PERCENT_DRAWS {
                draws += 1;
                let magnitude = self.min_offset + rng.f64() * (self.max_offset - self.min_offset);
                let direction = if rng.bool() { 1.0 } else { -1.0 };
                format_price(answer * (1.0 + direction * magnitude))
            } else {
                // Sub-cent answers collide at two decimals on every
                // percentage draw; step whole cents upward instead.
                cent_steps += 1;
                format_price(answer + f64::from(cent_steps) * 0.01)
            };

            if !labels.contains(&candidate) {
                labels.push(candidate);
            }
        }

        rng.shuffle(&mut labels);
        labels
    }
}
