//! Fixed-window resampling of minute bars into coarser timeframes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Bar, Timeframe};
use crate::EngineError;

/// Maximum relative spread allowed between terminal closes across
/// timeframes.
pub const CLOSE_TOLERANCE: f64 = 1e-4;

/// Resample minute bars into `timeframe` by fixed-size chunking from the
/// first bar. The trailing chunk is kept even when partial.
///
/// Input order is not trusted: bars are sorted by timestamp before
/// chunking, so unordered input still yields window-aligned output.
pub fn resample(bars: &[Bar], timeframe: Timeframe) -> Vec<Bar> {
    let mut ordered = bars.to_vec();
    ordered.sort_by_key(|bar| bar.ts);

    ordered
        .chunks(timeframe.minutes_per_bar())
        .map(|chunk| {
            let first = chunk[0];
            let last = chunk[chunk.len() - 1];
            // Field invariants hold by construction: the chunk-wide
            // extremes bound every member bar's body.
            Bar {
                ts: first.ts,
                open: first.open,
                high: chunk.iter().map(|bar| bar.high).fold(first.high, f64::max),
                low: chunk.iter().map(|bar| bar.low).fold(first.low, f64::min),
                close: last.close,
            }
        })
        .collect()
}

/// One bar series per supported timeframe, all derived from the same
/// minute data. Serializes as a map keyed by timeframe label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesSet {
    frames: BTreeMap<Timeframe, Vec<Bar>>,
}

impl SeriesSet {
    /// Resample `minute_bars` into every supported timeframe.
    pub fn resample_all(minute_bars: &[Bar]) -> Self {
        let frames = Timeframe::ALL
            .iter()
            .map(|&timeframe| (timeframe, resample(minute_bars, timeframe)))
            .collect();
        Self { frames }
    }

    /// Bars for a single timeframe.
    pub fn get(&self, timeframe: Timeframe) -> Option<&[Bar]> {
        self.frames.get(&timeframe).map(Vec::as_slice)
    }

    /// Iterate frames from finest to coarsest.
    pub fn iter(&self) -> impl Iterator<Item = (Timeframe, &[Bar])> {
        self.frames
            .iter()
            .map(|(&timeframe, bars)| (timeframe, bars.as_slice()))
    }

    /// Close of the last bar in the given timeframe, if any.
    pub fn terminal_close(&self, timeframe: Timeframe) -> Option<f64> {
        self.get(timeframe)?.last().map(|bar| bar.close)
    }

    /// Every timeframe's trailing chunk ends on the same minute bar, so
    /// terminal closes must agree. A relative spread beyond
    /// [`CLOSE_TOLERANCE`] means the windows drifted out of alignment.
    fn verify_terminal_closes(&self) -> Result<(), EngineError> {
        let reference = self
            .terminal_close(Timeframe::OneMinute)
            .ok_or(EngineError::EmptySeries)?;

        for (timeframe, bars) in self.iter() {
            let close = match bars.last() {
                Some(bar) => bar.close,
                None => return Err(EngineError::EmptySeries),
            };
            if (close - reference).abs() > CLOSE_TOLERANCE * reference.abs() {
                return Err(EngineError::InconsistentAggregation {
                    timeframe,
                    close,
                    reference,
                    tolerance: CLOSE_TOLERANCE,
                });
            }
        }
        Ok(())
    }
}

/// Build a verified [`SeriesSet`] from minute bars.
pub fn aggregate(minute_bars: &[Bar]) -> Result<SeriesSet, EngineError> {
    if minute_bars.is_empty() {
        return Err(EngineError::EmptySeries);
    }
    let set = SeriesSet::resample_all(minute_bars);
    set.verify_terminal_closes()?;
    Ok(set)
}
