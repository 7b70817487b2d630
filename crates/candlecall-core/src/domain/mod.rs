//! Canonical domain types for candlecall series data.
//!
//! All types validate their invariants at construction time and carry
//! full serde support; timestamps stay numeric epoch seconds throughout.

mod bar;
mod timeframe;

pub use bar::Bar;
pub use timeframe::{Timeframe, MINUTES_PER_DAY};
