//! # Quick Round Example
//!
//! Generates one complete prediction round and prints what the player
//! would see, then reveals the withheld answer.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example quick_round
//! ```
//!
//! ## What it demonstrates
//!
//! - Generating a seeded, reproducible round
//! - Reading one timeframe out of the aggregated series
//! - Presenting the shuffled choice labels

use candlecall_core::{chart_bars, format_price, generate_round, Difficulty, TimeLabel, Timeframe};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let round = generate_round(Difficulty::Medium, Some(2024))?;

    println!("🎲 Round seed:  {}", round.seed);
    println!(
        "🎯 Difficulty:  {} ({} hidden day(s))",
        round.difficulty,
        round.difficulty.future_days()
    );

    let daily = round
        .series
        .get(Timeframe::OneDay)
        .ok_or("daily frame missing")?;
    let recent = chart_bars(daily, Timeframe::OneDay);

    println!("\n📅 Last visible daily bars:");
    println!("┌────────────┬────────┬────────┬────────┬────────┐");
    println!("│ Date       │ Open   │ High   │ Low    │ Close  │");
    println!("├────────────┼────────┼────────┼────────┼────────┤");
    for bar in recent.iter().rev().take(5) {
        let date = match &bar.time {
            TimeLabel::Date(date) => date.clone(),
            TimeLabel::Unix(ts) => ts.to_string(),
        };
        println!(
            "│ {} │ {:6.2} │ {:6.2} │ {:6.2} │ {:6.2} │",
            date, bar.open, bar.high, bar.low, bar.close
        );
    }
    println!("└────────────┴────────┴────────┴────────┴────────┘");

    println!(
        "\n❓ Where does the price close {} day(s) later?",
        round.difficulty.future_days()
    );
    for (index, label) in round.choices.iter().enumerate() {
        println!("  {}. ${}", index + 1, label);
    }

    println!("\n✅ Answer: ${}", format_price(round.answer));

    Ok(())
}
