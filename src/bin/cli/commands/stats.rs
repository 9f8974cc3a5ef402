use anyhow::{Context, Result};
use chrono::Utc;

use cardforge::progress::snapshot;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let cards = app.store.list_cards().context("Failed to list cards")?;
    let attempts = app.attempts.list().context("Failed to read attempt log")?;
    let today = Utc::now().date_naive();

    let snap = snapshot(&cards, &attempts, today);

    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&snap)?;
            value["recommendation"] = serde_json::Value::String(snap.recommendation());
            value["accuracy"] = serde_json::json!(snap.accuracy());
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            println!("Flashcards");
            println!("  Total:       {}", snap.total_cards);
            println!(
                "  Read:        {} ({:.1}%)",
                snap.read_cards,
                snap.read_ratio()
            );
            println!("  Unread:      {}", snap.unread_cards);
            println!("  Due today:   {}", snap.due_today);

            if snap.total_cards > 0 {
                println!("\nDifficulty distribution");
                for (i, count) in snap.difficulty_counts.iter().enumerate() {
                    if *count > 0 {
                        let pct = *count as f64 / snap.total_cards as f64 * 100.0;
                        println!("  Level {}: {:>4} ({:.1}%)", i + 1, count, pct);
                    }
                }
            }

            println!("\nQuiz history");
            println!("  Attempts:    {}", snap.total_attempts);
            println!(
                "  Correct:     {} ({:.1}%)",
                snap.correct_attempts,
                snap.accuracy()
            );
            println!(
                "  Today:       {} answered, {} correct",
                snap.attempts_today, snap.correct_today
            );
            println!("  Streak:      {} days", snap.streak_days);

            println!("\n{}", snap.recommendation());
        }
    }

    Ok(())
}
