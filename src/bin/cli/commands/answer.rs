use anyhow::Result;

use cardforge::quiz::grade;

use crate::app::App;
use crate::OutputFormat;

/// One-shot grading of a single card, for scripted review flows
pub fn run(app: &App, number: u32, answer: &str, format: &OutputFormat) -> Result<()> {
    let card = app.find_card(number)?;
    let attempt = grade(&card, answer)?;
    let next_review = app.record_attempt(&card, &attempt)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&attempt)?);
        }
        OutputFormat::Plain => {
            if attempt.correct {
                println!("Correct. Next review: {}", next_review);
            } else {
                println!(
                    "Incorrect. The answer was: {}. Due again: {}",
                    card.masked_term, next_review
                );
            }
        }
    }

    Ok(())
}
