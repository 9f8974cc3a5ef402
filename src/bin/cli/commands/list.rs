use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

const PROMPT_WIDTH: usize = 60;

pub fn run(app: &App, search: Option<&str>, format: &OutputFormat) -> Result<()> {
    let cards = match search {
        Some(keyword) => app
            .store
            .search(keyword)
            .context("Failed to search cards")?,
        None => app.store.list_cards().context("Failed to list cards")?,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        OutputFormat::Plain => {
            if cards.is_empty() {
                match search {
                    Some(keyword) => println!("No flashcards match '{}'.", keyword),
                    None => println!("No flashcards yet. Import a PDF to create some."),
                }
                return Ok(());
            }

            println!(
                "{:<4} {:<5} {:<5} {:<10} Prompt",
                "#", "Read", "Lvl", "Due"
            );
            println!(
                "{} {} {} {} {}",
                "\u{2500}".repeat(4),
                "\u{2500}".repeat(5),
                "\u{2500}".repeat(5),
                "\u{2500}".repeat(10),
                "\u{2500}".repeat(PROMPT_WIDTH)
            );

            for card in &cards {
                let prompt = if card.prompt.chars().count() > PROMPT_WIDTH {
                    let head: String = card.prompt.chars().take(PROMPT_WIDTH - 3).collect();
                    format!("{}...", head)
                } else {
                    card.prompt.clone()
                };

                println!(
                    "{:<4} {:<5} {:<5} {:<10} {}",
                    card.position,
                    if card.is_read { "yes" } else { "no" },
                    card.difficulty,
                    card.next_review.to_string(),
                    prompt
                );
            }

            println!("\n{} flashcards", cards.len());
        }
    }

    Ok(())
}
