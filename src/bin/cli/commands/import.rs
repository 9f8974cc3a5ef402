use std::path::Path;

use anyhow::{Context, Result};

use cardforge::cards::generate_cards;
use cardforge::extract::{clean_text, extract_text, split_sentences};

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &App,
    pdf: &Path,
    count: Option<usize>,
    show_text: bool,
    format: &OutputFormat,
) -> Result<()> {
    let raw = extract_text(pdf)
        .with_context(|| format!("Failed to extract text from {}", pdf.display()))?;
    let cleaned = clean_text(&raw);

    if show_text {
        println!("{}\n", cleaned);
    }

    let sentences = split_sentences(&cleaned);
    let count = count.unwrap_or(app.settings.cards_per_import);
    let mut cards = generate_cards(&sentences, count);

    if cards.is_empty() {
        println!("No flashcards could be generated. Try a file with more substantive text.");
        return Ok(());
    }

    app.store
        .add_cards(&mut cards)
        .context("Failed to save cards")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        OutputFormat::Plain => {
            println!("Generated {} flashcards:\n", cards.len());
            for card in &cards {
                println!("#{:<3} {}", card.position, card.prompt);
                println!("     answer: {}", card.masked_term);
            }
        }
    }

    Ok(())
}
