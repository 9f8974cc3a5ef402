use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

/// Show a card in full. Opening a card marks it as read.
pub fn run(app: &App, number: u32, format: &OutputFormat) -> Result<()> {
    let card = app.find_card(number)?;
    let card = app
        .store
        .mark_read(card.id)
        .context("Failed to mark card as read")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
        OutputFormat::Plain => {
            println!("Card #{}", card.position);
            println!("  Prompt:      {}", card.prompt);
            println!("  Answer:      {}", card.masked_term);
            println!("  Source:      {}", card.source_text);
            println!("  Difficulty:  {}", card.difficulty);
            println!("  Status:      read");
            println!("  Next review: {}", card.next_review);
            println!("  Created:     {}", card.created_at.format("%Y-%m-%d %H:%M"));
        }
    }

    Ok(())
}
