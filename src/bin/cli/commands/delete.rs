use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, numbers: &[u32], format: &OutputFormat) -> Result<()> {
    // Resolve every number before deleting anything, so one typo can't
    // leave a partial delete behind.
    let mut ids = Vec::with_capacity(numbers.len());
    for number in numbers {
        ids.push(app.find_card(*number)?.id);
    }
    ids.sort();
    ids.dedup();

    let deleted = app
        .store
        .delete_cards(&ids)
        .context("Failed to delete cards")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "deleted": deleted }));
        }
        OutputFormat::Plain => {
            println!("Deleted {} flashcards. Remaining cards renumbered.", deleted);
        }
    }

    Ok(())
}
