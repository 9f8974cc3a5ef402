use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};

use cardforge::cards::{CardStore, Flashcard};
use cardforge::config::Settings;
use cardforge::quiz::{reschedule, AttemptLog, QuizAttempt};

/// Shared application state for CLI commands
pub struct App {
    pub store: CardStore,
    pub attempts: AttemptLog,
    pub settings: Settings,
}

impl App {
    /// Initialize from the given or default data directory
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(path) => path.to_path_buf(),
            None => CardStore::default_data_dir().context("Failed to resolve data directory")?,
        };

        let settings = Settings::load(&data_dir)
            .with_context(|| format!("Failed to read settings in {}", data_dir.display()))?;

        let store = CardStore::new(data_dir.clone());
        store.init().context("Failed to initialize card storage")?;

        let attempts = AttemptLog::new(data_dir);

        Ok(Self {
            store,
            attempts,
            settings,
        })
    }

    /// Resolve a display number (as printed by `list`) to a card
    pub fn find_card(&self, number: u32) -> Result<Flashcard> {
        let cards = self.store.list_cards().context("Failed to list cards")?;
        if cards.is_empty() {
            bail!("No flashcards yet. Run `cardforge import <pdf>` first.");
        }

        cards
            .into_iter()
            .find(|c| c.position == number)
            .with_context(|| format!("No card #{}. Run `cardforge list` to see card numbers.", number))
    }

    /// Record one graded attempt: append it to the log and reschedule the card
    pub fn record_attempt(&self, card: &Flashcard, attempt: &QuizAttempt) -> Result<NaiveDate> {
        self.attempts
            .append(attempt)
            .context("Failed to record attempt")?;

        let today = Utc::now().date_naive();
        let outcome = reschedule(card.difficulty, attempt.correct, today);

        let mut updated = card.clone();
        updated.difficulty = outcome.difficulty;
        updated.next_review = outcome.next_review;
        updated.updated_at = Utc::now();
        self.store
            .update_card(&updated)
            .context("Failed to reschedule card")?;

        Ok(outcome.next_review)
    }
}
