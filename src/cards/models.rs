//! Data model for flashcards

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fill-in-the-blank study card derived from one sentence of source text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: Uuid,
    /// The source sentence with the masked term replaced by `_____`
    pub prompt: String,
    /// The hidden term; non-empty and present verbatim in `source_text`
    pub masked_term: String,
    /// The sentence the card was derived from
    pub source_text: String,
    /// 1 (easiest) to 5 (hardest)
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
    /// Whether the card has been opened at least once
    #[serde(default)]
    pub is_read: bool,
    /// 1-based display number, renumbered compactly after deletions
    #[serde(default)]
    pub position: u32,
    /// Next date the card comes up in a due-cards quiz
    pub next_review: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_difficulty() -> u8 {
    1
}

impl Flashcard {
    /// New cards start at the easiest level and are due immediately.
    pub fn new(prompt: String, masked_term: String, source_text: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            prompt,
            masked_term,
            source_text,
            difficulty: default_difficulty(),
            is_read: false,
            position: 0,
            next_review: now.date_naive(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the card is due for review on `today`
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_review <= today
    }
}
