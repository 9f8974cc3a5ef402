//! Review rescheduling
//!
//! Difficulty runs from 1 (easiest) to 5 (hardest). A correct answer eases
//! the card one level and pushes the next review out by an interval keyed to
//! the new level; a wrong answer hardens it one level and makes it due again
//! tomorrow.

use chrono::{Duration, NaiveDate};

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Review interval in days per difficulty level (index = level - 1)
const INTERVAL_DAYS: [i64; 5] = [7, 5, 3, 2, 1];

/// Result of rescheduling a card after an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub difficulty: u8,
    pub next_review: NaiveDate,
}

/// Calculate the new difficulty and next review date after an attempt.
///
/// Out-of-range difficulties are clamped before adjusting.
pub fn reschedule(difficulty: u8, correct: bool, today: NaiveDate) -> ReviewOutcome {
    let difficulty = difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);

    if correct {
        let difficulty = (difficulty - 1).max(MIN_DIFFICULTY);
        let days = INTERVAL_DAYS[(difficulty - 1) as usize];
        ReviewOutcome {
            difficulty,
            next_review: today + Duration::days(days),
        }
    } else {
        ReviewOutcome {
            difficulty: (difficulty + 1).min(MAX_DIFFICULTY),
            next_review: today + Duration::days(1),
        }
    }
}
