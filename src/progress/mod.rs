//! On-demand study analytics
//!
//! Snapshots are derived from the card collection and the attempt log each
//! time they are requested; nothing here is persisted.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::cards::Flashcard;
use crate::quiz::QuizAttempt;

/// Aggregated study metrics at a point in time
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub total_cards: usize,
    pub read_cards: usize,
    pub unread_cards: usize,
    pub due_today: usize,
    /// Card counts per difficulty level 1-5 (index = level - 1)
    pub difficulty_counts: [usize; 5],
    pub total_attempts: usize,
    pub correct_attempts: usize,
    pub attempts_today: usize,
    pub correct_today: usize,
    /// Consecutive days with at least one attempt, ending today or yesterday
    pub streak_days: u32,
}

impl ProgressSnapshot {
    /// Overall answer accuracy in percent
    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            0.0
        } else {
            self.correct_attempts as f64 / self.total_attempts as f64 * 100.0
        }
    }

    /// Share of the collection that has been read, in percent
    pub fn read_ratio(&self) -> f64 {
        if self.total_cards == 0 {
            0.0
        } else {
            self.read_cards as f64 / self.total_cards as f64 * 100.0
        }
    }

    /// One-line study suggestion derived from the counts
    pub fn recommendation(&self) -> String {
        if self.total_cards == 0 {
            "No flashcards yet. Import a PDF to get started.".to_string()
        } else if self.due_today == 0 && self.unread_cards == 0 {
            "You're all caught up.".to_string()
        } else if self.unread_cards > 0 {
            format!(
                "You have {} unread cards. Time to explore new material.",
                self.unread_cards
            )
        } else {
            format!(
                "You have {} cards due for review. Time to study.",
                self.due_today
            )
        }
    }
}

/// Compute a snapshot from the current cards and attempt history
pub fn snapshot(
    cards: &[Flashcard],
    attempts: &[QuizAttempt],
    today: NaiveDate,
) -> ProgressSnapshot {
    let mut snap = ProgressSnapshot {
        total_cards: cards.len(),
        total_attempts: attempts.len(),
        ..ProgressSnapshot::default()
    };

    for card in cards {
        if card.is_read {
            snap.read_cards += 1;
        } else {
            snap.unread_cards += 1;
        }
        if card.is_due(today) {
            snap.due_today += 1;
        }
        let level = card.difficulty.clamp(1, 5) as usize;
        snap.difficulty_counts[level - 1] += 1;
    }

    let mut study_days = BTreeSet::new();
    for attempt in attempts {
        if attempt.correct {
            snap.correct_attempts += 1;
        }
        let day = attempt.attempted_at.date_naive();
        study_days.insert(day);
        if day == today {
            snap.attempts_today += 1;
            if attempt.correct {
                snap.correct_today += 1;
            }
        }
    }

    // Streak: walk backwards day by day; a day without attempts breaks it.
    // Today is allowed to be empty so the streak survives until midnight.
    let mut cursor = if study_days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };
    while study_days.contains(&cursor) {
        snap.streak_days += 1;
        cursor -= Duration::days(1);
    }

    snap
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn card(difficulty: u8, is_read: bool, due_in_days: i64, today: NaiveDate) -> Flashcard {
        let mut c = Flashcard::new(
            "The _____ of the cell".to_string(),
            "powerhouse".to_string(),
            "The powerhouse of the cell".to_string(),
        );
        c.difficulty = difficulty;
        c.is_read = is_read;
        c.next_review = today + Duration::days(due_in_days);
        c
    }

    fn attempt_on(day: NaiveDate, correct: bool) -> QuizAttempt {
        let mut a = QuizAttempt::new(Uuid::new_v4(), "x".to_string(), correct, 1);
        a.attempted_at = day.and_hms_opt(12, 0, 0).unwrap().and_utc();
        a
    }

    #[test]
    fn test_card_counts_are_consistent() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let cards = vec![
            card(1, true, 0, today),
            card(3, false, 2, today),
            card(5, false, -1, today),
        ];

        let snap = snapshot(&cards, &[], today);
        assert_eq!(snap.total_cards, 3);
        assert_eq!(snap.read_cards + snap.unread_cards, snap.total_cards);
        assert_eq!(snap.due_today, 2);
        assert_eq!(snap.difficulty_counts, [1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_accuracy_and_today_counts() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let attempts = vec![
            attempt_on(today, true),
            attempt_on(today, false),
            attempt_on(today - Duration::days(1), true),
        ];

        let snap = snapshot(&[], &attempts, today);
        assert_eq!(snap.total_attempts, 3);
        assert_eq!(snap.correct_attempts, 2);
        assert_eq!(snap.attempts_today, 2);
        assert_eq!(snap.correct_today, 1);
        assert!((snap.accuracy() - 66.66).abs() < 0.1);
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let attempts = vec![
            attempt_on(today, true),
            attempt_on(today - Duration::days(1), true),
            attempt_on(today - Duration::days(2), false),
            // gap at day 3
            attempt_on(today - Duration::days(4), true),
        ];

        assert_eq!(snapshot(&[], &attempts, today).streak_days, 3);
    }

    #[test]
    fn test_streak_survives_an_empty_today() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let attempts = vec![attempt_on(today - Duration::days(1), true)];
        assert_eq!(snapshot(&[], &attempts, today).streak_days, 1);
    }

    #[test]
    fn test_recommendation_priorities() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

        assert!(snapshot(&[], &[], today)
            .recommendation()
            .contains("Import a PDF"));

        let caught_up = vec![card(1, true, 5, today)];
        assert_eq!(
            snapshot(&caught_up, &[], today).recommendation(),
            "You're all caught up."
        );

        let unread = vec![card(1, false, 5, today)];
        assert!(snapshot(&unread, &[], today)
            .recommendation()
            .contains("unread"));

        let due = vec![card(1, true, 0, today)];
        assert!(snapshot(&due, &[], today)
            .recommendation()
            .contains("due for review"));
    }
}
