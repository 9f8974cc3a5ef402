//! Data models for quizzes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One graded answer; immutable once recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: Uuid,
    pub card_id: Uuid,
    pub user_answer: String,
    pub correct: bool,
    /// Card difficulty at the time of the attempt
    pub difficulty: u8,
    pub attempted_at: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn new(card_id: Uuid, user_answer: String, correct: bool, difficulty: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            card_id,
            user_answer,
            correct,
            difficulty,
            attempted_at: Utc::now(),
        }
    }
}

/// Difficulty band a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DifficultyTier {
    All,
    /// Levels 1-2
    Easy,
    /// Level 3
    Medium,
    /// Levels 4-5
    Hard,
}

impl DifficultyTier {
    pub fn matches(&self, difficulty: u8) -> bool {
        match self {
            DifficultyTier::All => true,
            DifficultyTier::Easy => (1..=2).contains(&difficulty),
            DifficultyTier::Medium => difficulty == 3,
            DifficultyTier::Hard => (4..=5).contains(&difficulty),
        }
    }
}

/// Whether a quiz draws only due cards or the whole collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    Due,
    All,
}

/// Configuration for one quiz run
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub tier: DifficultyTier,
    pub scope: QuizScope,
    pub limit: usize,
}
