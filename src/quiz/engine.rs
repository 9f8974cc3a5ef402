//! Card selection, grading, and multiple-choice building

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use crate::cards::Flashcard;

use super::models::{QuizAttempt, QuizConfig, QuizScope};

/// Rejected answer payloads
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Answer must not be empty")]
    EmptyAnswer,

    #[error("No card with id {0} in this quiz")]
    UnknownCard(Uuid),
}

/// Options shown in a multiple-choice question
const CHOICE_COUNT: usize = 4;

/// Fillers used when the distractor pool runs short
const GENERIC_CHOICES: &[&str] = &["All of the above", "None of the above", "Not sure"];

/// Pick the cards for a quiz: filter by tier and scope, shuffle, cap at the
/// configured limit.
pub fn select_cards(
    cards: &[Flashcard],
    config: &QuizConfig,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<Flashcard> {
    let mut picked: Vec<Flashcard> = cards
        .iter()
        .filter(|c| config.tier.matches(c.difficulty))
        .filter(|c| match config.scope {
            QuizScope::Due => c.is_due(today),
            QuizScope::All => true,
        })
        .cloned()
        .collect();

    picked.shuffle(rng);
    picked.truncate(config.limit);
    picked
}

/// Grade one answer against a card.
///
/// The answer is trimmed; an empty payload is rejected. Correctness is
/// case-insensitive exact match against the masked term, no partial credit.
pub fn grade(card: &Flashcard, answer: &str) -> Result<QuizAttempt, ValidationError> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyAnswer);
    }

    let correct = trimmed.to_lowercase() == card.masked_term.to_lowercase();
    Ok(QuizAttempt::new(
        card.id,
        trimmed.to_string(),
        correct,
        card.difficulty,
    ))
}

/// Grade an answer addressed to a card id within a set
pub fn grade_in(
    cards: &[Flashcard],
    card_id: Uuid,
    answer: &str,
) -> Result<QuizAttempt, ValidationError> {
    let card = cards
        .iter()
        .find(|c| c.id == card_id)
        .ok_or(ValidationError::UnknownCard(card_id))?;
    grade(card, answer)
}

/// Build a shuffled multiple-choice list for a card: masked terms of other
/// cards as distractors, padded with generic fillers up to four options.
pub fn build_choices(card: &Flashcard, pool: &[Flashcard], rng: &mut impl Rng) -> Vec<String> {
    let mut distractors: Vec<String> = pool
        .iter()
        .filter(|c| c.id != card.id)
        .map(|c| c.masked_term.clone())
        .filter(|t| !t.is_empty() && t != &card.masked_term)
        .collect();
    distractors.sort();
    distractors.dedup();
    distractors.shuffle(rng);
    distractors.truncate(CHOICE_COUNT - 1);

    let mut options = distractors;
    options.push(card.masked_term.clone());
    for filler in GENERIC_CHOICES {
        if options.len() >= CHOICE_COUNT {
            break;
        }
        options.push((*filler).to_string());
    }

    options.shuffle(rng);
    options
}
