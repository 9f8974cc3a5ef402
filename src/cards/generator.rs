//! Fill-in-the-blank card generation
//!
//! Heuristic term masking: for each sentence with enough substance, pick the
//! most salient word (longest, ties broken by closeness to the sentence
//! midpoint), skipping function words and the sentence edges, and blank out
//! its first occurrence.

use super::models::Flashcard;

/// The blank shown in card prompts
pub const BLANK: &str = "_____";

/// A sentence needs at least this many tokens to be maskable
const MIN_TOKENS: usize = 8;

/// Terms shorter than this carry too little signal to quiz on
const MIN_TERM_LEN: usize = 5;

/// Function words never worth masking
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "which", "from", "have", "has", "had",
];

/// Punctuation stripped from token edges before scoring
const EDGE_PUNCT: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '(', ')', '[', ']', '{', '}',
];

/// Derive up to `limit` flashcards from candidate sentences.
///
/// Sentences that yield no maskable term are skipped without consuming the
/// budget. Returns an empty vec (not an error) when nothing qualifies.
pub fn generate_cards(sentences: &[String], limit: usize) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    for sentence in sentences {
        if cards.len() >= limit {
            break;
        }
        if let Some(card) = mask_sentence(sentence) {
            cards.push(card);
        }
    }
    cards
}

/// Mask the most salient term of one sentence, if it has one.
pub fn mask_sentence(sentence: &str) -> Option<Flashcard> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() < MIN_TOKENS {
        return None;
    }

    let mid = words.len() / 2;
    let mut best: Option<(usize, &str)> = None;

    for (i, word) in words.iter().enumerate() {
        // A blank at the very start or end of a sentence reads badly
        if i <= 2 || i >= words.len() - 2 {
            continue;
        }

        let term = word.trim_matches(EDGE_PUNCT);
        if term.chars().count() < MIN_TERM_LEN {
            continue;
        }
        if STOPWORDS.contains(&term.to_lowercase().as_str()) {
            continue;
        }

        let better = match best {
            None => true,
            Some((best_i, best_term)) => {
                let len = term.chars().count();
                let best_len = best_term.chars().count();
                len > best_len || (len == best_len && i.abs_diff(mid) < best_i.abs_diff(mid))
            }
        };
        if better {
            best = Some((i, term));
        }
    }

    let (idx, term) = best?;
    let prompt = sentence.replacen(words[idx], BLANK, 1);
    Some(Flashcard::new(
        prompt,
        term.to_string(),
        sentence.to_string(),
    ))
}
