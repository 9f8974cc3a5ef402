//! Text normalization and sentence splitting

use regex::Regex;

/// Sentences shorter than this are too thin to mask a term in.
const MIN_SENTENCE_LEN: usize = 51;

/// Collapse all whitespace runs (including newlines from page joins) to
/// single spaces.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split cleaned text into candidate sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace. Fragments
/// shorter than [`MIN_SENTENCE_LEN`] characters are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let breaker = Regex::new(r"[.!?]\s+").unwrap();

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in breaker.find_iter(text) {
        // Keep the terminator with the sentence
        push_sentence(&mut sentences, &text[start..m.start() + 1]);
        start = m.end();
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let s = raw.trim();
    if s.chars().count() >= MIN_SENTENCE_LEN {
        out.push(s.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("a  b\n\nc\td"), "a b c d");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_split_sentences_on_terminators() {
        let text = "The mitochondria is widely known as the powerhouse of the cell. \
                    Photosynthesis converts light energy into chemical energy in plants! \
                    Is the cytoskeleton responsible for maintaining cellular shape and structure? \
                    Short one.";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 3);
        assert!(sentences[0].ends_with("cell."));
        assert!(sentences[1].ends_with("plants!"));
        assert!(sentences[2].ends_with("structure?"));
    }

    #[test]
    fn test_split_sentences_drops_short_fragments() {
        let sentences = split_sentences("Too short. Also short!");
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_split_sentences_keeps_unterminated_tail() {
        let text = "This trailing fragment has no terminator but is definitely long enough to keep";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 1);
    }
}
