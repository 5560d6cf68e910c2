/// Closed set of English function words dropped from every token stream.
/// None of them collides with a surviving section marker token.
pub const STOP_WORDS: [&str; 33] = [
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// `token` must already be case folded
#[inline]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::section::SectionMarker;

    #[test]
    fn stop_words_are_lowercase() {
        for word in STOP_WORDS {
            assert_eq!(word, word.to_lowercase());
        }
    }

    #[test]
    fn markers_are_not_stop_words() {
        for marker in SectionMarker::ALL {
            for token in marker.surviving_tokens() {
                assert!(!is_stop_word(token), "{token} must survive filtering");
            }
        }
    }

    #[test]
    fn matches_whole_tokens_only() {
        assert!(is_stop_word("the"));
        assert!(!is_stop_word("theme"));
        assert!(!is_stop_word("The"));
    }
}
