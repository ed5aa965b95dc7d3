use crate::lexicon::{is_important_term, is_stop_word};

/// Lowercase the text, blank out punctuation and collapse whitespace.
///
/// Letters, digits, `_` and `-` survive; everything else becomes a separator.
pub fn normalize(text: &str) -> String {
    let blanked: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    blanked.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract candidate phrases from one text field.
///
/// Output is not deduplicated. Unigrams come first, then bigrams, then curated
/// trigrams, each group in text order. The index of a phrase in the returned
/// vector is its position for scoring.
pub fn extract_phrases(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let words: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();

    let mut phrases = Vec::new();

    for word in &words {
        if word.chars().count() > 3 && !is_stop_word(word) {
            phrases.push(word.to_string());
        }
    }

    for pair in words.windows(2) {
        if pair.iter().any(|w| is_stop_word(w)) {
            continue;
        }
        let bigram = pair.join(" ");
        if bigram.chars().count() > 5 {
            phrases.push(bigram);
        }
    }

    // Trigrams are only kept when they are curated terms
    for triple in words.windows(3) {
        if triple.iter().any(|w| is_stop_word(w)) {
            continue;
        }
        let trigram = triple.join(" ");
        if is_important_term(&trigram) {
            phrases.push(trigram);
        }
    }

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("  Hello,   World! "), "hello world");
        assert_eq!(normalize("state-of-the-art"), "state-of-the-art");
        assert_eq!(normalize("snake_case\tand\nlines"), "snake_case and lines");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!..."), "");
    }

    #[test]
    fn test_unigrams_then_bigrams() {
        let phrases = extract_phrases("Quantum Computing Breakthrough");
        assert_eq!(
            phrases,
            vec![
                "quantum",
                "computing",
                "breakthrough",
                "quantum computing",
                "computing breakthrough",
            ]
        );
    }

    #[test]
    fn test_short_words_skip_unigrams_but_join_bigrams() {
        // "ai" is too short on its own, but "ai breakthrough" qualifies
        let phrases = extract_phrases("AI Breakthrough");
        assert_eq!(phrases, vec!["breakthrough", "ai breakthrough"]);
    }

    #[test]
    fn test_bigram_length_floor() {
        // "ai ml" is exactly five characters
        let phrases = extract_phrases("ai ml");
        assert!(phrases.is_empty());
    }

    #[test]
    fn test_stop_words_break_bigrams() {
        let phrases = extract_phrases("climate and energy");
        assert_eq!(phrases, vec!["climate", "energy"]);
    }

    #[test]
    fn test_only_stop_words() {
        assert!(extract_phrases("The And Or But").is_empty());
        assert!(extract_phrases("").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let phrases = extract_phrases("market market");
        assert_eq!(phrases, vec!["market", "market", "market market"]);
    }

    #[test]
    fn test_trigrams_need_curated_match() {
        let phrases = extract_phrases("deep neural networks");
        assert!(phrases.iter().all(|p| p.split(' ').count() < 3));
    }
}
