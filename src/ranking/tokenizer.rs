//! Text normalization and tokenization

use regex::Regex;

/// Minimum term length in characters. Shorter terms are dropped as noise.
const MIN_TERM_LENGTH: usize = 2;

/// Normalizes raw text into a sequence of lowercase terms.
///
/// The punctuation set is fixed: `. , / # ! $ % ^ & * ; : { } = - _ ` ~ ( )`.
/// Punctuation is removed, not replaced with a space, so "e-mail" becomes
/// "email". Any other character (digits, accented letters, other symbols)
/// is preserved.
pub struct Tokenizer {
    punctuation_regex: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        let punctuation_regex =
            Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()]").expect("Invalid punctuation regex");

        Self { punctuation_regex }
    }

    /// Tokenize text into lowercase terms of length >= 2.
    ///
    /// Duplicates are kept; deduplication happens when the caller builds a
    /// term set. Always succeeds, empty input yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        let stripped = self.punctuation_regex.replace_all(&lowered, "");

        // split_whitespace collapses runs of whitespace and drops empties
        stripped
            .split_whitespace()
            .filter(|term| term.chars().count() >= MIN_TERM_LENGTH)
            .map(|term| term.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_lowercase_and_punctuation() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_single_letter_terms_dropped() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("a bb ccc"), vec!["bb", "ccc"]);
    }

    #[test]
    fn test_whitespace_collapse() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("rust   \t\n  developer"),
            vec!["rust", "developer"]
        );
    }

    #[test]
    fn test_punctuation_removed_not_replaced() {
        let tokenizer = Tokenizer::new();
        // hyphen joins the surrounding fragments into one term
        assert_eq!(tokenizer.tokenize("e-mail"), vec!["email"]);
    }

    #[test]
    fn test_digits_and_accents_preserved() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("C++ año 2024"),
            vec!["c++", "año", "2024"]
        );
    }

    #[test]
    fn test_duplicates_kept() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("java java python"),
            vec!["java", "java", "python"]
        );
    }

    #[test]
    fn test_punctuation_only_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize(".,;:!() --- ~~~").is_empty());
    }
}
