//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{PlagiarismError, Result};

/// Maximal runs of ASCII word characters or apostrophes.
pub const DEFAULT_WORD_PATTERN: &str = r"[0-9A-Za-z_']+";

/// A regex-based tokenizer that extracts every match of its pattern as a token.
///
/// Text between matches (punctuation, whitespace) is discarded. Case is kept,
/// so `"Happy"` and `"happy"` are different tokens.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with [`DEFAULT_WORD_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_WORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| PlagiarismError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .map(|mat| Token::new(mat.as_str()))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &RegexTokenizer, line: &str) -> Vec<String> {
        tokenizer
            .tokenize(line)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens, vec![Token::new("hello"), Token::new("world")]);
    }

    #[test]
    fn test_apostrophes_and_punctuation() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(
            texts(&tokenizer, "Don't stop -- it's fine, isn't it?"),
            vec!["Don't", "stop", "it's", "fine", "isn't", "it"]
        );
    }

    #[test]
    fn test_case_is_preserved() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "Happy HAPPY happy"), vec!["Happy", "HAPPY", "happy"]);
    }

    #[test]
    fn test_empty_and_punctuation_only_lines() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert!(texts(&tokenizer, "").is_empty());
        assert!(texts(&tokenizer, "  ... !!! ,,, ").is_empty());
    }

    #[test]
    fn test_digits_and_underscores_are_word_characters() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "run_42 times"), vec!["run_42", "times"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("[unclosed").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
        assert_eq!(RegexTokenizer::default().pattern(), DEFAULT_WORD_PATTERN);
    }
}
