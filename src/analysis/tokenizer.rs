//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split one line of text into word tokens. They are the first stage
//! of tuple building: every tuple is a window over the tokens of a single line.
//!
//! # Examples
//!
//! ```
//! use plagiarism_detector::analysis::tokenizer::Tokenizer;
//! use plagiarism_detector::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("It's a test.").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "It's");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared with the
/// parallel scorer and across builders.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use plagiarism_detector::analysis::token::{Token, TokenStream};
/// use plagiarism_detector::analysis::tokenizer::Tokenizer;
/// use plagiarism_detector::error::Result;
///
/// struct WhitespaceTokenizer;
///
/// impl Tokenizer for WhitespaceTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split_whitespace()
///             .map(Token::new)
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "whitespace"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod regex;
