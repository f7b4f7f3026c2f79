//! Token types for text analysis.
//!
//! A [`Token`] is one word pulled out of a single line of text. Tokens never
//! contain whitespace and keep the case they had in the source line.
//!
//! # Examples
//!
//! ```
//! use plagiarism_detector::analysis::token::Token;
//!
//! let token = Token::new("world");
//! assert_eq!(token.text, "world");
//! assert_eq!(token.to_string(), "world");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single word after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,
}

impl Token {
    /// Create a new token with the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token { text: text.into() }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
