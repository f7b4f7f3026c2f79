//! Text analysis: tokenization, tuple building and synonym lookup.
//!
//! Raw lines go through a [`tokenizer::Tokenizer`], the resulting words are
//! windowed into [`tuple::Tuple`]s, and a [`synonym::dictionary::SynonymIndex`]
//! decides which differing words still count as equal.

pub mod lines;
pub mod synonym;
pub mod token;
pub mod tokenizer;
pub mod tuple;
