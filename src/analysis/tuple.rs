//! Word tuples: fixed-size windows over the tokens of a line.
//!
//! Tuples never cross a line boundary. A line with fewer tokens than the tuple
//! size contributes nothing, so every tuple in a [`TupleList`] has exactly
//! `tuple_size` words.
//!
//! ```text
//! Line: "I am happy today", tuple_size = 2
//!
//!   [I, am]  [am, happy]  [happy, today]
//! ```
//!
//! # Examples
//!
//! ```
//! use plagiarism_detector::analysis::tuple::TupleBuilder;
//!
//! let builder = TupleBuilder::new(2).unwrap();
//! let list = builder.build_text("I am happy today").unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.tuples()[1].words(), ["am", "happy"]);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::lines::{read_lossy, split_lines};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::{InputRole, PlagiarismError, Result};

/// An ordered, fixed-length sequence of words taken from one line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tuple {
    words: Vec<String>,
}

impl Tuple {
    /// Create a tuple from its words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Tuple {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The words of this tuple in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the tuple.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.words.join(", "))
    }
}

/// All tuples of one document, in line order then window order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TupleList {
    tuple_size: usize,
    tuples: Vec<Tuple>,
}

impl TupleList {
    /// Create an empty list for tuples of the given size.
    pub fn new(tuple_size: usize) -> Self {
        TupleList {
            tuple_size,
            tuples: Vec::new(),
        }
    }

    /// The configured tuple size.
    pub fn tuple_size(&self) -> usize {
        self.tuple_size
    }

    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tuple> {
        self.tuples.iter()
    }

    /// Append the tuples of one line, keeping their order.
    pub fn extend<I: IntoIterator<Item = Tuple>>(&mut self, tuples: I) {
        self.tuples.extend(tuples);
    }
}

impl<'a> IntoIterator for &'a TupleList {
    type Item = &'a Tuple;
    type IntoIter = std::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}

/// Slide a window of `tuple_size` over `tokens`.
///
/// Produces `tokens.len() - tuple_size + 1` tuples, or none when the line is
/// shorter than the window (or the window is empty).
pub fn windows<S: AsRef<str>>(tokens: &[S], tuple_size: usize) -> Vec<Tuple> {
    if tuple_size == 0 || tokens.len() < tuple_size {
        return Vec::new();
    }

    tokens
        .windows(tuple_size)
        .map(|window| Tuple::new(window.iter().map(|w| w.as_ref())))
        .collect()
}

/// Turns text into a [`TupleList`] using a tokenizer and a fixed tuple size.
#[derive(Clone)]
pub struct TupleBuilder {
    tuple_size: usize,
    tokenizer: Arc<dyn Tokenizer>,
}

impl fmt::Debug for TupleBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TupleBuilder")
            .field("tuple_size", &self.tuple_size)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl TupleBuilder {
    /// Create a builder with the default word tokenizer.
    ///
    /// # Errors
    ///
    /// Returns an error if `tuple_size` is 0.
    pub fn new(tuple_size: usize) -> Result<Self> {
        Self::with_tokenizer(tuple_size, Arc::new(RegexTokenizer::new()?))
    }

    /// Create a builder with a custom tokenizer.
    pub fn with_tokenizer(tuple_size: usize, tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        if tuple_size == 0 {
            return Err(PlagiarismError::invalid_argument(
                "tuple size must be at least 1",
            ));
        }
        Ok(TupleBuilder {
            tuple_size,
            tokenizer,
        })
    }

    pub fn tuple_size(&self) -> usize {
        self.tuple_size
    }

    /// Build the tuples of a single line.
    pub fn build_line(&self, line: &str) -> Result<Vec<Tuple>> {
        let words: Vec<String> = self.tokenizer.tokenize(line)?.map(|t| t.text).collect();
        Ok(windows(&words, self.tuple_size))
    }

    /// Build the tuples of a whole text, one line at a time.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn build_text(&self, text: &str) -> Result<TupleList> {
        let mut list = TupleList::new(self.tuple_size);
        for line in split_lines(text) {
            list.extend(self.build_line(line)?);
        }
        Ok(list)
    }

    /// Build the tuples of everything a reader yields.
    ///
    /// Invalid UTF-8 is decoded as U+FFFD rather than rejected.
    pub fn build_reader<R: Read>(&self, reader: R) -> Result<TupleList> {
        self.build_text(&read_lossy(reader)?)
    }

    /// Read a document from disk and build its tuples.
    ///
    /// `role` only shapes the error: an unreadable file is reported as the base
    /// or comparison document it was meant to be.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P, role: InputRole) -> Result<TupleList> {
        let path = path.as_ref();
        info!("Generating the tuple list for the {role} file {}", path.display());

        let file = File::open(path).map_err(|e| PlagiarismError::file_not_found(role, path, e))?;
        let list = self
            .build_reader(BufReader::new(file))
            .map_err(|e| match e {
                PlagiarismError::Io(source) => PlagiarismError::file_not_found(role, path, source),
                other => other,
            })?;

        debug!(
            "Built {} tuples of size {} from {}",
            list.len(),
            self.tuple_size,
            path.display()
        );
        Ok(list)
    }
}
