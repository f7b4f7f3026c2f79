//! Synonym index mapping each word to the group it was first defined in.
//!
//! The source format is line oriented: every line is a whitespace-separated
//! group of mutually synonymous words. A word belongs to the first group it
//! appears in; later lines that mention it again still form their own group
//! for their other words, but do not rebind the repeated word.
//!
//! ```text
//! happy glad joyful     happy  -> {happy, glad, joyful}
//! glad pleased          glad   -> {happy, glad, joyful}   (first wins)
//!                       pleased -> {glad, pleased}
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::{debug, info};

use crate::analysis::lines::{read_lossy, split_lines};
use crate::error::{InputRole, PlagiarismError, Result};

/// An immutable set of interchangeable words.
pub type SynonymGroup = AHashSet<String>;

/// Word to synonym-group lookup with first-wins semantics.
///
/// Groups are shared through [`Arc`]: every word first seen on the same line
/// points at the same group.
#[derive(Debug, Clone, Default)]
pub struct SynonymIndex {
    index: AHashMap<String, Arc<SynonymGroup>>,
    group_count: usize,
}

impl SynonymIndex {
    /// Create an empty index. Every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from groups, in order.
    pub fn from_groups<I, G, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::new();
        for group in groups {
            index.add_group(group);
        }
        index
    }

    /// Build an index from synonym-file text, one group per line.
    pub fn from_text(text: &str) -> Self {
        Self::from_groups(split_lines(text).into_iter().map(str::split_whitespace))
    }

    /// Build an index from synonym-file content.
    ///
    /// Invalid UTF-8 is decoded as U+FFFD rather than rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::from_text(&read_lossy(reader)?))
    }

    /// Read a synonym file from disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Generating the synonym map from {}", path.display());

        let file = File::open(path)
            .map_err(|e| PlagiarismError::file_not_found(InputRole::Synonyms, path, e))?;
        let index = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            PlagiarismError::Io(source) => {
                PlagiarismError::file_not_found(InputRole::Synonyms, path, source)
            }
            other => other,
        })?;

        debug!(
            "Synonym map has {} words in {} groups",
            index.len(),
            index.group_count()
        );
        Ok(index)
    }

    /// Record one group. Words already indexed keep their earlier group.
    ///
    /// Empty groups are ignored.
    pub fn add_group<G, S>(&mut self, words: G)
    where
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return;
        }

        let group: Arc<SynonymGroup> = Arc::new(words.iter().cloned().collect());
        self.group_count += 1;
        for word in words {
            self.index
                .entry(word)
                .or_insert_with(|| Arc::clone(&group));
        }
    }

    /// The group a word was first defined in.
    pub fn get_group(&self, word: &str) -> Option<&SynonymGroup> {
        self.index.get(word).map(|group| group.as_ref())
    }

    /// Whether `other` is in the group keyed by `word`.
    ///
    /// The lookup is directional: only `word` is used as a key.
    pub fn is_synonym(&self, word: &str, other: &str) -> bool {
        self.index
            .get(word)
            .is_some_and(|group| group.contains(other))
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of non-empty groups read, including ones whose words were all
    /// already indexed.
    pub fn group_count(&self) -> usize {
        self.group_count
    }
}
