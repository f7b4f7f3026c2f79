//! Synonym handling for tuple matching.
//!
//! Synonyms let two tuples match even when a word differs, as long as the
//! comparison word belongs to the base word's synonym group.
//!
//! # Examples
//!
//! ```
//! use plagiarism_detector::analysis::synonym::dictionary::SynonymIndex;
//!
//! let index = SynonymIndex::from_groups([
//!     vec!["quick", "fast", "rapid"],
//!     vec!["big", "large", "huge"],
//! ]);
//!
//! assert!(index.is_synonym("quick", "rapid"));
//! assert!(!index.is_synonym("quick", "large"));
//! ```

pub mod dictionary;
