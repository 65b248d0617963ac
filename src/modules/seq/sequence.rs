//! Named sequence sets
//!
//! A [`SequenceSet`] maps unique names to sequences and remembers the order
//! in which names were first inserted. That order drives every matrix and
//! report built from the set.

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for sequence operations
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    #[error("Engine error: {0}")]
    EngineError(#[from] crate::engines::EngineError),
}

/// Result type for sequence operations
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Ordered mapping from sequence name to sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceSet {
    sequences: IndexMap<String, String>,
}

impl SequenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sequence under `name`
    ///
    /// If the name is already present its sequence is replaced, the entry
    /// keeps its original position, and the previous sequence is returned.
    pub fn insert(&mut self, name: impl Into<String>, sequence: impl Into<String>) -> Option<String> {
        self.sequences.insert(name.into(), sequence.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.sequences.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sequences.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.sequences.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(String::as_str)
    }

    /// `(name, sequence)` pairs in insertion order
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.sequences.iter()
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}

impl IntoIterator for SequenceSet {
    type Item = (String, String);
    type IntoIter = IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.into_iter()
    }
}

impl<N, S> FromIterator<(N, S)> for SequenceSet
where
    N: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        let mut set = SequenceSet::new();
        for (name, seq) in iter {
            set.insert(name, seq);
        }
        set
    }
}
