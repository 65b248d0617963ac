//! Sequence module
//!
//! Alphabets, validation, and named sequence sets.

pub mod sequence;
pub mod alphabet;

/// Convenience re-exports
pub use sequence::{SequenceSet, SequenceError, SequenceResult};
pub use alphabet::{Alphabet, validate_sequence, is_valid_sequence};
