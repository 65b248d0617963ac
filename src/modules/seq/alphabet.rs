//! Nucleotide alphabets and sequence validation

use serde::{Deserialize, Serialize};

use super::sequence::{SequenceError, SequenceResult};

/// Sequence alphabet type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alphabet {
    Dna,
    Rna,
}

impl Alphabet {
    /// Symbols allowed in this alphabet (uppercase)
    pub fn letters(&self) -> &'static [u8] {
        match self {
            Alphabet::Dna => b"ACGT",
            Alphabet::Rna => b"ACGU",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Alphabet::Dna => "DNA",
            Alphabet::Rna => "RNA",
        }
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.letters().contains(&symbol)
    }
}

/// Uppercase `sequence` and check every symbol belongs to `alphabet`
///
/// Returns the normalised sequence.
pub fn validate_sequence(sequence: &str, alphabet: Alphabet) -> SequenceResult<String> {
    let upper = sequence.to_ascii_uppercase();

    if let Some((pos, c)) = upper
        .char_indices()
        .find(|&(_, c)| !c.is_ascii() || !alphabet.contains(c as u8))
    {
        return Err(SequenceError::InvalidSequence(format!(
            "'{}' at position {} is not a valid {} symbol",
            c,
            pos,
            alphabet.name()
        )));
    }

    Ok(upper)
}

/// Whether `sequence` only uses symbols of `alphabet`, ignoring case
pub fn is_valid_sequence(sequence: &str, alphabet: Alphabet) -> bool {
    validate_sequence(sequence, alphabet).is_ok()
}
