//! Codon translation with the standard genetic code

use indexmap::IndexMap;

use super::{ComputeError, ComputeResult};

/// Standard genetic code (NCBI table 1), codons ordered T, C, A, G per position
const STANDARD_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'T' | b'U' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Translate one DNA or RNA codon to its one-letter amino acid
///
/// Stop codons translate to `*`. Returns `None` for anything that is not
/// three recognised bases.
pub fn translate_codon(codon: &[u8]) -> Option<u8> {
    if codon.len() != 3 {
        return None;
    }

    let idx = base_index(codon[0])? * 16 + base_index(codon[1])? * 4 + base_index(codon[2])?;
    Some(STANDARD_CODE[idx])
}

/// Translate a sequence codon by codon from its first base
///
/// Trailing bases that do not form a whole codon are ignored. Translation
/// continues through stop codons.
pub fn translate(sequence: &[u8]) -> ComputeResult<Vec<u8>> {
    sequence
        .chunks_exact(3)
        .enumerate()
        .map(|(i, codon)| {
            translate_codon(codon).ok_or_else(|| {
                ComputeError::InvalidInput(format!(
                    "Untranslatable codon {:?} at position {}",
                    String::from_utf8_lossy(codon),
                    i * 3
                ))
            })
        })
        .collect()
}

/// The three forward reading frames of a sequence
pub fn reading_frames(sequence: &[u8]) -> Vec<Vec<u8>> {
    (0..3)
        .map(|offset| sequence.get(offset..).unwrap_or_default().to_vec())
        .collect()
}

/// Count whole codons in frame 0, in order of first occurrence
pub fn codon_usage(sequence: &[u8]) -> IndexMap<String, usize> {
    let mut usage = IndexMap::new();
    for codon in sequence.chunks_exact(3) {
        *usage
            .entry(String::from_utf8_lossy(codon).into_owned())
            .or_insert(0) += 1;
    }
    usage
}
