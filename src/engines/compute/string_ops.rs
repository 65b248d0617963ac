//! Composition statistics and simple transforms for nucleotide sequences
//!
//! Counting, GC content and skew, k-mer frequencies, transcription,
//! reverse complement and random sequence generation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{ComputeError, ComputeResult};

/// The canonical DNA bases
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Per-base counts of a sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NucleotideCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    /// Anything that is not A, C, G or T (N, U, gaps...)
    pub other: usize,
}

impl NucleotideCounts {
    /// Number of A, C, G and T bases
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }
}

/// Per-base share of a sequence, in percent of its A/C/G/T bases
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NucleotidePercentages {
    pub a: f64,
    pub c: f64,
    pub g: f64,
    pub t: f64,
}

/// Count occurrences of each base in a DNA sequence
///
/// Counting is case-sensitive; lowercase bases land in `other`.
pub fn count_nucleotides(sequence: &[u8]) -> NucleotideCounts {
    let mut counts = NucleotideCounts::default();

    for &base in sequence {
        match base {
            b'A' => counts.a += 1,
            b'C' => counts.c += 1,
            b'G' => counts.g += 1,
            b'T' => counts.t += 1,
            _ => counts.other += 1,
        }
    }

    counts
}

/// Base frequencies as percentages
///
/// Returns `None` when the sequence holds no A/C/G/T base at all.
pub fn nucleotide_percentages(sequence: &[u8]) -> Option<NucleotidePercentages> {
    let counts = count_nucleotides(sequence);
    let total = counts.total();
    if total == 0 {
        return None;
    }

    let pct = |n: usize| n as f64 / total as f64 * 100.0;
    Some(NucleotidePercentages {
        a: pct(counts.a),
        c: pct(counts.c),
        g: pct(counts.g),
        t: pct(counts.t),
    })
}

/// GC content in percent of the sequence length
pub fn gc_content(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }

    let counts = count_nucleotides(sequence);
    (counts.g + counts.c) as f64 / sequence.len() as f64 * 100.0
}

/// GC content of consecutive, non-overlapping windows of size `k`
///
/// A trailing window shorter than `k` is ignored.
pub fn gc_content_windows(sequence: &[u8], k: usize) -> ComputeResult<Vec<f64>> {
    if k == 0 {
        return Err(ComputeError::InvalidInput("Window size must be positive".to_string()));
    }

    Ok(sequence.chunks_exact(k).map(gc_content).collect())
}

/// GC skew, `(G - C) / (G + C)`
///
/// Returns `None` when the sequence contains neither G nor C.
pub fn gc_skew(sequence: &[u8]) -> Option<f64> {
    let counts = count_nucleotides(sequence);
    skew(counts.g, counts.c)
}

/// AT skew, `(A - T) / (A + T)`
///
/// Returns `None` when the sequence contains neither A nor T.
pub fn at_skew(sequence: &[u8]) -> Option<f64> {
    let counts = count_nucleotides(sequence);
    skew(counts.a, counts.t)
}

fn skew(x: usize, y: usize) -> Option<f64> {
    let sum = x + y;
    if sum == 0 {
        return None;
    }
    Some((x as f64 - y as f64) / sum as f64)
}

/// Count every overlapping k-mer, in order of first occurrence
pub fn kmer_frequency(sequence: &[u8], k: usize) -> ComputeResult<IndexMap<String, usize>> {
    if k == 0 {
        return Err(ComputeError::InvalidInput("k-mer size must be positive".to_string()));
    }

    let mut freq = IndexMap::new();
    for window in sequence.windows(k) {
        *freq
            .entry(String::from_utf8_lossy(window).into_owned())
            .or_insert(0) += 1;
    }

    Ok(freq)
}

/// Count overlapping dinucleotides
pub fn dinucleotide_frequency(sequence: &[u8]) -> IndexMap<String, usize> {
    kmer_frequency(sequence, 2).unwrap_or_default()
}

/// Count overlapping trinucleotides
pub fn trinucleotide_frequency(sequence: &[u8]) -> IndexMap<String, usize> {
    kmer_frequency(sequence, 3).unwrap_or_default()
}

/// Transcribe DNA to RNA (T -> U)
pub fn transcribe(dna: &[u8]) -> Vec<u8> {
    dna.iter()
        .map(|&base| match base {
            b'T' => b'U',
            b't' => b'u',
            _ => base,
        })
        .collect()
}

/// Complement a single DNA base, leaving unknown symbols unchanged
pub fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        _ => base,
    }
}

/// Reverse-complement a DNA sequence
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().map(|&b| complement_base(b)).collect()
}

/// Generate a random DNA sequence of the given length
pub fn random_dna(length: usize) -> Vec<u8> {
    use rand::prelude::*;
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())])
        .collect()
}
