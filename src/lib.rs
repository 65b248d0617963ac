//! DNA/RNA sequence utilities
//!
//! The heart of the crate is the motif and distance toolkit in
//! [`engines::compute::motif`]: Hamming distance, pairwise distance
//! matrices, exact and fuzzy pattern matching, and motif conservation
//! analysis over a [`SequenceSet`]. Around it sit composition statistics,
//! codon translation, FASTA I/O and text rendering of results.
//!
//! ```
//! use dna_toolkit::{analyze_motif_conservation, MatchResult, SequenceSet};
//!
//! let sequences: SequenceSet = [("Seq_A", "GATTACAATGTCA"), ("Seq_C", "GATTACAGG")]
//!     .into_iter()
//!     .collect();
//!
//! let report = analyze_motif_conservation(&sequences, "ATTACA", 1);
//! assert_eq!(
//!     report.details["Seq_C"],
//!     MatchResult::Found { index: 1, mismatches: 0, excerpt: "ATTACA".to_string() }
//! );
//! assert_eq!(report.metrics.average_mismatches, Some(0.0));
//! ```

pub mod engines;
pub mod modules;

pub use engines::compute::motif::{
    analyze_motif_conservation, distance_matrix, exact_pattern_matching, fuzzy_pattern_matching,
    hamming_distance, ConservationMetrics, ConservationReport, DistanceMatrix, HammingResult,
    HammingStatus, Match, MatchResult,
};
pub use modules::seq::{SequenceError, SequenceResult, SequenceSet};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
