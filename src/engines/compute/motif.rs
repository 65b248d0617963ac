//! Motif search and sequence comparison
//!
//! Brute-force implementations of Hamming distance, pairwise distance
//! matrices, exact and mismatch-tolerant pattern matching, and motif
//! conservation analysis across a set of named sequences.
//!
//! Every function here is pure: inputs are borrowed, outputs are freshly
//! built values, and degenerate inputs (empty sequences, empty patterns,
//! patterns longer than the text, zero mismatch budgets) produce a defined
//! result instead of an error.

use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// How the two sequences of a Hamming comparison related to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HammingStatus {
    /// One or both inputs were empty; the distance is reported as 0
    Empty,
    /// Both inputs had the same length
    EqualLength { length: usize },
    /// Lengths differed; only the first `compared` positions were examined
    Truncated {
        len1: usize,
        len2: usize,
        compared: usize,
    },
}

impl fmt::Display for HammingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HammingStatus::Empty => write!(f, "Warning: One or both sequences are empty."),
            HammingStatus::EqualLength { length } => {
                write!(f, "Sequences are of equal length ({}).", length)
            }
            HammingStatus::Truncated { len1, len2, compared } => write!(
                f,
                "Note: Sequences have different lengths ({} vs {}). Distance calculated over the first {} characters.",
                len1, len2, compared
            ),
        }
    }
}

/// Hamming distance together with a note on how it was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HammingResult {
    /// Number of differing positions
    pub distance: usize,
    /// Length relationship between the inputs
    pub status: HammingStatus,
}

/// Count the positions at which two sequences differ
///
/// Sequences are compared element by element: pass bytes for ASCII data, or
/// `char`s when the text may hold multi-byte characters. Only the first
/// `min(seq1.len(), seq2.len())` positions are compared. If either sequence
/// is empty the distance is 0 and the status is [`HammingStatus::Empty`],
/// regardless of the other sequence's length.
pub fn hamming_distance<T: PartialEq>(seq1: &[T], seq2: &[T]) -> HammingResult {
    if seq1.is_empty() || seq2.is_empty() {
        return HammingResult {
            distance: 0,
            status: HammingStatus::Empty,
        };
    }

    let n = seq1.len().min(seq2.len());
    let distance = count_mismatches(&seq1[..n], &seq2[..n]);

    let status = if seq1.len() != seq2.len() {
        HammingStatus::Truncated {
            len1: seq1.len(),
            len2: seq2.len(),
            compared: n,
        }
    } else {
        HammingStatus::EqualLength { length: n }
    };

    HammingResult { distance, status }
}

fn count_mismatches<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Collect named sequences as characters, one entry per unique name
///
/// A repeated name replaces the earlier sequence but keeps its position.
fn collect_named<I, N, S>(sequences: I) -> IndexMap<String, Vec<char>>
where
    I: IntoIterator<Item = (N, S)>,
    N: AsRef<str>,
    S: AsRef<str>,
{
    let mut named = IndexMap::new();
    for (name, seq) in sequences {
        let name = name.as_ref();
        if named.insert(name.to_string(), seq.as_ref().chars().collect()).is_some() {
            log::warn!("Duplicate sequence name '{}', keeping the last sequence", name);
        }
    }
    named
}

/// Symmetric matrix of pairwise Hamming distances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    names: Vec<String>,
    cells: Vec<Vec<usize>>,
}

impl DistanceMatrix {
    /// Sequence names, in row (and column) order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows (equal to the number of columns)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Distance between the sequences at rows `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        self.cells.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Distance between two sequences looked up by name
    pub fn get_by_name(&self, a: &str, b: &str) -> Option<usize> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        self.get(i, j)
    }

    /// Row position of a sequence name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Iterate over the rows, each paired with its sequence name
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}

/// Compute the pairwise Hamming distance matrix of a named sequence set
///
/// Rows and columns follow the order in which names first appear; a name
/// given twice keeps its first position and its last sequence. Sequences
/// are compared character by character. The diagonal is zero by
/// construction; each unordered pair is compared once and the result
/// mirrored into both cells.
pub fn distance_matrix<I, N, S>(sequences: I) -> DistanceMatrix
where
    I: IntoIterator<Item = (N, S)>,
    N: AsRef<str>,
    S: AsRef<str>,
{
    let (names, seqs): (Vec<String>, Vec<Vec<char>>) = collect_named(sequences).into_iter().unzip();

    let n = names.len();
    let mut cells = vec![vec![0usize; n]; n];

    for ((i, j), dist) in pairwise_distances(&seqs) {
        cells[i][j] = dist;
        cells[j][i] = dist;
    }

    log::debug!("Computed {}x{} distance matrix", n, n);

    DistanceMatrix { names, cells }
}

#[cfg(not(feature = "parallel"))]
fn pairwise_distances(seqs: &[Vec<char>]) -> Vec<((usize, usize), usize)> {
    (0..seqs.len())
        .tuple_combinations()
        .map(|(i, j)| ((i, j), hamming_distance(&seqs[i], &seqs[j]).distance))
        .collect()
}

#[cfg(feature = "parallel")]
fn pairwise_distances(seqs: &[Vec<char>]) -> Vec<((usize, usize), usize)> {
    use rayon::prelude::*;

    let pairs: Vec<(usize, usize)> = (0..seqs.len()).tuple_combinations().collect();

    crate::engines::core::parallel::install(|| {
        pairs
            .into_par_iter()
            .map(|(i, j)| ((i, j), hamming_distance(&seqs[i], &seqs[j]).distance))
            .collect()
    })
}

/// Find every start index at which `pattern` occurs exactly in `text`
///
/// Windows are tested at every offset from left to right, so overlapping
/// occurrences are all reported. An empty pattern yields no matches.
pub fn exact_pattern_matching<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}

/// A candidate alignment of a pattern against a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// 0-based offset of the window in the text
    pub start_index: usize,
    /// Positions where the window differs from the pattern
    pub mismatch_count: usize,
}

/// Find every window of `text` within `max_mismatches` of `pattern`
///
/// Results are in scan order and may overlap. An empty pattern yields no
/// matches.
pub fn fuzzy_pattern_matching<T: PartialEq>(
    text: &[T],
    pattern: &[T],
    max_mismatches: usize,
) -> Vec<Match> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    text.windows(pattern.len())
        .enumerate()
        .filter_map(|(i, window)| {
            let mismatch_count = count_mismatches(window, pattern);
            (mismatch_count <= max_mismatches).then_some(Match {
                start_index: i,
                mismatch_count,
            })
        })
        .collect()
}

/// Best motif occurrence found in one sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Found {
        /// Start of the best-scoring window, in characters
        index: usize,
        /// Mismatches in that window
        mismatches: usize,
        /// The window's text
        excerpt: String,
    },
    NotFound {
        reason: String,
    },
}

impl MatchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found { .. })
    }

    /// Mismatch count of the best match, if any
    pub fn mismatches(&self) -> Option<usize> {
        match self {
            MatchResult::Found { mismatches, .. } => Some(*mismatches),
            MatchResult::NotFound { .. } => None,
        }
    }
}

/// Aggregate statistics of a conservation analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationMetrics {
    pub total_sequences: usize,
    pub sequences_with_match: usize,
    /// Mean of the best-match mismatch counts; `None` when nothing matched
    pub average_mismatches: Option<f64>,
    pub total_mismatches: usize,
}

/// Per-sequence best matches of a motif, plus aggregate metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationReport {
    pub pattern: String,
    pub max_mismatches: usize,
    pub metrics: ConservationMetrics,
    /// One entry per unique sequence name, in input order
    pub details: IndexMap<String, MatchResult>,
}

/// Find the best occurrence of `pattern` in every sequence of a set
///
/// The best occurrence is the fuzzy match with the fewest mismatches; among
/// equals the leftmost wins. Sequences without any match within
/// `max_mismatches` are kept in the report as [`MatchResult::NotFound`].
/// Matching is done on characters, so indices count characters rather than
/// bytes. A name given twice is analysed once, with its last sequence.
pub fn analyze_motif_conservation<I, N, S>(
    sequences: I,
    pattern: &str,
    max_mismatches: usize,
) -> ConservationReport
where
    I: IntoIterator<Item = (N, S)>,
    N: AsRef<str>,
    S: AsRef<str>,
{
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let mut details = IndexMap::new();
    let mut best_counts = Vec::new();

    for (name, seq) in collect_named(sequences) {
        let matches = fuzzy_pattern_matching(&seq, &pattern_chars, max_mismatches);

        // min_by_key keeps the first of several equal minima
        let result = match matches.iter().min_by_key(|m| m.mismatch_count) {
            Some(best) => {
                best_counts.push(best.mismatch_count);
                let window = &seq[best.start_index..best.start_index + pattern_chars.len()];
                MatchResult::Found {
                    index: best.start_index,
                    mismatches: best.mismatch_count,
                    excerpt: window.iter().collect(),
                }
            }
            None => MatchResult::NotFound {
                reason: format!("No match found with <={} mismatches.", max_mismatches),
            },
        };

        details.insert(name, result);
    }

    let total_mismatches: usize = best_counts.iter().sum();
    let sequences_with_match = best_counts.len();
    let average_mismatches = if sequences_with_match > 0 {
        Some(total_mismatches as f64 / sequences_with_match as f64)
    } else {
        None
    };

    if average_mismatches.is_none() {
        log::warn!(
            "Motif {:?} matched no sequence with <={} mismatches",
            pattern,
            max_mismatches
        );
    }

    ConservationReport {
        pattern: pattern.to_string(),
        max_mismatches,
        metrics: ConservationMetrics {
            total_sequences: details.len(),
            sequences_with_match,
            average_mismatches,
            total_mismatches,
        },
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dna_sequences() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Seq_A", "GATTACAATGTCA"),
            ("Seq_B", "GATTACTCAGTGA"),
            ("Seq_C", "GATTACAGG"),
            ("Seq_D", "ATTCAGTTCA"),
        ]
    }

    #[test]
    fn test_hamming_distance() {
        let result = hamming_distance(b"GATTACAATGTCA", b"GATTACTCAGTGA");
        assert_eq!(result.distance, 4);
        assert_eq!(result.status, HammingStatus::EqualLength { length: 13 });
        assert_eq!(result.status.to_string(), "Sequences are of equal length (13).");

        // Different lengths are compared over the shorter one
        let result = hamming_distance(b"GATTACAATGTCA", b"GATTACAGG");
        assert_eq!(result.distance, 2);
        assert_eq!(
            result.status,
            HammingStatus::Truncated { len1: 13, len2: 9, compared: 9 }
        );
        assert_eq!(
            result.status.to_string(),
            "Note: Sequences have different lengths (13 vs 9). Distance calculated over the first 9 characters."
        );
    }

    #[test]
    fn test_hamming_distance_empty() {
        let result = hamming_distance(b"", b"ACGT");
        assert_eq!(result.distance, 0);
        assert_eq!(result.status, HammingStatus::Empty);
        assert_eq!(result.status.to_string(), "Warning: One or both sequences are empty.");

        let result = hamming_distance(b"", b"");
        assert_eq!(result.status, HammingStatus::Empty);
    }

    #[test]
    fn test_hamming_distance_is_case_sensitive() {
        assert_eq!(hamming_distance(b"acgt", b"ACGT").distance, 4);
    }

    #[test]
    fn test_distance_matrix() {
        let matrix = distance_matrix(dna_sequences());

        assert_eq!(matrix.len(), 4);
        assert_eq!(matrix.names(), &["Seq_A", "Seq_B", "Seq_C", "Seq_D"]);
        assert_eq!(matrix.get_by_name("Seq_A", "Seq_B"), Some(4));
        assert_eq!(matrix.get_by_name("Seq_A", "Seq_C"), Some(2));
        assert_eq!(matrix.get(1, 0), Some(4));
        assert_eq!(matrix.get_by_name("Seq_D", "Seq_A"), Some(8));

        for i in 0..matrix.len() {
            assert_eq!(matrix.get(i, i), Some(0));
            for j in 0..matrix.len() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }

        assert_eq!(matrix.get(4, 0), None);
        assert_eq!(matrix.get_by_name("Seq_A", "Seq_Z"), None);
    }

    #[test]
    fn test_distance_matrix_rows() {
        let matrix = distance_matrix(vec![("x", "AAAA"), ("y", "AATT")]);
        let rows: Vec<_> = matrix.rows().collect();
        assert_eq!(rows, vec![("x", &[0, 2][..]), ("y", &[2, 0][..])]);
    }

    #[test]
    fn test_distance_matrix_empty_set() {
        let matrix = distance_matrix(Vec::<(String, String)>::new());
        assert!(matrix.is_empty());
        assert_eq!(matrix.rows().count(), 0);
    }

    #[test]
    fn test_distance_matrix_agrees_with_hamming_distance() {
        let sequences = dna_sequences();
        let matrix = distance_matrix(sequences.clone());

        for (i, (_, a)) in sequences.iter().enumerate() {
            for (j, (_, b)) in sequences.iter().enumerate() {
                let expected = hamming_distance(a.as_bytes(), b.as_bytes()).distance;
                assert_eq!(matrix.get(i, j), Some(expected));
            }
        }
    }

    #[test]
    fn test_distance_matrix_duplicate_names_keep_last() {
        let matrix = distance_matrix(vec![("s", "AAAA"), ("t", "AAAT"), ("s", "TTTT")]);

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.names(), &["s", "t"]);
        assert_eq!(matrix.get_by_name("s", "s"), Some(0));
        assert_eq!(matrix.get_by_name("s", "t"), Some(3));
    }

    #[test]
    fn test_distance_matrix_counts_characters() {
        let matrix = distance_matrix(vec![("a", "héllo"), ("b", "hello"), ("c", "héll")]);
        assert_eq!(matrix.get_by_name("a", "b"), Some(1));
        assert_eq!(matrix.get_by_name("a", "c"), Some(0));
    }

    #[test]
    fn test_hamming_distance_over_chars() {
        let accented: Vec<char> = "é".chars().collect();
        let plain: Vec<char> = "e".chars().collect();

        let result = hamming_distance(&accented, &plain);
        assert_eq!(result.distance, 1);
        assert_eq!(result.status, HammingStatus::EqualLength { length: 1 });
    }

    #[test]
    fn test_exact_pattern_matching() {
        let matches = exact_pattern_matching(b"GATTACAATGTCAATGTCAATAGAT", b"ATGTCA");
        assert_eq!(matches, vec![7, 13]);

        // Overlapping occurrences are all reported
        assert_eq!(exact_pattern_matching(b"AAAA", b"AA"), vec![0, 1, 2]);

        // Pattern longer than the text
        assert!(exact_pattern_matching(b"ACG", b"ACGT").is_empty());

        // Empty pattern
        assert!(exact_pattern_matching(b"ACGT", b"").is_empty());

        // Empty text
        assert!(exact_pattern_matching(b"", b"A").is_empty());
    }

    #[test]
    fn test_fuzzy_pattern_matching() {
        let matches = fuzzy_pattern_matching(b"GATTACAATGTCAATGTCAATAGAT", b"AATGTCA", 1);
        let expected = vec![
            Match { start_index: 6, mismatch_count: 0 },
            Match { start_index: 12, mismatch_count: 0 },
        ];
        assert_eq!(matches, expected);

        let matches = fuzzy_pattern_matching(b"ACGT", b"AGG", 1);
        assert_eq!(matches, vec![Match { start_index: 0, mismatch_count: 1 }]);

        assert!(fuzzy_pattern_matching(b"ACGT", b"", 3).is_empty());
        assert!(fuzzy_pattern_matching(b"AC", b"ACGT", 4).is_empty());
    }

    #[test]
    fn test_motif_conservation() {
        let report = analyze_motif_conservation(dna_sequences(), "ATTACA", 1);

        assert_eq!(report.pattern, "ATTACA");
        assert_eq!(report.max_mismatches, 1);
        assert_eq!(
            report.details["Seq_A"],
            MatchResult::Found { index: 1, mismatches: 0, excerpt: "ATTACA".to_string() }
        );
        assert_eq!(
            report.details["Seq_B"],
            MatchResult::Found { index: 1, mismatches: 1, excerpt: "ATTACT".to_string() }
        );
        assert_eq!(
            report.details["Seq_C"],
            MatchResult::Found { index: 1, mismatches: 0, excerpt: "ATTACA".to_string() }
        );
        assert_eq!(
            report.details["Seq_D"],
            MatchResult::NotFound { reason: "No match found with <=1 mismatches.".to_string() }
        );

        let names: Vec<_> = report.details.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Seq_A", "Seq_B", "Seq_C", "Seq_D"]);

        assert_eq!(report.metrics.total_sequences, 4);
        assert_eq!(report.metrics.sequences_with_match, 3);
        assert_eq!(report.metrics.total_mismatches, 1);
        let avg = report.metrics.average_mismatches.unwrap();
        assert!((avg - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_motif_conservation_tie_takes_leftmost() {
        // Windows at 0 and 5 both have one mismatch
        let report = analyze_motif_conservation(vec![("s", "AAATCAAAT")], "AAAA", 1);
        match &report.details["s"] {
            MatchResult::Found { index, mismatches, .. } => {
                assert_eq!(*index, 0);
                assert_eq!(*mismatches, 1);
            }
            other => panic!("Expected a match, got {:?}", other),
        }
    }

    #[test]
    fn test_motif_conservation_no_matches() {
        let report = analyze_motif_conservation(dna_sequences(), "CCCCCC", 0);

        assert_eq!(report.metrics.sequences_with_match, 0);
        assert_eq!(report.metrics.total_mismatches, 0);
        assert_eq!(report.metrics.average_mismatches, None);
        assert_eq!(report.details.len(), 4);
        assert!(report.details.values().all(|r| !r.is_found()));
    }

    #[test]
    fn test_motif_conservation_duplicate_names_keep_last() {
        let report = analyze_motif_conservation(
            vec![("s", "ATTACA"), ("t", "GGGGGG"), ("s", "ATTACT")],
            "ATTACA",
            1,
        );

        assert_eq!(report.metrics.total_sequences, 2);
        assert_eq!(report.metrics.sequences_with_match, 1);
        assert_eq!(report.metrics.total_mismatches, 1);
        assert_eq!(report.details["s"].mismatches(), Some(1));
        let names: Vec<_> = report.details.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["s", "t"]);
    }

    #[test]
    fn test_motif_conservation_non_ascii() {
        let report = analyze_motif_conservation(vec![("s", "xéy")], "ab", 2);
        assert_eq!(
            report.details["s"],
            MatchResult::Found { index: 0, mismatches: 2, excerpt: "xé".to_string() }
        );

        let report = analyze_motif_conservation(vec![("s", "ééATTACA")], "ATTACA", 0);
        assert_eq!(
            report.details["s"],
            MatchResult::Found { index: 2, mismatches: 0, excerpt: "ATTACA".to_string() }
        );
    }

    #[test]
    fn test_motif_conservation_serializes() {
        let report = analyze_motif_conservation(vec![("s", "GATTACA")], "GGGG", 0);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["metrics"]["average_mismatches"].is_null());
        assert_eq!(
            json["details"]["s"]["NotFound"]["reason"],
            "No match found with <=0 mismatches."
        );
    }

    fn dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), 0..max_len)
    }

    proptest! {
        #[test]
        fn prop_hamming_self_distance_is_zero(a in dna(64)) {
            prop_assert_eq!(hamming_distance(&a, &a).distance, 0);
        }

        #[test]
        fn prop_hamming_symmetric_and_bounded(
            (a, b) in (1usize..48).prop_flat_map(|n| (
                prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), n),
                prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), n),
            ))
        ) {
            let ab = hamming_distance(&a, &b).distance;
            prop_assert!(ab <= a.len());
            prop_assert_eq!(ab, hamming_distance(&b, &a).distance);
        }

        #[test]
        fn prop_zero_budget_fuzzy_equals_exact(text in dna(80), pattern in dna(6)) {
            let fuzzy: Vec<usize> = fuzzy_pattern_matching(&text, &pattern, 0)
                .into_iter()
                .map(|m| m.start_index)
                .collect();
            prop_assert_eq!(fuzzy, exact_pattern_matching(&text, &pattern));
        }

        #[test]
        fn prop_fuzzy_matches_respect_budget(text in dna(80), pattern in dna(8), k in 0usize..4) {
            for m in fuzzy_pattern_matching(&text, &pattern, k) {
                let window = &text[m.start_index..m.start_index + pattern.len()];
                prop_assert!(m.mismatch_count <= k);
                prop_assert_eq!(m.mismatch_count, hamming_distance(window, &pattern).distance);
            }
        }

        #[test]
        fn prop_distance_matrix_symmetric(seqs in prop::collection::vec(dna(20), 0..6)) {
            let named: Vec<(String, String)> = seqs
                .into_iter()
                .enumerate()
                .map(|(i, s)| (format!("s{}", i), String::from_utf8(s).unwrap()))
                .collect();
            let matrix = distance_matrix(named);
            for i in 0..matrix.len() {
                prop_assert_eq!(matrix.get(i, i), Some(0));
                for j in 0..matrix.len() {
                    prop_assert_eq!(matrix.get(i, j), matrix.get(j, i));
                }
            }
        }
    }
}
