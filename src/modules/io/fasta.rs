//! FASTA format I/O
//!
//! Reads FASTA files into [`SequenceSet`]s keyed by the full header text,
//! writes sets back out, and summarises their contents.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engines::compute::string_ops;
use crate::engines::storage::formats::{
    FastaParser, FastaWriter, SequenceParser, SequenceRecord, SequenceWriter,
};
use crate::modules::seq::{SequenceError, SequenceResult, SequenceSet};

/// Read sequences from a FASTA file
pub fn read_fasta<P: AsRef<Path>>(path: P) -> SequenceResult<SequenceSet> {
    let records = FastaParser::new().parse_file(path)?;
    records_to_set(records)
}

/// Read sequences from FASTA text
pub fn read_fasta_str(content: &str) -> SequenceResult<SequenceSet> {
    let records = FastaParser::new().parse_str(content)?;
    records_to_set(records)
}

/// Write sequences to a FASTA file
///
/// Sequence lines are wrapped at [`DEFAULT_LINE_WIDTH`](crate::engines::storage::formats::DEFAULT_LINE_WIDTH)
/// characters.
pub fn write_fasta<P: AsRef<Path>>(sequences: &SequenceSet, path: P) -> SequenceResult<()> {
    write_fasta_with(sequences, path, &FastaWriter::default())
}

/// Write sequences to a FASTA file with a configured writer
pub fn write_fasta_with<P: AsRef<Path>>(
    sequences: &SequenceSet,
    path: P,
    writer: &FastaWriter,
) -> SequenceResult<()> {
    writer.write_file(&set_to_records(sequences), path)?;
    Ok(())
}

/// Render sequences as FASTA text wrapped at
/// [`DEFAULT_LINE_WIDTH`](crate::engines::storage::formats::DEFAULT_LINE_WIDTH) characters
pub fn write_fasta_string(sequences: &SequenceSet) -> String {
    FastaWriter::default().write_string(&set_to_records(sequences))
}

fn records_to_set(records: Vec<SequenceRecord>) -> SequenceResult<SequenceSet> {
    let mut set = SequenceSet::new();

    for SequenceRecord { header, sequence, .. } in records {
        let sequence = String::from_utf8(sequence).map_err(|_| {
            SequenceError::InvalidSequence(format!("Sequence '{}' is not valid UTF-8", header))
        })?;

        if set.insert(header.clone(), sequence).is_some() {
            log::warn!("Duplicate FASTA header '{}', keeping the last sequence", header);
        }
    }

    Ok(set)
}

fn set_to_records(sequences: &SequenceSet) -> Vec<SequenceRecord> {
    sequences
        .iter()
        .map(|(name, seq)| SequenceRecord::from_header(name, seq.as_bytes().to_vec()))
        .collect()
}

/// Summary of one sequence in a set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceMetadata {
    pub header: String,
    pub length: usize,
    /// GC content in percent, rounded to two decimals
    pub gc_content: f64,
}

/// Length and GC content of every sequence, in set order
pub fn fasta_metadata(sequences: &SequenceSet) -> Vec<SequenceMetadata> {
    sequences
        .iter()
        .map(|(header, seq)| {
            let gc = string_ops::gc_content(seq.as_bytes());
            SequenceMetadata {
                header: header.clone(),
                length: seq.len(),
                gc_content: (gc * 100.0).round() / 100.0,
            }
        })
        .collect()
}
