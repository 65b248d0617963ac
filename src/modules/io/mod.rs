//! I/O module
//!
//! Reading and writing of sequence files.

pub mod fasta;

/// Convenience re-exports
pub use fasta::{
    fasta_metadata, read_fasta, read_fasta_str, write_fasta, write_fasta_string, write_fasta_with,
    SequenceMetadata,
};
