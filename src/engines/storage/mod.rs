//! Sequence file formats
//!
//! Parsers and writers that turn sequence files into [`SequenceRecord`]s
//! and back.

pub mod formats;

pub use formats::{FastaParser, FastaWriter, SequenceParser, SequenceRecord, SequenceWriter};
