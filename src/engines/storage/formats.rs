//! Parsers and writers for sequence file formats
//!
//! Currently FASTA: `>` header lines followed by any number of sequence
//! lines.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engines::core::io::{FastWriter, MappedFile};
use crate::engines::{EngineError, EngineResult};

/// Trait for sequence record parsers
pub trait SequenceParser {
    /// Parse a file and create sequence records
    fn parse_file<P: AsRef<Path>>(&self, path: P) -> EngineResult<Vec<SequenceRecord>>;

    /// Parse in-memory text and create sequence records
    fn parse_str(&self, content: &str) -> EngineResult<Vec<SequenceRecord>>;

    /// Get the format name
    fn format_name(&self) -> &str;
}

/// Trait for sequence record writers
pub trait SequenceWriter {
    /// Write sequence records to a file
    fn write_file<P: AsRef<Path>>(&self, records: &[SequenceRecord], path: P) -> EngineResult<()>;

    /// Write sequence records to a string
    fn write_string(&self, records: &[SequenceRecord]) -> String;

    /// Get the format name
    fn format_name(&self) -> &str;
}

/// A sequence record with ID, description, and sequence data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// Sequence identifier (header text up to the first whitespace)
    pub id: String,
    /// Rest of the header, if any
    pub description: Option<String>,
    /// Full header text as written, without the leading `>`
    pub header: String,
    /// Sequence data
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: String, description: Option<String>, sequence: Vec<u8>) -> Self {
        let header = match &description {
            Some(desc) => format!("{} {}", id, desc),
            None => id.clone(),
        };
        Self {
            id,
            description,
            header,
            sequence,
        }
    }

    /// Build a record from a raw header line (without the leading `>`)
    ///
    /// Only the ends of the header are trimmed; whitespace inside it is kept
    /// in the `header` field.
    pub fn from_header(header: &str, sequence: Vec<u8>) -> Self {
        let header = header.trim();
        let (id, description) = match header.split_once(char::is_whitespace) {
            Some((id, desc)) => (id.to_string(), Some(desc.trim().to_string())),
            None => (header.to_string(), None),
        };
        Self {
            id,
            description,
            header: header.to_string(),
            sequence,
        }
    }

    /// Full header text
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// FASTA format parser
#[derive(Debug, Clone, Default)]
pub struct FastaParser {}

impl FastaParser {
    pub fn new() -> Self {
        Self {}
    }

    /// Parse raw FASTA bytes
    ///
    /// Blank lines are skipped and surrounding whitespace is trimmed from
    /// every line. Records with no sequence lines are kept with an empty
    /// sequence. Sequence data before the first header is rejected.
    pub fn parse_bytes(&self, content: &[u8]) -> EngineResult<Vec<SequenceRecord>> {
        let mut records = Vec::new();
        let mut current: Option<SequenceRecord> = None;

        for (line_no, raw_line) in content.split(|&b| b == b'\n').enumerate() {
            let line = raw_line.trim_ascii();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix(b">") {
                if let Some(record) = current.take() {
                    records.push(record);
                }
                let header = std::str::from_utf8(header).map_err(|e| {
                    EngineError::InvalidSequenceData(format!(
                        "Header on line {} is not valid UTF-8: {}",
                        line_no + 1,
                        e
                    ))
                })?;
                current = Some(SequenceRecord::from_header(header, Vec::new()));
            } else {
                match current.as_mut() {
                    Some(record) => record.sequence.extend_from_slice(line),
                    None => {
                        return Err(EngineError::InvalidSequenceData(format!(
                            "Sequence data on line {} appears before any header",
                            line_no + 1
                        )))
                    }
                }
            }
        }

        if let Some(record) = current {
            records.push(record);
        }

        log::debug!("Parsed {} FASTA records", records.len());
        Ok(records)
    }
}

impl SequenceParser for FastaParser {
    fn parse_file<P: AsRef<Path>>(&self, path: P) -> EngineResult<Vec<SequenceRecord>> {
        let mapped = MappedFile::open(path)?;
        self.parse_bytes(mapped.as_slice())
    }

    fn parse_str(&self, content: &str) -> EngineResult<Vec<SequenceRecord>> {
        self.parse_bytes(content.as_bytes())
    }

    fn format_name(&self) -> &str {
        "FASTA"
    }
}

/// FASTA format writer
#[derive(Debug, Clone)]
pub struct FastaWriter {
    /// Line width for sequence output
    line_width: usize,
    /// Buffer size for writing
    buffer_size: usize,
}

/// Sequence characters per output line unless configured otherwise
pub const DEFAULT_LINE_WIDTH: usize = 80;

impl FastaWriter {
    /// Create a new FASTA writer with the default line width
    pub fn new() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            buffer_size: 1024 * 1024, // 1MB
        }
    }

    /// Create a new FASTA writer with the specified line width
    ///
    /// A width of 0 writes each sequence on a single line.
    pub fn with_line_width(line_width: usize) -> Self {
        Self {
            line_width,
            ..Self::new()
        }
    }

    /// Set the buffer size
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn line_width(&self) -> usize {
        self.line_width
    }

    fn sequence_lines<'a>(&self, sequence: &'a [u8]) -> Vec<&'a [u8]> {
        if sequence.is_empty() {
            return Vec::new();
        }
        if self.line_width == 0 {
            return vec![sequence];
        }
        sequence.chunks(self.line_width).collect()
    }
}

impl Default for FastaWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceWriter for FastaWriter {
    fn write_file<P: AsRef<Path>>(&self, records: &[SequenceRecord], path: P) -> EngineResult<()> {
        let mut writer = FastWriter::new(path, Some(self.buffer_size))?;

        for record in records {
            writer.write_line(format!(">{}", record.header()).as_bytes())?;
            for line in self.sequence_lines(&record.sequence) {
                writer.write_line(line)?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    fn write_string(&self, records: &[SequenceRecord]) -> String {
        let mut output = String::new();

        for record in records {
            output.push('>');
            output.push_str(record.header());
            output.push('\n');
            for line in self.sequence_lines(&record.sequence) {
                output.push_str(&String::from_utf8_lossy(line));
                output.push('\n');
            }
        }

        output
    }

    fn format_name(&self) -> &str {
        "FASTA"
    }
}
