//! File access for sequence files
//!
//! Read-only memory mapping for input files and a buffered writer for
//! output files.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use memmap2::{Mmap, MmapOptions};

// Default buffer size
const DEFAULT_WRITE_BUFFER_SIZE: usize = 1024 * 1024; // 1MB

/// Read-only view of a whole file
pub struct MappedFile {
    // Zero-length files cannot be mapped on every platform
    mmap: Option<Mmap>,
    path: String,
}

impl MappedFile {
    /// Map the file at `path` into memory
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let len = file.metadata()?.len();

        let mmap = if len == 0 {
            None
        } else {
            // The mapping is only ever read, and only for the lifetime of `self`
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        log::debug!("Mapped {} ({} bytes)", path.as_ref().display(), len);

        Ok(Self {
            mmap,
            path: path.as_ref().to_string_lossy().to_string(),
        })
    }

    /// File contents
    pub fn as_slice(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path of the mapped file
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Buffered file writer
pub struct FastWriter {
    writer: BufWriter<File>,
    path: String,
    bytes_written: usize,
}

impl FastWriter {
    /// Create (or truncate) the file at `path`
    pub fn new<P: AsRef<Path>>(path: P, buffer_size: Option<usize>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.as_ref())?;

        let buf_size = buffer_size.unwrap_or(DEFAULT_WRITE_BUFFER_SIZE);
        let writer = BufWriter::with_capacity(buf_size, file);

        Ok(Self {
            writer,
            path: path.as_ref().to_string_lossy().to_string(),
            bytes_written: 0,
        })
    }

    /// Write all of `data`
    pub fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.writer.write_all(data)?;
        self.bytes_written += data.len();
        Ok(())
    }

    /// Write a line to the file (appends a newline)
    pub fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.write(line)?;
        self.write(b"\n")
    }

    /// Flush any buffered data to disk
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()?;
        log::debug!("Wrote {} bytes to {}", self.bytes_written, self.path);
        Ok(())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Bytes handed to the writer so far
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }
}
