// Chunk: docs/chunks/append_save - Append-only persistence adapter

//! Persistence adapter: writes the document's lines to a file.
//!
//! Saving appends the full current content of every line, in order, to
//! the output path without truncating what is already there. Repeated
//! saves therefore accumulate duplicate content; that is this design's
//! documented behavior, not an accident, and the tests pin it down.
//!
//! The file handle is scoped to a single call: opened, written, flushed,
//! and closed before returning, so a failed save can never leak a
//! handle into the edit loop.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default output path, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "./output";

/// Destination for document saves.
///
/// `lines` is the document's line sequence in order, each entry the
/// line's current content including any trailing newline marker.
pub trait Persist {
    /// Appends every line's content; returns the number of bytes
    /// written.
    fn append(&mut self, lines: &[&[u8]]) -> io::Result<u64>;
}

/// Appends saves to a file at a fixed path.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persist for FileSink {
    fn append(&mut self, lines: &[&[u8]]) -> io::Result<u64> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut written = 0u64;
        for line in lines {
            file.write_all(line)?;
            written += line.len() as u64;
        }
        file.flush()?;
        Ok(written)
    }
}
