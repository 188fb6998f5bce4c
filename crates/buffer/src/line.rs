// Chunk: docs/chunks/line_storage - Capacity-bounded line storage

//! A single editable line, stored as an owned byte buffer with a fixed
//! capacity and a tracked used length.
//!
//! The capacity is chosen at creation and never grows; mutations that
//! would not fit are rejected with [`BufferError::Overflow`] before any
//! byte is written. The trailing newline marker, when present, counts
//! toward the used length.

use crate::types::BufferError;

/// One editable row of text.
///
/// Invariant: `used <= capacity`; bytes beyond `used` are zero and
/// semantically unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Backing storage, allocated to `capacity` up front and zero-filled.
    bytes: Vec<u8>,
    /// Bytes currently written, including any trailing newline marker.
    used: usize,
}

impl Line {
    /// Creates an empty line with the given capacity.
    ///
    /// Fails with `InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::InvalidArgument);
        }
        Ok(Self {
            bytes: vec![0; capacity],
            used: 0,
        })
    }

    /// Creates a line pre-filled with `text`.
    ///
    /// The text must strictly fit: `text.len() < capacity`, leaving room
    /// to spare for at least one further byte.
    pub fn with_text(capacity: usize, text: &[u8]) -> Result<Self, BufferError> {
        if capacity == 0 || text.len() >= capacity {
            return Err(BufferError::InvalidArgument);
        }
        let mut line = Self::new(capacity)?;
        line.bytes[..text.len()].copy_from_slice(text);
        line.used = text.len();
        Ok(line)
    }

    /// Appends one byte at the used-length offset.
    pub fn push_byte(&mut self, b: u8) -> Result<(), BufferError> {
        if self.used == self.capacity() {
            return Err(BufferError::Overflow {
                needed: self.used + 1,
                capacity: self.capacity(),
            });
        }
        self.bytes[self.used] = b;
        self.used += 1;
        Ok(())
    }

    /// Removes and returns the last byte, clearing its slot.
    ///
    /// Returns `None` if the line is already empty.
    pub fn pop_byte(&mut self) -> Option<u8> {
        if self.used == 0 {
            return None;
        }
        self.used -= 1;
        let b = self.bytes[self.used];
        self.bytes[self.used] = 0;
        Some(b)
    }

    /// Bulk-appends `other` at the used-length offset.
    ///
    /// All-or-nothing: the capacity check happens before any byte is
    /// copied, so a failed extend leaves the line unchanged.
    pub fn extend_from(&mut self, other: &[u8]) -> Result<(), BufferError> {
        let needed = self.used + other.len();
        if needed > self.capacity() {
            return Err(BufferError::Overflow {
                needed,
                capacity: self.capacity(),
            });
        }
        self.bytes[self.used..needed].copy_from_slice(other);
        self.used = needed;
        Ok(())
    }

    /// The written content, of length `used()`.
    pub fn content(&self) -> &[u8] {
        &self.bytes[..self.used]
    }

    /// Bytes currently written, including any trailing newline marker.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Bytes still available before the line is full.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.used
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Returns true if the last written byte is the newline marker.
    pub fn ends_with_newline(&self) -> bool {
        self.used > 0 && self.bytes[self.used - 1] == b'\n'
    }
}
