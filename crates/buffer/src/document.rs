// Chunk: docs/chunks/document_arena - Document as an arena of index-linked lines

//! The document: an ordered sequence of lines plus the cursor.
//!
//! Lines are stored in an arena and chained through stable [`LineId`]
//! indices instead of pointers. Splitting a line allocates a slot and
//! rewires two indices; merging frees a slot onto a free list for reuse.
//! An id never dangles: freed slots are `None` until reallocated, and the
//! document only hands out ids that are live in the chain.
//!
//! The cursor is 1-based to match terminal coordinates. The column is the
//! next insertion point, not the line length: after a merge it marks the
//! merge point, which may sit before the end of the merged content.

use crate::line::Line;
use crate::types::{BufferError, Cursor, Dirty};

/// Default byte capacity for a freshly allocated line.
pub const DEFAULT_LINE_CAPACITY: usize = 256;

/// Stable index of a line slot in the document arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineId(usize);

/// An arena slot: one line plus its chain links.
#[derive(Debug)]
struct Slot {
    line: Line,
    next: Option<LineId>,
    prev: Option<LineId>,
}

/// The entire open buffer: ordered lines plus cursor position.
///
/// Invariants:
/// - The chain is never empty; a fresh document holds one empty line.
/// - `current` always refers to a live slot in the chain.
/// - `cursor.row` equals the 1-based position of `current` in the chain.
#[derive(Debug)]
pub struct Document {
    slots: Vec<Option<Slot>>,
    /// Indices of freed slots, reused before the arena grows.
    free: Vec<usize>,
    head: LineId,
    current: LineId,
    cursor: Cursor,
    line_count: usize,
    line_capacity: usize,
}

impl Document {
    /// Creates a document containing one empty line, cursor at (1, 1).
    pub fn new() -> Self {
        // The default capacity cannot fail the zero-capacity check.
        Self::with_line_capacity(DEFAULT_LINE_CAPACITY)
            .expect("default line capacity is non-zero")
    }

    /// Creates a document whose lines are allocated with `capacity` bytes.
    pub fn with_line_capacity(capacity: usize) -> Result<Self, BufferError> {
        let first = Line::new(capacity)?;
        let head = LineId(0);
        Ok(Self {
            slots: vec![Some(Slot {
                line: first,
                next: None,
                prev: None,
            })],
            free: Vec::new(),
            head,
            current: head,
            cursor: Cursor::origin(),
            line_count: 1,
            line_capacity: capacity,
        })
    }

    // ==================== Accessors ====================

    /// Current cursor position (1-based row and column).
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Number of lines in the document. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Byte capacity used for newly allocated lines.
    pub fn line_capacity(&self) -> usize {
        self.line_capacity
    }

    /// In-order traversal of the lines, for render and save.
    pub fn iter_lines(&self) -> LineIter<'_> {
        LineIter {
            doc: self,
            next: Some(self.head),
        }
    }

    /// The full document content, lines concatenated in order.
    ///
    /// Newline markers are stored in line content, so no separator is
    /// inserted here.
    pub fn content_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for line in self.iter_lines() {
            out.extend_from_slice(line.content());
        }
        out
    }

    // ==================== Mutations ====================

    /// Appends `b` to the current line and advances the column.
    pub fn insert_char(&mut self, b: u8) -> Result<Dirty, BufferError> {
        self.line_mut(self.current).push_byte(b)?;
        self.cursor.col += 1;
        Ok(Dirty::Line)
    }

    /// Terminates the current line with a newline marker and makes a new
    /// empty line, spliced immediately after it, the current line.
    ///
    /// On success the cursor moves to (row + 1, 1). If the current line
    /// has no room left for the marker, nothing changes.
    pub fn split_line(&mut self) -> Result<Dirty, BufferError> {
        // Allocate before writing the marker, so neither failure mode
        // leaves the document half-split.
        let new_line = Line::new(self.line_capacity)?;
        self.line_mut(self.current).push_byte(b'\n')?;

        let after = self.slot(self.current).next;
        let new_id = self.alloc(Slot {
            line: new_line,
            next: after,
            prev: Some(self.current),
        });

        self.slot_mut(self.current).next = Some(new_id);
        if let Some(after_id) = after {
            self.slot_mut(after_id).prev = Some(new_id);
        }

        self.current = new_id;
        self.cursor.row += 1;
        self.cursor.col = 1;
        self.line_count += 1;
        Ok(Dirty::Screen)
    }

    /// Erases before the cursor: removes the most recently written byte
    /// of the current line, or merges into the previous line when the
    /// cursor is at column 1.
    ///
    /// At (1, 1) there is nothing to erase and the call is a clean no-op.
    /// A merge that would overflow the previous line's capacity is
    /// rejected before any mutation, leaving the document unchanged.
    pub fn erase_before_cursor(&mut self) -> Result<Dirty, BufferError> {
        if self.cursor.col > 1 {
            // Content before the cursor on this line: drop the most
            // recently written byte.
            let _ = self.line_mut(self.current).pop_byte();
            self.cursor.col -= 1;
            return Ok(Dirty::Line);
        }

        let prev_id = match self.slot(self.current).prev {
            Some(id) => id,
            // Column 1 on the first line: cannot erase past the start.
            None => return Ok(Dirty::Clean),
        };

        // Validate the merge before touching anything. The previous line
        // loses its newline marker and gains the current line's content.
        let prev = &self.slot(prev_id).line;
        let cur_used = self.slot(self.current).line.used();
        debug_assert!(prev.ends_with_newline());
        let prev_used = prev.used() - 1;
        let needed = prev_used + cur_used;
        if needed > prev.capacity() {
            return Err(BufferError::Overflow {
                needed,
                capacity: prev.capacity(),
            });
        }

        // Remove the newline marker; the merge point becomes the cursor.
        let _ = self.line_mut(prev_id).pop_byte();
        self.cursor.col = prev_used + 1;

        // Append the current line's remaining content, then splice the
        // slot out of the chain.
        if cur_used > 0 {
            let content = self.slot(self.current).line.content().to_vec();
            self.line_mut(prev_id)
                .extend_from(&content)
                .expect("merge capacity was checked");
        }

        let next = self.slot(self.current).next;
        self.slot_mut(prev_id).next = next;
        if let Some(next_id) = next {
            self.slot_mut(next_id).prev = Some(prev_id);
        }
        self.release(self.current);

        self.current = prev_id;
        self.cursor.row -= 1;
        self.line_count -= 1;
        Ok(Dirty::Screen)
    }

    // ==================== Arena plumbing ====================

    fn alloc(&mut self, slot: Slot) -> LineId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(slot);
                LineId(index)
            }
            None => {
                self.slots.push(Some(slot));
                LineId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: LineId) {
        self.slots[id.0] = None;
        self.free.push(id.0);
    }

    fn slot(&self, id: LineId) -> &Slot {
        self.slots[id.0].as_ref().expect("live line id")
    }

    fn slot_mut(&mut self, id: LineId) -> &mut Slot {
        self.slots[id.0].as_mut().expect("live line id")
    }

    fn line_mut(&mut self, id: LineId) -> &mut Line {
        &mut self.slot_mut(id).line
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only in-order iterator over a document's lines.
pub struct LineIter<'a> {
    doc: &'a Document,
    next: Option<LineId>,
}

impl<'a> Iterator for LineIter<'a> {
    type Item = &'a Line;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let slot = self.doc.slot(id);
        self.next = slot.next;
        Some(&slot.line)
    }
}
