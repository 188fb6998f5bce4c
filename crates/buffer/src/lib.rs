// Chunk: docs/chunks/line_storage - Capacity-bounded line storage
// Chunk: docs/chunks/document_arena - Document as an arena of index-linked lines

//! tty-edit-buffer: The document buffer for the tty-edit editor.
//!
//! This crate provides the two data structures at the heart of the editor:
//!
//! - [`Line`]: an owned byte buffer with a fixed capacity and a tracked
//!   used length. Every mutation is capacity-checked; an operation that
//!   would not fit returns [`BufferError::Overflow`] instead of writing.
//! - [`Document`]: an ordered sequence of `Line`s with a 1-based cursor.
//!   Lines live in an arena and are linked by stable [`LineId`] indices,
//!   so splitting and merging lines is index reassignment rather than
//!   pointer surgery.
//!
//! # Example
//!
//! ```
//! use tty_edit_buffer::{Document, Dirty};
//!
//! let mut doc = Document::new();
//! doc.insert_char(b'h').unwrap();
//! doc.insert_char(b'i').unwrap();
//! assert_eq!(doc.cursor().as_pair(), (1, 3));
//!
//! // Split, then merge right back.
//! doc.split_line().unwrap();
//! assert_eq!(doc.line_count(), 2);
//! let dirty = doc.erase_before_cursor().unwrap();
//! assert_eq!(dirty, Dirty::Screen);
//! assert_eq!(doc.content_bytes(), b"hi");
//! ```
//!
//! # Dirty Tracking
//!
//! Each mutation returns a [`Dirty`] value so the render loop can skip
//! redraws when nothing visible changed:
//!
//! - `Dirty::Clean` - no visual change (e.g., backspace at the start of
//!   the document)
//! - `Dirty::Line` - only the current line changed
//! - `Dirty::Screen` - the line structure changed (split or merge)

mod document;
mod line;
mod types;

pub use document::{Document, LineId, DEFAULT_LINE_CAPACITY};
pub use line::Line;
pub use types::{BufferError, Cursor, Dirty};
