// Chunk: docs/chunks/edit_engine - Key-processing state machine

//! The edit engine: consumes key events and mutates the document.
//!
//! There are no editing modes; the whole state machine is the `running`
//! flag plus the document itself. Per-key failures (a full line, a save
//! that cannot open its file) are contained here: they are logged and
//! the loop continues, so one bad keystroke can neither crash the
//! editor nor corrupt buffer state.

use log::{debug, warn};
use tty_edit_buffer::{BufferError, Dirty, Document};
use tty_edit_input::Key;

use crate::save::Persist;

/// Key-event state machine over a document and a persistence sink.
pub struct EditEngine<P> {
    doc: Document,
    sink: P,
    running: bool,
}

impl<P: Persist> EditEngine<P> {
    pub fn new(doc: Document, sink: P) -> Self {
        Self {
            doc,
            sink,
            running: true,
        }
    }

    /// False once the quit key has been processed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read access for the renderer.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Processes one key event and reports how much of the screen it
    /// dirtied.
    ///
    /// Document errors never escape: an edit that cannot be applied is
    /// logged and reported as `Dirty::Clean`, leaving content and cursor
    /// exactly as they were.
    pub fn apply(&mut self, key: Key) -> Dirty {
        match key {
            Key::Ctrl('q') => {
                self.running = false;
                Dirty::Clean
            }
            Key::Ctrl('s') => {
                self.save();
                Dirty::Clean
            }
            Key::Backspace => Self::contain(self.doc.erase_before_cursor()),
            Key::Enter => Self::contain(self.doc.split_line()),
            Key::Byte(b) => Self::contain(self.doc.insert_char(b)),
            // Navigation is a deliberate no-op: the cursor always sits
            // at the end of the current line's content.
            Key::Up
            | Key::Down
            | Key::Left
            | Key::Right
            | Key::Home
            | Key::End
            | Key::Delete
            | Key::Insert
            | Key::PageUp
            | Key::PageDown
            | Key::Escape
            | Key::Ctrl(_) => Dirty::Clean,
        }
    }

    /// Saves the full line sequence through the persistence sink.
    ///
    /// Save failure is non-fatal: it is logged and the session
    /// continues with the in-memory document untouched.
    fn save(&mut self) {
        let lines: Vec<&[u8]> = self.doc.iter_lines().map(|l| l.content()).collect();
        match self.sink.append(&lines) {
            Ok(written) => debug!("saved {} bytes", written),
            Err(e) => warn!("save failed: {}", e),
        }
    }

    /// Converts a document result into a dirty report, swallowing and
    /// logging errors.
    fn contain(result: Result<Dirty, BufferError>) -> Dirty {
        match result {
            Ok(dirty) => dirty,
            Err(e) => {
                warn!("edit rejected: {}", e);
                Dirty::Clean
            }
        }
    }
}
