// Chunk: docs/chunks/ansi_renderer - Document-to-terminal projection

//! Projects the document onto the terminal.
//!
//! A draw is a pure read of the document: clear the screen, home the
//! cursor, emit every line in order, then park the terminal cursor at
//! the document cursor. Raw mode disables output post-processing, so a
//! carriage return is injected before each newline byte by hand -
//! without it the terminal would line-feed straight down without
//! returning to column 1.

use std::io::{self, Write};

use tty_edit_buffer::{Cursor, Document};

const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
const CURSOR_HOME: &[u8] = b"\x1b[;H";

/// Renders a document as a stream of terminal escape sequences.
///
/// Stateless; the whole frame is assembled in memory and written with a
/// single call, then flushed.
pub struct Renderer;

impl Renderer {
    /// Draws the full document to `out`.
    pub fn draw<W: Write>(doc: &Document, out: &mut W) -> io::Result<()> {
        let mut frame = Vec::with_capacity(128);
        frame.extend_from_slice(CLEAR_SCREEN);
        frame.extend_from_slice(CURSOR_HOME);

        for line in doc.iter_lines() {
            let content = line.content();
            for (i, &b) in content.iter().enumerate() {
                if b == b'\n' && content.len() > 1 && i > 0 && content[i - 1] != b'\r' {
                    frame.push(b'\r');
                }
                frame.push(b);
            }
        }

        let Cursor { row, col } = doc.cursor();
        frame.extend_from_slice(format!("\x1b[{};{}H", row, col).as_bytes());

        out.write_all(&frame)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(doc: &mut Document, text: &str) {
        for b in text.bytes() {
            doc.insert_char(b).unwrap();
        }
    }

    fn draw(doc: &Document) -> Vec<u8> {
        let mut out = Vec::new();
        Renderer::draw(doc, &mut out).unwrap();
        out
    }

    #[test]
    fn empty_document_clears_homes_and_parks_cursor() {
        let doc = Document::new();
        assert_eq!(draw(&doc), b"\x1b[2J\x1b[;H\x1b[1;1H");
    }

    #[test]
    fn single_line_renders_content_then_cursor() {
        let mut doc = Document::new();
        type_str(&mut doc, "hi");
        assert_eq!(draw(&doc), b"\x1b[2J\x1b[;Hhi\x1b[1;3H");
    }

    #[test]
    fn newline_gets_carriage_return_injected() {
        let mut doc = Document::new();
        type_str(&mut doc, "hi");
        doc.split_line().unwrap();
        // "hi\n" renders as "hi\r\n"; cursor is on the empty second line.
        assert_eq!(draw(&doc), b"\x1b[2J\x1b[;Hhi\r\n\x1b[2;1H");
    }

    #[test]
    fn lone_newline_line_is_emitted_bare() {
        // Splitting an empty line leaves a line whose only byte is the
        // newline marker; the single-byte case takes no CR injection.
        let mut doc = Document::new();
        doc.split_line().unwrap();
        assert_eq!(draw(&doc), b"\x1b[2J\x1b[;H\n\x1b[2;1H");
    }

    #[test]
    fn multiple_lines_render_in_order() {
        let mut doc = Document::new();
        type_str(&mut doc, "one");
        doc.split_line().unwrap();
        type_str(&mut doc, "two");
        doc.split_line().unwrap();
        type_str(&mut doc, "three");
        assert_eq!(
            draw(&doc),
            b"\x1b[2J\x1b[;Hone\r\ntwo\r\nthree\x1b[3;6H"
        );
    }

    #[test]
    fn cursor_escape_tracks_merge_point() {
        let mut doc = Document::new();
        type_str(&mut doc, "ab");
        doc.split_line().unwrap();
        type_str(&mut doc, "cd");
        doc.erase_before_cursor().unwrap();
        // Merged content renders in full; the cursor sits at the merge
        // point, not at the end of the line.
        assert_eq!(draw(&doc), b"\x1b[2J\x1b[;Habcd\x1b[1;3H");
    }
}
