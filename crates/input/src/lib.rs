// Chunk: docs/chunks/key_decoding - Raw byte to key event decoding
//!
//! Key event types and the byte-level decoder for raw terminal input.
//!
//! In raw mode the terminal delivers uninterpreted bytes: printable
//! characters arrive as themselves, Ctrl combinations as 0x01..0x1A, and
//! special keys as multi-byte escape sequences (`ESC [ A` for Up, and so
//! on). [`KeyDecoder::decode`] reads at most one logical key per call
//! from a non-blocking reader and never leaves partial sequence bytes
//! behind to be misread as text.

use std::io::{self, Read};

/// A logical key decoded from raw input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A byte to be inserted literally (printable characters, tab).
    Byte(u8),
    /// A Ctrl-letter combination; the char is the lowercase letter.
    Ctrl(char),
    /// Backspace (0x08) or DEL (0x7F).
    Backspace,
    /// Carriage return or line feed.
    Enter,
    /// A bare escape key, or an escape sequence with no mapping.
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Home key
    Home,
    /// End key
    End,
    /// Forward delete
    Delete,
    /// Insert key
    Insert,
    /// Page Up
    PageUp,
    /// Page Down
    PageDown,
}

impl Key {
    /// Returns true for keys the edit engine inserts into the document.
    pub fn is_text(&self) -> bool {
        matches!(self, Key::Byte(_))
    }
}

/// Decodes raw input bytes into logical keys.
///
/// The decoder is stateless across calls: each call to [`decode`]
/// consumes exactly the bytes of one logical key. The reader is expected
/// to be in non-blocking poll mode, where a read returning zero bytes
/// means "no input yet".
///
/// [`decode`]: KeyDecoder::decode
pub struct KeyDecoder;

impl KeyDecoder {
    /// Reads at most one logical key from `reader`.
    ///
    /// Returns `Ok(None)` when no input is available; the caller
    /// re-polls. Escape sequences are consumed in full, so arrow keys
    /// and friends never deposit stray `[A`-style bytes into later
    /// reads. A sequence that is cut off mid-way (the terminal produced
    /// ESC with nothing following) decodes as [`Key::Escape`].
    pub fn decode<R: Read>(reader: &mut R) -> io::Result<Option<Key>> {
        let b = match Self::read_byte(reader)? {
            Some(b) => b,
            None => return Ok(None),
        };

        let key = match b {
            0x1b => Self::decode_escape(reader)?,
            0x08 | 0x7f => Key::Backspace,
            b'\r' | b'\n' => Key::Enter,
            // Tab inserts literally; it is text, not a command.
            b'\t' => Key::Byte(b),
            // Remaining Ctrl-letter range: 0x01 = Ctrl-A .. 0x1A = Ctrl-Z.
            0x01..=0x1a => Key::Ctrl((b'a' + b - 1) as char),
            _ => Key::Byte(b),
        };
        Ok(Some(key))
    }

    /// Decodes the remainder of an escape sequence after ESC was read.
    fn decode_escape<R: Read>(reader: &mut R) -> io::Result<Key> {
        match Self::read_byte(reader)? {
            // Lone ESC: the key itself.
            None => Ok(Key::Escape),
            Some(b'[') => Self::decode_csi(reader),
            Some(b'O') => Self::decode_ss3(reader),
            // ESC followed by an unrelated byte (Alt-modified input).
            // Swallow it; the engine treats Escape as a no-op.
            Some(_) => Ok(Key::Escape),
        }
    }

    /// Decodes a CSI sequence: `ESC [ <params> <final>`.
    ///
    /// Parameter bytes (digits and `;`) are accumulated until a final
    /// byte in 0x40..=0x7E arrives.
    fn decode_csi<R: Read>(reader: &mut R) -> io::Result<Key> {
        let mut params = [0u8; 8];
        let mut len = 0;

        loop {
            let b = match Self::read_byte(reader)? {
                Some(b) => b,
                // Truncated sequence: give up without leaking bytes.
                None => return Ok(Key::Escape),
            };

            match b {
                b'A' => return Ok(Key::Up),
                b'B' => return Ok(Key::Down),
                b'C' => return Ok(Key::Right),
                b'D' => return Ok(Key::Left),
                b'H' => return Ok(Key::Home),
                b'F' => return Ok(Key::End),
                b'~' => return Ok(Self::tilde_key(&params[..len])),
                0x30..=0x3f => {
                    // Parameter byte; keep what fits, the tail cannot
                    // change which key this is.
                    if len < params.len() {
                        params[len] = b;
                        len += 1;
                    }
                }
                // Any other final byte ends the sequence unrecognized.
                0x40..=0x7e => return Ok(Key::Escape),
                _ => return Ok(Key::Escape),
            }
        }
    }

    /// Decodes an SS3 sequence: `ESC O <final>` (Home/End on some
    /// terminals, F1-F4 otherwise).
    fn decode_ss3<R: Read>(reader: &mut R) -> io::Result<Key> {
        match Self::read_byte(reader)? {
            Some(b'H') => Ok(Key::Home),
            Some(b'F') => Ok(Key::End),
            // F1-F4 and anything else: recognized, unmapped.
            _ => Ok(Key::Escape),
        }
    }

    /// Maps `ESC [ <n> ~` sequences to their keys.
    fn tilde_key(params: &[u8]) -> Key {
        match params {
            b"1" | b"7" => Key::Home,
            b"2" => Key::Insert,
            b"3" => Key::Delete,
            b"4" | b"8" => Key::End,
            b"5" => Key::PageUp,
            b"6" => Key::PageDown,
            _ => Key::Escape,
        }
    }

    /// Reads a single byte; `None` when the poll returned no input.
    fn read_byte<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match reader.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }
}
