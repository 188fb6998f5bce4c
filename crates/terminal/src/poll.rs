// Chunk: docs/chunks/poll_reader - Non-blocking input polling

//! Polling reader over raw-mode standard input.
//!
//! With VMIN=0/VTIME=0 a read returns immediately with whatever bytes
//! are available - an empty read is not an error, it means "nothing
//! typed yet". Retrying that immediately would peg a core, so the
//! reader sleeps briefly after each empty read before handing control
//! back to the caller.

use std::io::{self, Read};
use std::thread;
use std::time::Duration;

/// How long to sleep after a read that returned no bytes.
const IDLE_SLEEP: Duration = Duration::from_millis(1);

/// A reader that preserves polling semantics without busy-spinning.
///
/// Wraps any `Read`; pass raw-mode stdin in production. Non-empty reads
/// are passed through untouched, so keystroke latency is unaffected.
pub struct PollReader<R> {
    inner: R,
    idle_sleep: Duration,
}

impl<R: Read> PollReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            idle_sleep: IDLE_SLEEP,
        }
    }
}

impl<R: Read> Read for PollReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 && !buf.is_empty() {
            thread::sleep(self.idle_sleep);
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn passes_bytes_through() {
        let mut reader = PollReader::new(Cursor::new(b"ab".to_vec()));
        let mut buf = [0u8; 1];
        assert_eq!(reader.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'a');
        assert_eq!(reader.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'b');
    }

    #[test]
    fn empty_read_reports_zero() {
        let mut reader = PollReader::new(Cursor::new(Vec::new()));
        let mut buf = [0u8; 1];
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }
}
