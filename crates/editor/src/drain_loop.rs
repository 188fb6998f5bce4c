// Chunk: docs/chunks/main_loop - Drain-then-render edit loop

//! The edit session loop.
//!
//! One iteration drains every key already buffered in the input,
//! merging the dirty state each key produces, then renders at most once
//! to cover all of it. Draining before drawing keeps a fast paste from
//! paying one redraw per character, and an idle terminal produces no
//! redraws at all.
//!
//! Raw mode is held by a guard for exactly the lifetime of the loop:
//! every way out - the quit key, an I/O error, a panic - restores the
//! terminal's original mode before control leaves this function.

use std::io::{self, Read, Write};

use tty_edit_buffer::Dirty;
use tty_edit_input::KeyDecoder;
use tty_edit_terminal::{PollReader, RawModeGuard, TermSettings};

use crate::engine::EditEngine;
use crate::render::Renderer;
use crate::save::Persist;

/// Runs an edit session to completion.
///
/// Enters raw mode on `term`, reads keys from `input`, draws to
/// `output`, and returns once the engine stops running. The terminal's
/// original mode is restored on every exit path.
pub fn run_session<T, R, W, P>(
    term: &mut T,
    input: R,
    output: &mut W,
    engine: &mut EditEngine<P>,
) -> io::Result<()>
where
    T: TermSettings,
    R: Read,
    W: Write,
    P: Persist,
{
    let _guard = RawModeGuard::enter(term)?;
    let mut reader = PollReader::new(input);

    // Initial paint so the (empty) document and cursor are visible
    // before the first keystroke.
    Renderer::draw(engine.document(), output)?;

    while engine.is_running() {
        let mut dirty = Dirty::Clean;

        // Drain everything already buffered, then render once.
        while let Some(key) = KeyDecoder::decode(&mut reader)? {
            dirty.merge(engine.apply(key));
            if !engine.is_running() {
                break;
            }
        }

        if !dirty.is_clean() {
            Renderer::draw(engine.document(), output)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tty_edit_buffer::Document;

    const CTRL_Q: u8 = 0x11;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Canonical,
        Raw,
    }

    struct FakeTerm {
        current: Mode,
        applied: Rc<RefCell<Vec<Mode>>>,
    }

    impl FakeTerm {
        fn new() -> Self {
            Self {
                current: Mode::Canonical,
                applied: Default::default(),
            }
        }
    }

    impl TermSettings for FakeTerm {
        type State = Mode;

        fn get(&self) -> io::Result<Mode> {
            Ok(self.current)
        }

        fn set(&mut self, state: &Mode) -> io::Result<()> {
            self.current = *state;
            self.applied.borrow_mut().push(*state);
            Ok(())
        }

        fn make_raw(_state: &Mode) -> Mode {
            Mode::Raw
        }
    }

    struct NullSink;

    impl Persist for NullSink {
        fn append(&mut self, lines: &[&[u8]]) -> io::Result<u64> {
            Ok(lines.iter().map(|l| l.len() as u64).sum())
        }
    }

    fn run_with_input(input: &[u8]) -> (Vec<u8>, EditEngine<NullSink>, Vec<Mode>) {
        let mut term = FakeTerm::new();
        let applied = term.applied.clone();
        let mut output = Vec::new();
        let mut engine = EditEngine::new(Document::new(), NullSink);
        run_session(
            &mut term,
            std::io::Cursor::new(input.to_vec()),
            &mut output,
            &mut engine,
        )
        .unwrap();
        let modes = applied.borrow().clone();
        (output, engine, modes)
    }

    #[test]
    fn quit_terminates_and_restores_terminal_mode() {
        let (_output, engine, modes) = run_with_input(&[CTRL_Q]);
        assert!(!engine.is_running());
        // Raw for the session, original restored on the way out.
        assert_eq!(modes, vec![Mode::Raw, Mode::Canonical]);
    }

    #[test]
    fn quit_after_editing_restores_terminal_mode() {
        let (_output, engine, modes) = run_with_input(b"hello\rworld\x11");
        assert!(!engine.is_running());
        assert_eq!(engine.document().content_bytes(), b"hello\nworld");
        assert_eq!(modes.last(), Some(&Mode::Canonical));
    }

    #[test]
    fn session_paints_initial_empty_frame() {
        let (output, _engine, _modes) = run_with_input(&[CTRL_Q]);
        // The first frame is drawn before any key is processed.
        assert!(output.starts_with(b"\x1b[2J\x1b[;H\x1b[1;1H"));
    }

    /// Counts rendered frames by their leading clear-screen sequence.
    fn frame_count(output: &[u8]) -> usize {
        const CLEAR: &[u8] = b"\x1b[2J";
        output.windows(CLEAR.len()).filter(|w| *w == CLEAR).count()
    }

    #[test]
    fn buffered_typing_renders_after_the_drain() {
        let (output, engine, _modes) = run_with_input(b"hi\x11");
        assert_eq!(engine.document().content_bytes(), b"hi");
        // Initial empty frame, then one frame covering the whole
        // drained burst - not one frame per keystroke.
        assert_eq!(frame_count(&output), 2);
        assert!(output.ends_with(b"hi\x1b[1;3H"));
    }

    #[test]
    fn noop_keys_do_not_redraw() {
        // Arrow key then quit: nothing changes, so only the initial
        // frame is drawn.
        let (output, _engine, _modes) = run_with_input(b"\x1b[A\x11");
        assert_eq!(frame_count(&output), 1);
    }
}
