// Chunk: docs/chunks/raw_mode_guard - Scoped raw-mode acquisition over termios
// Chunk: docs/chunks/poll_reader - Non-blocking input polling

//! tty-edit-terminal: raw terminal mode and polling input.
//!
//! Raw mode is modeled as a scoped resource: [`RawModeGuard::enter`]
//! captures the terminal's original state, applies the raw profile, and
//! restores the original on drop - on every exit path, including panics.
//! The terminal itself sits behind the [`TermSettings`] trait so tests
//! can substitute an in-memory double for the real termios calls.
//!
//! Input reads go through [`PollReader`], which preserves the
//! VMIN=0/VTIME=0 polling contract (a read returns immediately with
//! whatever bytes are available) while sleeping briefly after an empty
//! read so the edit loop does not spin on an idle terminal.

mod poll;
mod raw_mode;

pub use poll::PollReader;
pub use raw_mode::{RawModeGuard, TermSettings, TermiosSettings, TermiosState};
