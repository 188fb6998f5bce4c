// Chunk: docs/chunks/raw_mode_guard - Scoped raw-mode acquisition over termios

//! Raw-mode entry and guaranteed restoration.
//!
//! The terminal mode service is a trait so the guard logic can be tested
//! against an in-memory double; the real implementation wraps termios on
//! stdin.

use std::io;
use std::mem;

/// Access to a terminal's mode settings.
///
/// `get` captures the current state, `set` applies one, and `make_raw`
/// derives the raw profile from a captured state. The state type is
/// opaque to callers; the guard only moves it between these three
/// operations.
pub trait TermSettings {
    type State: Clone;

    /// Captures the terminal's current mode.
    fn get(&self) -> io::Result<Self::State>;

    /// Applies a previously captured or derived mode.
    fn set(&mut self, state: &Self::State) -> io::Result<()>;

    /// Derives the raw profile from a captured state.
    fn make_raw(state: &Self::State) -> Self::State;
}

/// Scoped raw mode: enters on construction, restores on drop.
///
/// Restoration runs on every exit path - normal quit, error return, and
/// panic unwind - so the user's shell never stays stuck in raw mode. A
/// restore failure at drop time is logged; exiting matters more than the
/// failed restore at that point.
pub struct RawModeGuard<'a, T: TermSettings> {
    settings: &'a mut T,
    original: T::State,
}

impl<'a, T: TermSettings> RawModeGuard<'a, T> {
    /// Captures the current mode and switches the terminal to raw.
    ///
    /// If applying the raw profile fails the terminal is left in its
    /// original mode and the error is returned.
    pub fn enter(settings: &'a mut T) -> io::Result<Self> {
        let original = settings.get()?;
        let raw = T::make_raw(&original);
        settings.set(&raw)?;
        Ok(Self { settings, original })
    }
}

impl<T: TermSettings> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        if let Err(e) = self.settings.set(&self.original) {
            log::error!("failed to restore terminal mode: {}", e);
        }
    }
}

/// Terminal mode settings backed by POSIX termios.
pub struct TermiosSettings {
    fd: libc::c_int,
}

impl TermiosSettings {
    /// Settings for the process's standard input.
    pub fn stdin() -> Self {
        Self {
            fd: libc::STDIN_FILENO,
        }
    }
}

/// A captured termios state.
#[derive(Clone, Copy)]
pub struct TermiosState(libc::termios);

impl TermSettings for TermiosSettings {
    type State = TermiosState;

    fn get(&self) -> io::Result<TermiosState> {
        let mut state: libc::termios = unsafe { mem::zeroed() };
        if unsafe { libc::tcgetattr(self.fd, &mut state) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(TermiosState(state))
    }

    fn set(&mut self, state: &TermiosState) -> io::Result<()> {
        if unsafe { libc::tcsetattr(self.fd, libc::TCSAFLUSH, &state.0) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    fn make_raw(state: &TermiosState) -> TermiosState {
        let mut raw = state.0;
        // Output: no post-processing (we inject CR before LF ourselves).
        raw.c_oflag &= !libc::OPOST;
        // Local: no canonical buffering, signals, echo, or extended input.
        raw.c_lflag &= !(libc::ICANON | libc::ISIG | libc::ECHO | libc::IEXTEN);
        // Input: no stripping, parity checking, break signaling, or flow
        // control.
        raw.c_iflag &= !(libc::ISTRIP | libc::INPCK | libc::BRKINT | libc::IXON);
        // 8-bit characters.
        raw.c_cflag |= libc::CS8;
        // Polling reads: return immediately with whatever is available.
        raw.c_cc[libc::VMIN] = 0;
        raw.c_cc[libc::VTIME] = 0;
        TermiosState(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory terminal double tracking the applied mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Canonical,
        Raw,
    }

    struct FakeTerm {
        current: Mode,
        /// Every mode applied via `set`, in order. Shared so tests can
        /// observe the sequence while the guard holds the borrow.
        applied: std::rc::Rc<std::cell::RefCell<Vec<Mode>>>,
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

    /// Double whose get/set fail, for error-path coverage.
    struct BrokenTerm {
        fail_get: bool,
    }

    impl TermSettings for BrokenTerm {
        type State = ();

        fn get(&self) -> io::Result<()> {
            if self.fail_get {
                Err(io::Error::new(io::ErrorKind::Other, "not a tty"))
            } else {
                Ok(())
            }
        }

        fn set(&mut self, _state: &()) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "not a tty"))
        }

        fn make_raw(_state: &()) {}
    }

    #[test]
    fn enter_switches_to_raw() {
        let mut term = FakeTerm::new();
        let applied = term.applied.clone();
        let _guard = RawModeGuard::enter(&mut term).unwrap();
        assert_eq!(*applied.borrow(), vec![Mode::Raw]);
    }

    #[test]
    fn drop_restores_original_mode() {
        let mut term = FakeTerm::new();
        let applied = term.applied.clone();
        {
            let _guard = RawModeGuard::enter(&mut term).unwrap();
        }
        assert_eq!(*applied.borrow(), vec![Mode::Raw, Mode::Canonical]);
        assert_eq!(term.current, Mode::Canonical);
    }

    #[test]
    fn restore_runs_on_panic_unwind() {
        let mut term = FakeTerm::new();
        let applied = term.applied.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = RawModeGuard::enter(&mut term).unwrap();
            panic!("edit loop blew up");
        }));
        assert!(result.is_err());
        assert_eq!(*applied.borrow(), vec![Mode::Raw, Mode::Canonical]);
    }

    #[test]
    fn failed_capture_propagates() {
        let mut term = BrokenTerm { fail_get: true };
        assert!(RawModeGuard::enter(&mut term).is_err());
    }

    #[test]
    fn failed_raw_switch_propagates() {
        let mut term = BrokenTerm { fail_get: false };
        assert!(RawModeGuard::enter(&mut term).is_err());
    }
}
