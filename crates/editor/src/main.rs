// Chunk: docs/chunks/main_loop - Drain-then-render edit loop
//!
//! Process entry point: wires the real terminal, stdin, and the output
//! file into an edit session.
//!
//! Startup order matters: configuration and the document are built
//! before raw mode is entered, so a construction failure aborts with a
//! readable diagnostic while the terminal is still in its original
//! mode. Once the session returns - however it returns - raw mode has
//! already been released by the guard, and the screen is cleared for
//! the shell.

use std::io::{self, Write};
use std::process;

use tty_edit::config::Config;
use tty_edit::drain_loop::run_session;
use tty_edit::engine::EditEngine;
use tty_edit::save::FileSink;
use tty_edit_buffer::Document;
use tty_edit_terminal::TermiosSettings;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("tty-edit: {}", e);
        process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let config = Config::load();

    let doc = Document::with_line_capacity(config.line_capacity)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut engine = EditEngine::new(doc, FileSink::new(&config.save_path));

    let mut term = TermiosSettings::stdin();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let result = run_session(&mut term, stdin.lock(), &mut stdout, &mut engine);

    // Raw mode is restored by now; leave the shell a clean screen
    // whether the session ended by quit or by error.
    stdout.write_all(b"\x1b[2J\x1b[;H")?;
    stdout.flush()?;

    result
}
