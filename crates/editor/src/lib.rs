// Chunk: docs/chunks/edit_engine - Key-processing state machine
// Chunk: docs/chunks/main_loop - Drain-then-render edit loop
//!
//! tty-edit: a minimal raw-mode terminal line editor.
//!
//! The editor is a synchronous read-process-draw loop:
//!
//! 1. Poll raw-mode stdin and decode at most one logical key
//! 2. The edit engine mutates the document and reports dirty state
//! 3. Render once after draining pending input, if anything changed
//!
//! Terminal configuration and file persistence are external
//! collaborators behind narrow seams (`TermSettings`, `Persist`), so the
//! whole session - raw-mode entry through quit and restore - runs under
//! test with in-memory doubles.

pub mod config;
pub mod drain_loop;
pub mod engine;
pub mod render;
pub mod save;

pub use config::Config;
pub use drain_loop::run_session;
pub use engine::EditEngine;
pub use render::Renderer;
pub use save::{FileSink, Persist};
