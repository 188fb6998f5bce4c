// Chunk: docs/chunks/editor_config - Optional JSON configuration file

//! Editor configuration.
//!
//! An optional JSON file under the platform config directory tunes the
//! per-line byte capacity and the save path. The editor takes no
//! command-line flags, so this file is the only knob. A missing file is
//! normal; a malformed one is logged and ignored - startup never fails
//! over configuration.

use std::fs;
use std::path::PathBuf;

use log::warn;
use serde::Deserialize;

use crate::save::DEFAULT_SAVE_PATH;

const APP_NAME: &str = "tty-edit";
const CONFIG_FILE: &str = "config.json";

/// Tunable editor settings, with defaults matching the stock build.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Byte capacity of each line buffer.
    pub line_capacity: usize,
    /// Path the save key appends to.
    pub save_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_capacity: tty_edit_buffer::DEFAULT_LINE_CAPACITY,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl Config {
    /// Loads configuration from the platform config directory, falling
    /// back to defaults when absent or unreadable.
    pub fn load() -> Self {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from an explicit path.
    ///
    /// A missing file yields the defaults silently; anything else that
    /// goes wrong (unreadable file, invalid JSON) is logged and also
    /// yields the defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!("failed to read config {:?}: {}", path, e);
                return Self::default();
            }
        };

        match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

/// Returns the path to the config file, e.g.
/// `~/.config/tty-edit/config.json` on Linux.
///
/// Returns `None` if the platform config directory cannot be
/// determined.
pub fn config_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_NAME).join(CONFIG_FILE))
}
