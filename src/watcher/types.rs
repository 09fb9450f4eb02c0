// Watcher type definitions

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::save::{SaveGame, SaveResult};

/// One save directory and the same-named save file inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlot {
    /// Directory name, e.g. "Abby_123456789"
    pub name: String,
    pub save_file: PathBuf,
}

impl SaveSlot {
    pub fn from_dir(dir: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            save_file: dir.join(name),
        }
    }
}

/// What a poll compares against the previous poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStamp {
    Missing,
    Present {
        modified: Option<SystemTime>,
        len: u64,
    },
}

#[derive(Debug)]
pub enum WatchEvent {
    Unchanged,
    Removed,
    Changed(SaveResult<SaveGame>),
}
