// Filesystem operations for the watcher

use std::error::Error;
use std::path::Path;

use super::types::{FileStamp, SaveSlot};

/// List the save slots under the save root.
/// Every directory directly under `root` is a slot; hidden entries and plain files are skipped.
pub fn discover_saves(root: &Path) -> Result<Vec<SaveSlot>, Box<dyn Error>> {
    log::info!("Looking for saves in: {}", root.display());

    let mut slots = Vec::new();
    let walk = walkdir::WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 is the root itself
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }

        let slot = SaveSlot::from_dir(entry.path(), &name);
        if !slot.save_file.is_file() {
            log::warn!(
                "No save file named {} in {} yet, watching anyway",
                name,
                entry.path().display()
            );
        }
        slots.push(slot);
    }

    Ok(slots)
}

pub fn file_stamp(path: &Path) -> FileStamp {
    match std::fs::metadata(path) {
        Ok(meta) => FileStamp::Present {
            modified: meta.modified().ok(),
            len: meta.len(),
        },
        Err(_) => FileStamp::Missing,
    }
}
