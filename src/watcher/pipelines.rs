// Polling loop and thread orchestration

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::save::{SaveGame, read_save};

use super::operations::file_stamp;
use super::types::{FileStamp, SaveSlot, WatchEvent};

/// Polling state for one slot
pub struct SaveWatch {
    slot: SaveSlot,
    last: FileStamp,
}

impl SaveWatch {
    /// Records the current stamp without treating it as a change
    pub fn new(slot: SaveSlot) -> Self {
        let last = file_stamp(&slot.save_file);
        Self { slot, last }
    }

    pub fn slot(&self) -> &SaveSlot {
        &self.slot
    }

    /// Compare against the previous poll and re-read the save if it changed
    pub fn poll(&mut self) -> WatchEvent {
        let current = file_stamp(&self.slot.save_file);
        if current == self.last {
            return WatchEvent::Unchanged;
        }
        self.last = current.clone();

        if current == FileStamp::Missing {
            return WatchEvent::Removed;
        }

        log::debug!("Noticed change in: {}", self.slot.name);
        WatchEvent::Changed(read_save(&self.slot.save_file))
    }
}

/// Run one watch forever, handing every successfully parsed save to `callback`.
/// Unreadable or half-written saves are logged and skipped; the next write retries.
fn run_watch<F>(mut watch: SaveWatch, interval: Duration, callback: Arc<F>)
where
    F: Fn(&SaveSlot, SaveGame) + Send + Sync + 'static,
{
    loop {
        std::thread::sleep(interval);

        match watch.poll() {
            WatchEvent::Unchanged => {}
            WatchEvent::Removed => {
                log::warn!(
                    "Save file disappeared: {}",
                    watch.slot().save_file.display()
                );
            }
            WatchEvent::Changed(Ok(save)) => callback(watch.slot(), save),
            WatchEvent::Changed(Err(e)) => {
                log::warn!("Skipping change in {}: {}", watch.slot().name, e);
            }
        }
    }
}

/// Start one polling thread per slot. The threads never return.
pub fn watch_saves<F>(slots: Vec<SaveSlot>, interval: Duration, callback: F) -> Vec<JoinHandle<()>>
where
    F: Fn(&SaveSlot, SaveGame) + Send + Sync + 'static,
{
    let callback = Arc::new(callback);

    slots
        .into_iter()
        .map(|slot| {
            log::debug!("Adding a watcher to file: {}", slot.name);
            log::debug!("Path: {}", slot.save_file.display());

            let watch = SaveWatch::new(slot);
            let callback = Arc::clone(&callback);
            std::thread::spawn(move || run_watch(watch, interval, callback))
        })
        .collect()
}
