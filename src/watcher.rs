//! Change Watcher - polls every save slot and re-parses on modification
//!
//! One thread per slot. Each thread remembers the save file's stamp
//! (mtime + size) and re-reads the save whenever the stamp changes, the way a
//! stat-polling file watcher does. Slots created after startup are not
//! picked up.
//!
//! ## Module Structure
//! - `types.rs`: SaveSlot, FileStamp, WatchEvent
//! - `operations.rs`: slot discovery and file stamps
//! - `pipelines.rs`: per-slot polling loop and thread spawning

mod operations;
mod pipelines;
mod types;

// Re-export types
pub use types::SaveSlot;

// Re-export operations
pub use operations::discover_saves;

// Re-export pipelines
pub use pipelines::watch_saves;
