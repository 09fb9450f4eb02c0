//! Save Reader - loads a Stardew Valley save into a typed tree
//!
//! ## Module Structure
//! - `types.rs`: SaveGame and the dictionary/list shapes the game serializes
//! - `lenient.rs`: forgiving numeric leaves
//! - `pure.rs`: date projection and display helpers
//! - `operations.rs`: file read + XML parse

mod lenient;
mod operations;
mod pure;
mod types;

pub type SaveResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Re-export types
pub use types::{SaveGame, Season, StardewDate};

// Re-export operations
pub use operations::{parse_save, read_save};

// Re-export pure functions
pub use pure::{describe_save, read_current_date};
