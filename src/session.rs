//! Session - startup bootstrap and the per-change publish pipeline
//!
//! ## Module Structure
//! - `types.rs`: Session state and StartupError
//! - `pipelines.rs`: bootstrap, save handling, and `start`

mod pipelines;
mod types;

// Re-export types
pub use types::{Session, StartupError};

// Re-export pipelines
pub use pipelines::start;
