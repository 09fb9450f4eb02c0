pub mod operations;
pub mod pure;
pub mod types;

// Re-export types
pub use types::DewConfig;

// Re-export operations
pub use operations::{load_cfg, load_config, save_cfg};
