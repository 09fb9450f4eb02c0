//! Twitch integration - token validation and channel title updates
//!
//! ## Module Structure
//! - `types.rs`: API constants, response shapes and the `TwitchApi` seam
//! - `pure.rs`: connect link, response interpretation, token checks
//! - `operations.rs`: `HelixClient`, the reqwest-backed implementation

mod operations;
mod pure;
mod types;

// Re-export types
pub use types::{
    InvalidToken, TitleUpdate, TwitchApi, TwitchResult, ValidToken, ValidationResponse,
};

// Re-export operations
pub use operations::HelixClient;

// Re-export pure functions
pub use pure::{make_connect_link, token_warnings};
