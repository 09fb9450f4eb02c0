// Session type definitions

use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::twitch::TwitchApi;

/// Everything a watch callback needs, shared across watch threads
pub struct Session {
    pub(super) api: Box<dyn TwitchApi>,
    /// Broadcaster id of the validated token
    pub user_id: String,
    pub login: String,
    pub stream_title: String,
    pub multiplayer: bool,
    /// Last title Twitch accepted, to skip identical updates
    pub(super) last_title: Mutex<Option<String>>,
}

/// What happened to one title update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Updated,
    Unchanged,
    Failed,
}

/// Fatal problems before any save is watched
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no access token in .env! Please visit: {connect_link} and copy the access token into .env")]
    MissingToken { connect_link: String },
    #[error("invalid token response: {status} {message}")]
    InvalidToken { status: u16, message: String },
    #[error("token validation failed: {0}")]
    Validation(String),
    #[error("can't create HTTP client: {0}")]
    Http(String),
    #[error("can't read save directory {}: {reason}", .path.display())]
    SaveDir { path: PathBuf, reason: String },
}

impl StartupError {
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Instructions printed to stderr even when logging is filtered out
    pub fn console_message(&self) -> Option<String> {
        match self {
            StartupError::MissingToken { connect_link } => Some(format!(
                "Please visit: {} and copy the access token into .env",
                connect_link
            )),
            _ => None,
        }
    }
}
