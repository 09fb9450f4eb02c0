//! Twitch API type definitions

use serde::{Deserialize, Serialize};

pub const AUTHORIZE_URL: &str = "https://id.twitch.tv/oauth2/authorize";
pub const VALIDATE_URL: &str = "https://id.twitch.tv/oauth2/validate";
pub const CHANNELS_URL: &str = "https://api.twitch.tv/helix/channels";

/// Scope needed to modify the channel title
pub const REQUIRED_SCOPE: &str = "channel:manage:broadcast";

/// "No Content", returned by a successful channel PATCH
pub const STATUS_TITLE_UPDATED: u16 = 204;

pub type TwitchResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidToken {
    pub client_id: String,
    pub login: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    pub user_id: String,
    /// Seconds until the token expires
    pub expires_in: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvalidToken {
    pub status: u16,
    pub message: String,
}

/// Body of the validate endpoint, which is one shape or the other
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ValidationResponse {
    Valid(ValidToken),
    Invalid(InvalidToken),
}

/// JSON body of the channel PATCH
#[derive(Debug, Serialize)]
pub struct ChannelUpdate<'a> {
    pub title: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleUpdate {
    Updated,
    Rejected { status: u16, reason: String },
}

/// The two calls we make against Twitch
pub trait TwitchApi: Send + Sync {
    fn validate_token(&self) -> TwitchResult<ValidationResponse>;

    fn update_title(&self, broadcaster_id: &str, title: &str) -> TwitchResult<TitleUpdate>;
}
