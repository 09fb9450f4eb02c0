use crate::paths::PATH_STARDEW_SAVES;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::pure::{parse_flag, parse_number};

pub const DEFAULT_STREAM_TITLE: &str = "Finding the Trash Catalogue today!? 🗑️💢";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Optional settings file (settings.json). Every field may be omitted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DewSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_dir: Option<PathBuf>,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub redirect_uri: String,
    /// Text shown before the date and perfection parts of the title
    #[serde(default = "default_stream_title")]
    pub stream_title: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Multiplayer farms have one extra crafting recipe
    #[serde(default)]
    pub multiplayer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_secs: Option<u64>,
}

fn default_stream_title() -> String {
    DEFAULT_STREAM_TITLE.to_string()
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for DewSettings {
    fn default() -> Self {
        DewSettings {
            save_dir: None,
            client_id: String::new(),
            redirect_uri: String::new(),
            stream_title: default_stream_title(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            multiplayer: false,
            http_timeout_secs: None,
        }
    }
}

/// Effective configuration after merging settings.json, `.env` and the process environment
#[derive(Clone, Debug, PartialEq)]
pub struct DewConfig {
    pub save_dir: PathBuf,
    pub client_id: String,
    pub redirect_uri: String,
    /// None when unset or blank
    pub access_token: Option<String>,
    pub stream_title: String,
    pub poll_interval_ms: u64,
    pub multiplayer: bool,
    pub http_timeout_secs: Option<u64>,
}

impl DewConfig {
    /// Apply variables (already merged `.env` + environment) on top of the settings file.
    /// Unparseable numeric variables are ignored with a warning.
    pub fn resolve(settings: DewSettings, vars: &HashMap<String, String>) -> Self {
        let var = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let save_dir = var("SAVE_DIR")
            .map(PathBuf::from)
            .or(settings.save_dir)
            .unwrap_or_else(|| PATH_STARDEW_SAVES.clone());

        let poll_interval_ms = match var("POLL_INTERVAL_MS") {
            Some(raw) => parse_number("POLL_INTERVAL_MS", &raw).unwrap_or(settings.poll_interval_ms),
            None => settings.poll_interval_ms,
        };

        let http_timeout_secs = match var("HTTP_TIMEOUT_SECS") {
            Some(raw) => parse_number("HTTP_TIMEOUT_SECS", &raw).or(settings.http_timeout_secs),
            None => settings.http_timeout_secs,
        };

        DewConfig {
            save_dir,
            client_id: var("CLIENT_ID").unwrap_or(settings.client_id),
            redirect_uri: var("REDIRECT_URI").unwrap_or(settings.redirect_uri),
            access_token: var("ACCESS_TOKEN"),
            stream_title: var("STREAM_TITLE").unwrap_or(settings.stream_title),
            // A zero interval would spin the watch threads
            poll_interval_ms: poll_interval_ms.max(100),
            multiplayer: var("MULTIPLAYER")
                .map(|raw| parse_flag(&raw))
                .unwrap_or(settings.multiplayer),
            http_timeout_secs,
        }
    }
}
