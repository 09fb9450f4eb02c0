// Startup and publish pipelines
// Combines config, Twitch, watcher, save and perfection into the running app

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::DewConfig;
use crate::perfection::{percent_perfection, perfection_counter, unmet_eradication_goals};
use crate::save::{SaveGame, describe_save, read_current_date};
use crate::title::format_title;
use crate::twitch::{
    HelixClient, InvalidToken, TitleUpdate, TwitchApi, ValidationResponse, make_connect_link,
    token_warnings,
};
use crate::watcher::{SaveSlot, discover_saves, watch_saves};

use super::types::{PublishOutcome, Session, StartupError};

/// The configured access token, or the link to go get one
pub fn require_token(config: &DewConfig) -> Result<String, StartupError> {
    log::debug!("Checking for access token in .env");

    if let Some(token) = &config.access_token {
        return Ok(token.clone());
    }

    let connect_link = make_connect_link(&config.client_id, &config.redirect_uri)
        .map_err(|e| StartupError::Validation(e.to_string()))?;
    Err(StartupError::MissingToken { connect_link })
}

impl Session {
    /// Validate the token and keep the broadcaster id it belongs to
    pub fn bootstrap(config: &DewConfig, api: Box<dyn TwitchApi>) -> Result<Self, StartupError> {
        log::debug!("Validating token found in .env");

        let token = match api.validate_token() {
            Ok(ValidationResponse::Valid(token)) => token,
            Ok(ValidationResponse::Invalid(InvalidToken { status, message })) => {
                return Err(StartupError::InvalidToken { status, message });
            }
            Err(e) => return Err(StartupError::Validation(e.to_string())),
        };

        log::info!("Valid token for: {}", token.login);
        log::debug!("Token expires in {}s", token.expires_in);
        for warning in token_warnings(&token, &config.client_id) {
            log::warn!("{}", warning);
        }

        Ok(Session {
            api,
            user_id: token.user_id,
            login: token.login,
            stream_title: config.stream_title.clone(),
            multiplayer: config.multiplayer,
            last_title: Mutex::new(None),
        })
    }

    /// Score a freshly parsed save and push the resulting title
    pub fn handle_save(&self, slot: &SaveSlot, save: &SaveGame) -> PublishOutcome {
        let date = read_current_date(save);
        let perfection = perfection_counter(save, self.multiplayer);
        let percentage = percent_perfection(&perfection);

        log::info!(
            "{}: {} is at {}% perfection",
            slot.name,
            describe_save(save),
            percentage
        );
        for category in perfection.categories() {
            log::debug!(
                "  {:<16} {:>6.2}% of {:>4.1} points",
                category.label,
                category.ratio * 100.0,
                category.weight
            );
        }
        let unmet = unmet_eradication_goals(save);
        if !unmet.is_empty() {
            log::debug!("  Eradication goals left: {}", unmet.join(", "));
        }

        let title = format_title(&self.stream_title, &date, percentage);
        self.publish(&title)
    }

    /// Send a title to the channel. Failures are logged and swallowed.
    /// The title lock is not held while the update is in flight.
    pub fn publish(&self, title: &str) -> PublishOutcome {
        if self.last_title().as_deref() == Some(title) {
            log::debug!("Stream title already set to: {}", title);
            return PublishOutcome::Unchanged;
        }

        match self.api.update_title(&self.user_id, title) {
            Ok(TitleUpdate::Updated) => {
                log::debug!("Successfully updated stream title to: {}", title);
                *self.last_title.lock().unwrap_or_else(|e| e.into_inner()) =
                    Some(title.to_string());
                PublishOutcome::Updated
            }
            Ok(TitleUpdate::Rejected { status, reason }) => {
                log::error!("Failed to update stream title: {} {}", status, reason);
                PublishOutcome::Failed
            }
            Err(e) => {
                log::error!("Failed to update stream title: {}", e);
                PublishOutcome::Failed
            }
        }
    }

    fn last_title(&self) -> Option<String> {
        self.last_title
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

/// Validate, discover saves and start watching them.
/// Returns the watch threads; an empty list means there was nothing to watch.
pub fn start_with_api(
    config: &DewConfig,
    api: Box<dyn TwitchApi>,
) -> Result<Vec<JoinHandle<()>>, StartupError> {
    let session = Arc::new(Session::bootstrap(config, api)?);

    let slots = discover_saves(&config.save_dir).map_err(|e| StartupError::SaveDir {
        path: config.save_dir.clone(),
        reason: e.to_string(),
    })?;

    if slots.is_empty() {
        log::warn!("No saves found in {}", config.save_dir.display());
        return Ok(Vec::new());
    }

    let interval = Duration::from_millis(config.poll_interval_ms);
    let login = session.login.clone();
    let handles = watch_saves(slots, interval, move |slot, save| {
        session.handle_save(slot, &save);
    });

    log::info!(
        "Watching {} save(s) for {}, checking every {}ms",
        handles.len(),
        login,
        interval.as_millis()
    );
    Ok(handles)
}

/// Full startup against the real Twitch API
pub fn start(config: &DewConfig) -> Result<Vec<JoinHandle<()>>, StartupError> {
    let token = require_token(config)?;
    let timeout = config.http_timeout_secs.map(Duration::from_secs);
    let api = HelixClient::new(&token, &config.client_id, timeout)
        .map_err(|e| StartupError::Http(e.to_string()))?;

    start_with_api(config, Box::new(api))
}
