// Helix HTTP client

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use std::time::Duration;

use super::pure::{parse_validation, title_update_outcome};
use super::types::{
    CHANNELS_URL, ChannelUpdate, TitleUpdate, TwitchApi, TwitchResult, VALIDATE_URL,
    ValidationResponse,
};

/// Talks to Twitch with one access token for the whole session
pub struct HelixClient {
    client: Client,
    access_token: String,
    client_id: String,
}

impl HelixClient {
    /// `timeout: None` leaves requests unbounded
    pub fn new(
        access_token: &str,
        client_id: &str,
        timeout: Option<Duration>,
    ) -> TwitchResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            access_token: access_token.to_string(),
            client_id: client_id.to_string(),
        })
    }
}

impl TwitchApi for HelixClient {
    fn validate_token(&self) -> TwitchResult<ValidationResponse> {
        let response = self
            .client
            .get(VALIDATE_URL)
            .header(AUTHORIZATION, format!("OAuth {}", self.access_token))
            .send()?;

        let body = response.text()?;
        parse_validation(&body)
    }

    fn update_title(&self, broadcaster_id: &str, title: &str) -> TwitchResult<TitleUpdate> {
        let response = self
            .client
            .patch(CHANNELS_URL)
            .query(&[("broadcaster_id", broadcaster_id)])
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .header("Client-Id", &self.client_id)
            .json(&ChannelUpdate { title })
            .send()?;

        let status = response.status();
        let mut reason = status.canonical_reason().unwrap_or_default().to_string();

        // Helix explains rejections in a JSON body
        if !status.is_success() {
            if let Ok(body) = response.text() {
                if !body.trim().is_empty() {
                    reason = format!("{} {}", reason, body.trim());
                }
            }
        }

        Ok(title_update_outcome(status.as_u16(), &reason))
    }
}
