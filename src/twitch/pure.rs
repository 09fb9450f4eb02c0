// Pure helpers for the Twitch API

use reqwest::Url;

use super::types::{
    AUTHORIZE_URL, REQUIRED_SCOPE, STATUS_TITLE_UPDATED, TitleUpdate, TwitchResult, ValidToken,
    ValidationResponse,
};

/// Implicit-grant authorization link; the token comes back in the redirect fragment
pub fn make_connect_link(client_id: &str, redirect_uri: &str) -> TwitchResult<String> {
    let url = Url::parse_with_params(
        AUTHORIZE_URL,
        &[
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("response_type", "token"),
            ("scope", REQUIRED_SCOPE),
        ],
    )?;
    Ok(url.to_string())
}

pub fn parse_validation(body: &str) -> TwitchResult<ValidationResponse> {
    let response: ValidationResponse = serde_json::from_str(body)?;
    Ok(response)
}

pub fn title_update_outcome(status: u16, reason: &str) -> TitleUpdate {
    if status == STATUS_TITLE_UPDATED {
        TitleUpdate::Updated
    } else {
        TitleUpdate::Rejected {
            status,
            reason: reason.trim().to_string(),
        }
    }
}

/// Problems with a token that validated but will likely fail the title update
pub fn token_warnings(token: &ValidToken, client_id: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    if !token.scopes.iter().any(|s| s == REQUIRED_SCOPE) {
        warnings.push(format!(
            "token for {} is missing the {} scope",
            token.login, REQUIRED_SCOPE
        ));
    }

    if !client_id.is_empty() && token.client_id != client_id {
        warnings.push(format!(
            "token was issued to client {} but CLIENT_ID is {}",
            token.client_id, client_id
        ));
    }

    warnings
}
