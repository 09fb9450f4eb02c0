// Pure helpers for configuration parsing
// No side effects besides logging rejected values

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// `KEY=value` with an optional `export ` prefix
static DOTENV_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:export\s+)?([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.*?)\s*$").unwrap()
});

/// Parse the contents of a `.env` file.
/// Blank lines, comments and lines that aren't assignments are skipped.
pub fn parse_dotenv(contents: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();

    for line in contents.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(caps) = DOTENV_LINE.captures(line) else {
            log::debug!("Ignoring malformed .env line: {}", line);
            continue;
        };

        let key = caps[1].to_string();
        let value = unquote(&caps[2]);
        out.insert(key, value);
    }

    out
}

/// Strip matching surrounding quotes, or a trailing ` # comment` from unquoted values
fn unquote(raw: &str) -> String {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return raw[1..raw.len() - 1].to_string();
        }
    }

    match raw.find(" #") {
        Some(idx) => raw[..idx].trim_end().to_string(),
        None => raw.to_string(),
    }
}

/// Later maps win
pub fn merge_vars(layers: &[HashMap<String, String>]) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for layer in layers {
        for (k, v) in layer {
            out.insert(k.clone(), v.clone());
        }
    }
    out
}

pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub fn parse_number(key: &str, raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
