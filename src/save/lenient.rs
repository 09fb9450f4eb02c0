// Lenient numeric leaves for the save model
// The game writes plain integers, but hand-edited or truncated saves
// shouldn't abort the whole parse over one field.

use serde::{Deserialize, Deserializer};

pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(parse_int).unwrap_or(0))
}

/// "12" -> 12, " 7 " -> 7, "3.9" -> 3, anything else -> 0
pub fn parse_int(raw: &str) -> i64 {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return value;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}
