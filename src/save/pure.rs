// Pure projections of a parsed save

use std::fmt;

use super::types::{SaveGame, Season, StardewDate};

impl Season {
    pub fn parse(raw: &str) -> Season {
        match raw.trim().to_ascii_lowercase().as_str() {
            "spring" => Season::Spring,
            "summer" => Season::Summer,
            "fall" => Season::Fall,
            "winter" => Season::Winter,
            _ => Season::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
            Season::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn read_current_date(save: &SaveGame) -> StardewDate {
    StardewDate {
        current_season: Season::parse(&save.current_season),
        day_of_month: save.day_of_month.trim().to_string(),
        year: save.year.trim().to_string(),
    }
}

/// Name used in log lines, e.g. "Abby (Sunny Farm)"
pub fn describe_save(save: &SaveGame) -> String {
    match (save.player.name.is_empty(), save.player.farm_name.is_empty()) {
        (false, false) => format!("{} ({} Farm)", save.player.name, save.player.farm_name),
        (false, true) => save.player.name.clone(),
        _ => "unnamed farmer".to_string(),
    }
}
