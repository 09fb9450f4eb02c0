//! Stream title formatting

use crate::save::StardewDate;

/// "fall" -> "Fall"
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "Day 14 of Summer, Year 2"
pub fn format_date(date: &StardewDate) -> String {
    format!(
        "Day {} of {}, Year {}",
        date.day_of_month,
        capitalize(date.current_season.as_str()),
        date.year
    )
}

/// "<base> | Day 14 of Summer, Year 2 | 37% perfection"
pub fn format_title(base: &str, date: &StardewDate, percentage: u32) -> String {
    let base = base.trim();
    let tail = format!("{} | {}% perfection", format_date(date), percentage);

    if base.is_empty() {
        tail
    } else {
        format!("{} | {}", base, tail)
    }
}
