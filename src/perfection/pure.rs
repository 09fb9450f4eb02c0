// Pure scoring functions
// Each sub-metric reads one slice of the save and nothing else

use std::collections::HashSet;

use crate::save::SaveGame;

use super::collections::{
    DATABLE_VILLAGERS, ERADICATION_GOALS, FISH, NON_DATABLE_VILLAGERS, SHIPPING, STARDROP_MAIL,
};
use super::types::PerfectionBreakdown;

const RECIPES_TOTAL: f64 = 81.0;
const CRAFTING_RECIPES_TOTAL: f64 = 149.0;
const CRAFTING_RECIPES_TOTAL_MULTIPLAYER: f64 = 150.0;
const MAX_SKILL_LEVEL: i64 = 10;
const SKILL_COUNT: i64 = 5;
const FISH_TOTAL: f64 = 72.0;
const WALNUTS_TOTAL: f64 = 130.0;
const OBELISKS_TOTAL: f64 = 4.0;
const POINTS_PER_HEART: i64 = 250;
const DATABLE_MAX_HEARTS: i64 = 8;
const NON_DATABLE_MAX_HEARTS: i64 = 10;
/// Distinct weighted totals are at least 1/2_027_109_240 apart, far above
/// this, while summation error stays far below it
const FLOOR_TOLERANCE: f64 = 1e-12;

/// count / total, kept inside [0, 1]
fn ratio(count: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (count / total).clamp(0.0, 1.0)
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Fish keys are `(O)<id>` since 1.6; older saves wrote the bare id
pub fn normalize_fish_key(key: &str) -> String {
    if key.starts_with('(') {
        key.to_string()
    } else {
        format!("(O){}", key)
    }
}

/// Shipping keys are compared unqualified
pub fn normalize_item_key(key: &str) -> &str {
    key.strip_prefix("(O)").unwrap_or(key)
}

pub fn percent_cooked_recipes(save: &SaveGame) -> f64 {
    ratio(save.player.recipes_cooked.len() as f64, RECIPES_TOTAL)
}

pub fn percent_crafted_recipes(save: &SaveGame, multiplayer: bool) -> f64 {
    let total = if multiplayer {
        CRAFTING_RECIPES_TOTAL_MULTIPLAYER
    } else {
        CRAFTING_RECIPES_TOTAL
    };

    let crafted = save
        .player
        .crafting_recipes
        .entries()
        .filter(|(_, times)| *times > 0)
        .count();

    ratio(crafted as f64, total)
}

pub fn percent_farmer_levels(save: &SaveGame) -> f64 {
    let levels: i64 = save
        .player
        .skill_levels()
        .iter()
        .map(|level| (*level).clamp(0, MAX_SKILL_LEVEL))
        .sum();

    ratio(levels as f64, (SKILL_COUNT * MAX_SKILL_LEVEL) as f64)
}

pub fn percent_fish_caught(save: &SaveGame) -> f64 {
    let caught: HashSet<String> = save
        .player
        .fish_caught
        .keys()
        .map(normalize_fish_key)
        .filter(|key| FISH.contains(&key.as_str()))
        .collect();

    ratio(caught.len() as f64, FISH_TOTAL)
}

pub fn has_found_all_stardrops(save: &SaveGame) -> bool {
    let mail = &save.player.mail_received;
    STARDROP_MAIL.iter().all(|letter| mail.contains(letter))
}

pub fn has_gold_clock(save: &SaveGame) -> bool {
    save.constructed_buildings.contains("Gold Clock")
}

pub fn percent_found_walnuts(save: &SaveGame) -> f64 {
    ratio(save.golden_walnuts_found as f64, WALNUTS_TOTAL)
}

pub fn percent_friendships(save: &SaveGame) -> f64 {
    let count_maxed = |villagers: &[&str], max_hearts: i64| -> usize {
        save.player
            .friendship_data
            .points()
            .filter(|(name, points)| {
                villagers.contains(name) && *points >= max_hearts * POINTS_PER_HEART
            })
            .map(|(name, _)| name)
            .collect::<HashSet<_>>()
            .len()
    };

    let maxed = count_maxed(DATABLE_VILLAGERS, DATABLE_MAX_HEARTS)
        + count_maxed(NON_DATABLE_VILLAGERS, NON_DATABLE_MAX_HEARTS);
    let total = DATABLE_VILLAGERS.len() + NON_DATABLE_VILLAGERS.len();

    ratio(maxed as f64, total as f64)
}

/// Kills recorded for any of the given monsters
fn killed_monsters(save: &SaveGame, monsters: &[&str]) -> i64 {
    save.player
        .stats
        .specific_monsters_killed
        .entries()
        .filter(|(monster, _)| monsters.contains(monster))
        .map(|(_, kills)| kills.max(0))
        .sum()
}

/// Names of the eradication goals whose quota isn't met yet
pub fn unmet_eradication_goals(save: &SaveGame) -> Vec<&'static str> {
    ERADICATION_GOALS
        .iter()
        .filter(|goal| killed_monsters(save, goal.monsters) < goal.quota)
        .map(|goal| goal.name)
        .collect()
}

pub fn is_monster_slayer_hero(save: &SaveGame) -> bool {
    unmet_eradication_goals(save).is_empty()
}

pub fn percent_obelisks(save: &SaveGame) -> f64 {
    let obelisks: HashSet<&str> = save
        .constructed_buildings
        .iter()
        .filter(|building| building.trim_end().ends_with("Obelisk"))
        .collect();

    ratio(obelisks.len() as f64, OBELISKS_TOTAL)
}

pub fn percent_items_shipped(save: &SaveGame) -> f64 {
    let shipped: HashSet<&str> = save
        .player
        .basic_shipped
        .entries()
        .filter(|(_, quantity)| *quantity > 0)
        .map(|(key, _)| normalize_item_key(key))
        .filter(|key| SHIPPING.contains(key))
        .collect();

    ratio(shipped.len() as f64, SHIPPING.len() as f64)
}

/// Score every category of a save
pub fn perfection_counter(save: &SaveGame, multiplayer: bool) -> PerfectionBreakdown {
    PerfectionBreakdown {
        cooked_recipes: percent_cooked_recipes(save),
        crafted_recipes: percent_crafted_recipes(save, multiplayer),
        farmer_level: percent_farmer_levels(save),
        fish_caught: percent_fish_caught(save),
        stardrops: flag(has_found_all_stardrops(save)),
        gold_clock: flag(has_gold_clock(save)),
        found_walnuts: percent_found_walnuts(save),
        friendships: percent_friendships(save),
        monster_slayer: flag(is_monster_slayer_hero(save)),
        obelisks: percent_obelisks(save),
        items_shipped: percent_items_shipped(save),
    }
}

/// Weighted total, floored to a whole percent
pub fn percent_perfection(perfection: &PerfectionBreakdown) -> u32 {
    let total: f64 = perfection.categories().iter().map(|c| c.points()).sum();

    // Sums of exact ratios like 34/34 can land a hair under the integer
    (total + FLOOR_TOLERANCE).floor().clamp(0.0, 100.0) as u32
}
