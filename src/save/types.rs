//! Save file data model
//!
//! Mirrors the parts of the game's XML save we read. Every field is optional
//! in practice, so everything carries a serde default and absent collections
//! deserialize as empty.

use serde::Deserialize;

use super::lenient;

/// Root `<SaveGame>` element
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveGame {
    #[serde(default)]
    pub player: Player,
    #[serde(rename = "goldenWalnutsFound", default, deserialize_with = "lenient::int")]
    pub golden_walnuts_found: i64,
    #[serde(rename = "constructedBuildings", default)]
    pub constructed_buildings: StringList,
    #[serde(rename = "currentSeason", default)]
    pub current_season: String,
    #[serde(rename = "dayOfMonth", default)]
    pub day_of_month: String,
    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "farmName", default)]
    pub farm_name: String,

    #[serde(rename = "farmingLevel", default, deserialize_with = "lenient::int")]
    pub farming_level: i64,
    #[serde(rename = "fishingLevel", default, deserialize_with = "lenient::int")]
    pub fishing_level: i64,
    #[serde(rename = "foragingLevel", default, deserialize_with = "lenient::int")]
    pub foraging_level: i64,
    #[serde(rename = "miningLevel", default, deserialize_with = "lenient::int")]
    pub mining_level: i64,
    #[serde(rename = "combatLevel", default, deserialize_with = "lenient::int")]
    pub combat_level: i64,

    #[serde(rename = "basicShipped", default)]
    pub basic_shipped: IntDictionary,
    #[serde(rename = "recipesCooked", default)]
    pub recipes_cooked: IntDictionary,
    #[serde(rename = "craftingRecipes", default)]
    pub crafting_recipes: IntDictionary,
    /// Values are catch records we never look at
    #[serde(rename = "fishCaught", default)]
    pub fish_caught: KeyDictionary,
    #[serde(rename = "friendshipData", default)]
    pub friendship_data: FriendshipDictionary,
    #[serde(rename = "mailReceived", default)]
    pub mail_received: StringList,
    #[serde(default)]
    pub stats: Stats,
}

impl Player {
    pub fn skill_levels(&self) -> [i64; 5] {
        [
            self.farming_level,
            self.fishing_level,
            self.foraging_level,
            self.mining_level,
            self.combat_level,
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stats {
    #[serde(rename = "specificMonstersKilled", default)]
    pub specific_monsters_killed: IntDictionary,
}

/// `<x><string>a</string><string>b</string></x>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StringList {
    #[serde(default)]
    pub string: Vec<String>,
}

impl StringList {
    pub fn contains(&self, value: &str) -> bool {
        self.string.iter().any(|s| s == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.string.iter().map(String::as_str)
    }
}

/// Dictionary key, either `<string>` or `<int>` depending on the dictionary
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictKey {
    #[serde(default)]
    pub string: Option<String>,
    #[serde(default)]
    pub int: Option<String>,
}

impl DictKey {
    pub fn id(&self) -> &str {
        self.string
            .as_deref()
            .or(self.int.as_deref())
            .unwrap_or_default()
            .trim()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntValue {
    #[serde(default, deserialize_with = "lenient::int")]
    pub int: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntEntry {
    #[serde(default)]
    pub key: DictKey,
    #[serde(default)]
    pub value: IntValue,
}

/// `SerializableDictionary<string, int>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntDictionary {
    #[serde(default)]
    pub item: Vec<IntEntry>,
}

impl IntDictionary {
    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> {
        self.item.iter().map(|e| (e.key.id(), e.value.int))
    }

    pub fn len(&self) -> usize {
        self.item.len()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyEntry {
    #[serde(default)]
    pub key: DictKey,
}

/// Dictionary read for its keys only
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyDictionary {
    #[serde(default)]
    pub item: Vec<KeyEntry>,
}

impl KeyDictionary {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.item.iter().map(|e| e.key.id())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Friendship {
    #[serde(rename = "Points", default, deserialize_with = "lenient::int")]
    pub points: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FriendshipValue {
    #[serde(rename = "Friendship", default)]
    pub friendship: Friendship,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FriendshipEntry {
    #[serde(default)]
    pub key: DictKey,
    #[serde(default)]
    pub value: FriendshipValue,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FriendshipDictionary {
    #[serde(default)]
    pub item: Vec<FriendshipEntry>,
}

impl FriendshipDictionary {
    /// (villager, points)
    pub fn points(&self) -> impl Iterator<Item = (&str, i64)> {
        self.item
            .iter()
            .map(|e| (e.key.id(), e.value.friendship.points))
    }
}

/// The in-game date, only used for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StardewDate {
    pub current_season: Season,
    pub day_of_month: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    /// Anything the game might write that we don't know, kept for display
    Other(String),
}
