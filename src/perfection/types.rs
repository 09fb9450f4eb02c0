//! Perfection breakdown types

/// Eleven independent ratios, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerfectionBreakdown {
    pub cooked_recipes: f64,
    pub crafted_recipes: f64,
    pub farmer_level: f64,
    pub fish_caught: f64,
    pub stardrops: f64,
    pub gold_clock: f64,
    pub found_walnuts: f64,
    pub friendships: f64,
    pub monster_slayer: f64,
    pub obelisks: f64,
    pub items_shipped: f64,
}

/// One row of the breakdown with its weight toward 100%
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub label: &'static str,
    pub ratio: f64,
    pub weight: f64,
}

impl Category {
    pub fn points(&self) -> f64 {
        self.ratio * self.weight
    }
}

impl PerfectionBreakdown {
    /// Categories in the game's perfection tracker order, weights summing to 100
    pub fn categories(&self) -> [Category; 11] {
        [
            Category { label: "Cooked recipes", ratio: self.cooked_recipes, weight: 10.0 },
            Category { label: "Crafted recipes", ratio: self.crafted_recipes, weight: 10.0 },
            Category { label: "Farmer level", ratio: self.farmer_level, weight: 5.0 },
            Category { label: "Fish caught", ratio: self.fish_caught, weight: 10.0 },
            Category { label: "Stardrops", ratio: self.stardrops, weight: 10.0 },
            Category { label: "Gold clock", ratio: self.gold_clock, weight: 10.0 },
            Category { label: "Golden walnuts", ratio: self.found_walnuts, weight: 5.0 },
            Category { label: "Great friends", ratio: self.friendships, weight: 11.0 },
            Category { label: "Monster slayer", ratio: self.monster_slayer, weight: 10.0 },
            Category { label: "Obelisks", ratio: self.obelisks, weight: 4.0 },
            Category { label: "Items shipped", ratio: self.items_shipped, weight: 15.0 },
        ]
    }
}
