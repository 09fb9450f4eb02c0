//! Perfection Engine - weighted progress score for a save
//!
//! Scoring follows the in-game perfection tracker:
//! https://stardewvalleywiki.com/Perfection
//!
//! ## Module Structure
//! - `collections.rs`: static allow-lists (fish, shipping, villagers, stardrops, monsters)
//! - `types.rs`: PerfectionBreakdown and its weighted categories
//! - `pure.rs`: one function per category, plus the weighted total

mod collections;
mod pure;
#[cfg(test)]
mod tests;
mod types;

// Re-export pure functions
pub use pure::{percent_perfection, perfection_counter, unmet_eradication_goals};
