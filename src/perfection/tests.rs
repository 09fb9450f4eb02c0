// Perfection engine tests

#[cfg(test)]
mod tests {
    use crate::perfection::collections::{
        DATABLE_VILLAGERS, ERADICATION_GOALS, FISH, NON_DATABLE_VILLAGERS, SHIPPING,
        STARDROP_MAIL,
    };
    use crate::perfection::pure::*;
    use crate::perfection::types::PerfectionBreakdown;
    use crate::save::{SaveGame, parse_save};

    /// Wrap player-level XML into a minimal save
    fn save_with(player: &str, top_level: &str) -> SaveGame {
        let xml = format!(
            "<SaveGame><player>{}</player>{}</SaveGame>",
            player, top_level
        );
        parse_save(&xml).expect("fixture should parse")
    }

    fn int_items(pairs: &[(&str, i64)]) -> String {
        pairs
            .iter()
            .map(|(k, v)| {
                format!(
                    "<item><key><string>{}</string></key><value><int>{}</int></value></item>",
                    k, v
                )
            })
            .collect()
    }

    fn strings(values: &[&str]) -> String {
        values
            .iter()
            .map(|v| format!("<string>{}</string>", v))
            .collect()
    }

    fn friendship_items(pairs: &[(&str, i64)]) -> String {
        pairs
            .iter()
            .map(|(name, points)| {
                format!(
                    "<item><key><string>{}</string></key><value><Friendship><Points>{}</Points></Friendship></value></item>",
                    name, points
                )
            })
            .collect()
    }

    fn assert_in_unit_range(breakdown: &PerfectionBreakdown) {
        for category in breakdown.categories() {
            assert!(
                (0.0..=1.0).contains(&category.ratio),
                "{} out of range: {}",
                category.label,
                category.ratio
            );
        }
    }

    /// A save with every category maxed out
    fn complete_save() -> SaveGame {
        let recipes: Vec<(String, i64)> = (0..81).map(|i| (format!("recipe{}", i), 1)).collect();
        let crafted: Vec<(String, i64)> = (0..150).map(|i| (format!("craft{}", i), 1)).collect();

        let recipes_xml: String = recipes
            .iter()
            .map(|(k, v)| int_items(&[(k.as_str(), *v)]))
            .collect();
        let crafted_xml: String = crafted
            .iter()
            .map(|(k, v)| int_items(&[(k.as_str(), *v)]))
            .collect();

        let fish_xml: String = FISH
            .iter()
            .map(|id| format!("<item><key><string>{}</string></key></item>", id))
            .collect();

        let shipped: Vec<(&str, i64)> = SHIPPING.iter().map(|id| (*id, 1)).collect();

        let mut friends: Vec<(&str, i64)> = DATABLE_VILLAGERS.iter().map(|n| (*n, 2000)).collect();
        friends.extend(NON_DATABLE_VILLAGERS.iter().map(|n| (*n, 2500)));

        let kills: Vec<(&str, i64)> = ERADICATION_GOALS
            .iter()
            .map(|goal| (goal.monsters[0], goal.quota))
            .collect();

        let player = format!(
            "<farmingLevel>10</farmingLevel><fishingLevel>10</fishingLevel><foragingLevel>10</foragingLevel>\
             <miningLevel>10</miningLevel><combatLevel>10</combatLevel>\
             <recipesCooked>{}</recipesCooked><craftingRecipes>{}</craftingRecipes>\
             <fishCaught>{}</fishCaught><basicShipped>{}</basicShipped>\
             <friendshipData>{}</friendshipData><mailReceived>{}</mailReceived>\
             <stats><specificMonstersKilled>{}</specificMonstersKilled></stats>",
            recipes_xml,
            crafted_xml,
            fish_xml,
            int_items(&shipped),
            friendship_items(&friends),
            strings(STARDROP_MAIL),
            int_items(&kills),
        );

        let top = format!(
            "<goldenWalnutsFound>130</goldenWalnutsFound><constructedBuildings>{}</constructedBuildings>",
            strings(&[
                "Gold Clock",
                "Earth Obelisk",
                "Water Obelisk",
                "Desert Obelisk",
                "Island Obelisk"
            ])
        );

        save_with(&player, &top)
    }

    #[test]
    fn empty_save_scores_zero() {
        let save = SaveGame::default();
        let breakdown = perfection_counter(&save, false);

        assert_eq!(breakdown, PerfectionBreakdown::default());
        assert_eq!(percent_perfection(&breakdown), 0);
    }

    #[test]
    fn all_cooked_recipes_is_ten_percent() {
        let recipes: Vec<(String, i64)> = (0..81).map(|i| (format!("{}", 194 + i), 1)).collect();
        let items: String = recipes
            .iter()
            .map(|(k, v)| int_items(&[(k.as_str(), *v)]))
            .collect();
        let save = save_with(&format!("<recipesCooked>{}</recipesCooked>", items), "");

        let breakdown = perfection_counter(&save, false);
        assert_eq!(breakdown.cooked_recipes, 1.0);
        assert_eq!(percent_perfection(&breakdown), 10);
    }

    #[test]
    fn crafted_recipes_need_a_craft() {
        let save = save_with(
            &format!(
                "<craftingRecipes>{}</craftingRecipes>",
                int_items(&[("Chest", 2), ("Scarecrow", 0), ("Torch", 1)])
            ),
            "",
        );

        assert_eq!(percent_crafted_recipes(&save, false), 2.0 / 149.0);
        assert_eq!(percent_crafted_recipes(&save, true), 2.0 / 150.0);
    }

    #[test]
    fn farmer_levels_sum_over_fifty() {
        let save = save_with(
            "<farmingLevel>10</farmingLevel><fishingLevel>5</fishingLevel><foragingLevel>5</foragingLevel>\
             <miningLevel>3</miningLevel><combatLevel>2</combatLevel>",
            "",
        );

        assert_eq!(percent_farmer_levels(&save), 25.0 / 50.0);
    }

    #[test]
    fn out_of_range_skill_levels_are_capped() {
        let save = save_with(
            "<farmingLevel>14</farmingLevel><fishingLevel>10</fishingLevel><foragingLevel>10</foragingLevel>\
             <miningLevel>10</miningLevel><combatLevel>-3</combatLevel>",
            "",
        );

        assert_eq!(percent_farmer_levels(&save), 40.0 / 50.0);
    }

    #[test]
    fn fish_are_filtered_and_normalized() {
        let save = save_with(
            "<fishCaught>\
               <item><key><string>(O)128</string></key></item>\
               <item><key><string>129</string></key></item>\
               <item><key><string>(O)128</string></key></item>\
               <item><key><string>(O)167</string></key></item>\
               <item><key><string>(O)Goby</string></key></item>\
             </fishCaught>",
            "",
        );

        // 128, 129 and Goby count; 167 (Joja Cola) does not
        assert_eq!(percent_fish_caught(&save), 3.0 / 72.0);
    }

    #[test]
    fn key_normalization() {
        assert_eq!(normalize_fish_key("128"), "(O)128");
        assert_eq!(normalize_fish_key("(O)128"), "(O)128");
        assert_eq!(normalize_item_key("(O)24"), "24");
        assert_eq!(normalize_item_key("24"), "24");
    }

    #[test]
    fn all_stardrops_found() {
        let save = save_with(
            &format!("<mailReceived>{}</mailReceived>", strings(STARDROP_MAIL)),
            "",
        );
        assert!(has_found_all_stardrops(&save));
        assert_eq!(perfection_counter(&save, false).stardrops, 1.0);
    }

    #[test]
    fn one_missing_stardrop_is_zero() {
        let mut mail: Vec<&str> = STARDROP_MAIL.to_vec();
        mail.retain(|m| *m != "CF_Sewer");
        mail.push("ccDoorUnlock");

        let save = save_with(&format!("<mailReceived>{}</mailReceived>", strings(&mail)), "");
        assert!(!has_found_all_stardrops(&save));
        assert_eq!(perfection_counter(&save, false).stardrops, 0.0);
    }

    #[test]
    fn gold_clock_and_obelisks() {
        let save = save_with(
            "",
            &format!(
                "<constructedBuildings>{}</constructedBuildings>",
                strings(&["Gold Clock", "Farm Obelisk", "Garden Obelisk"])
            ),
        );

        let breakdown = perfection_counter(&save, false);
        assert_eq!(breakdown.gold_clock, 1.0);
        assert_eq!(breakdown.obelisks, 0.5);
    }

    #[test]
    fn duplicate_obelisks_count_once() {
        let save = save_with(
            "",
            &format!(
                "<constructedBuildings>{}</constructedBuildings>",
                strings(&["Earth Obelisk", "Earth Obelisk", "Barn"])
            ),
        );

        assert_eq!(percent_obelisks(&save), 0.25);
        assert!(!has_gold_clock(&save));
    }

    #[test]
    fn walnuts_over_one_thirty() {
        let save = save_with("", "<goldenWalnutsFound>65</goldenWalnutsFound>");
        assert_eq!(percent_found_walnuts(&save), 0.5);
    }

    #[test]
    fn friendship_thresholds_differ_by_villager() {
        let save = save_with(
            &format!(
                "<friendshipData>{}</friendshipData>",
                friendship_items(&[("Abigail", 2000), ("Caroline", 2000)])
            ),
            "",
        );

        assert_eq!(percent_friendships(&save), 1.0 / 34.0);
    }

    #[test]
    fn unknown_villagers_are_ignored() {
        let save = save_with(
            &format!(
                "<friendshipData>{}</friendshipData>",
                friendship_items(&[("Caroline", 2500), ("Marlon", 9999), ("Abigail", 1999)])
            ),
            "",
        );

        assert_eq!(percent_friendships(&save), 1.0 / 34.0);
    }

    #[test]
    fn monster_goals_sum_across_types() {
        let mut kills: Vec<(&str, i64)> = ERADICATION_GOALS
            .iter()
            .map(|goal| (goal.monsters[0], goal.quota))
            .collect();

        // Slimes: 600 + 400 across two types still meets 1000
        kills[0] = ("Green Slime", 600);
        kills.push(("Frost Jelly", 400));

        let save = save_with(
            &format!(
                "<stats><specificMonstersKilled>{}</specificMonstersKilled></stats>",
                int_items(&kills)
            ),
            "",
        );
        assert!(is_monster_slayer_hero(&save));
        assert!(unmet_eradication_goals(&save).is_empty());
    }

    #[test]
    fn one_unmet_goal_fails_monster_slayer() {
        let kills: Vec<(&str, i64)> = ERADICATION_GOALS
            .iter()
            .map(|goal| {
                let quota = if goal.name == "Pepper Rex" { goal.quota - 1 } else { goal.quota };
                (goal.monsters[0], quota)
            })
            .collect();

        let save = save_with(
            &format!(
                "<stats><specificMonstersKilled>{}</specificMonstersKilled></stats>",
                int_items(&kills)
            ),
            "",
        );
        assert!(!is_monster_slayer_hero(&save));
        assert_eq!(unmet_eradication_goals(&save), vec!["Pepper Rex"]);
        assert_eq!(perfection_counter(&save, false).monster_slayer, 0.0);
    }

    #[test]
    fn shipped_items_need_quantity_and_allow_list() {
        let save = save_with(
            &format!(
                "<basicShipped>{}</basicShipped>",
                int_items(&[("24", 3), ("(O)188", 1), ("190", 0), ("167", 20)])
            ),
            "",
        );

        assert_eq!(
            percent_items_shipped(&save),
            2.0 / SHIPPING.len() as f64
        );
    }

    #[test]
    fn complete_save_tops_out_at_99_with_71_of_72_fish() {
        let save = complete_save();
        let breakdown = perfection_counter(&save, true);

        assert_in_unit_range(&breakdown);
        assert_eq!(breakdown.cooked_recipes, 1.0);
        assert_eq!(breakdown.crafted_recipes, 1.0);
        assert_eq!(breakdown.farmer_level, 1.0);
        assert_eq!(breakdown.stardrops, 1.0);
        assert_eq!(breakdown.gold_clock, 1.0);
        assert_eq!(breakdown.found_walnuts, 1.0);
        assert_eq!(breakdown.friendships, 1.0);
        assert_eq!(breakdown.monster_slayer, 1.0);
        assert_eq!(breakdown.obelisks, 1.0);
        assert_eq!(breakdown.items_shipped, 1.0);
        assert_eq!(breakdown.fish_caught, FISH.len() as f64 / 72.0);

        // Every allow-listed fish is 71/72 of the fish category: 100 - 10/72
        assert_eq!(FISH.len(), 71);
        assert_eq!(percent_perfection(&breakdown), 99);
    }

    #[test]
    fn scoring_is_idempotent() {
        let save = complete_save();
        let first = perfection_counter(&save, false);
        let second = perfection_counter(&save, false);

        assert_eq!(first, second);
        assert_eq!(percent_perfection(&first), percent_perfection(&second));
    }

    #[test]
    fn weights_sum_to_one_hundred() {
        let all_done = PerfectionBreakdown {
            cooked_recipes: 1.0,
            crafted_recipes: 1.0,
            farmer_level: 1.0,
            fish_caught: 1.0,
            stardrops: 1.0,
            gold_clock: 1.0,
            found_walnuts: 1.0,
            friendships: 1.0,
            monster_slayer: 1.0,
            obelisks: 1.0,
            items_shipped: 1.0,
        };

        let weights: f64 = all_done.categories().iter().map(|c| c.weight).sum();
        assert_eq!(weights, 100.0);
        assert_eq!(percent_perfection(&all_done), 100);
    }

    #[test]
    fn total_is_floored() {
        let breakdown = PerfectionBreakdown {
            friendships: 1.0 / 34.0,
            obelisks: 0.75,
            ..Default::default()
        };

        // 0.32 + 3.0
        assert_eq!(percent_perfection(&breakdown), 3);
    }

    #[test]
    fn total_just_below_an_integer_is_floored() {
        let datable: Vec<(&str, i64)> = DATABLE_VILLAGERS.iter().map(|name| (*name, 2000)).collect();
        let non_datable: Vec<(&str, i64)> =
            NON_DATABLE_VILLAGERS[..3].iter().map(|name| (*name, 2500)).collect();

        let cooked: Vec<String> = (0..44).map(|i| format!("recipe{}", i)).collect();
        let crafted: Vec<String> = (0..78).map(|i| format!("craft{}", i)).collect();
        let cooked: Vec<(&str, i64)> = cooked.iter().map(|k| (k.as_str(), 1)).collect();
        let crafted: Vec<(&str, i64)> = crafted.iter().map(|k| (k.as_str(), 1)).collect();
        let shipped: Vec<(&str, i64)> = SHIPPING[..21].iter().map(|id| (*id, 1)).collect();

        let save = save_with(
            &format!(
                "<farmingLevel>1</farmingLevel>\
                 <recipesCooked>{}</recipesCooked>\
                 <craftingRecipes>{}</craftingRecipes>\
                 <basicShipped>{}</basicShipped>\
                 <friendshipData>{}{}</friendshipData>",
                int_items(&cooked),
                int_items(&crafted),
                int_items(&shipped),
                friendship_items(&datable),
                friendship_items(&non_datable)
            ),
            "<goldenWalnutsFound>8</goldenWalnutsFound>",
        );

        let breakdown = perfection_counter(&save, false);
        let total: f64 = breakdown.categories().iter().map(|c| c.points()).sum();

        // Exactly 36487966319/2027109240, about 17.9999999995
        assert!(total < 18.0 && total > 17.9999999);
        assert_eq!(percent_perfection(&breakdown), 17);
    }
}
