//! Craft flip ranking.
//!
//! Materials are bought at their bazaar instant-sell price; the crafted
//! item is sold at the best of its lowest BIN and its bazaar
//! instant-sell price. No recursive crafting: a material that is itself
//! craftable is still priced at its direct market price.

use super::sort_and_truncate;
use crate::types::{BazaarQuote, FlipCandidate, FlipKind, ItemId, Recipe};
use std::collections::HashMap;

/// Rank craft flips, sorted descending by profit and truncated to `top_n`.
pub fn rank_craft_flips(
    bazaar: &HashMap<ItemId, BazaarQuote>,
    recipes: &HashMap<ItemId, Recipe>,
    lowest_bin: &HashMap<ItemId, f64>,
    top_n: usize,
) -> Vec<FlipCandidate> {
    let mut candidates = Vec::new();

    for (item_id, recipe) in recipes {
        if recipe.is_empty() {
            continue;
        }
        let Some(cost) = craft_cost(recipe, bazaar) else {
            continue;
        };
        let Some(reference) = sale_reference_price(item_id, bazaar, lowest_bin) else {
            continue;
        };

        candidates.push(FlipCandidate {
            item_id: item_id.clone(),
            profit: reference - cost,
            kind: FlipKind::Craft,
            reference_price: reference,
        });
    }

    sort_and_truncate(&mut candidates, top_n);
    candidates
}

/// Total material cost of a recipe: sum of material instant-sell price
/// times count. All-or-nothing: if any single material has no positive
/// price, the whole recipe has no cost.
pub fn craft_cost(recipe: &Recipe, bazaar: &HashMap<ItemId, BazaarQuote>) -> Option<f64> {
    let mut total = 0.0;
    for material in &recipe.materials {
        let price = bazaar
            .get(&material.material_id)
            .map(|q| q.instant_sell_price)
            .filter(|p| *p > 0.0)?;
        total += price * material.count as f64;
    }
    Some(total)
}

/// Sale-side reference price: the cheaper of the lowest open BIN and
/// the bazaar instant-sell price. None when neither is available.
fn sale_reference_price(
    item_id: &str,
    bazaar: &HashMap<ItemId, BazaarQuote>,
    lowest_bin: &HashMap<ItemId, f64>,
) -> Option<f64> {
    let bin = lowest_bin.get(item_id).copied().filter(|p| *p > 0.0);
    let instant_sell = bazaar
        .get(item_id)
        .map(|q| q.instant_sell_price)
        .filter(|p| *p > 0.0);

    match (bin, instant_sell) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecipeMaterial;

    fn quote(buy: f64, sell: f64) -> BazaarQuote {
        BazaarQuote {
            instant_buy_price: buy,
            instant_sell_price: sell,
        }
    }

    fn recipe(materials: &[(&str, u32)]) -> Recipe {
        Recipe {
            materials: materials
                .iter()
                .map(|(id, count)| RecipeMaterial {
                    material_id: id.to_string(),
                    count: *count,
                })
                .collect(),
            grid: None,
        }
    }

    #[test]
    fn test_craft_cost_sums_materials() {
        let mut bazaar = HashMap::new();
        bazaar.insert("COG".to_string(), quote(6.0, 4.0));
        bazaar.insert("SPRING".to_string(), quote(12.0, 10.0));
        let r = recipe(&[("COG", 2), ("SPRING", 1)]);
        assert_eq!(craft_cost(&r, &bazaar), Some(18.0));
    }

    #[test]
    fn test_craft_cost_is_all_or_nothing() {
        // {A:2, B:1} with A priced at 10 and B unresolvable => no cost,
        // never "20"
        let mut bazaar = HashMap::new();
        bazaar.insert("A".to_string(), quote(11.0, 10.0));
        bazaar.insert("B".to_string(), quote(5.0, 0.0));
        let r = recipe(&[("A", 2), ("B", 1)]);
        assert_eq!(craft_cost(&r, &bazaar), None);

        let missing = recipe(&[("A", 2), ("UNLISTED", 1)]);
        assert_eq!(craft_cost(&missing, &bazaar), None);
    }

    #[test]
    fn test_widget_without_reference_price_is_excluded() {
        let mut bazaar = HashMap::new();
        bazaar.insert("COG".to_string(), quote(5.0, 4.0));
        let mut recipes = HashMap::new();
        recipes.insert("WIDGET".to_string(), recipe(&[("COG", 2)]));
        let lowest_bin = HashMap::new();

        let ranked = rank_craft_flips(&bazaar, &recipes, &lowest_bin, 15);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_reference_price_is_min_of_bin_and_instant_sell() {
        let mut bazaar = HashMap::new();
        bazaar.insert("COG".to_string(), quote(5.0, 4.0));
        bazaar.insert("WIDGET".to_string(), quote(0.0, 100.0));
        let mut recipes = HashMap::new();
        recipes.insert("WIDGET".to_string(), recipe(&[("COG", 2)]));
        let mut lowest_bin = HashMap::new();
        lowest_bin.insert("WIDGET".to_string(), 80.0);

        let ranked = rank_craft_flips(&bazaar, &recipes, &lowest_bin, 15);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].reference_price, 80.0);
        // cost = 2 * 4 = 8, profit = 80 - 8
        assert_eq!(ranked[0].profit, 72.0);
        assert_eq!(ranked[0].kind, FlipKind::Craft);
    }

    #[test]
    fn test_bin_only_reference_price() {
        let mut bazaar = HashMap::new();
        bazaar.insert("COG".to_string(), quote(5.0, 4.0));
        let mut recipes = HashMap::new();
        recipes.insert("WIDGET".to_string(), recipe(&[("COG", 1)]));
        let mut lowest_bin = HashMap::new();
        lowest_bin.insert("WIDGET".to_string(), 50.0);

        let ranked = rank_craft_flips(&bazaar, &recipes, &lowest_bin, 15);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].profit, 46.0);
    }

    #[test]
    fn test_negative_craft_profit_is_kept() {
        let mut bazaar = HashMap::new();
        bazaar.insert("COG".to_string(), quote(5.0, 40.0));
        bazaar.insert("WIDGET".to_string(), quote(0.0, 10.0));
        let mut recipes = HashMap::new();
        recipes.insert("WIDGET".to_string(), recipe(&[("COG", 2)]));
        let lowest_bin = HashMap::new();

        let ranked = rank_craft_flips(&bazaar, &recipes, &lowest_bin, 15);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].profit, -70.0);
    }

    #[test]
    fn test_empty_recipe_is_skipped() {
        let mut bazaar = HashMap::new();
        bazaar.insert("WIDGET".to_string(), quote(0.0, 10.0));
        let mut recipes = HashMap::new();
        recipes.insert("WIDGET".to_string(), Recipe::default());

        let ranked = rank_craft_flips(&bazaar, &recipes, &HashMap::new(), 15);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_ranking_order_and_truncation() {
        let mut bazaar = HashMap::new();
        bazaar.insert("COG".to_string(), quote(5.0, 4.0));
        let mut recipes = HashMap::new();
        let mut lowest_bin = HashMap::new();
        for i in 0..5 {
            let id = format!("WIDGET_{}", i);
            recipes.insert(id.clone(), recipe(&[("COG", 1)]));
            lowest_bin.insert(id, 10.0 + i as f64);
        }

        let ranked = rank_craft_flips(&bazaar, &recipes, &lowest_bin, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].item_id, "WIDGET_4");
        assert!(ranked.windows(2).all(|w| w[0].profit >= w[1].profit));
    }
}
