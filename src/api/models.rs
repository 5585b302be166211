//! Wire types for the Hypixel API and the community item catalog.
//!
//! Decoding fails closed: a record with missing or malformed fields is
//! skipped during normalization, never zero-filled into the mappings
//! the rankers compute over.

use crate::types::{BazaarQuote, ItemId, Recipe, RecipeGrid, RecipeMaterial};
use crate::utils::normalize_item_id;
use serde::Deserialize;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Bazaar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct BazaarResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub products: HashMap<String, BazaarProduct>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BazaarProduct {
    #[serde(default)]
    pub quick_status: QuickStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuickStatus {
    #[serde(rename = "buyPrice", default)]
    pub buy_price: f64,
    #[serde(rename = "sellPrice", default)]
    pub sell_price: f64,
}

impl BazaarResponse {
    /// Normalize into the quote mapping. Negative prices would be
    /// malformed data; those records are dropped.
    pub fn into_quotes(self) -> HashMap<ItemId, BazaarQuote> {
        self.products
            .into_iter()
            .filter(|(_, p)| p.quick_status.buy_price >= 0.0 && p.quick_status.sell_price >= 0.0)
            .map(|(id, p)| {
                (
                    id,
                    BazaarQuote {
                        instant_buy_price: p.quick_status.buy_price,
                        instant_sell_price: p.quick_status.sell_price,
                    },
                )
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Item metadata (NPC sell prices)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub npc_sell_price: Option<f64>,
}

impl ItemsResponse {
    /// Only a subset of items carries an NPC sell price; entries
    /// without one (or without an id) are skipped.
    pub fn into_npc_prices(self) -> HashMap<ItemId, f64> {
        self.items
            .into_iter()
            .filter(|e| !e.id.is_empty())
            .filter_map(|e| e.npc_sell_price.map(|p| (e.id, p)))
            .filter(|(_, p)| *p >= 0.0)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Auctions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct AuctionsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub auctions: Vec<AuctionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuctionEntry {
    #[serde(default)]
    pub item_name: String,
    /// True for buy-it-now listings; only those contribute.
    #[serde(default)]
    pub bin: bool,
    #[serde(default)]
    pub starting_bid: f64,
}

/// Deduplicate buy-it-now listings down to the cheapest instant-purchase
/// price per normalized item id.
pub fn lowest_bin_by_item(auctions: Vec<AuctionEntry>) -> HashMap<ItemId, f64> {
    let mut lowest: HashMap<ItemId, f64> = HashMap::new();
    for auction in auctions {
        if !auction.bin || auction.item_name.is_empty() || auction.starting_bid <= 0.0 {
            continue;
        }
        let id = normalize_item_id(&auction.item_name);
        lowest
            .entry(id)
            .and_modify(|bid| {
                if auction.starting_bid < *bid {
                    *bid = auction.starting_bid;
                }
            })
            .or_insert(auction.starting_bid);
    }
    lowest
}

// ---------------------------------------------------------------------------
// Community item catalog (recipes)
// ---------------------------------------------------------------------------

/// One entry of the catalog index listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogIndexEntry {
    #[serde(default)]
    pub name: String,
}

/// One catalog item entry. Recipes come in two shapes: a flat materials
/// list, or a 3x3 crafting grid keyed `A1`..`C3` with `"MATERIAL_ID:count"`
/// cell values.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    #[serde(default, alias = "internalname")]
    pub id: String,
    #[serde(default)]
    pub materials: Vec<CatalogMaterial>,
    #[serde(default)]
    pub recipe: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMaterial {
    #[serde(default)]
    pub id: String,
    #[serde(default = "one")]
    pub count: u32,
}

fn one() -> u32 {
    1
}

/// Parse a grid cell like "INK_SACK:8" (or bare "INK_SACK", count 1).
fn parse_grid_cell(cell: &str) -> Option<RecipeMaterial> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    let (id, count) = match cell.rsplit_once(':') {
        Some((id, count_str)) => (id, count_str.parse::<u32>().ok()?),
        None => (cell, 1),
    };
    if id.is_empty() || count == 0 {
        return None;
    }
    Some(RecipeMaterial {
        material_id: id.to_string(),
        count,
    })
}

const GRID_ROWS: [char; 3] = ['A', 'B', 'C'];

impl CatalogItem {
    /// Normalize into a Recipe, aggregating duplicate materials. Returns
    /// None for entries without an id or without any resolvable material.
    pub fn into_recipe(self) -> Option<(ItemId, Recipe)> {
        if self.id.is_empty() {
            return None;
        }

        let mut grid: Option<RecipeGrid> = None;
        let mut counts: HashMap<String, u32> = HashMap::new();

        if let Some(cells) = &self.recipe {
            let mut layout: RecipeGrid = Default::default();
            for (row_idx, row) in GRID_ROWS.iter().enumerate() {
                for col in 1..=3usize {
                    let key = format!("{}{}", row, col);
                    let material = cells.get(&key).and_then(|c| parse_grid_cell(c));
                    if let Some(ref m) = material {
                        *counts.entry(m.material_id.clone()).or_insert(0) += m.count;
                    }
                    layout[row_idx][col - 1] = material;
                }
            }
            grid = Some(layout);
        } else {
            for m in &self.materials {
                if m.id.is_empty() || m.count == 0 {
                    continue;
                }
                *counts.entry(m.id.clone()).or_insert(0) += m.count;
            }
        }

        if counts.is_empty() {
            return None;
        }

        let mut materials: Vec<RecipeMaterial> = counts
            .into_iter()
            .map(|(material_id, count)| RecipeMaterial { material_id, count })
            .collect();
        materials.sort_by(|a, b| a.material_id.cmp(&b.material_id));

        Some((self.id, Recipe { materials, grid }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(name: &str, bid: f64) -> AuctionEntry {
        AuctionEntry {
            item_name: name.to_string(),
            bin: true,
            starting_bid: bid,
        }
    }

    #[test]
    fn test_lowest_bin_dedup() {
        let listings = vec![bin("Iron Sword", 100.0), bin("Iron Sword", 80.0)];
        let lowest = lowest_bin_by_item(listings);
        assert_eq!(lowest.get("IRON_SWORD"), Some(&80.0));
    }

    #[test]
    fn test_lowest_bin_ignores_non_bin_and_bad_records() {
        let listings = vec![
            AuctionEntry {
                item_name: "Iron Sword".to_string(),
                bin: false,
                starting_bid: 10.0,
            },
            bin("", 50.0),
            bin("Iron Sword", 0.0),
            bin("Iron Sword", 120.0),
        ];
        let lowest = lowest_bin_by_item(listings);
        assert_eq!(lowest.get("IRON_SWORD"), Some(&120.0));
        assert_eq!(lowest.len(), 1);
    }

    #[test]
    fn test_bazaar_into_quotes() {
        let json = serde_json::json!({
            "success": true,
            "products": {
                "SULPHUR": { "quick_status": { "buyPrice": 5.0, "sellPrice": 3.0 } },
                "NO_STATUS": {}
            }
        });
        let response: BazaarResponse = serde_json::from_value(json).unwrap();
        let quotes = response.into_quotes();
        assert_eq!(
            quotes.get("SULPHUR"),
            Some(&BazaarQuote {
                instant_buy_price: 5.0,
                instant_sell_price: 3.0
            })
        );
        // Missing quick_status defaults to zeroed prices, which the
        // rankers treat as "side unavailable"
        assert_eq!(
            quotes.get("NO_STATUS"),
            Some(&BazaarQuote {
                instant_buy_price: 0.0,
                instant_sell_price: 0.0
            })
        );
    }

    #[test]
    fn test_items_into_npc_prices_skips_bad_records() {
        let json = serde_json::json!({
            "success": true,
            "items": [
                { "id": "SULPHUR", "npc_sell_price": 10.0 },
                { "id": "NO_PRICE", "name": "No Price" },
                { "npc_sell_price": 5.0 }
            ]
        });
        let response: ItemsResponse = serde_json::from_value(json).unwrap();
        let prices = response.into_npc_prices();
        assert_eq!(prices.get("SULPHUR"), Some(&10.0));
        assert_eq!(prices.len(), 1);
    }

    #[test]
    fn test_catalog_grid_recipe() {
        let json = serde_json::json!({
            "internalname": "ENCHANTED_SULPHUR",
            "recipe": {
                "A1": "SULPHUR:32", "A2": "SULPHUR:32", "A3": "SULPHUR:32",
                "B1": "SULPHUR:32", "B2": "SULPHUR:32", "B3": "SULPHUR:32",
                "C1": "SULPHUR:32", "C2": "", "C3": ""
            }
        });
        let item: CatalogItem = serde_json::from_value(json).unwrap();
        let (id, recipe) = item.into_recipe().unwrap();
        assert_eq!(id, "ENCHANTED_SULPHUR");
        assert_eq!(recipe.materials.len(), 1);
        assert_eq!(recipe.materials[0].material_id, "SULPHUR");
        assert_eq!(recipe.materials[0].count, 224);
        let grid = recipe.grid.unwrap();
        assert!(grid[2][1].is_none());
        assert_eq!(grid[0][0].as_ref().unwrap().count, 32);
    }

    #[test]
    fn test_catalog_materials_list() {
        let json = serde_json::json!({
            "id": "WIDGET",
            "materials": [
                { "id": "COG", "count": 2 },
                { "id": "COG", "count": 1 },
                { "id": "", "count": 4 }
            ]
        });
        let item: CatalogItem = serde_json::from_value(json).unwrap();
        let (id, recipe) = item.into_recipe().unwrap();
        assert_eq!(id, "WIDGET");
        assert_eq!(recipe.materials.len(), 1);
        assert_eq!(recipe.materials[0].count, 3);
        assert!(recipe.grid.is_none());
    }

    #[test]
    fn test_catalog_entry_without_recipe_is_dropped() {
        let json = serde_json::json!({ "internalname": "PLAIN_ITEM" });
        let item: CatalogItem = serde_json::from_value(json).unwrap();
        assert!(item.into_recipe().is_none());
    }

    #[test]
    fn test_parse_grid_cell_variants() {
        assert_eq!(
            parse_grid_cell("INK_SACK:8"),
            Some(RecipeMaterial {
                material_id: "INK_SACK".to_string(),
                count: 8
            })
        );
        assert_eq!(
            parse_grid_cell("LOG"),
            Some(RecipeMaterial {
                material_id: "LOG".to_string(),
                count: 1
            })
        );
        assert_eq!(parse_grid_cell(""), None);
        assert_eq!(parse_grid_cell(":3"), None);
    }
}
