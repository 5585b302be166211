use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque item identifier, stable across all datasets (bazaar, item
/// metadata, auctions, recipes). Auction item names are normalized to
/// this form before lookup (uppercase, spaces to underscores).
pub type ItemId = String;

/// Bazaar quick-status quote for one item.
///
/// A price of 0 means that side of the order book is unavailable and
/// excludes the side from ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BazaarQuote {
    /// Cost to fill a buy order immediately (quick_status.buyPrice).
    pub instant_buy_price: f64,
    /// Price received selling immediately (quick_status.sellPrice).
    pub instant_sell_price: f64,
}

/// One input of a crafting recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMaterial {
    pub material_id: ItemId,
    pub count: u32,
}

/// 3x3 crafting grid layout, rows A..C, columns 1..3.
pub type RecipeGrid = [[Option<RecipeMaterial>; 3]; 3];

/// Bill of materials for a crafted item. Material order is irrelevant.
///
/// The grid is kept only when the catalog provided one; it is a display
/// layout, the `materials` list is what pricing works from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub materials: Vec<RecipeMaterial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<RecipeGrid>,
}

impl Recipe {
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// Which kind of flip a candidate represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipKind {
    /// Instant-buy from the bazaar, sell to the NPC vendor.
    InstantBuy,
    /// Sell into an existing buy order, redeem the item at the NPC vendor.
    BuyOrder,
    /// Craft from materials, sell at the best market reference price.
    Craft,
}

/// One ranked flip opportunity. Never persisted, recomputed per report.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipCandidate {
    pub item_id: ItemId,
    /// Signed: negative-profit candidates are valid and sort to the bottom.
    pub profit: f64,
    pub kind: FlipKind,
    /// The buy-side price for NPC flips, the sale-side price for craft flips.
    pub reference_price: f64,
}

/// Remote datasets the snapshot loader pulls from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Bazaar,
    Items,
    Auctions,
    RecipeCatalog,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataSource::Bazaar => "bazaar",
            DataSource::Items => "item metadata",
            DataSource::Auctions => "auctions",
            DataSource::RecipeCatalog => "recipe catalog",
        };
        f.write_str(name)
    }
}
