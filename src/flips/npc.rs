//! NPC flip ranking.
//!
//! For every item quoted on the bazaar that an NPC vendor also buys,
//! two flips are possible: instant-buy it from the bazaar and vendor it,
//! or sell into an existing buy order and redeem the item at the vendor.

use super::sort_and_truncate;
use crate::types::{BazaarQuote, FlipCandidate, FlipKind, ItemId};
use std::collections::HashMap;

/// Rank NPC flips. Returns `(buy_order_top, insta_buy_top)`, each sorted
/// descending by profit and truncated to `top_n`.
///
/// A candidate is only constructed when both its buy side and its sell
/// side are strictly positive; a zero or missing price excludes that
/// side entirely. Negative profits are kept and sort to the bottom.
pub fn rank_npc_flips(
    bazaar: &HashMap<ItemId, BazaarQuote>,
    npc_prices: &HashMap<ItemId, f64>,
    top_n: usize,
) -> (Vec<FlipCandidate>, Vec<FlipCandidate>) {
    let mut buy_order_flips = Vec::new();
    let mut insta_flips = Vec::new();

    for (item_id, quote) in bazaar {
        let Some(&npc_price) = npc_prices.get(item_id) else {
            continue;
        };
        if npc_price <= 0.0 {
            continue;
        }

        if quote.instant_buy_price > 0.0 {
            insta_flips.push(FlipCandidate {
                item_id: item_id.clone(),
                profit: npc_price - quote.instant_buy_price,
                kind: FlipKind::InstantBuy,
                reference_price: quote.instant_buy_price,
            });
        }

        if quote.instant_sell_price > 0.0 {
            buy_order_flips.push(FlipCandidate {
                item_id: item_id.clone(),
                profit: npc_price - quote.instant_sell_price,
                kind: FlipKind::BuyOrder,
                reference_price: quote.instant_sell_price,
            });
        }
    }

    sort_and_truncate(&mut buy_order_flips, top_n);
    sort_and_truncate(&mut insta_flips, top_n);

    (buy_order_flips, insta_flips)
}
