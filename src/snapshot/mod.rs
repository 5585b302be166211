//! Market snapshot loading.
//!
//! The three market sources are independent: a failed fetch leaves that
//! source's mapping empty and tags the failure, so the command layer can
//! report "data unavailable" instead of silently ranking an empty set.

use crate::api::HypixelClient;
use crate::types::{BazaarQuote, DataSource, ItemId};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    pub bazaar: HashMap<ItemId, BazaarQuote>,
    pub npc_prices: HashMap<ItemId, f64>,
    pub lowest_bin: HashMap<ItemId, f64>,
    pub failed_sources: Vec<DataSource>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl MarketSnapshot {
    pub fn source_failed(&self, source: DataSource) -> bool {
        self.failed_sources.contains(&source)
    }
}

/// Fetch bazaar quotes, NPC prices and lowest BINs concurrently.
/// Never fails as a whole; each failed source degrades to an empty
/// mapping.
pub async fn load_market(client: &HypixelClient) -> MarketSnapshot {
    let (bazaar, npc_prices, lowest_bin) = tokio::join!(
        client.fetch_bazaar(),
        client.fetch_npc_prices(),
        client.fetch_lowest_bins(),
    );

    let mut snapshot = MarketSnapshot {
        fetched_at: Some(Utc::now()),
        ..Default::default()
    };

    match bazaar {
        Ok(quotes) => snapshot.bazaar = quotes,
        Err(e) => {
            warn!("Bazaar fetch failed: {:#}", e);
            snapshot.failed_sources.push(DataSource::Bazaar);
        }
    }

    match npc_prices {
        Ok(prices) => snapshot.npc_prices = prices,
        Err(e) => {
            warn!("Item metadata fetch failed: {:#}", e);
            snapshot.failed_sources.push(DataSource::Items);
        }
    }

    match lowest_bin {
        Ok(bins) => snapshot.lowest_bin = bins,
        Err(e) => {
            warn!("Auctions fetch failed: {:#}", e);
            snapshot.failed_sources.push(DataSource::Auctions);
        }
    }

    info!(
        "Market snapshot: {} bazaar quotes, {} NPC prices, {} BIN prices{}",
        snapshot.bazaar.len(),
        snapshot.npc_prices.len(),
        snapshot.lowest_bin.len(),
        if snapshot.failed_sources.is_empty() {
            String::new()
        } else {
            format!(" ({} source(s) failed)", snapshot.failed_sources.len())
        }
    );

    snapshot
}
