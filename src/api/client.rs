use super::models::{
    lowest_bin_by_item, AuctionsResponse, BazaarResponse, CatalogIndexEntry, CatalogItem,
    ItemsResponse,
};
use crate::config::Config;
use crate::types::{BazaarQuote, ItemId, Recipe};
use anyhow::{anyhow, Context, Result};
use futures::{stream, StreamExt};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Read-only client for the Hypixel API and the community item catalog.
#[derive(Clone)]
pub struct HypixelClient {
    http: reqwest::Client,
    api_base: String,
    catalog_index_url: String,
    catalog_raw_url: String,
    catalog_concurrency: usize,
}

impl HypixelClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(concat!("skyflip/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_base: config.hypixel_api_url.trim_end_matches('/').to_string(),
            catalog_index_url: config.catalog_index_url.clone(),
            catalog_raw_url: config.catalog_raw_url.trim_end_matches('/').to_string(),
            catalog_concurrency: config.catalog_concurrency.max(1),
        })
    }

    /// Current bazaar quick-status quotes, keyed by item id.
    pub async fn fetch_bazaar(&self) -> Result<HashMap<ItemId, BazaarQuote>> {
        let url = format!("{}/skyblock/bazaar", self.api_base);
        let response: BazaarResponse = self
            .http
            .get(&url)
            .send()
            .await
            .context("Bazaar request failed")?
            .error_for_status()
            .context("Bazaar request returned an error status")?
            .json()
            .await
            .context("Failed to decode bazaar response")?;

        if !response.success {
            return Err(anyhow!("Bazaar response reported success=false"));
        }

        let quotes = response.into_quotes();
        debug!("Fetched {} bazaar quotes", quotes.len());
        Ok(quotes)
    }

    /// NPC sell prices from the static item metadata, for the subset of
    /// items that have one.
    pub async fn fetch_npc_prices(&self) -> Result<HashMap<ItemId, f64>> {
        let url = format!("{}/resources/skyblock/items", self.api_base);
        let response: ItemsResponse = self
            .http
            .get(&url)
            .send()
            .await
            .context("Items request failed")?
            .error_for_status()
            .context("Items request returned an error status")?
            .json()
            .await
            .context("Failed to decode items response")?;

        if !response.success {
            return Err(anyhow!("Items response reported success=false"));
        }

        let prices = response.into_npc_prices();
        debug!("Fetched {} NPC sell prices", prices.len());
        Ok(prices)
    }

    /// Cheapest open buy-it-now listing per normalized item id, from the
    /// first auctions page.
    pub async fn fetch_lowest_bins(&self) -> Result<HashMap<ItemId, f64>> {
        let url = format!("{}/skyblock/auctions?page=0", self.api_base);
        let response: AuctionsResponse = self
            .http
            .get(&url)
            .send()
            .await
            .context("Auctions request failed")?
            .error_for_status()
            .context("Auctions request returned an error status")?
            .json()
            .await
            .context("Failed to decode auctions response")?;

        if !response.success {
            return Err(anyhow!("Auctions response reported success=false"));
        }

        let lowest = lowest_bin_by_item(response.auctions);
        debug!("Fetched lowest BIN prices for {} items", lowest.len());
        Ok(lowest)
    }

    /// Load the full recipe catalog: one index listing, then one fetch
    /// per entry. Entries that fail to fetch or decode are skipped; only
    /// an unreachable index is an error.
    pub async fn fetch_recipe_catalog(&self) -> Result<HashMap<ItemId, Recipe>> {
        let index: Vec<CatalogIndexEntry> = self
            .http
            .get(&self.catalog_index_url)
            .send()
            .await
            .context("Catalog index request failed")?
            .error_for_status()
            .context("Catalog index request returned an error status")?
            .json()
            .await
            .context("Failed to decode catalog index")?;

        let files: Vec<String> = index
            .into_iter()
            .map(|e| e.name)
            .filter(|n| n.ends_with(".json"))
            .collect();

        info!("Loading recipe catalog ({} entries)...", files.len());

        let recipes: HashMap<ItemId, Recipe> = stream::iter(files)
            .map(|file| {
                let client = self.clone();
                async move { client.fetch_catalog_entry(&file).await }
            })
            .buffer_unordered(self.catalog_concurrency)
            .filter_map(|entry| async move { entry })
            .collect()
            .await;

        info!("Recipe catalog loaded: {} items with recipes", recipes.len());
        Ok(recipes)
    }

    async fn fetch_catalog_entry(&self, file: &str) -> Option<(ItemId, Recipe)> {
        let url = format!("{}/{}", self.catalog_raw_url, file);
        let item: CatalogItem = match self.http.get(&url).send().await {
            Ok(response) => match response.error_for_status() {
                Ok(response) => match response.json().await {
                    Ok(item) => item,
                    Err(e) => {
                        warn!("Skipping malformed catalog entry {}: {}", file, e);
                        return None;
                    }
                },
                Err(e) => {
                    warn!("Skipping catalog entry {}: {}", file, e);
                    return None;
                }
            },
            Err(e) => {
                warn!("Skipping catalog entry {}: {}", file, e);
                return None;
            }
        };
        item.into_recipe()
    }
}
