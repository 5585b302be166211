//! Command layer: maps the named report operations onto the snapshot
//! loader, the rankers and the renderer. Each command builds a fresh
//! market snapshot; only the recipe catalog is reused from the
//! process-lifetime cache.

use crate::api::HypixelClient;
use crate::error::ReportError;
use crate::flips::{rank_craft_flips, rank_npc_flips};
use crate::report::{render_craft_flip_report, render_npc_flip_report, render_recipe, ReportEmbed};
use crate::snapshot::{load_market, MarketSnapshot};
use crate::state::RecipeCache;
use crate::types::DataSource;
use rand::seq::IteratorRandom;
use tracing::info;

pub struct CommandHandler {
    client: HypixelClient,
    recipe_cache: RecipeCache,
    top_n: usize,
}

impl CommandHandler {
    pub fn new(client: HypixelClient, recipe_cache: RecipeCache, top_n: usize) -> Self {
        Self {
            client,
            recipe_cache,
            top_n,
        }
    }

    fn require(snapshot: &MarketSnapshot, source: DataSource) -> Result<(), ReportError> {
        if snapshot.source_failed(source) {
            return Err(ReportError::SourceUnavailable(source));
        }
        Ok(())
    }

    /// Top NPC flips per kind, paired side by side.
    pub async fn npc_flip_report(&self) -> Result<ReportEmbed, ReportError> {
        let snapshot = load_market(&self.client).await;
        Self::require(&snapshot, DataSource::Bazaar)?;
        Self::require(&snapshot, DataSource::Items)?;

        let (buy_order, insta) = rank_npc_flips(&snapshot.bazaar, &snapshot.npc_prices, self.top_n);
        if buy_order.is_empty() && insta.is_empty() {
            return Err(ReportError::NoCandidates);
        }

        info!(
            "NPC flip report: {} buy-order and {} insta candidates",
            buy_order.len(),
            insta.len()
        );
        Ok(render_npc_flip_report(&buy_order, &insta, self.top_n))
    }

    /// Top craft flips by cost-vs-reference-price margin.
    pub async fn craft_flip_report(&self) -> Result<ReportEmbed, ReportError> {
        let recipes = self.recipe_cache.get().ok_or(ReportError::CatalogNotReady)?;

        let snapshot = load_market(&self.client).await;
        // Auctions may fail: the bazaar instant-sell side still provides
        // reference prices. The bazaar itself is required.
        Self::require(&snapshot, DataSource::Bazaar)?;

        let ranked = rank_craft_flips(&snapshot.bazaar, &recipes, &snapshot.lowest_bin, self.top_n);
        if ranked.is_empty() {
            return Err(ReportError::NoCandidates);
        }

        info!("Craft flip report: {} candidates", ranked.len());
        Ok(render_craft_flip_report(&ranked, self.top_n))
    }

    /// One randomly chosen item's recipe.
    pub async fn random_recipe(&self) -> Result<ReportEmbed, ReportError> {
        let recipes = self.recipe_cache.get().ok_or(ReportError::CatalogNotReady)?;

        let (item_id, recipe) = recipes
            .iter()
            .choose(&mut rand::thread_rng())
            .ok_or(ReportError::NoCandidates)?;

        info!("Random recipe: {}", item_id);
        Ok(render_recipe(item_id, recipe))
    }
}
