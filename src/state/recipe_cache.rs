use crate::types::{ItemId, Recipe};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Process-lifetime cache of the recipe catalog.
///
/// The catalog is expensive to load (one remote call per item) and
/// changes rarely, so it is populated exactly once by the startup task
/// and read-only afterward. `get` returns None until the catalog is
/// published; callers treat that as "data unavailable" for their own
/// request rather than waiting.
#[derive(Clone)]
pub struct RecipeCache {
    inner: Arc<RwLock<Option<Arc<HashMap<ItemId, Recipe>>>>>,
}

impl RecipeCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Publish the loaded catalog. Single writer; a second publish is a
    /// bug and is ignored with a warning.
    pub fn publish(&self, recipes: HashMap<ItemId, Recipe>) {
        let mut guard = self.inner.write();
        if guard.is_some() {
            tracing::warn!("Recipe cache published twice, keeping the first catalog");
            return;
        }
        tracing::info!("Recipe cache ready ({} recipes)", recipes.len());
        *guard = Some(Arc::new(recipes));
    }

    pub fn is_ready(&self) -> bool {
        self.inner.read().is_some()
    }

    pub fn get(&self) -> Option<Arc<HashMap<ItemId, Recipe>>> {
        self.inner.read().clone()
    }
}

impl Default for RecipeCache {
    fn default() -> Self {
        Self::new()
    }
}
