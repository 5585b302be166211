pub mod recipe_cache;

pub use recipe_cache::RecipeCache;
