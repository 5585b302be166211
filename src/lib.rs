//! Skyflip
//!
//! A report bot for the Hypixel Skyblock economy: fetches bazaar
//! quotes, NPC sell prices, open auctions and community crafting
//! recipes, ranks the most profitable flips, and posts the top results
//! as Discord webhook embeds.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod flips;
pub mod health;
pub mod logging;
pub mod report;
pub mod snapshot;
pub mod state;
pub mod types;
pub mod utils;
pub mod webhook;

pub use error::ReportError;
pub use types::{BazaarQuote, DataSource, FlipCandidate, FlipKind, ItemId, Recipe, RecipeMaterial};
