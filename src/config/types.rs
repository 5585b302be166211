use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_hypixel_api_url")]
    pub hypixel_api_url: String,

    /// Index of the community item catalog (one entry per item).
    #[serde(default = "default_catalog_index_url")]
    pub catalog_index_url: String,

    /// Base URL under which individual catalog entries are fetched as
    /// `{base}/{FILE}`.
    #[serde(default = "default_catalog_raw_url")]
    pub catalog_raw_url: String,

    /// How many entries of each flip report to show.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    #[serde(default = "default_health_port")]
    pub health_port: u16,

    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Concurrent catalog entry fetches during the startup load.
    #[serde(default = "default_catalog_concurrency")]
    pub catalog_concurrency: usize,

    #[serde(default = "default_true")]
    pub enable_npc_flips: bool,

    #[serde(default = "default_true")]
    pub enable_craft_flips: bool,

    #[serde(default)]
    pub webhook_url: Option<String>,
}

// Default values
fn default_hypixel_api_url() -> String {
    "https://api.hypixel.net".to_string()
}

fn default_catalog_index_url() -> String {
    "https://api.github.com/repos/NotEnoughUpdates/NotEnoughUpdates-REPO/contents/items".to_string()
}

fn default_catalog_raw_url() -> String {
    "https://raw.githubusercontent.com/NotEnoughUpdates/NotEnoughUpdates-REPO/master/items".to_string()
}

fn default_top_n() -> usize {
    crate::flips::DEFAULT_TOP_N
}

fn default_health_port() -> u16 {
    8080
}

fn default_http_timeout_secs() -> u64 {
    30
}

fn default_catalog_concurrency() -> usize {
    8
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hypixel_api_url: default_hypixel_api_url(),
            catalog_index_url: default_catalog_index_url(),
            catalog_raw_url: default_catalog_raw_url(),
            top_n: default_top_n(),
            health_port: default_health_port(),
            http_timeout_secs: default_http_timeout_secs(),
            catalog_concurrency: default_catalog_concurrency(),
            enable_npc_flips: true,
            enable_craft_flips: true,
            webhook_url: None,
        }
    }
}

impl Config {
    /// Returns the webhook URL only if it is non-empty.
    pub fn active_webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref().filter(|u| !u.is_empty())
    }
}
