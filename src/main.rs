use anyhow::Result;
use dialoguer::Input;
use skyflip::{
    api::HypixelClient,
    commands::CommandHandler,
    config::ConfigLoader,
    health::{self, HealthState},
    logging::init_logger,
    state::RecipeCache,
    webhook,
};
use std::sync::Arc;
use tracing::{error, info, warn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logger()?;
    info!("Starting Skyflip v{}", VERSION);

    // Load or create configuration
    let config_loader = ConfigLoader::new();
    let mut config = config_loader.load()?;

    // Prompt for a webhook URL on first run; empty means console-only
    if config.webhook_url.is_none() {
        let url: String = Input::new()
            .with_prompt("Enter a Discord webhook URL (leave empty for console-only reports)")
            .allow_empty(true)
            .interact_text()?;
        config.webhook_url = Some(url);
        config_loader.save(&config)?;
    }

    info!("NPC Flips: {}", if config.enable_npc_flips { "ENABLED" } else { "DISABLED" });
    info!("Craft Flips: {}", if config.enable_craft_flips { "ENABLED" } else { "DISABLED" });
    info!("Health Port: {}", config.health_port);

    let client = HypixelClient::new(&config)?;
    let recipe_cache = RecipeCache::new();
    let health_state = Arc::new(HealthState::new());

    // Liveness endpoint for the hosting supervisor
    let health_port = config.health_port;
    let health_state_server = health_state.clone();
    tokio::spawn(async move {
        if let Err(e) = health::serve(health_port, health_state_server).await {
            error!("Health endpoint stopped: {:#}", e);
        }
    });

    // Populate the recipe catalog once at startup. Craft commands report
    // "catalog still loading" until this publishes.
    if config.enable_craft_flips {
        let catalog_client = client.clone();
        let catalog_cache = recipe_cache.clone();
        let catalog_health = health_state.clone();
        tokio::spawn(async move {
            match catalog_client.fetch_recipe_catalog().await {
                Ok(recipes) => {
                    catalog_cache.publish(recipes);
                    catalog_health.set_catalog_ready(true);
                }
                Err(e) => {
                    warn!("Recipe catalog load failed: {:#}", e);
                    warn!("Craft flip commands will report the catalog as unavailable");
                }
            }
        });
    }

    if let Some(url) = config.active_webhook_url() {
        webhook::send_webhook_started(config.enable_npc_flips, config.enable_craft_flips, url).await;
    }

    let handler = CommandHandler::new(client, recipe_cache, config.top_n);

    info!("Console interface ready - type commands and press Enter:");
    if config.enable_npc_flips {
        info!("  /npcflip      - top {} NPC flips by buy order and instant buy", config.top_n);
    }
    if config.enable_craft_flips {
        info!("  /craftflip    - top {} craft flips by profit margin", config.top_n);
        info!("  /randomrecipe - show one random item's crafting recipe");
    }

    // Console command loop; one report request at a time
    use tokio::io::{stdin, AsyncBufReadExt, BufReader};

    let reader = BufReader::new(stdin());
    let mut lines = reader.lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let result = match input.to_lowercase().as_str() {
            "/npcflip" if config.enable_npc_flips => handler.npc_flip_report().await,
            "/craftflip" if config.enable_craft_flips => handler.craft_flip_report().await,
            "/randomrecipe" if config.enable_craft_flips => handler.random_recipe().await,
            "/npcflip" | "/craftflip" | "/randomrecipe" => {
                warn!("That command is disabled in the config");
                continue;
            }
            other => {
                warn!("Unknown command: {}", other);
                continue;
            }
        };

        match result {
            Ok(embed) => {
                health_state.inc_reports_served();
                println!("\n{}\n{}\n", embed.title, embed.description);
                if let Some(url) = config.active_webhook_url() {
                    webhook::send_report(url, &embed).await;
                }
            }
            Err(e) => {
                // Degrades to "no report for this request", never fatal
                error!("{}", e);
                println!("{}", e);
            }
        }
    }

    Ok(())
}
