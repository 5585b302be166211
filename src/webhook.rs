use crate::report::ReportEmbed;
use once_cell::sync::Lazy;
use tracing::warn;

static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

async fn post_embed(webhook_url: &str, payload: serde_json::Value) {
    if let Err(e) = HTTP.post(webhook_url).json(&payload).send().await {
        warn!("[Webhook] Failed to send webhook: {}", e);
    }
}

/// Deliver a rendered report as a Discord embed. Delivery failures are
/// logged and dropped; the report was already echoed to the console.
pub async fn send_report(webhook_url: &str, embed: &ReportEmbed) {
    post_embed(webhook_url, embed.to_webhook_payload()).await;
}

pub async fn send_webhook_started(
    npc_enabled: bool,
    craft_enabled: bool,
    webhook_url: &str,
) {
    let payload = serde_json::json!({
        "embeds": [{
            "title": "✓ Started Skyflip",
            "color": 0x00ff00,
            "fields": [
                {"name": "NPC Flips", "value": if npc_enabled { "✓" } else { "✗" }, "inline": true},
                {"name": "Craft Flips", "value": if craft_enabled { "✓" } else { "✗" }, "inline": true},
            ]
        }]
    });
    post_embed(webhook_url, payload).await;
}
