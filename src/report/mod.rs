//! Report rendering: ranked candidate lists into display-ready embeds.
//!
//! Pure formatting, no business logic. The numeric content and the
//! ranking order come straight from the flip rankers.

use crate::types::{FlipCandidate, ItemId, Recipe};
use crate::utils::{display_item_name, format_coins};

const COLOR_GOLD: u32 = 0xffaa00;
const COLOR_GREEN: u32 = 0x00ff99;
const COLOR_BLUE: u32 = 0x0099ff;
const FOOTER: &str = "Hypixel Skyblock Bazaar Flipping Bot";

/// Display-ready report, rendered by the webhook as a Discord embed and
/// echoed to the console as plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEmbed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub footer: String,
}

impl ReportEmbed {
    pub fn to_webhook_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "embeds": [{
                "title": self.title,
                "description": self.description,
                "color": self.color,
                "footer": { "text": self.footer }
            }]
        })
    }
}

/// Side-by-side NPC flip report. The two lists are paired positionally;
/// pairing stops at the shorter list.
pub fn render_npc_flip_report(
    buy_order_flips: &[FlipCandidate],
    insta_flips: &[FlipCandidate],
    top_n: usize,
) -> ReportEmbed {
    let mut description = String::from("**BUY ORDER**                 |            **INSTA BUY**\n");
    description.push_str("--------------------------------------------------------------\n\n");

    for (bo, ib) in buy_order_flips.iter().zip(insta_flips.iter()) {
        let bo_name = display_item_name(&bo.item_id);
        let ib_name = display_item_name(&ib.item_id);
        description.push_str(&format!(
            "{:<25} (**{}** coins profit)  **|**  {:<25} (**{}** coins profit)\n\n",
            bo_name,
            format_coins(bo.profit),
            ib_name,
            format_coins(ib.profit),
        ));
    }

    ReportEmbed {
        title: format!("\u{1f4b0} Top {} NPC Flips", top_n),
        description,
        color: COLOR_GOLD,
        footer: FOOTER.to_string(),
    }
}

/// Itemized craft flip report.
pub fn render_craft_flip_report(ranked: &[FlipCandidate], top_n: usize) -> ReportEmbed {
    let mut description = String::new();

    for (i, candidate) in ranked.iter().enumerate() {
        let craft_cost = candidate.reference_price - candidate.profit;
        description.push_str(&format!(
            "{}. **{}** - craft for {}, sells for {} (**{}** coins profit)\n",
            i + 1,
            display_item_name(&candidate.item_id),
            format_coins(craft_cost),
            format_coins(candidate.reference_price),
            format_coins(candidate.profit),
        ));
    }

    ReportEmbed {
        title: format!("\u{2692} Top {} Craft Flips", top_n),
        description,
        color: COLOR_GREEN,
        footer: FOOTER.to_string(),
    }
}

/// Recipe display for a single item: the 3x3 grid when the catalog
/// provided one, otherwise the materials list.
pub fn render_recipe(item_id: &ItemId, recipe: &Recipe) -> ReportEmbed {
    let description = match &recipe.grid {
        Some(grid) => {
            let mut out = String::new();
            for row in grid {
                let cells: Vec<String> = row
                    .iter()
                    .map(|cell| match cell {
                        Some(m) => format!("[{}x {}]", m.count, display_item_name(&m.material_id)),
                        None => "[     ]".to_string(),
                    })
                    .collect();
                out.push_str(&cells.join(" "));
                out.push('\n');
            }
            out
        }
        None => recipe
            .materials
            .iter()
            .map(|m| format!("- {}x {}", m.count, display_item_name(&m.material_id)))
            .collect::<Vec<String>>()
            .join("\n"),
    };

    ReportEmbed {
        title: format!("\u{1f4dc} Recipe: {}", display_item_name(item_id)),
        description,
        color: COLOR_BLUE,
        footer: FOOTER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FlipKind, RecipeMaterial};

    fn candidate(id: &str, profit: f64, kind: FlipKind, reference: f64) -> FlipCandidate {
        FlipCandidate {
            item_id: id.to_string(),
            profit,
            kind,
            reference_price: reference,
        }
    }

    #[test]
    fn test_npc_report_pairs_to_shorter_list() {
        let buy_order = vec![
            candidate("SULPHUR", 7.0, FlipKind::BuyOrder, 3.0),
            candidate("COAL", 2.0, FlipKind::BuyOrder, 1.0),
        ];
        let insta = vec![candidate("SULPHUR", 5.0, FlipKind::InstantBuy, 5.0)];

        let report = render_npc_flip_report(&buy_order, &insta, 15);
        assert!(report.description.contains("Sulphur"));
        // COAL has no insta partner, so its row is omitted
        assert!(!report.description.contains("Coal"));
        assert_eq!(report.title, "\u{1f4b0} Top 15 NPC Flips");
    }

    #[test]
    fn test_npc_report_formats_profits_with_separators() {
        let buy_order = vec![candidate("GOLD_BLOCK", 1234567.0, FlipKind::BuyOrder, 10.0)];
        let insta = vec![candidate("GOLD_BLOCK", -2500.0, FlipKind::InstantBuy, 10.0)];
        let report = render_npc_flip_report(&buy_order, &insta, 15);
        assert!(report.description.contains("1,234,567"));
        assert!(report.description.contains("-2,500"));
    }

    #[test]
    fn test_craft_report_lists_in_order() {
        let ranked = vec![
            candidate("WIDGET", 72.0, FlipKind::Craft, 80.0),
            candidate("GADGET", 10.0, FlipKind::Craft, 30.0),
        ];
        let report = render_craft_flip_report(&ranked, 15);
        let widget_pos = report.description.find("Widget").unwrap();
        let gadget_pos = report.description.find("Gadget").unwrap();
        assert!(widget_pos < gadget_pos);
        // craft cost = reference - profit
        assert!(report.description.contains("craft for 8"));
        assert!(report.description.contains("sells for 80"));
    }

    #[test]
    fn test_render_recipe_materials_list() {
        let recipe = Recipe {
            materials: vec![RecipeMaterial {
                material_id: "COG".to_string(),
                count: 2,
            }],
            grid: None,
        };
        let report = render_recipe(&"WIDGET".to_string(), &recipe);
        assert!(report.description.contains("2x Cog"));
        assert!(report.title.contains("Widget"));
    }

    #[test]
    fn test_render_recipe_grid() {
        let mut grid: crate::types::RecipeGrid = Default::default();
        grid[0][0] = Some(RecipeMaterial {
            material_id: "SULPHUR".to_string(),
            count: 32,
        });
        let recipe = Recipe {
            materials: vec![RecipeMaterial {
                material_id: "SULPHUR".to_string(),
                count: 32,
            }],
            grid: Some(grid),
        };
        let report = render_recipe(&"ENCHANTED_SULPHUR".to_string(), &recipe);
        assert!(report.description.contains("[32x Sulphur]"));
        assert!(report.description.contains("[     ]"));
        assert_eq!(report.description.lines().count(), 3);
    }
}
