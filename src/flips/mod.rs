pub mod craft;
pub mod npc;

pub use craft::rank_craft_flips;
pub use npc::rank_npc_flips;

use crate::types::FlipCandidate;
use std::cmp::Ordering;

/// Default report depth.
pub const DEFAULT_TOP_N: usize = 15;

/// Sort descending by profit (stable, ties keep insertion order) and
/// keep at most `top_n` candidates.
pub(crate) fn sort_and_truncate(candidates: &mut Vec<FlipCandidate>, top_n: usize) {
    candidates.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));
    candidates.truncate(top_n);
}
