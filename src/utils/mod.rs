pub mod string;

pub use string::{display_item_name, format_coins, normalize_item_id, to_title_case};
