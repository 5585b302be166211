/// String utility functions

/// Format a coin amount with thousands separators and zero decimals.
/// Keeps the sign for negative profits.
pub fn format_coins(n: f64) -> String {
    let rounded = n.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut result = String::new();
    let chars: Vec<char> = digits.chars().collect();

    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }

    if rounded < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

/// Convert string to title case
pub fn to_title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Human-readable name for a raw item id: "ENCHANTED_LAPIS_LAZULI" ->
/// "Enchanted Lapis Lazuli".
pub fn display_item_name(item_id: &str) -> String {
    to_title_case(&item_id.replace('_', " "))
}

/// Normalize an auction item name into an ItemId: "Iron Sword" ->
/// "IRON_SWORD". A name that does not match any bazaar/items id is
/// silently dropped at lookup time.
pub fn normalize_item_id(name: &str) -> String {
    name.trim().to_uppercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coins() {
        assert_eq!(format_coins(1000.0), "1,000");
        assert_eq!(format_coins(1000000.0), "1,000,000");
        assert_eq!(format_coins(123.0), "123");
        assert_eq!(format_coins(1234.49), "1,234");
        assert_eq!(format_coins(-54321.0), "-54,321");
        assert_eq!(format_coins(0.0), "0");
    }

    #[test]
    fn test_to_title_case() {
        assert_eq!(to_title_case("hello world"), "Hello World");
        assert_eq!(to_title_case("HELLO WORLD"), "Hello World");
        assert_eq!(to_title_case("hello"), "Hello");
    }

    #[test]
    fn test_display_item_name() {
        assert_eq!(display_item_name("ENCHANTED_LAPIS_LAZULI"), "Enchanted Lapis Lazuli");
        assert_eq!(display_item_name("SULPHUR"), "Sulphur");
    }

    #[test]
    fn test_normalize_item_id() {
        assert_eq!(normalize_item_id("Iron Sword"), "IRON_SWORD");
        assert_eq!(normalize_item_id("  enchanted lapis lazuli "), "ENCHANTED_LAPIS_LAZULI");
    }
}
