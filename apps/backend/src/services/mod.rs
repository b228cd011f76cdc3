//! Services bridge the pure domain with persistence.

pub mod game_flow;
pub mod games;
pub mod players;

/// Longest accepted player or game name, in characters.
pub const MAX_NAME_CHARS: usize = 64;

/// Trim `raw` and require 1..=MAX_NAME_CHARS characters.
pub(crate) fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    (1..=MAX_NAME_CHARS).contains(&len).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_bounded() {
        assert_eq!(normalize_name("  Dana "), Some("Dana".to_string()));
        assert_eq!(normalize_name("   "), None);
        assert_eq!(normalize_name(""), None);
        assert!(normalize_name(&"é".repeat(MAX_NAME_CHARS)).is_some());
        assert!(normalize_name(&"x".repeat(MAX_NAME_CHARS + 1)).is_none());
    }
}
