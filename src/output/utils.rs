//! Shared helpers for output formatters

/// Connector for an entry that has later siblings.
pub const BRANCH: &str = "├── ";

/// Connector for the last entry of a listing.
pub const CORNER: &str = "└── ";

/// Pick the connector glyph for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { CORNER } else { BRANCH }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector() {
        assert_eq!(connector(true), "└── ");
        assert_eq!(connector(false), "├── ");
        assert_eq!(BRANCH.chars().count(), CORNER.chars().count());
    }
}
