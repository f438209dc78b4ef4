//! Shared value types for the summarization pipeline.

use serde::{Deserialize, Serialize};

/// Named summary-length preset.
///
/// Each tier maps to a fixed `(min_length, max_length)` pair in summary
/// words. The table is configuration, not user-settable; unrecognized tier
/// strings silently map to [`LengthTier::Medium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthTier {
    /// Parse a tier from its string form. Anything other than
    /// `"short"` / `"medium"` / `"long"` falls back to `Medium`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => LengthTier::Short,
            "long" => LengthTier::Long,
            _ => LengthTier::Medium,
        }
    }

    /// The `(min_length, max_length)` bounds for this tier, in words.
    pub fn bounds(self) -> (u32, u32) {
        match self {
            LengthTier::Short => (20, 60),
            LengthTier::Medium => (60, 180),
            LengthTier::Long => (180, 400),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LengthTier::Short => "short",
            LengthTier::Medium => "medium",
            LengthTier::Long => "long",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tiers() {
        assert_eq!(LengthTier::parse("short"), LengthTier::Short);
        assert_eq!(LengthTier::parse("medium"), LengthTier::Medium);
        assert_eq!(LengthTier::parse("long"), LengthTier::Long);
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(LengthTier::parse("  SHORT "), LengthTier::Short);
        assert_eq!(LengthTier::parse("Long"), LengthTier::Long);
    }

    #[test]
    fn parse_unknown_falls_back_to_medium() {
        assert_eq!(LengthTier::parse("extra-long"), LengthTier::Medium);
        assert_eq!(LengthTier::parse(""), LengthTier::Medium);
        assert_eq!(LengthTier::parse("42"), LengthTier::Medium);
    }

    #[test]
    fn bounds_table() {
        assert_eq!(LengthTier::Short.bounds(), (20, 60));
        assert_eq!(LengthTier::Medium.bounds(), (60, 180));
        assert_eq!(LengthTier::Long.bounds(), (180, 400));
    }
}
