//! Option values accepted by the listing filters.
//!
//! The remote API expects the upper-snake-case codes verbatim; the labels
//! are only for display.

pub const PROPERTY_TYPES: &[&str] = &[
    "VACANT_LAND",
    "WITH_BUILDING",
    "FARMLAND",
    "PLANTATION",
    "WATERFRONT",
];

pub const LAND_SIZE_UNITS: &[&str] = &["SQUARE_METERS", "ACRES", "HECTARES", "SQUARE_FEET", "PLOTS"];

pub const LAND_TYPES: &[&str] = &[
    "RESIDENTIAL",
    "COMMERCIAL",
    "AGRICULTURAL",
    "INDUSTRIAL",
    "MIXED_USE",
];

pub const STATUS_OPTIONS: &[&str] = &["ACTIVE", "SOLD", "INACTIVE", "PENDING", "UNDER_REVIEW"];

pub const VERIFICATION_OPTIONS: &[&str] = &["VERIFIED", "PENDING", "UNVERIFIED"];

pub const TITLE_DOCUMENT_TYPES: &[&str] = &[
    "certificate_of_occupancy",
    "governors_consent",
    "survey_plan",
    "deed_of_assignment",
    "excision",
    "gazette",
];

pub const PAGE_SIZE_OPTIONS: &[u32] = &[6, 9, 12, 18, 24];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub const FEATURED_OPTIONS: &[FeaturedOption] = &[
    FeaturedOption {
        label: "All ads",
        value: "",
    },
    FeaturedOption {
        label: "Featured only",
        value: "true",
    },
    FeaturedOption {
        label: "Non-featured",
        value: "false",
    },
];

/// Sentence-case label for a select option: `VACANT_LAND` -> `Vacant land`.
///
/// Differs from [`crate::format_label`], which title-cases every word.
#[must_use]
pub fn option_label(code: &str) -> String {
    let lowered = code.replace('_', " ").to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_label_uses_sentence_case() {
        assert_eq!(option_label("VACANT_LAND"), "Vacant land");
        assert_eq!(option_label("UNDER_REVIEW"), "Under review");
        assert_eq!(option_label("ACRES"), "Acres");
    }

    #[test]
    fn option_label_empty_is_empty() {
        assert_eq!(option_label(""), "");
    }

    #[test]
    fn featured_options_start_with_the_unfiltered_choice() {
        assert_eq!(FEATURED_OPTIONS[0].value, "");
        assert!(FEATURED_OPTIONS.iter().any(|o| o.value == "true"));
    }

    #[test]
    fn default_page_size_is_offered() {
        assert!(PAGE_SIZE_OPTIONS.contains(&9));
    }
}
