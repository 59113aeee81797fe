//! Filter state for the listing explorer and its URL query-string form.
//!
//! Filters are resolved from three layers, later layers winning:
//! built-in defaults, caller-supplied overrides, then the current URL.
//! Only values that differ from the defaults are written back to the URL,
//! so an untouched filter form maps to a bare `/`.

use std::fmt;

use landbank_client::AdsQuery;
use url::form_urlencoded;

const FILTER_COUNT: usize = 10;

/// A named filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKey {
    PropertyType,
    LandType,
    LandSizeUnit,
    Status,
    Verification,
    IsFeatured,
    City,
    State,
    PageSize,
    /// Free-text search. Applied to held listings only, never sent upstream.
    Query,
}

impl FilterKey {
    pub const ALL: [FilterKey; FILTER_COUNT] = [
        FilterKey::PropertyType,
        FilterKey::LandType,
        FilterKey::LandSizeUnit,
        FilterKey::Status,
        FilterKey::Verification,
        FilterKey::IsFeatured,
        FilterKey::City,
        FilterKey::State,
        FilterKey::PageSize,
        FilterKey::Query,
    ];

    /// Name used in the URL query string and, except for `query`, in API requests.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PropertyType => "propertyType",
            Self::LandType => "landType",
            Self::LandSizeUnit => "landSizeUnit",
            Self::Status => "status",
            Self::Verification => "verification",
            Self::IsFeatured => "isFeatured",
            Self::City => "city",
            Self::State => "state",
            Self::PageSize => "pageSize",
            Self::Query => "query",
        }
    }

    /// Looks a key up by its query-string name. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    #[must_use]
    pub fn default_value(self) -> &'static str {
        match self {
            Self::Status => "ACTIVE",
            Self::Verification => "VERIFIED",
            Self::PageSize => "9",
            _ => "",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of every filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    values: [String; FILTER_COUNT],
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            values: FilterKey::ALL.map(|key| key.default_value().to_owned()),
        }
    }
}

impl FilterState {
    /// Resolves the effective filters: defaults, then `overrides`, then any
    /// recognised keys in `url_query`.
    ///
    /// `url_query` may carry a leading `?`. Unknown keys are ignored; a key
    /// repeated in the URL takes its last value.
    #[must_use]
    pub fn resolve(overrides: &[(FilterKey, &str)], url_query: &str) -> Self {
        let mut state = Self::default();
        for (key, value) in overrides {
            state.set(*key, value);
        }
        for (name, value) in form_urlencoded::parse(url_query.trim_start_matches('?').as_bytes()) {
            if let Some(key) = FilterKey::from_name(&name) {
                state.set(key, &value);
            }
        }
        state
    }

    #[must_use]
    pub fn get(&self, key: FilterKey) -> &str {
        &self.values[key.index()]
    }

    pub fn set(&mut self, key: FilterKey, value: &str) {
        value.clone_into(&mut self.values[key.index()]);
    }

    /// `true` when every filter holds its default value.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// URL-encoded form of the non-empty filters that differ from their defaults.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for key in FilterKey::ALL {
            let value = self.get(key);
            if !value.is_empty() && value != key.default_value() {
                serializer.append_pair(key.as_str(), value);
            }
        }
        serializer.finish()
    }

    /// Target for a history replace: `?<query>`, or `/` when nothing differs
    /// from the defaults.
    #[must_use]
    pub fn location_target(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/".to_owned()
        } else {
            format!("?{query}")
        }
    }

    /// Builds the upstream request for the first page of results.
    ///
    /// Every filter except the free-text query is forwarded; empty values
    /// are dropped by [`AdsQuery`].
    #[must_use]
    pub fn to_ads_query(&self) -> AdsQuery {
        let mut query = AdsQuery::default().with("pageNumber", "1");
        for key in FilterKey::ALL {
            if key != FilterKey::Query {
                query.set(key.as_str(), self.get(key));
            }
        }
        query
    }

    /// Trimmed free-text query, or `None` when blank.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        Some(self.get(FilterKey::Query).trim()).filter(|q| !q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_marketplace_view() {
        let state = FilterState::default();
        assert_eq!(state.get(FilterKey::Status), "ACTIVE");
        assert_eq!(state.get(FilterKey::Verification), "VERIFIED");
        assert_eq!(state.get(FilterKey::PageSize), "9");
        assert_eq!(state.get(FilterKey::City), "");
        assert!(state.is_default());
    }

    #[test]
    fn default_state_serializes_to_nothing() {
        let state = FilterState::default();
        assert_eq!(state.to_query_string(), "");
        assert_eq!(state.location_target(), "/");
    }

    #[test]
    fn only_changed_keys_are_serialized() {
        let mut state = FilterState::default();
        state.set(FilterKey::State, "Lagos");
        assert_eq!(state.to_query_string(), "state=Lagos");
        assert_eq!(state.location_target(), "?state=Lagos");
    }

    #[test]
    fn cleared_defaults_are_not_serialized() {
        let mut state = FilterState::default();
        state.set(FilterKey::Status, "");
        assert_eq!(state.to_query_string(), "");
    }

    #[test]
    fn url_round_trip_reproduces_state() {
        let mut state = FilterState::default();
        state.set(FilterKey::City, "Victoria Island & Ikoyi");
        state.set(FilterKey::Status, "PENDING");
        state.set(FilterKey::Query, "water front");

        let restored = FilterState::resolve(&[], &state.location_target());
        assert_eq!(restored, state);
    }

    #[test]
    fn url_overrides_initial_filters() {
        let state = FilterState::resolve(
            &[(FilterKey::Status, "ACTIVE"), (FilterKey::LandType, "FARMLAND")],
            "?status=PENDING",
        );
        assert_eq!(state.get(FilterKey::Status), "PENDING");
        assert_eq!(state.get(FilterKey::LandType), "FARMLAND");
    }

    #[test]
    fn unknown_url_keys_are_ignored() {
        let state = FilterState::resolve(&[], "merchantCode=M-1&Status=SOLD&pageSize=12");
        assert_eq!(state.get(FilterKey::PageSize), "12");
        assert_eq!(state.get(FilterKey::Status), "ACTIVE");
    }

    #[test]
    fn ads_query_excludes_free_text() {
        let mut state = FilterState::default();
        state.set(FilterKey::Query, "lekki");
        state.set(FilterKey::IsFeatured, "true");
        let query = state.to_ads_query();
        assert_eq!(
            query.pairs(),
            vec![
                ("merchantCode", ""),
                ("status", "ACTIVE"),
                ("verification", "VERIFIED"),
                ("isFeatured", "true"),
                ("pageNumber", "1"),
                ("pageSize", "9"),
            ]
        );
    }

    #[test]
    fn search_text_is_trimmed() {
        let mut state = FilterState::default();
        assert_eq!(state.search_text(), None);
        state.set(FilterKey::Query, "   ");
        assert_eq!(state.search_text(), None);
        state.set(FilterKey::Query, "  Lekki ");
        assert_eq!(state.search_text(), Some("Lekki"));
    }

    #[test]
    fn key_names_round_trip() {
        for key in FilterKey::ALL {
            assert_eq!(FilterKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(FilterKey::from_name("adId"), None);
    }
}
