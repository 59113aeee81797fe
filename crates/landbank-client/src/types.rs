//! LandBank API request and response types.
//!
//! Every endpoint wraps its payload in the same envelope; [`LandbankResponse`]
//! captures it generically. The payload of the ads endpoint is left as
//! [`serde_json::Value`] because its shape varies (see
//! [`landbank_core::normalize_payload`]).

use serde::{Deserialize, Serialize};

/// Shown when the API reports failure without a message.
pub const UNABLE_TO_FETCH_LISTINGS: &str = "Unable to fetch listings.";

/// Envelope for all LandBank API responses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandbankResponse<T> {
    #[serde(default)]
    pub request_successful: bool,
    #[serde(default)]
    pub response_data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub response_code: Option<String>,
}

impl<T> LandbankResponse<T> {
    /// A successful envelope carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            request_successful: true,
            response_data: Some(data),
            message: None,
            response_code: Some("00".to_owned()),
        }
    }

    /// A failed envelope with an optional server message.
    pub fn failure(message: Option<&str>) -> Self {
        Self {
            request_successful: false,
            response_data: None,
            message: message.map(str::to_owned),
            response_code: None,
        }
    }

    /// `None` when the request succeeded; otherwise the server message, or
    /// [`UNABLE_TO_FETCH_LISTINGS`] when it sent none.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        if self.request_successful {
            return None;
        }
        Some(
            self.message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(UNABLE_TO_FETCH_LISTINGS)
                .to_owned(),
        )
    }
}

/// Query parameters accepted by the ads listing endpoint.
///
/// `merchant_code` is always sent, even when empty; every other parameter
/// is sent only when set to a non-empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdsQuery {
    pub merchant_code: String,
    pub ad_id: Option<String>,
    pub property_type: Option<String>,
    pub land_type: Option<String>,
    pub land_size_unit: Option<String>,
    pub status: Option<String>,
    pub verification: Option<String>,
    pub is_featured: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub page_number: Option<String>,
    pub page_size: Option<String>,
}

impl AdsQuery {
    /// Query for a single ad by its `adId`.
    #[must_use]
    pub fn for_ad(ad_id: &str) -> Self {
        Self::default().with("adId", ad_id)
    }

    /// Query for one page of a merchant's ads.
    #[must_use]
    pub fn for_merchant(merchant_code: &str, page_size: u32) -> Self {
        Self {
            merchant_code: merchant_code.to_owned(),
            ..Self::default()
        }
        .with("pageNumber", "1")
        .with("pageSize", &page_size.to_string())
    }

    /// Builder form of [`AdsQuery::set`]. Unknown names are ignored.
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Sets an optional parameter by its wire name. Empty values clear it.
    ///
    /// Returns `false` if `name` is not a parameter of this endpoint.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        let Some(slot) = self.slot_mut(name) else {
            return false;
        };
        *slot = (!value.is_empty()).then(|| value.to_owned());
        true
    }

    /// Returns the value of an optional parameter by wire name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs()
            .into_iter()
            .skip(1)
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v)
    }

    /// Parameters to send, in request order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let optional = [
            ("adId", &self.ad_id),
            ("propertyType", &self.property_type),
            ("landType", &self.land_type),
            ("landSizeUnit", &self.land_size_unit),
            ("status", &self.status),
            ("verification", &self.verification),
            ("isFeatured", &self.is_featured),
            ("city", &self.city),
            ("state", &self.state),
            ("pageNumber", &self.page_number),
            ("pageSize", &self.page_size),
        ];

        let mut pairs = vec![("merchantCode", self.merchant_code.as_str())];
        pairs.extend(optional.into_iter().filter_map(|(name, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (name, v))
        }));
        pairs
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        let slot = match name {
            "adId" => &mut self.ad_id,
            "propertyType" => &mut self.property_type,
            "landType" => &mut self.land_type,
            "landSizeUnit" => &mut self.land_size_unit,
            "status" => &mut self.status,
            "verification" => &mut self.verification,
            "isFeatured" => &mut self.is_featured,
            "city" => &mut self.city,
            "state" => &mut self.state,
            "pageNumber" => &mut self.page_number,
            "pageSize" => &mut self.page_size,
            _ => return None,
        };
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merchant_code_is_always_sent() {
        let query = AdsQuery::default();
        let pairs = query.pairs();
        assert_eq!(pairs, vec![("merchantCode", "")]);
    }

    #[test]
    fn empty_values_are_omitted() {
        let mut query = AdsQuery::default().with("status", "ACTIVE").with("city", "");
        query.state = Some(String::new());
        assert_eq!(
            query.pairs(),
            vec![("merchantCode", ""), ("status", "ACTIVE")]
        );
    }

    #[test]
    fn set_rejects_unknown_names() {
        let mut query = AdsQuery::default();
        assert!(!query.set("query", "lekki"));
        assert!(!query.set("merchantCode", "M-1"));
        assert!(query.set("landType", "RESIDENTIAL"));
        assert_eq!(query.get("landType"), Some("RESIDENTIAL"));
    }

    #[test]
    fn every_param_name_is_settable() {
        let mut query = AdsQuery::default();
        let names = [
            "adId",
            "propertyType",
            "landType",
            "landSizeUnit",
            "status",
            "verification",
            "isFeatured",
            "city",
            "state",
            "pageNumber",
            "pageSize",
        ];
        for name in names {
            assert!(query.set(name, "x"), "{name} should be settable");
        }
        assert_eq!(query.pairs().len(), names.len() + 1);
    }

    #[test]
    fn merchant_query_sets_paging() {
        let query = AdsQuery::for_merchant("M-9", 100);
        assert_eq!(
            query.pairs(),
            vec![
                ("merchantCode", "M-9"),
                ("pageNumber", "1"),
                ("pageSize", "100")
            ]
        );
    }

    #[test]
    fn failure_message_prefers_server_text() {
        let envelope: LandbankResponse<serde_json::Value> =
            LandbankResponse::failure(Some("Merchant suspended"));
        assert_eq!(envelope.failure_message().as_deref(), Some("Merchant suspended"));
    }

    #[test]
    fn failure_message_falls_back() {
        let envelope: LandbankResponse<serde_json::Value> = LandbankResponse::failure(Some("  "));
        assert_eq!(
            envelope.failure_message().as_deref(),
            Some(UNABLE_TO_FETCH_LISTINGS)
        );
        let ok = LandbankResponse::success(serde_json::json!([]));
        assert!(ok.failure_message().is_none());
    }

    #[test]
    fn envelope_deserializes_with_missing_and_null_fields() {
        let envelope: LandbankResponse<serde_json::Value> = serde_json::from_value(
            serde_json::json!({ "requestSuccessful": true, "responseData": null, "message": null }),
        )
        .unwrap();
        assert!(envelope.request_successful);
        assert!(envelope.response_data.is_none());
        assert!(envelope.message.is_none());
        assert!(envelope.response_code.is_none());
    }
}
