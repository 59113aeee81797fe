//! Single-listing and merchant views built from raw ad records.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use super::card::{listing_card, ListingCard};
use super::format::format_label;
use super::value::{first_present_str, is_truthy, non_empty_str, present, str_field};

const NOT_AVAILABLE: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryStat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amenity {
    pub label: &'static str,
    pub available: bool,
}

/// Everything the listing detail view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetail {
    #[serde(flatten)]
    pub card: ListingCard,
    pub description: Option<String>,
    pub media_links: Vec<String>,
    pub summary: Vec<SummaryStat>,
    pub amenities: Vec<Amenity>,
    pub listed_on: String,
}

/// Merchant identity taken from an ad's embedded `business` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantInfo {
    pub merchant_code: String,
    pub merchant_name: String,
    pub trading_name: Option<String>,
    pub business_description: Option<String>,
    pub contact_email: Option<String>,
}

/// Builds the detail view for one raw record.
///
/// Returns `None` when the record has no usable identifier.
#[must_use]
pub fn listing_detail(record: &Value) -> Option<ListingDetail> {
    let card = listing_card(record)?;

    let media_links = record
        .get("media")
        .and_then(Value::as_array)
        .map(|media| {
            media
                .iter()
                .filter_map(|m| m.get("link").and_then(Value::as_str))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let verification = first_present_str(record, &["verification", "verificationStatus"]);
    let or_placeholder = |label: String| {
        if label.is_empty() {
            NOT_AVAILABLE.to_owned()
        } else {
            label
        }
    };

    let status = format_label(str_field(record, "status"));
    let title_document = match non_empty_str(record, "titleDocumentType") {
        Some(kind) => format_label(Some(kind)),
        None if present(record, "hasTitleDocument").is_some_and(is_truthy) => "Provided".to_owned(),
        None => "Pending".to_owned(),
    };

    let summary = vec![
        SummaryStat {
            label: "Status",
            value: if status.is_empty() {
                "Unspecified".to_owned()
            } else {
                status
            },
        },
        SummaryStat {
            label: "Property type",
            value: or_placeholder(format_label(str_field(record, "propertyType"))),
        },
        SummaryStat {
            label: "Land use",
            value: or_placeholder(format_label(str_field(record, "landType"))),
        },
        SummaryStat {
            label: "Verification",
            value: or_placeholder(format_label(verification)),
        },
        SummaryStat {
            label: "Title document",
            value: title_document,
        },
        SummaryStat {
            label: "Ad ID",
            value: str_field(record, "adId").unwrap_or(NOT_AVAILABLE).to_owned(),
        },
    ];

    let flag = |key: &str| present(record, key).is_some_and(is_truthy);
    let amenities = vec![
        Amenity {
            label: "Perimeter fencing",
            available: flag("isFenced"),
        },
        Amenity {
            label: "Title document uploaded",
            available: flag("hasTitleDocument"),
        },
        Amenity {
            label: "Accessible road network",
            available: flag("hasAccessRoad"),
        },
        Amenity {
            label: "Utilities available",
            available: flag("hasUtilities"),
        },
    ];

    Some(ListingDetail {
        card,
        description: non_empty_str(record, "description").map(str::to_owned),
        media_links,
        summary,
        amenities,
        listed_on: format_listed_date(str_field(record, "createdDate")),
    })
}

/// Renders a creation timestamp as `18 October 2026`, or `—` if it cannot
/// be parsed.
#[must_use]
pub fn format_listed_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return NOT_AVAILABLE.to_owned();
    };
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%-d %B %Y").to_string(),
        Err(_) => NOT_AVAILABLE.to_owned(),
    }
}

/// Extracts merchant details from the first record's `business` object.
///
/// `requested_code` fills in the merchant code when the API omits it.
#[must_use]
pub fn merchant_info(records: &[Value], requested_code: &str) -> Option<MerchantInfo> {
    let business = records.first()?.get("business").filter(|b| b.is_object())?;
    Some(MerchantInfo {
        merchant_code: first_present_str(business, &["merchantCode"])
            .unwrap_or(requested_code)
            .to_owned(),
        merchant_name: first_present_str(business, &["merchantName", "tradingName"])
            .unwrap_or("Merchant")
            .to_owned(),
        trading_name: str_field(business, "tradingName").map(str::to_owned),
        business_description: str_field(business, "businessDescription").map(str::to_owned),
        contact_email: str_field(business, "contactEmail").map(str::to_owned),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stat<'a>(detail: &'a ListingDetail, label: &str) -> &'a str {
        detail
            .summary
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value.as_str())
            .unwrap()
    }

    #[test]
    fn detail_summary_uses_placeholders() {
        let detail = listing_detail(&json!({ "id": 3 })).unwrap();
        assert_eq!(stat(&detail, "Status"), "Unspecified");
        assert_eq!(stat(&detail, "Property type"), "—");
        assert_eq!(stat(&detail, "Verification"), "—");
        assert_eq!(stat(&detail, "Title document"), "Pending");
        assert_eq!(stat(&detail, "Ad ID"), "—");
        assert_eq!(detail.listed_on, "—");
        assert!(detail.amenities.iter().all(|a| !a.available));
    }

    #[test]
    fn detail_formats_codes_and_flags() {
        let record = json!({
            "id": 3,
            "adId": "AD-3",
            "status": "UNDER_REVIEW",
            "landType": "MIXED_USE",
            "verification": "VERIFIED",
            "hasTitleDocument": true,
            "isFenced": true,
            "hasUtilities": false,
            "createdDate": "2025-03-15T10:20:30Z",
            "description": "Dry land, good access",
            "media": [{ "link": "a" }, { "id": "no-link" }, { "link": "b" }]
        });
        let detail = listing_detail(&record).unwrap();
        assert_eq!(stat(&detail, "Status"), "Under Review");
        assert_eq!(stat(&detail, "Land use"), "Mixed Use");
        assert_eq!(stat(&detail, "Verification"), "Verified");
        assert_eq!(stat(&detail, "Title document"), "Provided");
        assert_eq!(stat(&detail, "Ad ID"), "AD-3");
        assert_eq!(detail.media_links, vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(detail.listed_on, "15 March 2025");
        assert_eq!(detail.description.as_deref(), Some("Dry land, good access"));
        let fenced = detail.amenities.iter().find(|a| a.label == "Perimeter fencing").unwrap();
        assert!(fenced.available);
    }

    #[test]
    fn title_document_type_wins_over_flag() {
        let record = json!({ "id": 1, "titleDocumentType": "certificate_of_occupancy", "hasTitleDocument": true });
        let detail = listing_detail(&record).unwrap();
        assert_eq!(stat(&detail, "Title document"), "Certificate Of Occupancy");
    }

    #[test]
    fn listed_date_accepts_common_shapes() {
        assert_eq!(format_listed_date(Some("2024-12-01")), "1 December 2024");
        assert_eq!(format_listed_date(Some("2024-12-01T08:00:00.123")), "1 December 2024");
        assert_eq!(format_listed_date(Some("yesterday")), "—");
        assert_eq!(format_listed_date(None), "—");
    }

    #[test]
    fn detail_requires_identifier() {
        assert!(listing_detail(&json!({ "description": "orphan" })).is_none());
    }

    #[test]
    fn merchant_info_from_first_record() {
        let records = vec![
            json!({ "id": 1, "business": { "tradingName": "Green Acres", "contactEmail": "hi@green.ng" } }),
            json!({ "id": 2, "business": { "merchantCode": "OTHER", "merchantName": "Other" } }),
        ];
        let info = merchant_info(&records, "M-77").unwrap();
        assert_eq!(info.merchant_code, "M-77");
        assert_eq!(info.merchant_name, "Green Acres");
        assert_eq!(info.contact_email.as_deref(), Some("hi@green.ng"));
    }

    #[test]
    fn merchant_info_defaults_name() {
        let records = vec![json!({ "business": { "merchantCode": "M-1" } })];
        let info = merchant_info(&records, "ignored").unwrap();
        assert_eq!(info.merchant_code, "M-1");
        assert_eq!(info.merchant_name, "Merchant");
    }

    #[test]
    fn merchant_info_absent_without_business() {
        assert!(merchant_info(&[], "M-1").is_none());
        assert!(merchant_info(&[json!({ "id": 1 })], "M-1").is_none());
    }
}
