use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::format::{format_location_label, format_price_label, format_size_label};
use super::value::{first_present_str, is_truthy, present, str_field, value_to_string};

pub const UNTITLED_LISTING: &str = "Untitled listing";

/// Number of title characters used to synthesize a fallback id.
const FALLBACK_ID_TITLE_CHARS: usize = 20;

/// A listing ready for display. All labels are pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub size: String,
    pub location: String,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<String>,
}

/// Derives the identifier for a raw ad record.
///
/// Resolution order: a non-null `id` (stringified), then a non-blank
/// `adId`, then `temp-<slug>` built from the first 20 title characters.
/// Returns `None` when the record cannot be identified; such records are
/// never shown.
#[must_use]
pub fn listing_id(record: &Value) -> Option<String> {
    if let Some(id) = present(record, "id") {
        let id = value_to_string(id);
        return (!id.is_empty()).then_some(id);
    }

    if let Some(ad_id) = str_field(record, "adId").filter(|s| !s.trim().is_empty()) {
        return Some(ad_id.to_owned());
    }

    let title = str_field(record, "title").filter(|s| !s.is_empty())?;
    let id = fallback_id(title);
    tracing::warn!(%id, title, "ad record has no id; using title-derived fallback");
    Some(id)
}

fn fallback_id(title: &str) -> String {
    let head: String = title.chars().take(FALLBACK_ID_TITLE_CHARS).collect();
    let mut slug = String::with_capacity(head.len());
    let mut in_whitespace = false;
    for ch in head.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }
    format!("temp-{}", slug.to_lowercase())
}

/// Maps one raw ad record to a [`ListingCard`], or `None` if it has no
/// usable identifier.
#[must_use]
pub fn listing_card(record: &Value) -> Option<ListingCard> {
    let id = listing_id(record)?;

    let title = match present(record, "title") {
        Some(Value::String(title)) => title.clone(),
        _ => UNTITLED_LISTING.to_owned(),
    };

    let image_url = record
        .get("media")
        .and_then(Value::as_array)
        .and_then(|media| media.first())
        .and_then(|m| m.get("link"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    let business = record.get("business").unwrap_or(&Value::Null);
    let merchant_code = str_field(business, "merchantCode").map(str::to_owned);
    let merchant_name =
        first_present_str(business, &["merchantName", "tradingName"]).map(str::to_owned);

    let featured = ["featured", "isFeatured"]
        .iter()
        .find_map(|key| present(record, key))
        .is_some_and(is_truthy);

    Some(ListingCard {
        id,
        title,
        price: format_price_label(record.get("price"), record.get("currency")),
        size: format_size_label(record.get("landSize"), record.get("landSizeUnit")),
        location: format_location_label(record),
        featured,
        image_url,
        merchant_code,
        merchant_name,
        status: str_field(record, "status").map(str::to_owned),
        property_type: str_field(record, "propertyType").map(str::to_owned),
        land_type: str_field(record, "landType").map(str::to_owned),
        verification: first_present_str(record, &["verification", "verificationStatus"])
            .map(str::to_owned),
    })
}

/// Maps raw ad records to cards, dropping records without an identifier.
///
/// Output order follows input order.
#[must_use]
pub fn map_to_listing_cards(records: &[Value]) -> Vec<ListingCard> {
    let cards: Vec<ListingCard> = records.iter().filter_map(listing_card).collect();
    if cards.len() < records.len() {
        tracing::debug!(
            records = records.len(),
            cards = cards.len(),
            "dropped ad records without an identifier"
        );
    }
    cards
}
