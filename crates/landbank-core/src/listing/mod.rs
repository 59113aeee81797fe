//! Normalization of LandBank ad payloads into display-ready listings.
//!
//! The upstream API is not consistent about the shape of `responseData`:
//! it may be a bare array, an object wrapping the array under one of a few
//! collection keys, or a single ad object. Individual ads are equally loose,
//! so records are kept as [`serde_json::Value`] and every accessor falls back
//! to a display default instead of failing.

mod card;
mod detail;
mod format;
mod payload;
mod value;

pub use card::{listing_card, listing_id, map_to_listing_cards, ListingCard};
pub use detail::{
    format_listed_date, listing_detail, merchant_info, Amenity, ListingDetail, MerchantInfo,
    SummaryStat,
};
pub use format::{
    format_label, format_location_label, format_price_label, format_size_label, DEFAULT_CURRENCY,
    LOCATION_UNAVAILABLE, PRICE_ON_REQUEST, SIZE_UNAVAILABLE,
};
pub use payload::{classify_payload, normalize_payload, CollectionKey, PayloadShape};
