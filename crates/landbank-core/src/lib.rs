pub mod app_config;
pub mod catalog;
pub mod config;
pub mod listing;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{
    classify_payload, format_label, format_location_label, format_price_label, format_size_label,
    listing_card, listing_detail, listing_id, map_to_listing_cards, merchant_info,
    normalize_payload, CollectionKey, ListingCard, ListingDetail, MerchantInfo, PayloadShape,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
