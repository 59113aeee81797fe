//! HTTP client for the LandBank listings API.

pub mod client;
pub mod error;
pub mod types;

pub use client::LandbankClient;
pub use error::{ClientError, NETWORK_ERROR};
pub use types::{AdsQuery, LandbankResponse, UNABLE_TO_FETCH_LISTINGS};
