use thiserror::Error;

use crate::types::UNABLE_TO_FETCH_LISTINGS;

/// Errors returned by the LandBank API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with `"requestSuccessful": false`.
    #[error("LandBank API error: {0}")]
    Api(String),

    /// A non-2xx response whose body is not a LandBank envelope.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// A 2xx response whose body is not a LandBank envelope.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Shown in place of transport failures, whose own text carries URLs and
/// parser output.
pub const NETWORK_ERROR: &str = "Network error";

impl ClientError {
    /// Text fit for end users.
    ///
    /// API rejections keep the server message; every transport-level
    /// failure collapses to [`NETWORK_ERROR`]. Log the error itself for
    /// the detail.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Api(message) if !message.trim().is_empty() => message,
            Self::Api(_) => UNABLE_TO_FETCH_LISTINGS,
            Self::Http(_)
            | Self::UnexpectedStatus { .. }
            | Self::Deserialize { .. }
            | Self::InvalidBaseUrl { .. } => NETWORK_ERROR,
        }
    }
}
