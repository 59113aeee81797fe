use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use landbank_client::AdsQuery;
use landbank_core::{map_to_listing_cards, normalize_payload, ListingCard};
use serde::Serialize;

use super::AppState;

pub(super) const UNABLE_TO_LOAD_LISTINGS: &str = "Unable to load listings.";

/// Defaults for the public marketplace view; any caller value replaces them.
const PUBLIC_DEFAULTS: [(&str, &str); 4] = [
    ("pageNumber", "1"),
    ("pageSize", "9"),
    ("status", "ACTIVE"),
    ("verification", "VERIFIED"),
];

#[derive(Debug, Serialize)]
struct ListingsBody {
    listings: Vec<ListingCard>,
}

#[derive(Debug, Serialize)]
struct ProxyErrorBody {
    error: String,
}

/// Builds the upstream query from caller parameters.
///
/// Only the ads endpoint's own filters pass through. Empty values and
/// unknown names, `merchantCode` included, are dropped.
fn public_query(params: &[(String, String)]) -> AdsQuery {
    let mut query = PUBLIC_DEFAULTS
        .into_iter()
        .fold(AdsQuery::default(), |query, (name, value)| query.with(name, value));
    for (name, value) in params {
        if value.is_empty() {
            continue;
        }
        if !query.set(name, value) {
            tracing::debug!(param = %name, "ignoring unsupported public-ads parameter");
        }
    }
    query
}

fn bad_gateway(message: String) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(ProxyErrorBody { error: message }),
    )
        .into_response()
}

pub(super) async fn list_public_ads(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let query = public_query(&params);

    let envelope = match state.source.fetch(&query).await {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!(error = %e, "public ads upstream request failed");
            return bad_gateway(e.user_message().to_owned());
        }
    };

    if !envelope.request_successful {
        let message = envelope
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| UNABLE_TO_LOAD_LISTINGS.to_owned());
        tracing::warn!(%message, "public ads upstream rejected the request");
        return bad_gateway(message);
    }

    let listings = map_to_listing_cards(normalize_payload(envelope.response_data.as_ref()));
    Json(ListingsBody { listings }).into_response()
}
