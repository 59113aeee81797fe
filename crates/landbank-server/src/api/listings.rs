use axum::{
    extract::{Path, State},
    Extension, Json,
};
use landbank_client::AdsQuery;
use landbank_core::{listing_detail, normalize_payload, ListingDetail};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn get_listing(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(ad_id): Path<String>,
) -> Result<Json<ApiResponse<ListingDetail>>, ApiError> {
    let envelope = state
        .source
        .fetch(&AdsQuery::for_ad(&ad_id))
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, %ad_id, "listing upstream request failed");
            ApiError::new(req_id.0.clone(), "upstream_error", e.user_message())
        })?;

    if let Some(message) = envelope.failure_message() {
        tracing::warn!(%ad_id, %message, "listing upstream rejected the request");
        return Err(ApiError::new(req_id.0, "upstream_error", message));
    }

    let detail = normalize_payload(envelope.response_data.as_ref())
        .first()
        .and_then(listing_detail)
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "not_found",
                format!("listing {ad_id} not found"),
            )
        })?;

    Ok(Json(ApiResponse {
        data: detail,
        meta: ResponseMeta::new(req_id.0),
    }))
}
