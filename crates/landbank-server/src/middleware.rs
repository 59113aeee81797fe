use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID stored as a request extension for handlers to echo in `meta`.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Tags each request with an ID and echoes it on the response.
///
/// A non-blank incoming `x-request-id` is reused; otherwise a `UUIDv4` is
/// generated.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned);

    tracing::debug!(request_id = %id, method = %req.method(), path = req.uri().path(), "request");
    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), val);
    }

    res
}
