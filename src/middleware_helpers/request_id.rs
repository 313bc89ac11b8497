use crate::tracing::{scope_request_id, RequestId};
use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

/// Header carrying the request id in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied id that is reused as-is
pub const MAX_REQUEST_ID_LEN: usize = 128;

/// Picks the id for this request: the caller's `x-request-id` when it is a
/// short run of visible ASCII, otherwise a fresh UUID.
pub fn resolve_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| is_acceptable(id))
        .map(RequestId::new)
        .unwrap_or_default()
}

fn is_acceptable(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN && id.bytes().all(|b| b.is_ascii_graphic())
}

/// Tags the request with its id, runs the rest of the stack with the id in
/// task-local scope for the response envelopes, and echoes it on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());
    let header_name = HeaderName::from_static(REQUEST_ID_HEADER);

    let header_value = HeaderValue::from_str(request_id.as_str()).ok();
    if let Some(value) = &header_value {
        request.headers_mut().insert(header_name.clone(), value.clone());
    }
    request.extensions_mut().insert(request_id.clone());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = scope_request_id(request_id, next.run(request))
        .instrument(span)
        .await;

    if let Some(value) = header_value {
        response.headers_mut().insert(header_name, value);
    }
    response
}
