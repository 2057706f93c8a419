use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::context::RequestContext;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag each request with an id and run it inside a span carrying that id.
///
/// A well-formed UUID in `x-request-id` is reused, otherwise a new UUIDv7 is
/// minted. The id is echoed on the response.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = extract_request_id(req.headers()).unwrap_or_else(Uuid::now_v7);
    req.extensions_mut().insert(RequestContext::new(request_id));

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        info!(status = response.status().as_u16(), "request completed");
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

fn extract_request_id(headers: &HeaderMap) -> Option<Uuid> {
    let header = headers.get(REQUEST_ID_HEADER)?;
    let header = header.to_str().ok()?;
    header.trim().parse().ok()
}
