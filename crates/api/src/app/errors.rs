use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use uuid::Uuid;

use storefront_infra::CatalogStoreError;

/// Store failures become a 500; details go to the log, not the client.
pub fn store_error_to_response(err: CatalogStoreError, request_id: Uuid) -> axum::response::Response {
    tracing::error!(error = %err, operation = err.operation(), "catalog read failed");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({
            "error": "data_access",
            "message": "catalog is temporarily unavailable",
            "request_id": request_id.to_string(),
        })),
    )
        .into_response()
}

pub fn not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "not found")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
