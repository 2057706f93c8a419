use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::Local;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::RequestContext;

/// Landing page: visible category groups, active covers, date context.
pub async fn index(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<RequestContext>,
) -> axum::response::Response {
    let page = match services.landing_page().await {
        Ok(page) => page,
        Err(e) => return errors::store_error_to_response(e, ctx.request_id()),
    };

    tracing::debug!(
        groups = page.groups.len(),
        covers = page.covers.len(),
        "landing page loaded"
    );

    let today = Local::now().date_naive();
    (StatusCode::OK, Json(dto::landing_page_to_response(page, today))).into_response()
}
