//! Category, product and search pages.
//!
//! These are placeholders until the catalog pages are built; they only
//! validate the path and echo the id.

use axum::{extract::Path, response::IntoResponse};

use storefront_core::{GroupId, ProductId, split_slugged_id};

use crate::app::errors;

/// `GET /kategorija/{id}-{slug}`
pub async fn category(Path(segment): Path<String>) -> axum::response::Response {
    match split_slugged_id::<GroupId>(&segment) {
        Ok((id, _slug)) => format!("kategorija: {id}").into_response(),
        Err(_) => errors::not_found(),
    }
}

/// `GET /proizvod/{id}-{slug}`
pub async fn product(Path(segment): Path<String>) -> axum::response::Response {
    match split_slugged_id::<ProductId>(&segment) {
        Ok((id, _slug)) => format!("proizvod: {id}").into_response(),
        Err(_) => errors::not_found(),
    }
}

pub async fn search() -> &'static str {
    "search"
}
