use axum::{
    Router,
    routing::{get, post},
};

pub mod catalog;
pub mod home;
pub mod shop;
pub mod system;

/// Router for all storefront pages.
pub fn router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/kategorija/:segment", get(catalog::category))
        .route("/proizvod/:segment", get(catalog::product))
        .route("/search", get(catalog::search))
        .route("/contact", post(shop::contact))
        .route("/cart", get(shop::cart).post(shop::cart))
        .route("/checkout", get(shop::checkout).post(shop::checkout))
}
