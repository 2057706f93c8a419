//! HTTP API: storefront routes, request context, and response mapping.

pub mod app;
pub mod context;
pub mod middleware;
