use axum::Router;

pub mod exports;
pub mod pricing;
pub mod products;
pub mod system;

/// Router for the full service surface.
///
/// The pricing and export endpoints keep their historical top-level paths
/// (`/updatePrices`, `/downloadProductsJSON`, `/downloadProductsCSV`).
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .merge(pricing::router())
        .merge(exports::router())
}
