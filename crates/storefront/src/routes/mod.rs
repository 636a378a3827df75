//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (intro banner + recent products)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing page
//!
//! # Content pages
//! GET  /about                  - About page (markdown)
//! GET  /faq                    - FAQ page (markdown)
//! GET  /shipping               - Shipping & Returns page (markdown)
//!
//! # JSON API
//! GET  /api/admin/pageintro    - Read the page-intro document
//! POST /api/admin/pageintro    - Overwrite the page-intro document
//! GET  /api/products           - List product documents
//!                                (?storeId=&category=&limit=&skip=)
//! ```

pub mod api;
pub mod home;
pub mod pages;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/", get(products::index))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Content pages
        .merge(pages::router())
        // JSON API
        .nest("/api", api::router())
}
