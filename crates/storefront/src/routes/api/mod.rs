//! JSON API route handlers.
//!
//! Two routes, both thin pass-throughs over the repositories:
//!
//! ```text
//! GET  /api/admin/pageintro - stored page-intro document, or {}
//! POST /api/admin/pageintro - overwrite the document wholesale
//! GET  /api/products        - list product documents by store / category
//! ```

pub mod page_intro;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the API router, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/pageintro",
            get(page_intro::show).post(page_intro::save),
        )
        .route("/products", get(products::list))
}
