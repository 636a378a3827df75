//! Product listing page.
//!
//! Renders the same lookups the JSON API exposes, as an HTML page with
//! optional store / category filters.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::instrument;

use copperleaf_core::{Category, Price, StoreId};

use crate::db::products as product_repo;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Page size for the HTML listing.
const PAGE_SIZE: i64 = 48;

/// Product display data for templates, projected out of an opaque document.
#[derive(Clone)]
pub struct ProductView {
    pub title: String,
    pub store: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
}

impl ProductView {
    /// Project display fields out of a product document.
    ///
    /// Documents are free-form; anything missing simply isn't shown.
    #[must_use]
    pub fn from_doc(doc: &JsonValue) -> Self {
        let text = |key: &str| doc.get(key).and_then(JsonValue::as_str).map(String::from);

        let price = doc
            .get("price")
            .and_then(|v| serde_json::from_value::<Price>(v.clone()).ok())
            .map(|p| p.display());

        Self {
            title: text("title").unwrap_or_else(|| "Untitled product".to_string()),
            store: text("storeId"),
            category: text("category"),
            price,
            image_url: text("image"),
        }
    }
}

/// Listing filter query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub store: Option<String>,
    pub category: Option<String>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
    pub store: Option<String>,
    pub category: Option<String>,
}

/// Display the product listing page.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<impl IntoResponse> {
    let store = query.store.filter(|s| !s.is_empty());
    let category = query.category.filter(|s| !s.is_empty());

    let docs = if let Some(store) = &store {
        product_repo::find_by_store(state.pool(), &StoreId::from(store.as_str()), PAGE_SIZE, 0)
            .await?
    } else if let Some(category) = &category {
        product_repo::find_by_category(
            state.pool(),
            &Category::from(category.as_str()),
            PAGE_SIZE,
            0,
        )
        .await?
    } else {
        product_repo::find_many(state.pool(), PAGE_SIZE, 0).await?
    };

    let products = docs.iter().map(ProductView::from_doc).collect();

    Ok(ProductsIndexTemplate {
        products,
        store,
        category,
    })
}
