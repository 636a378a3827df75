//! Product listing API.
//!
//! Dispatches over three pass-through lookups: by store, by category, or a
//! generic paginated scan. `storeId` wins when both filters are present.
//! `limit` is clamped to at most 500; non-numeric values fall back to the
//! default of 100 so sloppy clients degrade instead of erroring.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::instrument;

use copperleaf_core::{Category, StoreId};

use crate::db::products as product_repo;
use crate::error::Result;
use crate::state::AppState;

/// Default number of documents returned when no limit is given.
const DEFAULT_LIMIT: i64 = 100;

/// Hard ceiling on a single response.
const MAX_LIMIT: i64 = 500;

/// Query parameters for the product listing API.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub store_id: Option<String>,
    pub category: Option<String>,
    /// Kept as raw text: a non-numeric value falls back to the default
    /// instead of rejecting the request.
    pub limit: Option<String>,
    pub skip: Option<String>,
}

/// Which lookup a query resolves to.
#[derive(Debug, PartialEq, Eq)]
enum ProductLookup {
    ByStore(StoreId),
    ByCategory(Category),
    Scan,
}

/// Resolve the lookup branch for a query. `storeId` takes precedence over
/// `category`; empty strings count as absent.
fn resolve_lookup(query: &ProductListQuery) -> ProductLookup {
    if let Some(store) = query.store_id.as_deref().filter(|s| !s.is_empty()) {
        return ProductLookup::ByStore(StoreId::from(store));
    }
    if let Some(category) = query.category.as_deref().filter(|s| !s.is_empty()) {
        return ProductLookup::ByCategory(Category::from(category));
    }
    ProductLookup::Scan
}

/// Parse and clamp the `limit` parameter.
fn effective_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .map_or(DEFAULT_LIMIT, |n| n.min(MAX_LIMIT))
}

/// Parse the `skip` parameter; anything unusable means offset 0.
fn effective_skip(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 0)
        .unwrap_or(0)
}

/// List product documents.
///
/// # Errors
///
/// Returns a generic 500 `{"error": ...}` if the lookup fails.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<JsonValue>>> {
    let limit = effective_limit(query.limit.as_deref());
    let skip = effective_skip(query.skip.as_deref());

    let docs = match resolve_lookup(&query) {
        ProductLookup::ByStore(store) => {
            product_repo::find_by_store(state.pool(), &store, limit, skip).await?
        }
        ProductLookup::ByCategory(category) => {
            product_repo::find_by_category(state.pool(), &category, limit, skip).await?
        }
        ProductLookup::Scan => product_repo::find_many(state.pool(), limit, skip).await?,
    };

    Ok(Json(docs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(
        store_id: Option<&str>,
        category: Option<&str>,
        limit: Option<&str>,
        skip: Option<&str>,
    ) -> ProductListQuery {
        ProductListQuery {
            store_id: store_id.map(String::from),
            category: category.map(String::from),
            limit: limit.map(String::from),
            skip: skip.map(String::from),
        }
    }

    #[test]
    fn test_no_parameters_scans_with_defaults() {
        let q = ProductListQuery::default();
        assert_eq!(resolve_lookup(&q), ProductLookup::Scan);
        assert_eq!(effective_limit(q.limit.as_deref()), 100);
        assert_eq!(effective_skip(q.skip.as_deref()), 0);
    }

    #[test]
    fn test_limit_clamped_to_max() {
        assert_eq!(effective_limit(Some("501")), 500);
        assert_eq!(effective_limit(Some("10000")), 500);
        assert_eq!(effective_limit(Some("500")), 500);
        assert_eq!(effective_limit(Some("42")), 42);
    }

    #[test]
    fn test_non_numeric_limit_falls_back_to_default() {
        assert_eq!(effective_limit(Some("lots")), 100);
        assert_eq!(effective_limit(Some("")), 100);
        assert_eq!(effective_limit(Some("12.5")), 100);
    }

    #[test]
    fn test_non_positive_limit_falls_back_to_default() {
        assert_eq!(effective_limit(Some("0")), 100);
        assert_eq!(effective_limit(Some("-5")), 100);
    }

    #[test]
    fn test_skip_parsing() {
        assert_eq!(effective_skip(Some("25")), 25);
        assert_eq!(effective_skip(Some("soon")), 0);
        assert_eq!(effective_skip(Some("-1")), 0);
        assert_eq!(effective_skip(None), 0);
    }

    #[test]
    fn test_store_takes_precedence_over_category() {
        let q = query(Some("copperleaf-north"), Some("candles"), None, None);
        assert_eq!(
            resolve_lookup(&q),
            ProductLookup::ByStore(StoreId::from("copperleaf-north"))
        );
    }

    #[test]
    fn test_category_used_when_store_absent() {
        let q = query(None, Some("candles"), None, None);
        assert_eq!(
            resolve_lookup(&q),
            ProductLookup::ByCategory(Category::from("candles"))
        );
    }

    #[test]
    fn test_empty_store_counts_as_absent() {
        let q = query(Some(""), Some("candles"), None, None);
        assert_eq!(
            resolve_lookup(&q),
            ProductLookup::ByCategory(Category::from("candles"))
        );

        let q = query(Some(""), Some(""), None, None);
        assert_eq!(resolve_lookup(&q), ProductLookup::Scan);
    }
}
