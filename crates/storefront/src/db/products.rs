//! Product document repository.
//!
//! Products are opaque JSON documents. The `store_id` and `category` columns
//! are extracted from the document at insert time and used only for
//! filtering; lookups always return the stored document unmodified.

use serde_json::Value as JsonValue;
use sqlx::PgPool;

use copperleaf_core::{Category, ProductId, StoreId};

use super::RepositoryError;

/// Find products belonging to a store.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn find_by_store(
    pool: &PgPool,
    store: &StoreId,
    limit: i64,
    skip: i64,
) -> Result<Vec<JsonValue>, RepositoryError> {
    let docs = sqlx::query_scalar::<_, JsonValue>(
        r"
        SELECT doc FROM products
        WHERE store_id = $1
        ORDER BY created_at DESC, id
        LIMIT $2 OFFSET $3
        ",
    )
    .bind(store)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    Ok(docs)
}

/// Find products in a category.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn find_by_category(
    pool: &PgPool,
    category: &Category,
    limit: i64,
    skip: i64,
) -> Result<Vec<JsonValue>, RepositoryError> {
    let docs = sqlx::query_scalar::<_, JsonValue>(
        r"
        SELECT doc FROM products
        WHERE category = $1
        ORDER BY created_at DESC, id
        LIMIT $2 OFFSET $3
        ",
    )
    .bind(category)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    Ok(docs)
}

/// Generic paginated scan over all products, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn find_many(
    pool: &PgPool,
    limit: i64,
    skip: i64,
) -> Result<Vec<JsonValue>, RepositoryError> {
    let docs = sqlx::query_scalar::<_, JsonValue>(
        r"
        SELECT doc FROM products
        ORDER BY created_at DESC, id
        LIMIT $1 OFFSET $2
        ",
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    Ok(docs)
}

/// Insert a product document.
///
/// The filter columns are extracted from the document's `storeId` and
/// `category` fields; documents without them are still stored and show up in
/// the generic scan.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn insert(
    pool: &PgPool,
    id: ProductId,
    doc: &JsonValue,
) -> Result<(), RepositoryError> {
    let store_id = doc.get("storeId").and_then(JsonValue::as_str);
    let category = doc.get("category").and_then(JsonValue::as_str);

    sqlx::query(
        r"
        INSERT INTO products (id, store_id, category, doc)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO UPDATE SET store_id = $2, category = $3, doc = $4
        ",
    )
    .bind(id)
    .bind(store_id)
    .bind(category)
    .bind(doc)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete all products. Used by the seeder's `--reset` flag.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn delete_all(pool: &PgPool) -> Result<u64, RepositoryError> {
    let result = sqlx::query("DELETE FROM products").execute(pool).await?;
    Ok(result.rows_affected())
}
