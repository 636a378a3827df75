//! Settings database operations.
//!
//! Admin-managed JSON documents stored wholesale under a well-known key.
//! The page-intro banner shown on public pages is the only document today.

use serde_json::Value as JsonValue;
use sqlx::PgPool;

use super::RepositoryError;

/// Settings key under which the page-intro document is stored.
pub const PAGE_INTRO_KEY: &str = "page_intro";

/// Name of the persistence backend, reported back to the admin API caller.
pub const PROVIDER_NAME: &str = "postgres";

/// Outcome of a settings save, as reported by the provider.
#[derive(Debug, Clone, Copy)]
pub struct SaveReceipt {
    /// Whether the provider acknowledged the write.
    pub ok: bool,
    /// Name of the backend that performed the write.
    pub provider: &'static str,
}

/// Get a setting value by key.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn get_setting(
    pool: &PgPool,
    key: &str,
) -> Result<Option<JsonValue>, RepositoryError> {
    let result = sqlx::query_scalar::<_, JsonValue>(
        r"
        SELECT value FROM settings
        WHERE key = $1
        ",
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(result)
}

/// Set a setting value, overwriting any previous document wholesale.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn set_setting(
    pool: &PgPool,
    key: &str,
    value: &JsonValue,
) -> Result<SaveReceipt, RepositoryError> {
    let result = sqlx::query(
        r"
        INSERT INTO settings (key, value)
        VALUES ($1, $2)
        ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()
        ",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(SaveReceipt {
        ok: result.rows_affected() > 0,
        provider: PROVIDER_NAME,
    })
}

/// Get the page-intro document, if one has been saved.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn get_page_intro(pool: &PgPool) -> Result<Option<JsonValue>, RepositoryError> {
    get_setting(pool, PAGE_INTRO_KEY).await
}

/// Overwrite the page-intro document.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn save_page_intro(
    pool: &PgPool,
    value: &JsonValue,
) -> Result<SaveReceipt, RepositoryError> {
    set_setting(pool, PAGE_INTRO_KEY, value).await
}
