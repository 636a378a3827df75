//! Page-intro document API.
//!
//! The document is free-form JSON owned by the admin UI; it is stored and
//! returned wholesale. A GET with nothing saved yet returns `{}` so clients
//! never have to special-case absence.

use axum::{Json, body::Bytes, extract::State};
use serde::Serialize;
use serde_json::{Value as JsonValue, json};
use tracing::instrument;

use crate::db::settings;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response for a successful page-intro save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub provider: &'static str,
}

/// Return the stored page-intro document, or an empty object.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<JsonValue>> {
    let doc = settings::get_page_intro(state.pool()).await?;
    Ok(Json(doc.unwrap_or_else(|| json!({}))))
}

/// Overwrite the page-intro document wholesale.
///
/// The body is parsed by hand rather than through the `Json` extractor so a
/// malformed body maps to our 400 `{"error": ...}` shape.
///
/// # Errors
///
/// Returns 400 for a malformed body, 500 if the save fails or the provider
/// does not acknowledge the write.
#[instrument(skip(state, body))]
pub async fn save(State(state): State<AppState>, body: Bytes) -> Result<Json<SaveResponse>> {
    let doc: JsonValue = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {e}")))?;

    let receipt = settings::save_page_intro(state.pool(), &doc).await?;

    if receipt.ok {
        Ok(Json(SaveResponse {
            success: true,
            provider: receipt.provider,
        }))
    } else {
        Err(AppError::Internal(
            "page intro save was not acknowledged".to_string(),
        ))
    }
}
