//! Home page route handler.
//!
//! The page-intro banner content is an admin-managed document; missing or
//! partial documents fall back to built-in copy so the page always renders.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use serde_json::Value as JsonValue;
use tracing::instrument;

use crate::db::{products as product_repo, settings};
use crate::error::Result;
use crate::filters;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// How many recent products the home page shows.
const FEATURED_COUNT: i64 = 8;

/// Page-intro banner display data.
#[derive(Clone)]
pub struct IntroView {
    pub eyebrow: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub button_text: Option<String>,
    pub button_url: Option<String>,
    pub image_url: Option<String>,
}

impl Default for IntroView {
    fn default() -> Self {
        Self {
            eyebrow: None,
            title: "Goods made to last".to_string(),
            subtitle: Some(
                "Small-batch homeware from independent makers across the Northwest.".to_string(),
            ),
            button_text: Some("Browse the collection".to_string()),
            button_url: Some("/products".to_string()),
            image_url: None,
        }
    }
}

impl IntroView {
    /// Build the banner from the stored document, falling back to defaults
    /// field by field.
    #[must_use]
    pub fn from_doc(doc: Option<&JsonValue>) -> Self {
        let Some(doc) = doc else {
            return Self::default();
        };

        let text = |key: &str| doc.get(key).and_then(JsonValue::as_str).map(String::from);
        let fallback = Self::default();

        Self {
            eyebrow: text("eyebrow"),
            title: text("title").unwrap_or(fallback.title),
            subtitle: text("subtitle").or(fallback.subtitle),
            button_text: text("buttonText").or(fallback.button_text),
            button_url: text("buttonUrl").or(fallback.button_url),
            image_url: text("image"),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub intro: IntroView,
    pub products: Vec<ProductView>,
}

/// Display the home page.
///
/// # Errors
///
/// Returns an error if a database query fails.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let intro_doc = settings::get_page_intro(state.pool()).await?;
    let intro = IntroView::from_doc(intro_doc.as_ref());

    let products = product_repo::find_many(state.pool(), FEATURED_COUNT, 0)
        .await?
        .iter()
        .map(ProductView::from_doc)
        .collect();

    Ok(HomeTemplate { intro, products })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intro_defaults_when_absent() {
        let intro = IntroView::from_doc(None);
        assert_eq!(intro.title, "Goods made to last");
        assert!(intro.button_url.is_some());
    }

    #[test]
    fn test_intro_from_document() {
        let doc = json!({
            "eyebrow": "New for autumn",
            "title": "The Hearthside Collection",
            "subtitle": "Wool, wax, and cast iron.",
            "buttonText": "Shop now",
            "buttonUrl": "/products?category=homeware",
        });

        let intro = IntroView::from_doc(Some(&doc));
        assert_eq!(intro.eyebrow.as_deref(), Some("New for autumn"));
        assert_eq!(intro.title, "The Hearthside Collection");
        assert_eq!(intro.button_url.as_deref(), Some("/products?category=homeware"));
    }

    #[test]
    fn test_intro_partial_document_falls_back() {
        let intro = IntroView::from_doc(Some(&json!({"title": "Just a title"})));
        assert_eq!(intro.title, "Just a title");
        // Unspecified button falls back to the default call to action.
        assert_eq!(intro.button_url.as_deref(), Some("/products"));
        assert!(intro.eyebrow.is_none());
    }

    #[test]
    fn test_intro_non_string_fields_ignored() {
        let intro = IntroView::from_doc(Some(&json!({"title": 42})));
        assert_eq!(intro.title, "Goods made to last");
    }
}
