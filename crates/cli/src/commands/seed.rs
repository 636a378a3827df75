//! Seed the database with demo products and a page-intro document.
//!
//! The fixture is YAML: a `page_intro` document and a list of `products`,
//! each an arbitrary document in the same shape the API serves. Product
//! `storeId` / `category` fields become the filter columns on insert.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::info;

use copperleaf_core::ProductId;
use copperleaf_storefront::db::{self, products, settings};

use super::migrate::database_url;

/// Parsed seed fixture.
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// Page-intro document saved under the well-known settings key.
    #[serde(default)]
    pub page_intro: Option<JsonValue>,
    /// Product documents to insert.
    #[serde(default)]
    pub products: Vec<JsonValue>,
}

/// Seed the database from a YAML fixture.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML seed file
/// * `reset` - If true, delete existing products first
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if a database
/// operation fails.
pub async fn run(file_path: &str, reset: bool) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading seed fixture");
    let content = tokio::fs::read_to_string(path).await?;
    let config: SeedConfig = serde_yaml::from_str(&content)?;

    info!(products = config.products.len(), "Parsed fixture");

    let pool = db::create_pool(&database_url()?).await?;
    info!("Connected to database");

    if reset {
        let removed = products::delete_all(&pool).await?;
        info!(removed, "Cleared existing products");
    }

    for doc in &config.products {
        products::insert(&pool, ProductId::generate(), doc).await?;
    }
    info!(inserted = config.products.len(), "Products seeded");

    if let Some(intro) = &config.page_intro {
        let receipt = settings::save_page_intro(&pool, intro).await?;
        info!(provider = receipt.provider, ok = receipt.ok, "Page intro saved");
    }

    info!("Seeding complete!");
    Ok(())
}
