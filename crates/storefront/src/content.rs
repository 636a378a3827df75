//! Content management for markdown-based marketing pages.
//!
//! This module loads markdown files from the `content/pages` directory at
//! startup, parses frontmatter metadata, and renders markdown to HTML. Pages
//! are held in memory and served without touching the filesystem again.

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Metadata for static pages (about, faq, etc.)
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// A rendered page with metadata and HTML content
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub meta: PageMeta,
    pub content_html: String,
}

/// Content store that holds all loaded content in memory
#[derive(Debug, Clone)]
pub struct ContentStore {
    pages: Arc<HashMap<String, Page>>,
}

impl ContentStore {
    /// Load all content from the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the content directory cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let pages = Self::load_pages(&content_dir.join("pages"))?;

        Ok(Self {
            pages: Arc::new(pages),
        })
    }

    /// Load all pages from the pages directory
    fn load_pages(dir: &Path) -> Result<HashMap<String, Page>, ContentError> {
        let mut pages = HashMap::new();

        if !dir.exists() {
            tracing::warn!("Pages directory does not exist: {:?}", dir);
            return Ok(pages);
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_page(&path) {
                    Ok(page) => {
                        tracing::info!("Loaded page: {}", page.slug);
                        pages.insert(page.slug.clone(), page);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load page {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(pages)
    }

    /// Load a single page from a markdown file
    fn load_page(path: &Path) -> Result<Page, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?
            .to_string();

        let matter = Matter::<YAML>::new();
        let parsed: ParsedEntity<PageMeta> = matter
            .parse(&content)
            .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
        let meta = parsed
            .data
            .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

        let content_html = render_markdown(&parsed.content);

        Ok(Page {
            slug,
            meta,
            content_html,
        })
    }

    /// Get a page by slug
    #[must_use]
    pub fn get_page(&self, slug: &str) -> Option<&Page> {
        self.pages.get(slug)
    }

    /// Get all pages
    pub fn get_all_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }
}

/// Render markdown to HTML with GitHub Flavored Markdown support.
fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    // Enable GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;

    // Render options
    options.render.r#unsafe = true; // Allow raw HTML in markdown

    markdown_to_html(content, &options)
}

/// Content loading errors
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    fn write_page(dir: &Path, name: &str, body: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), body).unwrap();
    }

    fn temp_content_dir(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("copperleaf-content-{tag}-{}", std::process::id()))
    }

    #[test]
    fn test_missing_directory_yields_empty_store() {
        let store = ContentStore::load(Path::new("/nonexistent/copperleaf")).unwrap();
        assert!(store.get_page("about").is_none());
        assert_eq!(store.get_all_pages().count(), 0);
    }

    #[test]
    fn test_load_page_with_frontmatter() {
        let root = temp_content_dir("ok");
        write_page(
            &root.join("pages"),
            "about.md",
            "---\ntitle: About us\ndescription: Who we are\n---\n\n# Hello\n\nBody text.\n",
        );

        let store = ContentStore::load(&root).unwrap();
        let page = store.get_page("about").unwrap();
        assert_eq!(page.meta.title, "About us");
        assert_eq!(page.meta.description.as_deref(), Some("Who we are"));
        assert!(page.content_html.contains("<h1"));
        assert!(page.content_html.contains("Body text."));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_page_without_frontmatter_is_skipped() {
        let root = temp_content_dir("nofm");
        write_page(&root.join("pages"), "raw.md", "no frontmatter here\n");
        write_page(
            &root.join("pages"),
            "about.md",
            "---\ntitle: About\n---\nok\n",
        );

        let store = ContentStore::load(&root).unwrap();
        assert!(store.get_page("raw").is_none());
        assert!(store.get_page("about").is_some());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_markdown_tables_render() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table"));
    }
}
