//! File-backed content source: one JSON document per page.

use crate::common::{validate_slug, ContentError};
use crate::config::SiteConfig;
use crate::models::Page;

pub async fn load_page(
    config: &SiteConfig,
    slug: &str,
) -> Result<Page, ContentError> {
    let slug = slug.trim();
    if !validate_slug(slug) {
        return Err(ContentError::InvalidSlug(slug.to_string()));
    }

    let path = config.page_path(slug);
    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ContentError::NotFound(slug.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let page = Page::from_json(&raw)?;
    log::debug!(
        "Loaded page '{}' with {} block(s) from {}",
        slug,
        page.blocks.len(),
        path.display()
    );

    Ok(page)
}
