use crate::models::Page;
use leptos::prelude::*;

/// Fetch a page document from the content source.
/// An empty slug loads the configured default page.
#[server(GetPage, "/api")]
pub async fn get_page(slug: String) -> Result<Page, ServerFnError> {
    use crate::config::SiteConfig;
    use crate::content::load_page;

    let config = SiteConfig::global();
    let slug = if slug.trim().is_empty() {
        config.default_page.clone()
    } else {
        slug
    };

    load_page(config, &slug).await.map_err(|e| {
        log::error!("Failed to load page '{}': {}", slug, e);
        ServerFnError::new(e.to_string())
    })
}
