use std::path::PathBuf;
use std::sync::OnceLock;

const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_PAGE: &str = "home";

/// Server-side settings read from the environment (and `.env`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub default_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            default_page: DEFAULT_PAGE.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            content_dir: read("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_dir),
            default_page: read("DEFAULT_PAGE").unwrap_or(defaults.default_page),
        }
    }

    /// Process-wide configuration, read once on first use.
    pub fn global() -> &'static SiteConfig {
        static CONFIG: OnceLock<SiteConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::from_env)
    }

    pub fn page_path(&self, slug: &str) -> PathBuf {
        self.content_dir.join("pages").join(format!("{}.json", slug))
    }
}
