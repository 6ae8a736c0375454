//! Gallery Configuration
//!
//! Where the gallery server lives. Defaults to the page's own origin.

use std::sync::OnceLock;
use wasm_bindgen::JsCast;

pub const PHOTOS_PATH: &str = "/photos";
pub const COMMENTS_PATH: &str = "/comments";
pub const NEW_COMMENT_PATH: &str = "/comments/new";
pub const LIKE_PATH: &str = "/photos/like";
pub const FAVORITE_PATH: &str = "/photos/favorite";

/// `<meta name="gallery-api-base" content="https://...">`
const BASE_META_NAME: &str = "gallery-api-base";

static CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Install the config; later calls are ignored
pub fn init(config: GalleryConfig) -> &'static GalleryConfig {
    CONFIG.get_or_init(|| config)
}

/// Installed config, or same-origin defaults before `init`
pub fn current() -> &'static GalleryConfig {
    CONFIG.get_or_init(GalleryConfig::default)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryConfig {
    pub base_url: String,
}

impl GalleryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Read the base URL from the page, falling back to same-origin
    pub fn from_document() -> Self {
        let base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name={}]", BASE_META_NAME)).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content())
            .unwrap_or_default();
        Self::new(base.trim())
    }

    /// Join base and path with exactly one slash
    pub fn url(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn comments_url(&self, photo_id: u32) -> String {
        format!("{}?photo_id={}", self.url(COMMENTS_PATH), photo_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_keeps_path() {
        let config = GalleryConfig::default();
        assert_eq!(config.url(PHOTOS_PATH), "/photos");
        assert_eq!(config.comments_url(7), "/comments?photo_id=7");
    }

    #[test]
    fn test_base_url_join() {
        let config = GalleryConfig::new("http://localhost:3000/");
        assert_eq!(config.url(LIKE_PATH), "http://localhost:3000/photos/like");
        let config = GalleryConfig::new("http://localhost:3000");
        assert_eq!(config.url(NEW_COMMENT_PATH), "http://localhost:3000/comments/new");
    }
}
