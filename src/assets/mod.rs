//! Image URL resolution and the slider image catalog.

use crate::config::Settings;
use once_cell::sync::OnceCell;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

/// Relative paths of the slider images, in display order
pub const SLIDER_IMAGE_PATHS: [&str; 4] = [
    "/images/0.jpg",
    "/images/1.jpg",
    "/images/2.jpg",
    "/images/3.jpg",
];

/// Resolve an image path against a base URL.
/// Paths starting with `http://` or `https://` are returned as-is.
/// Anything else has a single leading `/` dropped and is appended to the base URL.
pub fn resolve_image_url(path: &str, base_url: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let relative = path.strip_prefix('/').unwrap_or(path);
    format!("{base_url}{relative}")
}

/// Resolves image paths against a fixed base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    base_url: String,
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.assets.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resolve(&self, path: &str) -> String {
        resolve_image_url(path, &self.base_url)
    }
}

/// Slider images resolved once against the configured base URL
#[derive(Debug, Clone, Serialize)]
pub struct AssetCatalog {
    #[serde(rename = "base_url", serialize_with = "serialize_base_url")]
    resolver: ImageResolver,
    slider_image_paths: Vec<String>,
    slider_image_urls: Vec<String>,
}

impl AssetCatalog {
    pub fn new(resolver: ImageResolver) -> Self {
        let slider_image_urls: Vec<String> = SLIDER_IMAGE_PATHS
            .iter()
            .map(|path| resolver.resolve(path))
            .collect();

        debug!(
            "Resolved {} slider images against '{}'",
            slider_image_urls.len(),
            resolver.base_url()
        );

        Self {
            slider_image_paths: SLIDER_IMAGE_PATHS.iter().map(|p| p.to_string()).collect(),
            slider_image_urls,
            resolver,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(ImageResolver::from_settings(settings))
    }

    pub fn base_url(&self) -> &str {
        self.resolver.base_url()
    }

    pub fn resolve(&self, path: &str) -> String {
        self.resolver.resolve(path)
    }

    pub fn slider_image_paths(&self) -> &[String] {
        &self.slider_image_paths
    }

    pub fn slider_image_urls(&self) -> &[String] {
        &self.slider_image_urls
    }
}

fn serialize_base_url<S: Serializer>(
    resolver: &ImageResolver,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(resolver.base_url())
}

static GLOBAL_CATALOG: OnceCell<AssetCatalog> = OnceCell::new();

/// Install the process-wide catalog. Only the first call builds one;
/// later calls return the installed catalog unchanged.
pub fn init_global(settings: &Settings) -> &'static AssetCatalog {
    let catalog = GLOBAL_CATALOG.get_or_init(|| AssetCatalog::from_settings(settings));

    if catalog.base_url() != settings.assets.base_url {
        warn!(
            "Asset catalog already initialized with base URL '{}', ignoring '{}'",
            catalog.base_url(),
            settings.assets.base_url
        );
    }

    catalog
}

/// The process-wide catalog, if `init_global` has run
pub fn global() -> Option<&'static AssetCatalog> {
    GLOBAL_CATALOG.get()
}
