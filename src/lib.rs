pub mod assets;
pub mod cli;
pub mod config;
pub mod error;

// Re-exports
pub use assets::{resolve_image_url, AssetCatalog, ImageResolver, SLIDER_IMAGE_PATHS};
pub use config::Settings;
pub use error::{Error, Result};
