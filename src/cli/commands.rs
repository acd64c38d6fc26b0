use crate::assets::AssetCatalog;
use crate::{Error, Result};
use std::io::Write;
use tracing::debug;

/// Write one resolved URL per input path, in input order
pub fn resolve<W: Write>(catalog: &AssetCatalog, paths: &[String], out: &mut W) -> Result<()> {
    for path in paths {
        let url = catalog.resolve(path);
        debug!("Resolved '{}' -> '{}'", path, url);
        writeln!(out, "{url}")?;
    }

    Ok(())
}

/// Write the slider image URLs, or the whole catalog as JSON
pub fn slider<W: Write>(catalog: &AssetCatalog, json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, catalog)?;
        writeln!(out)?;
        return Ok(());
    }

    for url in catalog.slider_image_urls() {
        writeln!(out, "{url}")?;
    }

    Ok(())
}

/// Write a user-facing error line, redacted the same way as the logs
pub fn report_error<W: Write>(err: &Error, out: &mut W) -> Result<()> {
    writeln!(out, "Error: {}", err.log_safe())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn catalog(base_url: &str) -> AssetCatalog {
        AssetCatalog::from_settings(&Settings::with_base_url(base_url))
    }

    #[test]
    fn test_resolve_preserves_order() {
        let paths = vec![
            "/images/9.jpg".to_string(),
            "https://cdn.example.com/x.jpg".to_string(),
            "".to_string(),
        ];
        let mut out = Vec::new();

        resolve(&catalog("/app/"), &paths, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/app/images/9.jpg\nhttps://cdn.example.com/x.jpg\n/app/\n"
        );
    }

    #[test]
    fn test_report_error_redacts_env_file_line() {
        let err = Error::EnvFile(dotenvy::Error::LineParse(
            "API_TOKEN=hunter2 oops".to_string(),
            17,
        ));
        let mut out = Vec::new();

        report_error(&err, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Error: "));
        assert!(!text.contains("hunter2"));
        assert!(text.contains("17"));
    }

    #[test]
    fn test_slider_lines() {
        let mut out = Vec::new();
        slider(&catalog("/"), false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["/images/0.jpg", "/images/1.jpg", "/images/2.jpg", "/images/3.jpg"]
        );
    }
}
