//! Hand a repository url to the operating system's default browser.

use thiserror::Error;
use tracing::debug;

/// Longest url accepted for launching
const MAX_URL_LEN: usize = 2048;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Cannot open an empty url")]
    EmptyUrl,

    #[error("Refusing to open non-web url: {0}")]
    UnsupportedScheme(String),

    #[error("Url too long ({len} bytes, max {max})")]
    TooLong { len: usize, max: usize },

    #[error("Failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
}

/// Opens urls outside the application (mocked in tests)
pub trait BrowserLauncher {
    fn open_url(&mut self, url: &str) -> Result<(), BrowserError>;
}

/// Launcher backed by the `open` crate (xdg-open, `open`, `start`)
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open_url(&mut self, url: &str) -> Result<(), BrowserError> {
        validate_url(url)?;
        debug!(url, "launching browser");
        open::that_detached(url)?;
        Ok(())
    }
}

/// Only http(s) urls of sane length reach the OS launcher
pub fn validate_url(url: &str) -> Result<(), BrowserError> {
    if url.is_empty() {
        return Err(BrowserError::EmptyUrl);
    }

    if url.len() > MAX_URL_LEN {
        return Err(BrowserError::TooLong { len: url.len(), max: MAX_URL_LEN });
    }

    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(BrowserError::UnsupportedScheme(url.chars().take(64).collect()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_github_url() {
        assert!(validate_url("https://github.com/rust-lang/rust").is_ok());
        assert!(validate_url("http://localhost:8080/repo").is_ok());
    }

    #[test]
    fn test_validate_empty_url() {
        assert!(matches!(validate_url(""), Err(BrowserError::EmptyUrl)));
    }

    #[test]
    fn test_validate_rejects_other_schemes() {
        for url in ["file:///etc/passwd", "javascript:alert(1)", "/usr/bin/env", "ssh://host"] {
            let err = validate_url(url).unwrap_err();
            assert!(matches!(err, BrowserError::UnsupportedScheme(_)), "{url}");
        }
    }

    #[test]
    fn test_validate_length_limit() {
        let at_limit = format!("https://{}", "a".repeat(MAX_URL_LEN - "https://".len()));
        assert!(validate_url(&at_limit).is_ok());

        let over = format!("{}a", at_limit);
        let err = validate_url(&over).unwrap_err();
        assert!(err.to_string().contains("too long"));
        assert!(err.to_string().contains("bytes"));
    }
}
