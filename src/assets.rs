use url::Url;

use crate::config;

/// Resolves relative asset paths against the application's public base URL.
///
/// Shapers take the resolver by reference so tests construct one against a
/// fixed base instead of reading process environment.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base: Url,
    storage_prefix: String,
}

impl AssetResolver {
    pub fn new(app_url: &str) -> Result<Self, url::ParseError> {
        // Url::join resolves relative to the last path segment, so the base
        // must end with a slash to keep its own path intact.
        let normalized = if app_url.ends_with('/') {
            app_url.to_string()
        } else {
            format!("{}/", app_url)
        };

        Ok(Self {
            base: Url::parse(&normalized)?,
            storage_prefix: "storage".to_string(),
        })
    }

    pub fn with_storage_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.storage_prefix = prefix.into();
        self
    }

    /// Production construction path: base URL and storage prefix from config.
    pub fn from_config() -> Result<Self, url::ParseError> {
        let assets = &config::config().assets;
        Ok(Self::new(&assets.app_url)?.with_storage_prefix(assets.storage_prefix.clone()))
    }

    /// Absolute URL for a public asset path, e.g. `img/logo.png`.
    pub fn url(&self, path: &str) -> String {
        match self.base.join(path.trim_start_matches('/')) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::error!("asset path {:?} did not resolve: {}", path, e);
                format!("{}{}", self.base, path.trim_start_matches('/'))
            }
        }
    }

    /// Absolute URL for a path stored relative to the storage root.
    pub fn storage_url(&self, path: &str) -> String {
        self.url(&format!(
            "{}/{}",
            self.storage_prefix,
            path.trim_start_matches('/')
        ))
    }
}
