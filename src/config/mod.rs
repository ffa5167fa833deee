use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub assets: AssetConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Public base URL of the application; asset URLs resolve against it.
    pub app_url: String,
    /// Path segment under which uploaded files are publicly served.
    pub storage_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Ceiling applied to free-text string fields by the request rule tables.
    pub max_string_length: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Load .env if present so local runs pick up APP_ENV, APP_URL, etc.
        let _ = dotenvy::dotenv();

        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("APP_URL") {
            self.assets.app_url = v;
        }
        if let Ok(v) = env::var("ASSET_STORAGE_PREFIX") {
            self.assets.storage_prefix = v;
        }
        if let Ok(v) = env::var("VALIDATION_MAX_STRING_LENGTH") {
            self.validation.max_string_length =
                v.parse().unwrap_or(self.validation.max_string_length);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            assets: AssetConfig {
                app_url: "http://localhost:8000".to_string(),
                storage_prefix: "storage".to_string(),
            },
            validation: ValidationConfig { max_string_length: 255 },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            assets: AssetConfig {
                app_url: "https://staging.example.com".to_string(),
                storage_prefix: "storage".to_string(),
            },
            validation: ValidationConfig { max_string_length: 255 },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            assets: AssetConfig {
                app_url: "https://app.example.com".to_string(),
                storage_prefix: "storage".to_string(),
            },
            validation: ValidationConfig { max_string_length: 255 },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
