use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub database_pool_size: u32,
    pub api_host: String,
    pub api_port: u16,
    pub tmdb_api_url: String,
    pub tmdb_api_key: Option<String>,
    pub tmdb_image_base_url: String,
    pub tmdb_language: String,
    pub tmdb_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first
    /// if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset and empty
    /// values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let string_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let config = Config {
            database_path: string_or("DATABASE_PATH", "movie_reviews.db"),
            database_pool_size: parse_positive("DATABASE_POOL_SIZE", get("DATABASE_POOL_SIZE"), 8)?,
            api_host: string_or("API_HOST", "127.0.0.1"),
            api_port: parse_or("API_PORT", get("API_PORT"), 5001)?,
            tmdb_api_url: string_or("TMDB_API_URL", "https://api.themoviedb.org/3"),
            tmdb_api_key: get("TMDB_API_KEY"),
            tmdb_image_base_url: string_or(
                "TMDB_IMAGE_BASE_URL",
                "https://image.tmdb.org/t/p/w500",
            ),
            tmdb_language: string_or("TMDB_LANGUAGE", "en-US"),
            tmdb_timeout_seconds: parse_positive(
                "TMDB_TIMEOUT_SECONDS",
                get("TMDB_TIMEOUT_SECONDS"),
                10,
            )?,
        };

        Ok(config)
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    pub fn tmdb_timeout(&self) -> Duration {
        Duration::from_secs(self.tmdb_timeout_seconds)
    }

    pub fn log_summary(&self) {
        info!("📋 Configuration loaded:");
        info!("  🗄️  Database: {} (pool of {})", self.database_path, self.database_pool_size);
        info!("  🌐 API Server: {}", self.api_address());
        info!(
            "  🎭 Metadata API: {} ({}, {}s timeout)",
            self.tmdb_api_url, self.tmdb_language, self.tmdb_timeout_seconds
        );

        if self.tmdb_api_key.is_some() {
            info!("  🔑 TMDB API Key: ✅ Configured");
        } else {
            warn!("  🔑 TMDB API Key: ❌ Not configured, movie detail lookups will fail");
        }
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::InvalidValue {
                key,
                value,
                reason: e.to_string(),
            })
        }
    }
}

fn parse_positive<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let parsed = parse_or(key, raw, default)?;
    if parsed == T::default() {
        return Err(ConfigError::InvalidValue {
            key,
            value: "0".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(parsed)
}
