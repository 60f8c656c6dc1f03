//! App state: cache service and config.

use std::sync::Arc;

use firmdex_cache::{CacheConfig, DirectoryCache};
use firmdex_core::constants::{
    DEFAULT_FRESHNESS_SECONDS, DEFAULT_PORT, DEFAULT_SOURCE_TIMEOUT_SECONDS,
};
use firmdex_core::traits::CompanySource;
use firmdex_registry::{RegistryClient, RegistryConfig};

/// Server configuration, environment-backed with documented defaults.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Listening port (`FIRMDEX_PORT`, default 5000).
    pub port: u16,
    /// Snapshot freshness window in seconds (`FIRMDEX_FRESHNESS_SECS`,
    /// default 3600).
    pub freshness_seconds: u64,
    /// Outbound registry timeout in seconds (`FIRMDEX_SOURCE_TIMEOUT_SECS`,
    /// default 5).
    pub source_timeout_seconds: u64,
    /// Registry endpoint (`FIRMDEX_REGISTRY_URL`).
    pub registry_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            freshness_seconds: DEFAULT_FRESHNESS_SECONDS,
            source_timeout_seconds: DEFAULT_SOURCE_TIMEOUT_SECONDS,
            registry_url: RegistryConfig::default().endpoint_url,
        }
    }
}

impl ApiConfig {
    /// Reads configuration from the environment, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let defaults = Self::default();

        Self {
            port: env_parsed("FIRMDEX_PORT").unwrap_or(defaults.port),
            freshness_seconds: env_parsed("FIRMDEX_FRESHNESS_SECS")
                .unwrap_or(defaults.freshness_seconds),
            source_timeout_seconds: env_parsed("FIRMDEX_SOURCE_TIMEOUT_SECS")
                .unwrap_or(defaults.source_timeout_seconds),
            registry_url: std::env::var("FIRMDEX_REGISTRY_URL")
                .unwrap_or(defaults.registry_url),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|value| value.parse().ok())
}

/// Shared application state.
pub struct AppState {
    /// Server configuration.
    pub config: ApiConfig,
    /// The directory cache, created at startup and dropped at shutdown.
    pub cache: DirectoryCache,
}

impl AppState {
    /// Creates state with a registry-backed cache.
    pub fn new(config: ApiConfig) -> Self {
        let registry_config = RegistryConfig {
            endpoint_url: config.registry_url.clone(),
            timeout_seconds: config.source_timeout_seconds,
            ..Default::default()
        };
        let source = Arc::new(RegistryClient::with_config(registry_config));
        Self::with_source(config, source)
    }

    /// Creates state around an injected source (used by tests).
    pub fn with_source(config: ApiConfig, source: Arc<dyn CompanySource>) -> Self {
        let cache_config = CacheConfig {
            freshness_seconds: config.freshness_seconds,
        };
        Self {
            cache: DirectoryCache::with_config(source, cache_config),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.freshness_seconds, 3600);
        assert_eq!(config.source_timeout_seconds, 5);
        assert!(config.registry_url.starts_with("https://"));
    }
}
