//! HTTP client for the ticker registry.
//!
//! The registry returns a JSON object keyed by index:
//!
//! ```json
//! { "0": { "cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc." }, ... }
//! ```
//!
//! Only the title and ticker are used. Entries are taken in key order up to
//! the configured limit and mapped to [`CompanyRecord`]s; fields the registry
//! does not carry are synthesized deterministically.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use firmdex_core::constants::DEFAULT_SOURCE_TIMEOUT_SECONDS;
use firmdex_core::error::{DirectoryError, Result};
use firmdex_core::traits::CompanySource;
use firmdex_core::types::CompanyRecord;

use crate::synthesize::FieldSynthesizer;

/// Default registry endpoint (SEC company tickers file).
const DEFAULT_ENDPOINT: &str = "https://www.sec.gov/files/company_tickers.json";

/// Default synthesizer seed. Any fixed value works; changing it reshuffles
/// the synthesized fields of every primary-source record.
const DEFAULT_SYNTHESIZER_SEED: u64 = 0x00f1_52d3_7a11_ce55;

/// Registry client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Registry endpoint URL.
    pub endpoint_url: String,
    /// Request timeout in seconds. The refresh path is bounded by this.
    pub timeout_seconds: u64,
    /// Descriptive client identifier. The SEC endpoint rejects anonymous
    /// clients, so keep this meaningful.
    pub user_agent: String,
    /// Maximum number of registry entries to map into the directory.
    pub max_companies: usize,
    /// Seed for the synthesized filler fields.
    pub synthesizer_seed: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT.into(),
            timeout_seconds: DEFAULT_SOURCE_TIMEOUT_SECONDS,
            user_agent: "firmdex/0.1 (company directory; hello@firmdex.dev)".into(),
            max_companies: 100,
            synthesizer_seed: DEFAULT_SYNTHESIZER_SEED,
        }
    }
}

impl RegistryConfig {
    /// Creates a config pointed at a custom endpoint.
    pub fn with_endpoint(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            ..Default::default()
        }
    }
}

/// One entry of the registry payload. Unknown fields (e.g. `cik_str`) are
/// ignored.
#[derive(Debug, Deserialize)]
struct RegistryEntry {
    ticker: String,
    title: String,
}

/// HTTP client for the ticker registry.
pub struct RegistryClient {
    config: RegistryConfig,
    http_client: reqwest::Client,
}

impl RegistryClient {
    /// Creates a client with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Maps the raw payload into directory records.
    ///
    /// Keys are numeric strings; entries are taken in numeric order so the
    /// mapping is stable for a stable payload. Ids are assigned sequentially
    /// from 1 per cache generation.
    fn map_payload(&self, payload: BTreeMap<String, RegistryEntry>) -> Vec<CompanyRecord> {
        let mut entries: Vec<(usize, RegistryEntry)> = payload
            .into_iter()
            .filter_map(|(key, entry)| key.parse::<usize>().ok().map(|index| (index, entry)))
            .collect();
        entries.sort_by_key(|(index, _)| *index);

        let synthesizer = FieldSynthesizer::new(self.config.synthesizer_seed);

        entries
            .into_iter()
            .take(self.config.max_companies)
            .enumerate()
            .map(|(i, (_, entry))| {
                let id = (i + 1) as u32;
                let filler = synthesizer.fill(id);
                let ticker = entry.ticker.trim();
                CompanyRecord {
                    id,
                    name: entry.title,
                    // The registry does not carry a location.
                    location: "United States".into(),
                    industry: filler.industry.into(),
                    employees: filler.employees,
                    founded: filler.founded,
                    ticker: if ticker.is_empty() {
                        None
                    } else {
                        Some(ticker.to_string())
                    },
                }
            })
            .collect()
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanySource for RegistryClient {
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint_url))]
    async fn fetch(&self) -> Result<Vec<CompanyRecord>> {
        debug!("Fetching company registry");

        let response = self
            .http_client
            .get(&self.config.endpoint_url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DirectoryError::SourceUnavailable(format!(
                        "request timed out after {}s",
                        self.config.timeout_seconds
                    ))
                } else {
                    DirectoryError::SourceUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::SourceStatus(status.as_u16()));
        }

        let payload: BTreeMap<String, RegistryEntry> = response
            .json()
            .await
            .map_err(|e| DirectoryError::MalformedPayload(e.to_string()))?;

        let records = self.map_payload(payload);
        info!(count = records.len(), "Fetched companies from registry");

        Ok(records)
    }
}
