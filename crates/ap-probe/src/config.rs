//! Probe configuration, loadable from TOML with environment overrides.

use serde::Deserialize;

use ap_protocol::{AssetSearchRequest, DEFAULT_PAGE_SIZE, PageQuery};

use crate::error::{ProbeError, ProbeResult};

/// Overrides `api_key`.
pub const ENV_API_KEY: &str = "ASSET_PROBE_API_KEY";
/// Overrides `base_url`.
pub const ENV_BASE_URL: &str = "ASSET_PROBE_BASE_URL";

/// Settings for a single probe run.
#[derive(Clone, Deserialize)]
pub struct ProbeConfig {
    /// Asset search endpoint, without query string.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `X-Api-Key` header. Required before a request is sent.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Assets requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Zero-based page index. Only this one page is fetched.
    #[serde(default)]
    pub page: u32,
    /// Request timeout in seconds. None leaves the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Asset search criteria sent in the body.
    #[serde(default)]
    pub asset: Option<String>,
    /// Vulnerability search criteria sent in the body.
    #[serde(default)]
    pub vulnerability: Option<String>,
}

fn default_base_url() -> String {
    "https://us2.api.insight.rapid7.com/vm/v4/integration/assets".to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            page_size: default_page_size(),
            page: 0,
            timeout_secs: None,
            asset: None,
            vulnerability: None,
        }
    }
}

impl std::fmt::Debug for ProbeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("page_size", &self.page_size)
            .field("page", &self.page)
            .field("timeout_secs", &self.timeout_secs)
            .field("asset", &self.asset)
            .field("vulnerability", &self.vulnerability)
            .finish()
    }
}

impl ProbeConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> ProbeResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> ProbeResult<Self> {
        toml::from_str(contents).map_err(|e| ProbeError::Config(e.to_string()))
    }

    /// Load from an optional file, then apply environment overrides.
    pub fn load(path: Option<&str>) -> ProbeResult<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply overrides from `lookup` (normally the process environment).
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
    }

    /// The configured API key, or a config error if none is set.
    pub fn api_key(&self) -> ProbeResult<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ProbeError::Config(format!(
                "no API key configured (set `api_key` or {ENV_API_KEY})"
            ))),
        }
    }

    pub fn page_query(&self) -> PageQuery {
        PageQuery {
            size: self.page_size,
            page: self.page,
        }
    }

    pub fn search_request(&self) -> AssetSearchRequest {
        AssetSearchRequest {
            asset: self.asset.clone(),
            vulnerability: self.vulnerability.clone(),
        }
    }
}
