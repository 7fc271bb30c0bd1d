//! Settings structures for instagram-search configuration

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use url::Url;

/// Prefix shared by all environment overrides
pub const ENV_PREFIX: &str = "INSTAGRAM_SEARCH_";

/// Main settings structure, mirrors settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
    pub storage: StorageSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with process environment variables (INSTAGRAM_SEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_env_from(|key| std::env::var(key).ok());
    }

    /// Merge with variables resolved through `lookup`
    pub fn merge_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(val) = var("DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = var("LOG_LEVEL") {
            if val.eq_ignore_ascii_case("debug") {
                self.general.verbose_diagnostics = true;
            }
        }
        if let Some(val) = var("BASE_URL") {
            self.search.base_url = val;
        }
        if let Some(val) = var("PROXY_URL") {
            if !val.is_empty() {
                self.outgoing.proxies.all = Some(val);
            }
        }
        if let Some(val) = var("STORAGE_DIR") {
            self.storage.key_value_store_dir = PathBuf::from(val);
        }
    }

    /// Default tracing filter when RUST_LOG is unset.
    ///
    /// `general.debug` wins over `env_level`, the value of the log-level
    /// environment variable.
    pub fn default_log_filter(&self, env_level: Option<&str>) -> String {
        if self.general.debug {
            return "debug".to_string();
        }
        match env_level {
            Some(level) if !level.is_empty() => level.to_lowercase(),
            _ => "info".to_string(),
        }
    }

    /// Check values that would otherwise only fail at request time
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.search.base_url)
            .with_context(|| format!("invalid search.base_url: {}", self.search.base_url))?;

        let timeout = self.outgoing.request_timeout;
        if timeout.is_nan() || timeout <= 0.0 {
            bail!("outgoing.request_timeout must be greater than 0");
        }

        for proxy in self.outgoing.proxies.iter() {
            Url::parse(proxy).with_context(|| format!("invalid proxy url: {proxy}"))?;
        }

        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log at debug level unless RUST_LOG says otherwise
    pub debug: bool,
    /// Persist raw non-JSON responses to the key-value store
    pub verbose_diagnostics: bool,
}

/// Search endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Origin hosting the `/web/search/topsearch/` endpoint
    pub base_url: String,
    /// Limit applied when the input carries no `searchLimit`
    pub default_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.instagram.com".to_string(),
            default_limit: crate::search::DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Fixed User-Agent (none = random browser UA)
    pub useragent: Option<String>,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            verify_ssl: true,
            useragent: None,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

impl ProxySettings {
    /// Proxy that routes every request
    pub fn all(url: impl Into<String>) -> Self {
        Self {
            all: Some(url.into()),
            ..Default::default()
        }
    }

    /// Iterate over every configured proxy url
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.all.iter().chain(self.http.iter()).chain(self.https.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Key-value store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding one file per stored key
    pub key_value_store_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            key_value_store_dir: PathBuf::from("storage/key_value_stores/default"),
        }
    }
}
