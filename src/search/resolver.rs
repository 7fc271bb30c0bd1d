//! Resolve a search into direct links

use super::models::{SearchInput, SearchRequest, DEFAULT_SEARCH_LIMIT};
use super::response::TopSearchResults;
use crate::config::Settings;
use crate::error::SearchError;
use crate::network::{HttpClient, Transport};
use crate::storage::{response_key, ContentType, FileStore, KeyValueStore};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Retries granted after a non-JSON answer
pub const MAX_MALFORMED_RETRIES: u32 = 1;

/// Queries the topsearch endpoint and formats the results.
///
/// Transport failures are logged and yield no results. A non-JSON answer
/// is retried once; a second one means the proxy is blocked and is
/// reported as [`SearchError::BlockedProxy`].
pub struct SearchResolver<T> {
    transport: T,
    base_url: String,
    default_limit: usize,
    diagnostics: Option<Arc<dyn KeyValueStore>>,
}

impl<T: Transport> SearchResolver<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_limit: DEFAULT_SEARCH_LIMIT,
            diagnostics: None,
        }
    }

    /// Limit used for inputs without `searchLimit`
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Keep a copy of every non-JSON answer in `store`
    pub fn with_diagnostics(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.diagnostics = Some(store);
        self
    }

    /// URL of the topsearch query for `request`
    pub fn query_url(&self, request: &SearchRequest) -> String {
        format!(
            "{}/web/search/topsearch/?context={}&query={}",
            self.base_url,
            request.search_type.context(),
            urlencoding::encode(&request.search)
        )
    }

    /// Validate raw input and resolve it.
    ///
    /// An empty search term resolves to nothing without validation.
    /// Invalid input is returned as [`SearchError::Configuration`]
    /// before any request is made.
    pub async fn resolve_input(&self, input: &SearchInput) -> Result<Vec<String>, SearchError> {
        match input.to_request(self.default_limit)? {
            Some(request) => self.resolve(&request).await,
            None => Ok(Vec::new()),
        }
    }

    /// Resolve a validated request into at most `request.limit` links
    pub async fn resolve(&self, request: &SearchRequest) -> Result<Vec<String>, SearchError> {
        info!("Searching for \"{}\"", request.search);

        let url = self.query_url(request);
        let mut retries = 0;

        let payload = loop {
            match self.fetch(&url).await {
                Ok(payload) => break payload,
                Err(SearchError::Transport(e)) => {
                    error!("Search request failed: {}", e);
                    return Ok(Vec::new());
                }
                Err(SearchError::MalformedResponse) if retries < MAX_MALFORMED_RETRIES => {
                    retries += 1;
                    warn!("Server returned non-json answer, retrying one more time");
                }
                Err(SearchError::MalformedResponse) => {
                    error!("Server returned non-json answer again, giving up");
                    return Err(SearchError::BlockedProxy);
                }
                Err(e) => return Err(e),
            }
        };

        let mut urls = TopSearchResults::parse(request.search_type, payload)?.into_urls();

        info!(
            "Found {} search results. Limiting to {}.",
            urls.len(),
            request.limit
        );
        urls.truncate(request.limit);

        Ok(urls)
    }

    /// One request: a JSON object, or a typed reason why not
    async fn fetch(&self, url: &str) -> Result<Map<String, Value>, SearchError> {
        let response = self
            .transport
            .get(url)
            .await
            .map_err(|e| SearchError::Transport(format!("{e:#}")))?;

        debug!(
            bytes = response.text.len(),
            content_type = response.content_type().unwrap_or("unknown"),
            "Response received"
        );

        match response.json_object() {
            Some(map) => Ok(map),
            None => {
                self.keep_raw_response(&response.text).await;
                Err(SearchError::MalformedResponse)
            }
        }
    }

    async fn keep_raw_response(&self, body: &str) {
        let Some(store) = &self.diagnostics else {
            return;
        };

        let key = response_key();
        match store.set_value(&key, body, ContentType::PlainText).await {
            Ok(()) => debug!("Stored raw response as {}", key),
            Err(e) => warn!("Failed to store raw response {}: {}", key, e),
        }
    }
}

impl SearchResolver<HttpClient> {
    /// Resolver over a proxied [`HttpClient`] built from `settings`.
    ///
    /// Diagnostics go to the configured key-value store directory when
    /// `general.verbose_diagnostics` is set.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        let mut resolver = Self::new(client, settings.search.base_url.clone())
            .with_default_limit(settings.search.default_limit);

        if settings.general.verbose_diagnostics {
            let store = FileStore::new(settings.storage.key_value_store_dir.clone());
            resolver = resolver.with_diagnostics(Arc::new(store));
        }

        Ok(resolver)
    }
}
