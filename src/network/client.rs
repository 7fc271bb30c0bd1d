//! HTTP client for the Instagram search endpoint

use super::transport::{HttpResponse, Transport};
use super::user_agent::{accept_json, accept_language, generate_user_agent};
use crate::config::OutgoingSettings;
use anyhow::{bail, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper carrying proxy, timeout and header configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
    extra_headers: HashMap<String, String>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .gzip(true)
            .brotli(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;
        let user_agent = settings
            .useragent
            .clone()
            .unwrap_or_else(generate_user_agent);

        debug!(
            proxied = !settings.proxies.is_empty(),
            "HTTP client initialized"
        );

        Ok(Self {
            client,
            user_agent,
            extra_headers: settings.extra_headers.clone(),
        })
    }

    async fn parse_response(response: Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let text = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            text,
            url,
        })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let mut req_builder = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_json())
            .header("Accept-Language", accept_language("en"));

        for (key, value) in &self.extra_headers {
            req_builder = req_builder.header(key, value);
        }

        let response = Self::parse_response(req_builder.send().await?).await?;
        if !response.is_success() {
            bail!("HTTP error {} from {}", response.status, response.url);
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProxySettings;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_configured_user_agent_is_kept() {
        let settings = OutgoingSettings {
            useragent: Some("TestBot/1.0".to_string()),
            ..Default::default()
        };
        let client = HttpClient::with_settings(&settings).unwrap();
        assert_eq!(client.user_agent(), "TestBot/1.0");
    }

    #[tokio::test]
    async fn test_client_with_proxy() {
        let settings = OutgoingSettings {
            proxies: ProxySettings::all("http://127.0.0.1:3128"),
            ..Default::default()
        };
        assert!(HttpClient::with_settings(&settings).is_ok());
    }
}
