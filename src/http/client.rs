use crate::errors::{fetch_context, with_fetch_context};
use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// HTTP client with built-in rate limiting
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = RateLimiter::new(rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub async fn get(&mut self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        self.rate_limiter.wait().await;
        self.send_get_request(url, query).await
    }

    /// GET a JSON document; `Ok(None)` when the resource does not exist
    pub async fn get_json_opt(&mut self, url: &str, query: &[(&str, String)]) -> Result<Option<Value>> {
        let response = self.get(url, query).await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Not found: {}", url);
            return Ok(None);
        }

        let response = response
            .error_for_status()
            .with_context(|| fetch_context(url))?;
        let body = response
            .json::<Value>()
            .await
            .with_context(|| format!("Invalid JSON body from: {}", url))?;
        Ok(Some(body))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        let result = self.client.get(url).query(query).send().await;
        with_fetch_context(result, url)
    }
}
