// src/services/fetch.rs

//! JSON fetch boundary.
//!
//! The walker and detail fetcher consume [`JsonFetcher`] rather than a
//! concrete HTTP client, so tests run against an in-memory implementation
//! and never touch the network.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::models::FetcherConfig;
use crate::utils::http;

/// One GET returning the decoded JSON body.
///
/// Implementations must signal non-2xx statuses and malformed bodies as
/// errors; callers decide whether a failure is fatal or isolated per item.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// Production fetcher backed by one shared reqwest client.
///
/// The client carries the configured user agent and per-request timeout and
/// is safe for concurrent use across all in-flight fetches.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a client built from the given settings.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_client(config)?,
        })
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let text = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
pub(crate) use fake::FakeFetcher;

#[cfg(test)]
mod fake {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::error::{AppError, Result};

    use super::JsonFetcher;

    /// In-memory fetcher serving canned JSON bodies; unmapped URLs fail.
    #[derive(Default)]
    pub(crate) struct FakeFetcher {
        responses: HashMap<String, Value>,
    }

    impl FakeFetcher {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with(mut self, url: &str, body: Value) -> Self {
            self.responses.insert(url.to_string(), body);
            self
        }
    }

    #[async_trait]
    impl JsonFetcher for FakeFetcher {
        async fn get_json(&self, url: &str) -> Result<Value> {
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| AppError::fetch(url, "no response mapped"))
        }
    }
}
