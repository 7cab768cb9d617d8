// src/services/details.rs

//! Concurrent detail fetcher.
//!
//! Fans out over the collected detail URLs with a bounded number of requests
//! in flight. One failed item never aborts the batch: the failure is logged
//! and its slot stays empty so positions line up with the input.

use futures::stream::{self, StreamExt};
use serde_json::Value;

use crate::services::JsonFetcher;

/// Scheduling model for the detail fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// One request at a time
    Sequential,
    /// Bounded pool of simultaneous requests
    Concurrent { max_in_flight: usize },
}

impl FetchMode {
    /// Number of requests allowed in flight at once.
    pub fn in_flight(&self) -> usize {
        match self {
            FetchMode::Sequential => 1,
            FetchMode::Concurrent { max_in_flight } => (*max_in_flight).max(1),
        }
    }
}

/// Service fetching every detail record under a scheduling mode.
pub struct DetailFetcher<'a> {
    fetcher: &'a dyn JsonFetcher,
    mode: FetchMode,
}

impl<'a> DetailFetcher<'a> {
    /// Create a new detail fetcher.
    pub fn new(fetcher: &'a dyn JsonFetcher, mode: FetchMode) -> Self {
        Self { fetcher, mode }
    }

    /// Fetch all detail payloads, preserving input order.
    ///
    /// The returned vector has the same length as `urls`; a slot is `None`
    /// when that URL's fetch failed. Returns only after every fetch has
    /// settled, regardless of completion order.
    pub async fn fetch_all(&self, urls: &[String]) -> Vec<Option<Value>> {
        let mut payloads = Vec::with_capacity(urls.len());

        let mut detail_stream = stream::iter(urls)
            .map(|url| async move { self.fetch_detail(url).await })
            .buffered(self.mode.in_flight());

        while let Some(slot) = detail_stream.next().await {
            payloads.push(slot);
        }

        payloads
    }

    async fn fetch_detail(&self, url: &str) -> Option<Value> {
        match self.fetcher.get_json(url).await {
            Ok(payload) => Some(payload),
            Err(error) => {
                log::error!("Failed to fetch detail {}: {}", url, error);
                None
            }
        }
    }
}
