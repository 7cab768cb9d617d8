// src/services/catalog.rs

//! Catalog pagination walker.
//!
//! Follows `next` cursors through the paged listing endpoint and collects
//! every detail URL. Page-level failures are fatal: the catalog is a single
//! resource, unlike the per-item details fetched afterwards.

use crate::error::{AppError, Result};
use crate::models::CatalogPage;
use crate::services::JsonFetcher;

/// Service walking the paginated catalog listing.
pub struct CatalogWalker<'a> {
    fetcher: &'a dyn JsonFetcher,
}

impl<'a> CatalogWalker<'a> {
    /// Create a new walker over the given fetcher.
    pub fn new(fetcher: &'a dyn JsonFetcher) -> Self {
        Self { fetcher }
    }

    /// Collect every detail URL reachable from `start_url`.
    ///
    /// Appends each page's references in response order, then follows the
    /// page's `next` cursor; terminates when the cursor is absent. Any page
    /// that fails to fetch or decode aborts the walk with an error naming
    /// the page URL. References are not deduplicated.
    pub async fn walk(&self, start_url: &str) -> Result<Vec<String>> {
        let mut urls = Vec::new();
        let mut cursor = Some(start_url.to_string());

        while let Some(page_url) = cursor {
            let page = self.fetch_page(&page_url).await?;
            urls.extend(page.results.into_iter().map(|entry| entry.url));
            log::debug!("Walked {} ({} references so far)", page_url, urls.len());
            cursor = page.next;
        }

        Ok(urls)
    }

    async fn fetch_page(&self, url: &str) -> Result<CatalogPage> {
        let payload = self
            .fetcher
            .get_json(url)
            .await
            .map_err(|e| AppError::catalog(url, e))?;
        serde_json::from_value(payload).map_err(|e| AppError::catalog(url, e))
    }
}
