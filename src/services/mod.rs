//! Service layer for the export pipeline.
//!
//! This module contains the I/O-facing logic:
//! - JSON fetching (`JsonFetcher`, `HttpFetcher`)
//! - Catalog pagination (`CatalogWalker`)
//! - Detail fan-out (`DetailFetcher`)

mod catalog;
mod details;
mod fetch;

pub use catalog::CatalogWalker;
pub use details::{DetailFetcher, FetchMode};
pub use fetch::{HttpFetcher, JsonFetcher};

#[cfg(test)]
pub(crate) use fetch::FakeFetcher;
