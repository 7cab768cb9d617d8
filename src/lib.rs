// src/lib.rs

//! pokefetch library
//!
//! Walks a paginated catalog API, fetches per-entity details with bounded
//! concurrency, and exports a filtered CSV dataset.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
