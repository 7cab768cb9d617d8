// src/models/mod.rs

//! Domain models for the export pipeline.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod api;
mod config;
mod record;

// Re-export all public types
pub use api::{
    CatalogEntry, CatalogPage, GameIndex, NamedResource, PokemonDetail, Sprites, TypeSlot,
};
pub use config::{ApiConfig, Config, FetcherConfig, FilterConfig, OutputConfig};
pub use record::PokemonRecord;
