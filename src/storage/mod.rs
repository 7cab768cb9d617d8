//! Sink abstractions for the export table.
//!
//! The pipeline hands finished rows to a [`TableSink`]; the production
//! backend encodes CSV and writes one local file per run.

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::pipeline::ExportRow;

// Re-export for convenience
pub use local::CsvFileSink;

/// Metadata about one table write.
#[derive(Debug, Clone)]
pub struct WriteReceipt {
    /// Rows written, header excluded
    pub rows: usize,

    /// Where the artifact landed
    pub location: String,

    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for table sinks.
#[async_trait]
pub trait TableSink: Send + Sync {
    /// Write the full table, replacing any previous artifact at the
    /// sink's destination.
    async fn write_table(&self, rows: &[ExportRow]) -> Result<WriteReceipt>;
}
