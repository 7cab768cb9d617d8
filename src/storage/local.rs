//! Local filesystem CSV sink.
//!
//! Encodes the table in memory, then writes atomically: bytes land in a
//! `.tmp` sibling first and are renamed over the final path, so a reader
//! never observes a half-written artifact.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::pipeline::{COLUMNS, ExportRow};
use crate::storage::{TableSink, WriteReceipt};

/// CSV file sink.
#[derive(Debug, Clone)]
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    /// Create a sink writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Encode the header and all rows as CSV bytes.
    ///
    /// The header is written explicitly so an empty table still produces a
    /// valid header-only artifact.
    fn encode(rows: &[ExportRow]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut buf);

            writer.write_record(COLUMNS)?;
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        Ok(buf)
    }

    /// Ensure the parent directory exists.
    async fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir().await?;

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl TableSink for CsvFileSink {
    async fn write_table(&self, rows: &[ExportRow]) -> Result<WriteReceipt> {
        let bytes = Self::encode(rows)?;
        self.write_bytes(&bytes).await?;

        Ok(WriteReceipt {
            rows: rows.len(),
            location: self.path.display().to_string(),
            timestamp: Utc::now(),
        })
    }
}
