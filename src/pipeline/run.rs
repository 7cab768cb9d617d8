// src/pipeline/run.rs

//! Export pipeline orchestration.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Config, PokemonRecord};
use crate::pipeline::build_table;
use crate::services::{CatalogWalker, DetailFetcher, FetchMode, JsonFetcher};
use crate::storage::TableSink;

/// Accounting for one export run.
///
/// Logged at the end of a run; drop counts never appear in the emitted
/// artifact itself.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Detail URLs discovered by the pagination walk
    pub discovered: usize,

    /// Items whose detail fetch failed
    pub fetch_failures: usize,

    /// Items whose payload failed to normalize
    pub normalize_failures: usize,

    /// Rows in the written artifact
    pub rows_written: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ExportSummary {
    /// Items dropped across the fetch and normalize stages.
    pub fn dropped(&self) -> usize {
        self.fetch_failures + self.normalize_failures
    }

    /// Log the run accounting at INFO level.
    pub fn log(&self) {
        let elapsed_ms = (self.finished_at - self.started_at).num_milliseconds();
        log::info!(
            "Export finished in {} ms: {} discovered, {} dropped, {} rows written",
            elapsed_ms,
            self.discovered,
            self.dropped(),
            self.rows_written
        );
    }
}

/// Run the full export pipeline.
///
/// Walks the catalog (fatal on page failure), fetches details under the
/// given scheduling mode (per-item failures isolated), normalizes, builds
/// the table, and writes it through the sink (fatal on write failure).
pub async fn run_export(
    config: &Config,
    fetcher: &dyn JsonFetcher,
    sink: &dyn TableSink,
    mode: FetchMode,
) -> Result<ExportSummary> {
    let started_at = Utc::now();
    log::info!("Starting export from {}", config.api.start_url);

    let walker = CatalogWalker::new(fetcher);
    let urls = match walker.walk(&config.api.start_url).await {
        Ok(urls) => urls,
        Err(error) => {
            log::error!("Catalog walk failed: {}", error);
            return Err(error);
        }
    };
    log::info!("Discovered {} detail URLs", urls.len());

    let details = DetailFetcher::new(fetcher, mode);
    let payloads = details.fetch_all(&urls).await;
    let fetch_failures = payloads.iter().filter(|slot| slot.is_none()).count();

    let mut records = Vec::with_capacity(payloads.len());
    let mut normalize_failures = 0usize;
    for (url, slot) in urls.iter().zip(payloads) {
        let Some(payload) = slot else { continue };
        match PokemonRecord::from_payload(payload) {
            Ok(record) => records.push(record),
            Err(error) => {
                normalize_failures += 1;
                log::error!("Failed to normalize {}: {}", url, error);
            }
        }
    }
    log::info!(
        "Detail fetch complete: {} records, {} fetch failures, {} normalize failures",
        records.len(),
        fetch_failures,
        normalize_failures
    );

    let rows = build_table(records, &config.filter.required_games);

    let receipt = match sink.write_table(&rows).await {
        Ok(receipt) => receipt,
        Err(error) => {
            log::error!("Failed to write table: {}", error);
            return Err(error);
        }
    };
    log::info!("Saved {} rows to {}", receipt.rows, receipt.location);

    Ok(ExportSummary {
        discovered: urls.len(),
        fetch_failures,
        normalize_failures,
        rows_written: receipt.rows,
        started_at,
        finished_at: Utc::now(),
    })
}
