use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::app::ports::{LoadedTable, ReviewSourcePort};
use crate::constants::{CLEAN_COLUMNS, PROCESSED_COLUMNS, REQUIRED_RAW_COLUMNS};
use crate::domain::{CleanReview, ProcessedReview, RawReview};
use crate::error::PipelineError;
use crate::infra::{file_name, sha256_hex};
use crate::pipeline::processing::clean::schema::require_columns;

/// Reads the three pipeline tables from CSV files with a header row.
pub struct CsvReviewSource {
    raw_path: PathBuf,
    clean_path: PathBuf,
    processed_path: PathBuf,
}

impl CsvReviewSource {
    pub fn new(raw_path: PathBuf, clean_path: PathBuf, processed_path: PathBuf) -> Self {
        Self {
            raw_path,
            clean_path,
            processed_path,
        }
    }
}

/// Parse a CSV document after checking its header for `required` columns.
pub fn parse_table<T: DeserializeOwned>(
    bytes: &[u8],
    required: &[&str],
    file: &str,
) -> std::result::Result<Vec<T>, PipelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    require_columns(headers.iter(), required, file)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

async fn load<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<LoadedTable<T>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let name = file_name(path);
    let sha256 = sha256_hex(&bytes);
    debug!("{} sha256={}", name, sha256);

    let rows = parse_table(&bytes, required, &name)?;
    info!("Loaded {} rows from {}", rows.len(), path.display());

    Ok(LoadedTable {
        file_name: name,
        sha256,
        rows,
    })
}

#[async_trait]
impl ReviewSourcePort for CsvReviewSource {
    async fn load_raw(&self) -> Result<LoadedTable<RawReview>> {
        load(&self.raw_path, &REQUIRED_RAW_COLUMNS).await
    }

    async fn load_clean(&self) -> Result<LoadedTable<CleanReview>> {
        load(&self.clean_path, &CLEAN_COLUMNS).await
    }

    async fn load_processed(&self) -> Result<LoadedTable<ProcessedReview>> {
        load(&self.processed_path, &PROCESSED_COLUMNS).await
    }
}
