use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::app::ports::TableOutputPort;
use crate::constants::{CLEAN_COLUMNS, PROCESSED_COLUMNS};
use crate::domain::{CleanReview, ProcessedReview};
use crate::error::PipelineError;
use crate::infra::{sha256_hex, write_all_atomically, write_atomically};

/// Writes the clean and processed tables as CSV with a header row.
pub struct CsvTableOutputAdapter {
    clean_path: PathBuf,
    processed_path: PathBuf,
}

impl CsvTableOutputAdapter {
    pub fn new(clean_path: PathBuf, processed_path: PathBuf) -> Self {
        Self {
            clean_path,
            processed_path,
        }
    }
}

/// Render rows as CSV. An empty table still gets its header.
pub fn render_table<T: Serialize>(
    rows: &[T],
    columns: &[&str],
) -> std::result::Result<Vec<u8>, PipelineError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record(columns)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| PipelineError::Io(e.into_error()))
}

#[async_trait]
impl TableOutputPort for CsvTableOutputAdapter {
    async fn write_clean(&self, rows: &[CleanReview]) -> Result<String> {
        let bytes = render_table(rows, &CLEAN_COLUMNS)?;
        write_atomically(&self.clean_path, &bytes).await?;
        info!("Wrote {} rows to {}", rows.len(), self.clean_path.display());
        Ok(sha256_hex(&bytes))
    }

    async fn write_processed(&self, rows: &[ProcessedReview]) -> Result<String> {
        let bytes = render_table(rows, &PROCESSED_COLUMNS)?;
        write_atomically(&self.processed_path, &bytes).await?;
        info!("Wrote {} rows to {}", rows.len(), self.processed_path.display());
        Ok(sha256_hex(&bytes))
    }

    async fn write_tables(
        &self,
        clean: &[CleanReview],
        processed: &[ProcessedReview],
    ) -> Result<(String, String)> {
        let clean_bytes = render_table(clean, &CLEAN_COLUMNS)?;
        let processed_bytes = render_table(processed, &PROCESSED_COLUMNS)?;
        write_all_atomically(&[
            (self.clean_path.as_path(), clean_bytes.as_slice()),
            (self.processed_path.as_path(), processed_bytes.as_slice()),
        ])
        .await?;
        info!(
            "Wrote {} rows to {} and {} rows to {}",
            clean.len(),
            self.clean_path.display(),
            processed.len(),
            self.processed_path.display()
        );
        Ok((sha256_hex(&clean_bytes), sha256_hex(&processed_bytes)))
    }
}
