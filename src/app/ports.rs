use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{CleanReview, ProcessedReview, RawReview, RunManifest};
use crate::pipeline::processing::documents::ReviewDocument;

/// Rows read from one table file, with the digest of the bytes they came from.
#[derive(Debug, Clone)]
pub struct LoadedTable<T> {
    pub file_name: String,
    pub sha256: String,
    pub rows: Vec<T>,
}

// Source-side ports
#[async_trait]
pub trait ReviewSourcePort: Send + Sync {
    /// Load the scraped table. Fails if any required column is absent.
    async fn load_raw(&self) -> Result<LoadedTable<RawReview>>;
    async fn load_clean(&self) -> Result<LoadedTable<CleanReview>>;
    async fn load_processed(&self) -> Result<LoadedTable<ProcessedReview>>;
}

// Output-side ports
#[async_trait]
pub trait TableOutputPort: Send + Sync {
    /// Replace the clean table; returns the SHA-256 of what was written.
    async fn write_clean(&self, rows: &[CleanReview]) -> Result<String>;
    /// Replace the processed table; returns the SHA-256 of what was written.
    async fn write_processed(&self, rows: &[ProcessedReview]) -> Result<String>;
    /// Replace both tables together: either both are replaced or neither is.
    /// Returns the clean and processed digests.
    async fn write_tables(
        &self,
        clean: &[CleanReview],
        processed: &[ProcessedReview],
    ) -> Result<(String, String)>;
}

#[async_trait]
pub trait DocumentOutputPort: Send + Sync {
    async fn write_documents(&self, documents: &[ReviewDocument]) -> Result<()>;
}

#[async_trait]
pub trait ManifestOutputPort: Send + Sync {
    async fn write_manifest(&self, manifest: &RunManifest) -> Result<()>;
}
