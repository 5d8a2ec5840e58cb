use anyhow::{Context, Result};
use tracing::info;

use crate::app::ports::{DocumentOutputPort, ReviewSourcePort};
use crate::pipeline::processing::documents::to_documents;

/// Use case for flattening the processed table into search documents
pub struct DocumentUseCase {
    source: Box<dyn ReviewSourcePort>,
    output: Box<dyn DocumentOutputPort>,
}

impl DocumentUseCase {
    pub fn new(source: Box<dyn ReviewSourcePort>, output: Box<dyn DocumentOutputPort>) -> Self {
        Self { source, output }
    }

    /// Returns the number of documents written.
    pub async fn export(&self) -> Result<usize> {
        let processed = self
            .source
            .load_processed()
            .await
            .context("loading processed table")?;

        let documents = to_documents(&processed.rows, &processed.file_name);
        self.output
            .write_documents(&documents)
            .await
            .context("writing documents")?;

        info!("Exported {} documents from {}", documents.len(), processed.file_name);
        Ok(documents.len())
    }
}
