use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use crate::app::ports::DocumentOutputPort;
use crate::error::PipelineError;
use crate::infra::write_atomically;
use crate::pipeline::processing::documents::ReviewDocument;

/// Writes documents as NDJSON, one object per line.
pub struct NdjsonDocumentOutputAdapter {
    path: PathBuf,
}

impl NdjsonDocumentOutputAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DocumentOutputPort for NdjsonDocumentOutputAdapter {
    async fn write_documents(&self, documents: &[ReviewDocument]) -> Result<()> {
        let mut buf = Vec::new();
        for doc in documents {
            serde_json::to_writer(&mut buf, doc).map_err(PipelineError::Json)?;
            buf.push(b'\n');
        }
        write_atomically(&self.path, &buf).await?;
        info!("Wrote {} documents to {}", documents.len(), self.path.display());
        Ok(())
    }
}
