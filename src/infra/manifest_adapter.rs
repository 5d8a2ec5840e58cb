use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use crate::app::ports::ManifestOutputPort;
use crate::domain::RunManifest;
use crate::error::PipelineError;
use crate::infra::write_atomically;

/// Writes the run manifest as pretty-printed JSON.
pub struct JsonManifestAdapter {
    path: PathBuf,
}

impl JsonManifestAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ManifestOutputPort for JsonManifestAdapter {
    async fn write_manifest(&self, manifest: &RunManifest) -> Result<()> {
        let json = serde_json::to_vec_pretty(manifest).map_err(PipelineError::Json)?;
        write_atomically(&self.path, &json).await?;
        info!("Wrote run manifest {} to {}", manifest.run_id, self.path.display());
        Ok(())
    }
}
