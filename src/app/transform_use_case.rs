use anyhow::{Context, Result};
use tracing::info;

use crate::app::ports::{ManifestOutputPort, ReviewSourcePort, TableOutputPort};
use crate::domain::{RunKind, RunManifest};
use crate::observability::metrics;
use crate::pipeline::Pipeline;

/// Use case for turning the scraped table into the clean and processed tables
pub struct TransformUseCase {
    source: Box<dyn ReviewSourcePort>,
    tables: Box<dyn TableOutputPort>,
    manifest: Box<dyn ManifestOutputPort>,
}

impl TransformUseCase {
    pub fn new(
        source: Box<dyn ReviewSourcePort>,
        tables: Box<dyn TableOutputPort>,
        manifest: Box<dyn ManifestOutputPort>,
    ) -> Self {
        Self {
            source,
            tables,
            manifest,
        }
    }

    /// Raw table to clean and processed tables, then the run manifest.
    pub async fn run_full(&self) -> Result<RunManifest> {
        let raw = self.source.load_raw().await.map_err(|e| {
            metrics::run::failed("load");
            e
        })?;

        let mut manifest = RunManifest::start(RunKind::Transform, raw.file_name.clone());
        manifest.input_sha256 = raw.sha256;

        let result = Pipeline::run(raw.rows);
        manifest.input_rows = result.input_rows;
        manifest.recovery = result.recovery;

        let (clean_sha, processed_sha) = self
            .tables
            .write_tables(&result.clean, &result.processed)
            .await
            .map_err(|e| {
                metrics::run::failed("write");
                e
            })
            .context("writing clean and processed tables")?;

        manifest.clean_rows = Some(result.clean.len());
        manifest.processed_rows = Some(result.processed.len());
        manifest.clean_sha256 = Some(clean_sha);
        manifest.processed_sha256 = Some(processed_sha);

        self.finish(manifest).await
    }

    /// Raw table to clean table only.
    pub async fn run_clean_only(&self) -> Result<RunManifest> {
        let raw = self.source.load_raw().await.map_err(|e| {
            metrics::run::failed("load");
            e
        })?;

        let mut manifest = RunManifest::start(RunKind::Clean, raw.file_name.clone());
        manifest.input_sha256 = raw.sha256;
        manifest.input_rows = raw.rows.len();

        let (clean, recovery) = Pipeline::clean(raw.rows);
        let clean_sha = self
            .tables
            .write_clean(&clean)
            .await
            .context("writing clean table")?;

        manifest.recovery = recovery;
        manifest.clean_rows = Some(clean.len());
        manifest.clean_sha256 = Some(clean_sha);

        self.finish(manifest).await
    }

    /// Clean table to processed table; the feature stages only.
    pub async fn run_enrich_only(&self) -> Result<RunManifest> {
        let clean = self.source.load_clean().await.map_err(|e| {
            metrics::run::failed("load");
            e
        })?;

        let mut manifest = RunManifest::start(RunKind::Enrich, clean.file_name.clone());
        manifest.input_sha256 = clean.sha256;
        manifest.input_rows = clean.rows.len();

        let (processed, recovery) = Pipeline::enrich(clean.rows);
        let processed_sha = self
            .tables
            .write_processed(&processed)
            .await
            .context("writing processed table")?;

        manifest.recovery = recovery;
        manifest.processed_rows = Some(processed.len());
        manifest.processed_sha256 = Some(processed_sha);

        self.finish(manifest).await
    }

    async fn finish(&self, manifest: RunManifest) -> Result<RunManifest> {
        let manifest = manifest.finish();
        self.manifest
            .write_manifest(&manifest)
            .await
            .context("writing run manifest")?;
        info!(
            "Run {} ({:?}) finished in {}ms",
            manifest.run_id,
            manifest.kind,
            manifest.duration_ms()
        );
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::LoadedTable;
    use crate::domain::{CleanReview, ProcessedReview, RawReview};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockSource {
        raw: Vec<RawReview>,
        clean: Vec<CleanReview>,
        missing_column: bool,
    }

    #[async_trait]
    impl ReviewSourcePort for MockSource {
        async fn load_raw(&self) -> Result<LoadedTable<RawReview>> {
            if self.missing_column {
                anyhow::bail!("required column 'Route' missing from raw_data.csv");
            }
            Ok(LoadedTable {
                file_name: "raw_data.csv".to_string(),
                sha256: "raw-digest".to_string(),
                rows: self.raw.clone(),
            })
        }

        async fn load_clean(&self) -> Result<LoadedTable<CleanReview>> {
            Ok(LoadedTable {
                file_name: "clean_data.csv".to_string(),
                sha256: "clean-digest".to_string(),
                rows: self.clean.clone(),
            })
        }

        async fn load_processed(&self) -> Result<LoadedTable<ProcessedReview>> {
            anyhow::bail!("not used")
        }
    }

    #[derive(Default)]
    struct MockTables {
        clean: Arc<tokio::sync::Mutex<Vec<CleanReview>>>,
        processed: Arc<tokio::sync::Mutex<Vec<ProcessedReview>>>,
        fail_tables: bool,
    }

    #[async_trait]
    impl TableOutputPort for MockTables {
        async fn write_clean(&self, rows: &[CleanReview]) -> Result<String> {
            *self.clean.lock().await = rows.to_vec();
            Ok(format!("clean-{}", rows.len()))
        }

        async fn write_processed(&self, rows: &[ProcessedReview]) -> Result<String> {
            *self.processed.lock().await = rows.to_vec();
            Ok(format!("processed-{}", rows.len()))
        }

        async fn write_tables(
            &self,
            clean: &[CleanReview],
            processed: &[ProcessedReview],
        ) -> Result<(String, String)> {
            if self.fail_tables {
                anyhow::bail!("processed table is not writable");
            }
            let clean_sha = self.write_clean(clean).await?;
            let processed_sha = self.write_processed(processed).await?;
            Ok((clean_sha, processed_sha))
        }
    }

    #[derive(Default)]
    struct MockManifest {
        written: Arc<tokio::sync::Mutex<Vec<RunManifest>>>,
    }

    #[async_trait]
    impl ManifestOutputPort for MockManifest {
        async fn write_manifest(&self, manifest: &RunManifest) -> Result<()> {
            self.written.lock().await.push(manifest.clone());
            Ok(())
        }
    }

    fn raw_review(date: &str, body: &str) -> RawReview {
        RawReview {
            dates: Some(date.to_string()),
            review_bodies: Some(body.to_string()),
            route: Some("London to Paris".to_string()),
            value_for_money: Some("4".to_string()),
            recommended: Some("yes".to_string()),
            ..Default::default()
        }
    }

    fn source(missing_column: bool) -> MockSource {
        MockSource {
            raw: vec![
                raw_review("1st March 2024", "Trip Verified | Smooth"),
                raw_review("19th March 2024", "Not Verified | Late"),
            ],
            clean: Vec::new(),
            missing_column,
        }
    }

    #[tokio::test]
    async fn test_run_full_writes_both_tables_and_manifest() {
        let tables = MockTables::default();
        let clean_ref = tables.clean.clone();
        let processed_ref = tables.processed.clone();
        let manifest_out = MockManifest::default();
        let manifest_ref = manifest_out.written.clone();

        let use_case = TransformUseCase::new(
            Box::new(source(false)),
            Box::new(tables),
            Box::new(manifest_out),
        );
        let manifest = use_case.run_full().await.unwrap();

        assert_eq!(manifest.kind, RunKind::Transform);
        assert_eq!(manifest.input_rows, 2);
        assert_eq!(manifest.clean_rows, Some(2));
        assert_eq!(manifest.processed_rows, Some(2));
        assert_eq!(manifest.input_sha256, "raw-digest");
        assert_eq!(manifest.clean_sha256.as_deref(), Some("clean-2"));
        assert_eq!(manifest.processed_sha256.as_deref(), Some("processed-2"));

        let clean = clean_ref.lock().await;
        assert_eq!(clean[0].id, 0);
        assert_eq!(clean[0].review.as_deref(), Some("Late"));
        assert!(!clean[0].verified);

        let processed = processed_ref.lock().await;
        assert_eq!(processed[1].destination.as_deref(), Some("Paris"));
        assert_eq!(processed[1].recommended, Some(true));

        assert_eq!(manifest_ref.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_column_writes_nothing() {
        let tables = MockTables::default();
        let clean_ref = tables.clean.clone();
        let manifest_out = MockManifest::default();
        let manifest_ref = manifest_out.written.clone();

        let use_case = TransformUseCase::new(
            Box::new(source(true)),
            Box::new(tables),
            Box::new(manifest_out),
        );
        assert!(use_case.run_full().await.is_err());
        assert!(clean_ref.lock().await.is_empty());
        assert!(manifest_ref.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_table_write_skips_manifest() {
        let tables = MockTables {
            fail_tables: true,
            ..Default::default()
        };
        let clean_ref = tables.clean.clone();
        let manifest_out = MockManifest::default();
        let manifest_ref = manifest_out.written.clone();

        let use_case = TransformUseCase::new(
            Box::new(source(false)),
            Box::new(tables),
            Box::new(manifest_out),
        );
        assert!(use_case.run_full().await.is_err());
        assert!(clean_ref.lock().await.is_empty());
        assert!(manifest_ref.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_clean_then_enrich_matches_full_run() {
        let tables = MockTables::default();
        let clean_ref = tables.clean.clone();
        let use_case = TransformUseCase::new(
            Box::new(source(false)),
            Box::new(tables),
            Box::new(MockManifest::default()),
        );
        let manifest = use_case.run_clean_only().await.unwrap();
        assert_eq!(manifest.kind, RunKind::Clean);
        assert_eq!(manifest.processed_sha256, None);
        let clean = clean_ref.lock().await.clone();

        let tables = MockTables::default();
        let processed_ref = tables.processed.clone();
        let enrich = TransformUseCase::new(
            Box::new(MockSource {
                raw: Vec::new(),
                clean,
                missing_column: false,
            }),
            Box::new(tables),
            Box::new(MockManifest::default()),
        );
        let manifest = enrich.run_enrich_only().await.unwrap();
        assert_eq!(manifest.kind, RunKind::Enrich);
        assert_eq!(manifest.input_sha256, "clean-digest");

        let full_tables = MockTables::default();
        let full_ref = full_tables.processed.clone();
        TransformUseCase::new(
            Box::new(source(false)),
            Box::new(full_tables),
            Box::new(MockManifest::default()),
        )
        .run_full()
        .await
        .unwrap();

        assert_eq!(*processed_ref.lock().await, *full_ref.lock().await);
    }
}
