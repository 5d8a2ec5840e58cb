use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pipeline::RecoveryStats;

/// Which stages a run executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    Transform,
    Clean,
    Enrich,
}

/// Record of one pipeline run, written next to the outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: Uuid,
    pub kind: RunKind,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub input_file: String,
    pub input_rows: usize,
    pub clean_rows: Option<usize>,
    pub processed_rows: Option<usize>,
    pub recovery: RecoveryStats,
    pub input_sha256: String,
    pub clean_sha256: Option<String>,
    pub processed_sha256: Option<String>,
}

impl RunManifest {
    pub fn start(kind: RunKind, input_file: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            run_id: Uuid::new_v4(),
            kind,
            started_at: now,
            finished_at: now,
            input_file: input_file.into(),
            input_rows: 0,
            clean_rows: None,
            processed_rows: None,
            recovery: RecoveryStats::default(),
            input_sha256: String::new(),
            clean_sha256: None,
            processed_sha256: None,
        }
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_json_shape() {
        let manifest = RunManifest::start(RunKind::Transform, "raw_data.csv").finish();
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["kind"], "transform");
        assert_eq!(value["input_file"], "raw_data.csv");
        assert!(value["clean_sha256"].is_null());
        assert!(manifest.duration_ms() >= 0);
    }

    #[test]
    fn test_run_ids_are_unique() {
        let a = RunManifest::start(RunKind::Clean, "raw_data.csv");
        let b = RunManifest::start(RunKind::Clean, "raw_data.csv");
        assert_ne!(a.run_id, b.run_id);
    }
}
