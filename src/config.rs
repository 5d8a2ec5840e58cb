use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DATA_DIR_ENV: &str = "AIRLINE_REVIEWS_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub paths: PathsConfig,
}

/// File locations. Table and manifest names are relative to `data_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    pub raw_file: String,
    pub clean_file: String,
    pub processed_file: String,
    pub documents_file: String,
    pub manifest_file: String,
    pub log_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            raw_file: "raw_data.csv".to_string(),
            clean_file: "clean_data.csv".to_string(),
            processed_file: "processed_data.csv".to_string(),
            documents_file: "documents.ndjson".to_string(),
            manifest_file: "manifest.json".to_string(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl PipelineConfig {
    /// Load configuration. An explicit path must exist; the default
    /// `config.toml` is optional and falls back to built-in defaults.
    /// The data directory can then be overridden from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };

        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) => config.override_data_dir(dir),
            Err(std::env::VarError::NotPresent) => {}
            Err(e) => return Err(e.into()),
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PipelineConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn override_data_dir(&mut self, dir: impl Into<PathBuf>) {
        self.paths.data_dir = dir.into();
    }

    fn validate(&self) -> Result<()> {
        let names = [
            ("raw_file", &self.paths.raw_file),
            ("clean_file", &self.paths.clean_file),
            ("processed_file", &self.paths.processed_file),
            ("documents_file", &self.paths.documents_file),
            ("manifest_file", &self.paths.manifest_file),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(PipelineError::Config(format!("paths.{} must not be empty", key)));
            }
        }
        if self.paths.raw_file == self.paths.clean_file
            || self.paths.raw_file == self.paths.processed_file
        {
            return Err(PipelineError::Config(
                "outputs must not overwrite the raw input file".to_string(),
            ));
        }
        Ok(())
    }

    pub fn raw_path(&self) -> PathBuf {
        self.paths.data_dir.join(&self.paths.raw_file)
    }

    pub fn clean_path(&self) -> PathBuf {
        self.paths.data_dir.join(&self.paths.clean_file)
    }

    pub fn processed_path(&self) -> PathBuf {
        self.paths.data_dir.join(&self.paths.processed_file)
    }

    pub fn documents_path(&self) -> PathBuf {
        self.paths.data_dir.join(&self.paths.documents_file)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.paths.data_dir.join(&self.paths.manifest_file)
    }

    pub fn log_dir(&self) -> &Path {
        &self.paths.log_dir
    }
}
