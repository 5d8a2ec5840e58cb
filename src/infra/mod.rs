pub mod csv_review_source;
pub mod csv_table_output_adapter;
pub mod document_output_adapter;
pub mod manifest_adapter;

pub use csv_review_source::CsvReviewSource;
pub use csv_table_output_adapter::CsvTableOutputAdapter;
pub use document_output_adapter::NdjsonDocumentOutputAdapter;
pub use manifest_adapter::JsonManifestAdapter;

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::warn;

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = format!(".{}.tmp", file_name(path));
    path.with_file_name(name)
}

fn backup_sibling(path: &Path) -> PathBuf {
    let name = format!(".{}.bak", file_name(path));
    path.with_file_name(name)
}

/// Write to a temporary sibling and rename it over `path`, so readers see
/// either the old file or the complete new one.
pub async fn write_atomically(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    write_all_atomically(&[(path, bytes)]).await
}

async fn discard<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) {
    for path in paths {
        let _ = tokio::fs::remove_file(path).await;
    }
}

/// Replace several files as one unit. Every file is staged in a temporary
/// sibling first; nothing is renamed unless all of them were written. If a
/// rename fails, files already replaced are restored from their backups.
pub async fn write_all_atomically(files: &[(&Path, &[u8])]) -> anyhow::Result<()> {
    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(files.len());
    for (path, bytes) in files {
        let result = stage(path, bytes).await;
        match result {
            Ok(tmp) => staged.push((path.to_path_buf(), tmp)),
            Err(e) => {
                discard(staged.iter().map(|(_, tmp)| tmp).collect::<Vec<_>>()).await;
                return Err(e);
            }
        }
    }

    let mut committed: Vec<(PathBuf, Option<PathBuf>)> = Vec::with_capacity(staged.len());
    for (idx, (path, tmp)) in staged.iter().enumerate() {
        if let Err(e) = commit(path, tmp, &mut committed).await {
            rollback(&committed).await;
            discard(staged[idx..].iter().map(|(_, tmp)| tmp).collect::<Vec<_>>()).await;
            return Err(e);
        }
    }

    for (_, backup) in &committed {
        if let Some(backup) = backup {
            if let Err(e) = tokio::fs::remove_file(backup).await {
                warn!("Could not remove backup {}: {}", backup.display(), e);
            }
        }
    }
    Ok(())
}

async fn stage(path: &Path, bytes: &[u8]) -> anyhow::Result<PathBuf> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await?;
    }
    if let Ok(meta) = tokio::fs::metadata(path).await {
        if !meta.is_file() {
            anyhow::bail!("{} exists and is not a regular file", path.display());
        }
    }
    let tmp = temp_sibling(path);
    if let Err(e) = tokio::fs::write(&tmp, bytes).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(tmp)
}

async fn commit(
    path: &Path,
    tmp: &Path,
    committed: &mut Vec<(PathBuf, Option<PathBuf>)>,
) -> anyhow::Result<()> {
    let backup = if tokio::fs::metadata(path).await.is_ok() {
        let backup = backup_sibling(path);
        tokio::fs::rename(path, &backup).await?;
        Some(backup)
    } else {
        None
    };

    if let Err(e) = tokio::fs::rename(tmp, path).await {
        if let Some(backup) = &backup {
            let _ = tokio::fs::rename(backup, path).await;
        }
        return Err(e.into());
    }
    committed.push((path.to_path_buf(), backup));
    Ok(())
}

async fn rollback(committed: &[(PathBuf, Option<PathBuf>)]) {
    for (path, backup) in committed.iter().rev() {
        let restored = match backup {
            Some(backup) => tokio::fs::rename(backup, path).await,
            None => tokio::fs::remove_file(path).await,
        };
        if let Err(e) = restored {
            warn!("Could not restore {}: {}", path.display(), e);
        }
    }
}
