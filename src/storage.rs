use crate::model::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The two fatal failure modes, plus the ambient I/O case. Data-quality
/// problems inside a well-formed document never surface here.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not find {0}")]
    NotFound(PathBuf),
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Loads the catalog from disk. Missing categories and fields inside the
/// document fall back to defaults; only a missing file or malformed JSON
/// fails.
pub fn load_catalog(path: &Path) -> Result<Catalog, StorageError> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path)?;
    let catalog = serde_json::from_str(&raw)?;
    Ok(catalog)
}

/// Atomic write: Write to .tmp file then rename
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<(), StorageError> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
