// File: ./src/generator.rs
// End-to-end pipeline: load -> render -> write
use crate::render;
use crate::storage::{self, StorageError};
use std::path::PathBuf;

/// Owns the configured paths and runs the whole transform. The catalog is
/// loaded once, rendered in memory, and the output file is replaced
/// atomically; nothing is written back to the source.
pub struct Generator {
    json_path: PathBuf,
    output_path: PathBuf,
}

impl Generator {
    pub fn new(json_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Generator {
            json_path: json_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn run(&self) -> Result<(), StorageError> {
        let catalog = storage::load_catalog(&self.json_path)?;
        let document = render::render_document(&catalog);
        storage::atomic_write(&self.output_path, &document)?;
        Ok(())
    }
}
