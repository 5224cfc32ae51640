//! File storage
//!
//! Implements `RouteStore` and `SaveStore`; every write replaces the whole file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::traits::{RouteStore, SaveStore};
use crate::types::StorageConfig;

/// Document store backed by local files
#[derive(Debug, Clone)]
pub struct FileStorage {
    config: StorageConfig,
}

impl FileStorage {
    #[must_use]
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// A missing file reads as `Ok(None)`
    fn read_file(path: &Path) -> CoreResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found, skipping", path.display());
                Ok(None)
            }
            Err(e) => Err(CoreError::StorageError(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Create parent directories, then replace the file
    fn write_file(path: &Path, content: &str) -> CoreResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    CoreError::StorageError(format!("failed to create {}: {e}", dir.display()))
                })?;
            }
        }
        fs::write(path, content).map_err(|e| {
            CoreError::StorageError(format!("failed to write {}: {e}", path.display()))
        })?;
        log::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}

impl RouteStore for FileStorage {
    fn read_route(&self) -> CoreResult<Option<String>> {
        Self::read_file(&self.config.route_file)
    }

    fn write_route(&self, content: &str) -> CoreResult<()> {
        Self::write_file(&self.config.route_file, content)
    }
}

impl SaveStore for FileStorage {
    fn read_save(&self) -> CoreResult<Option<String>> {
        Self::read_file(&self.config.save_file)
    }

    fn write_save(&self, content: &str) -> CoreResult<()> {
        Self::write_file(&self.config.save_file, content)
    }
}
