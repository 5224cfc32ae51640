//! Injected configuration values.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stats service endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncConfig {
    /// POST target for classification submissions
    pub submit_url: String,
    /// GET source of aggregate stats
    pub stats_url: String,
    /// Client timeout in seconds
    pub timeout_secs: u64,
    /// Fetch aggregate stats once at startup
    pub fetch_on_startup: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            submit_url: "http://127.0.0.1:8080/drops".to_string(),
            stats_url: "http://127.0.0.1:8080/stats".to_string(),
            timeout_secs: 30,
            fetch_on_startup: true,
        }
    }
}

/// Locations of the two persisted documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageConfig {
    /// Legacy positional route file
    pub route_file: PathBuf,
    /// JSON save/load file
    pub save_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            route_file: PathBuf::from("route.dat"),
            save_file: PathBuf::from("save.json"),
        }
    }
}

impl StorageConfig {
    /// Resolve relative file names against `base`.
    #[must_use]
    pub fn resolved_in(&self, base: &std::path::Path) -> Self {
        let resolve = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        };
        Self {
            route_file: resolve(&self.route_file),
            save_file: resolve(&self.save_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_sync_config_keeps_defaults() {
        let cfg: SyncConfig =
            serde_json::from_str(r#"{"submitUrl":"http://stats.local/drops"}"#).unwrap();
        assert_eq!(cfg.submit_url, "http://stats.local/drops");
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.fetch_on_startup);
    }

    #[test]
    fn relative_files_resolve_against_base() {
        let cfg = StorageConfig::default().resolved_in(std::path::Path::new("/data"));
        assert_eq!(cfg.route_file, PathBuf::from("/data/route.dat"));
        assert_eq!(cfg.save_file, PathBuf::from("/data/save.json"));
    }
}
