//! Application configuration
//!
//! Stored as `uniform_tracker.json` in the data directory. A missing file
//! means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::{DomainError, DomainResult};
use crate::repository::ReadPolicy;

pub const CONFIG_FILE: &str = "uniform_tracker.json";
pub const DB_FILE: &str = "uniform_tracker.db";

/// Which record store backs the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Memory,
    #[default]
    Local,
    Remote,
    Synced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory for the database and config file
    #[serde(skip)]
    pub data_dir: PathBuf,
    pub backend: BackendKind,
    pub remote_url: Option<String>,
    pub read_policy: ReadPolicy,
    pub request_timeout_ms: u64,
    pub poll_interval_secs: u64,
    /// Write seed data into empty partitions on first open
    pub seed: bool,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            backend: BackendKind::default(),
            remote_url: None,
            read_policy: ReadPolicy::default(),
            request_timeout_ms: 10_000,
            poll_interval_secs: 5,
            seed: true,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Read the config from `data_dir`
    pub fn load(data_dir: &Path) -> DomainResult<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| DomainError::Store(format!("Failed to read {}: {}", path.display(), e)))?;
            serde_json::from_str::<AppConfig>(&content)
                .map_err(|e| DomainError::Parse(format!("Invalid {}: {}", CONFIG_FILE, e)))?
        } else {
            AppConfig::default()
        };
        config.data_dir = data_dir.to_path_buf();
        Ok(config)
    }

    pub fn save(&self) -> DomainResult<()> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| DomainError::Store(format!("Failed to create {}: {}", self.data_dir.display(), e)))?;
        let json = serde_json::to_string_pretty(self).map_err(|e| DomainError::Internal(e.to_string()))?;
        let path = self.data_dir.join(CONFIG_FILE);
        std::fs::write(&path, json)
            .map_err(|e| DomainError::Store(format!("Failed to write {}: {}", path.display(), e)))
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    /// Log directory, `<data_dir>/logs` unless configured
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| self.data_dir.join("logs"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Remote URL, required by the remote and synced backends
    pub fn require_remote_url(&self) -> DomainResult<&str> {
        self.remote_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| DomainError::InvalidInput(format!("Backend {:?} needs remote_url", self.backend)))
    }
}
