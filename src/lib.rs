//! Uniform Tracker Backend
//!
//! Layered architecture:
//! - domain: Employees, uniform items, monthly conditions and the resolver
//! - repository: Record stores (memory, SQLite, remote HTTP, synced)
//! - service: Lifecycle manager, polling, statistics, report export
//! - config: JSON application settings

use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod repository;
pub mod service;

use config::{AppConfig, BackendKind};
use domain::{DomainError, DomainResult, Restaurant};
use repository::{init_db, LocalStore, MemoryStore, RecordStore, RemoteStore, SyncedStore};
use service::EmployeeManager;

pub const APP_NAME: &str = "UniformTracker";

/// Start the rolling file logger in the configured log directory
pub fn init_logging(config: &AppConfig) -> DomainResult<()> {
    rolling_logger::init_logger(config.log_dir(), APP_NAME)
        .map_err(|e| DomainError::Internal(format!("Failed to init logger: {}", e)))
}

async fn open_local(config: &AppConfig) -> DomainResult<LocalStore> {
    std::fs::create_dir_all(&config.data_dir)
        .map_err(|e| DomainError::Store(format!("Failed to create {}: {}", config.data_dir.display(), e)))?;
    let db_state = init_db(&config.db_path()).await.map_err(DomainError::Store)?;

    Ok(if config.seed {
        LocalStore::seeded(db_state.connection())
    } else {
        LocalStore::new(db_state.connection())
    })
}

/// Construct the record store selected by `config.backend`
pub async fn build_store(config: &AppConfig) -> DomainResult<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match config.backend {
        BackendKind::Memory if config.seed => Arc::new(MemoryStore::seeded()),
        BackendKind::Memory => Arc::new(MemoryStore::new()),
        BackendKind::Local => Arc::new(open_local(config).await?),
        BackendKind::Remote => {
            let remote = RemoteStore::new(config.require_remote_url()?, config.request_timeout())?;
            log::info!("Remote endpoint {}", remote.url());
            Arc::new(remote)
        }
        BackendKind::Synced => {
            let remote = RemoteStore::new(config.require_remote_url()?, config.request_timeout())?;
            let local = open_local(config).await?;
            Arc::new(SyncedStore::new(Arc::new(local), Arc::new(remote), config.read_policy))
        }
    };
    log::info!("Using {:?} record store", config.backend);
    Ok(store)
}

/// Build the store and a manager for `partition`
///
/// A failed initial load is logged and leaves the manager empty; it can
/// still be reloaded later.
pub async fn bootstrap(config: &AppConfig, partition: Restaurant) -> DomainResult<EmployeeManager> {
    let store = build_store(config).await?;
    let manager = EmployeeManager::new(store, partition, config.request_timeout());
    if let Err(e) = manager.reload().await {
        log::warn!("Initial load of {} failed, starting empty: {}", partition, e);
    }
    Ok(manager)
}
