//! Runtime bootstrap
//!
//! Turns an `AppConfig` into a ready `InventoryStore` handle, so consumers do
//! not wire storage and logging by hand.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use common::utils::logging::{self, LogFormat};
use configs::{AppConfig, StorageBackend, StorageConfig};

use crate::errors::ServiceError;
use crate::inventory::{InventoryStore, SlotPersistence};
use crate::storage::{FileSlotStorage, MemorySlotStorage, SlotStorage};

/// Build the configured slot storage and open the store on it.
pub async fn open_inventory(cfg: &StorageConfig) -> Result<Arc<InventoryStore>, ServiceError> {
    let storage: Arc<dyn SlotStorage> = match cfg.backend {
        StorageBackend::File => {
            common::env::ensure_data_dir(&cfg.data_dir).await.map_err(ServiceError::storage)?;
            Arc::new(FileSlotStorage::new(&cfg.data_dir))
        }
        StorageBackend::Memory => Arc::new(MemorySlotStorage::default()),
    };
    InventoryStore::open(SlotPersistence::new(storage, cfg.slot.clone())).await
}

/// Initialize logging from config, then open the store.
pub async fn bootstrap(cfg: &AppConfig) -> anyhow::Result<Arc<InventoryStore>> {
    let format = match cfg.logging.format {
        configs::LogFormat::Compact => LogFormat::Compact,
        configs::LogFormat::Json => LogFormat::Json,
    };
    logging::init_logging(format, &cfg.logging.level);
    info!(backend = ?cfg.storage.backend, slot = %cfg.storage.slot, "bootstrapping inventory");
    Ok(open_inventory(&cfg.storage).await?)
}

/// Load the config file at `path` (defaults when missing), then bootstrap.
/// Pass `configs::DEFAULT_CONFIG_PATH` for the conventional location.
pub async fn bootstrap_from_file(path: impl AsRef<Path>) -> anyhow::Result<Arc<InventoryStore>> {
    let cfg = AppConfig::load_and_validate(path)?;
    bootstrap(&cfg).await
}
