pub mod app_config;
pub mod file_store;
pub mod redis_repo;

use std::sync::Arc;
use app_config::{StorageBackend, StorageConfig};
use turfbook_core::{InMemoryStore, KeyValueStore};

pub use file_store::JsonFileStore;
pub use redis_repo::RedisStore;

const REDIS_KEY_PREFIX: &str = "turfbook";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage.{0} must be set for the {1:?} backend")]
    MissingSetting(&'static str, StorageBackend),
    #[error("Redis client setup failed: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Build the persistence adapter named by the configuration
pub fn open_storage(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    let storage: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::Memory => Arc::new(InMemoryStore::new()),
        StorageBackend::File => {
            let path = config
                .file_path
                .clone()
                .ok_or(StoreError::MissingSetting("file_path", config.backend))?;
            tracing::info!("Session file: {}", path.display());
            Arc::new(JsonFileStore::new(path))
        }
        StorageBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .ok_or(StoreError::MissingSetting("redis_url", config.backend))?;
            Arc::new(RedisStore::new(url, REDIS_KEY_PREFIX)?)
        }
    };

    tracing::info!(backend = ?config.backend, "Session storage ready");
    Ok(storage)
}
