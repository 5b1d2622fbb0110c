use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::errors::ServiceError;
use crate::storage::slot_storage::SlotStorage;

/// File-backed slot storage: each slot is `<dir>/<slot>.json`.
#[derive(Clone, Debug)]
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

#[async_trait]
impl SlotStorage for FileSlotStorage {
    async fn read(&self, slot: &str) -> Result<Option<String>, ServiceError> {
        let path = self.path_for(slot);
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ServiceError::Storage(format!("read {}: {e}", path.display()))),
        }
    }

    async fn write(&self, slot: &str, contents: String) -> Result<(), ServiceError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ServiceError::Storage(format!("create {}: {e}", self.dir.display())))?;
        let path = self.path_for(slot);
        fs::write(&path, contents.as_bytes())
            .await
            .map_err(|e| ServiceError::Storage(format!("write {}: {e}", path.display())))?;
        debug!(path = %path.display(), bytes = contents.len(), "slot written");
        Ok(())
    }
}
