use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::storage::slot_storage::SlotStorage;

/// In-memory slot storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStorage {
    /// Storage with one slot already holding `contents`.
    pub fn with_slot(slot: &str, contents: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.put(slot, contents.into());
        storage
    }

    fn put(&self, slot: &str, contents: String) {
        let mut slots = self.slots.lock().unwrap_or_else(|p| p.into_inner());
        slots.insert(slot.to_string(), contents);
    }

    /// Raw contents of a slot, bypassing the async trait.
    pub fn snapshot(&self, slot: &str) -> Option<String> {
        let slots = self.slots.lock().unwrap_or_else(|p| p.into_inner());
        slots.get(slot).cloned()
    }
}

#[async_trait]
impl SlotStorage for MemorySlotStorage {
    async fn read(&self, slot: &str) -> Result<Option<String>, ServiceError> {
        Ok(self.snapshot(slot))
    }

    async fn write(&self, slot: &str, contents: String) -> Result<(), ServiceError> {
        self.put(slot, contents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_write_roundtrip() -> Result<(), anyhow::Error> {
        let storage = MemorySlotStorage::default();
        assert_eq!(storage.read("a").await?, None);
        storage.write("a", "1".into()).await?;
        storage.write("a", "2".into()).await?;
        assert_eq!(storage.read("a").await?.as_deref(), Some("2"));
        assert_eq!(storage.snapshot("b"), None);
        Ok(())
    }

    #[test]
    fn with_slot_prefills() {
        let storage = MemorySlotStorage::with_slot("a", "x");
        assert_eq!(storage.snapshot("a").as_deref(), Some("x"));
    }
}
