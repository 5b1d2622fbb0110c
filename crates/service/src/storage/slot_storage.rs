use async_trait::async_trait;

use crate::errors::ServiceError;

/// Named-slot key-value storage.
/// Implementations can be file-backed, in-memory, or remote KV.
#[async_trait]
pub trait SlotStorage: Send + Sync {
    /// Contents of the slot, or `None` if it was never written.
    async fn read(&self, slot: &str) -> Result<Option<String>, ServiceError>;
    /// Replace the slot's contents.
    async fn write(&self, slot: &str, contents: String) -> Result<(), ServiceError>;
}
