use std::sync::Arc;

use tracing::{debug, warn};

use models::Product;

use crate::errors::ServiceError;
use crate::storage::SlotStorage;

/// Mirrors the product collection into one named storage slot.
///
/// The slot holds a JSON array of products. Unparseable contents load as an
/// empty collection; that data is overwritten by the next save.
#[derive(Clone)]
pub struct SlotPersistence {
    storage: Arc<dyn SlotStorage>,
    slot: String,
}

impl SlotPersistence {
    pub fn new(storage: Arc<dyn SlotStorage>, slot: impl Into<String>) -> Self {
        Self { storage, slot: slot.into() }
    }

    pub fn slot(&self) -> &str { &self.slot }

    /// Read the saved collection. Absent or corrupt slots yield an empty vec;
    /// only storage failures are errors.
    pub async fn load(&self) -> Result<Vec<Product>, ServiceError> {
        let Some(raw) = self.storage.read(&self.slot).await? else {
            debug!(slot = %self.slot, "slot empty; starting with no products");
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<Product>>(&raw) {
            Ok(products) => {
                debug!(slot = %self.slot, count = products.len(), "products loaded");
                Ok(products)
            }
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "slot contents unreadable; starting with no products");
                Ok(Vec::new())
            }
        }
    }

    /// Serialize the whole collection and overwrite the slot.
    pub async fn save(&self, products: &[Product]) -> Result<(), ServiceError> {
        let data = serde_json::to_string(products).map_err(ServiceError::storage)?;
        self.storage.write(&self.slot, data).await
    }
}
