use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::{Product, ProductDraft};

use crate::errors::ServiceError;
use crate::inventory::persistence::SlotPersistence;
use crate::inventory::repository::InventoryRepository;
use crate::inventory::search::filter_products;

/// Owner of the product collection.
///
/// Open it once with [`InventoryStore::open`] and share the returned handle.
/// Newest products come first. Mutations keep the write lock while saving, so
/// the slot always reflects the latest completed mutation.
pub struct InventoryStore {
    products: RwLock<Vec<Product>>,
    persistence: SlotPersistence,
}

impl InventoryStore {
    /// Load the saved collection and start serving it.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::ProductDraft;
    /// use service::inventory::{InventoryStore, SlotPersistence};
    /// use service::storage::MemorySlotStorage;
    /// let persistence = SlotPersistence::new(Arc::new(MemorySlotStorage::default()), "products");
    /// let store = tokio_test::block_on(InventoryStore::open(persistence)).unwrap();
    /// let created = tokio_test::block_on(store.create(ProductDraft::new("Widget", "9.99", "3"))).unwrap();
    /// assert_eq!(created.quantity, 3);
    /// assert_eq!(tokio_test::block_on(store.list()).len(), 1);
    /// ```
    pub async fn open(persistence: SlotPersistence) -> Result<Arc<Self>, ServiceError> {
        let products = persistence.load().await?;
        info!(slot = %persistence.slot(), count = products.len(), "inventory opened");
        Ok(Arc::new(Self { products: RwLock::new(products), persistence }))
    }

    /// Full collection in display order.
    pub async fn list(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    /// Products matching `query` by name or description; see [`filter_products`].
    pub async fn search(&self, query: &str) -> Vec<Product> {
        filter_products(&self.products.read().await, query)
    }

    pub async fn get(&self, id: &str) -> Option<Product> {
        self.products.read().await.iter().find(|p| p.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }

    /// Validate the draft and prepend a new product.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, ServiceError> {
        let valid = draft.validate()?;
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: valid.name,
            price: valid.price,
            quantity: valid.quantity,
            description: valid.description,
        };
        let mut products = self.products.write().await;
        products.insert(0, product.clone());
        self.persistence.save(&products).await?;
        info!(id = %product.id, "product_created");
        Ok(product)
    }

    /// Replace every field but the id, keeping the product's position.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn update(&self, id: &str, draft: ProductDraft) -> Result<Product, ServiceError> {
        let valid = draft.validate()?;
        let mut products = self.products.write().await;
        let existing = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ServiceError::not_found("product", id))?;
        existing.name = valid.name;
        existing.price = valid.price;
        existing.quantity = valid.quantity;
        existing.description = valid.description;
        let updated = existing.clone();
        self.persistence.save(&products).await?;
        info!(id = %updated.id, "product_updated");
        Ok(updated)
    }

    /// Remove a product; returns whether it existed. Missing ids are not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        let removed = products.len() != before;
        self.persistence.save(&products).await?;
        if removed {
            info!(id, "product_deleted");
        } else {
            debug!(id, "delete of unknown product ignored");
        }
        Ok(removed)
    }
}

#[async_trait::async_trait]
impl InventoryRepository for InventoryStore {
    async fn list(&self) -> Vec<Product> { self.list().await }
    async fn search(&self, query: &str) -> Vec<Product> { self.search(query).await }
    async fn get(&self, id: &str) -> Option<Product> { self.get(id).await }
    async fn create(&self, draft: ProductDraft) -> Result<Product, ServiceError> { self.create(draft).await }
    async fn update(&self, id: &str, draft: ProductDraft) -> Result<Product, ServiceError> { self.update(id, draft).await }
    async fn delete(&self, id: &str) -> Result<bool, ServiceError> { self.delete(id).await }
}
