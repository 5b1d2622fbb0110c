use async_trait::async_trait;

use models::{Product, ProductDraft};

use crate::errors::ServiceError;

/// Trait abstraction for inventory CRUD, so presentation code can run against
/// any store implementation.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn list(&self) -> Vec<Product>;
    async fn search(&self, query: &str) -> Vec<Product>;
    async fn get(&self, id: &str) -> Option<Product>;
    async fn create(&self, draft: ProductDraft) -> Result<Product, ServiceError>;
    async fn update(&self, id: &str, draft: ProductDraft) -> Result<Product, ServiceError>;
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}
