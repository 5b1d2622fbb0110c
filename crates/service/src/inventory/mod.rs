//! Inventory module: persistence, store and search.
//!
//! The store owns the product collection; every mutation is mirrored to a
//! storage slot through `SlotPersistence`.

pub mod persistence;
pub mod repository;
pub mod search;
pub mod store;

pub use persistence::SlotPersistence;
pub use repository::InventoryRepository;
pub use store::InventoryStore;
