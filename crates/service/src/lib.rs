//! Service layer for the inventory manager.
//! - `storage`: named-slot key-value backends (file, memory).
//! - `inventory`: persistence adapter, product store and search.
//! - `form`: form/edit/search session driving the store from user intents.
//! - `runtime`: config-driven bootstrap.

pub mod errors;
pub mod storage;
pub mod inventory;
pub mod form;
pub mod runtime;

pub use errors::ServiceError;
pub use form::{Confirm, FormMode, FormSession};
pub use inventory::{InventoryRepository, InventoryStore, SlotPersistence};
