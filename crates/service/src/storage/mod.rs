//! Storage abstractions for service layer
//!
//! A slot is a single named location holding one serialized value, the way a
//! browser's local storage holds one string per key.

pub mod slot_storage;
pub mod file_slot;
pub mod memory_slot;

pub use file_slot::FileSlotStorage;
pub use memory_slot::MemorySlotStorage;
pub use slot_storage::SlotStorage;
