//! Inventory domain types shared by the service layer.
//! - `Product` is the persisted record, `ProductDraft` the raw form input.
//! - Validation and numeric coercion live on the draft so every caller applies the same rules.

pub mod errors;
pub mod draft;
pub mod product;

pub use draft::{ProductDraft, ValidDraft};
pub use errors::ModelError;
pub use product::{Product, ProductRow};

#[cfg(test)]
mod tests;
