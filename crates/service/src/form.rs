//! Form session: the state behind the product form, search box and table.
//!
//! Holds the draft being typed, which product (if any) is being edited and
//! the current search query, and turns user intents into store calls.

use std::sync::Arc;

use tracing::debug;

use models::{Product, ProductDraft, ProductRow};

use crate::errors::ServiceError;
use crate::inventory::InventoryRepository;

pub const DELETE_PROMPT: &str = "Delete product?";

/// Whether the form creates a new product or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Interactive yes/no confirmation.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Form state over any [`InventoryRepository`], usually an `InventoryStore`.
pub struct FormSession<R: InventoryRepository> {
    store: Arc<R>,
    draft: ProductDraft,
    editing: Option<String>,
    query: String,
}

impl<R: InventoryRepository> FormSession<R> {
    pub fn new(store: Arc<R>) -> Self {
        Self { store, draft: ProductDraft::default(), editing: None, query: String::new() }
    }

    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() { FormMode::Edit } else { FormMode::Create }
    }

    pub fn draft(&self) -> &ProductDraft { &self.draft }

    pub fn editing(&self) -> Option<&str> { self.editing.as_deref() }

    pub fn query(&self) -> &str { &self.query }

    pub fn set_name(&mut self, value: impl Into<String>) { self.draft.name = value.into(); }
    pub fn set_price(&mut self, value: impl Into<String>) { self.draft.price = value.into(); }
    pub fn set_quantity(&mut self, value: impl Into<String>) { self.draft.quantity = value.into(); }
    pub fn set_description(&mut self, value: impl Into<String>) { self.draft.description = value.into(); }
    pub fn set_query(&mut self, value: impl Into<String>) { self.query = value.into(); }

    /// Select a product for editing and copy its fields into the form.
    pub fn edit(&mut self, product: &Product) {
        self.draft = product.to_draft();
        self.editing = Some(product.id.clone());
    }

    /// Clear the form and leave edit mode.
    pub fn cancel(&mut self) {
        self.draft = ProductDraft::default();
        self.editing = None;
    }

    /// Create or update from the current draft.
    ///
    /// On success the form is cleared. A validation error leaves the draft as
    /// typed so it can be corrected. If the product being edited has vanished
    /// the submission does nothing: the form is cleared and `Ok(None)` returned.
    pub async fn submit(&mut self) -> Result<Option<Product>, ServiceError> {
        let result = match &self.editing {
            Some(id) => self.store.update(id, self.draft.clone()).await,
            None => self.store.create(self.draft.clone()).await,
        };
        match result {
            Ok(product) => {
                self.cancel();
                Ok(Some(product))
            }
            Err(ServiceError::NotFound(what)) => {
                debug!(%what, "edited product no longer exists; discarding form");
                self.cancel();
                Ok(None)
            }
            Err(ServiceError::Validation(reason)) => {
                debug!(field = reason.field(), %reason, "form submission rejected");
                Err(ServiceError::Validation(reason))
            }
            Err(e) => Err(e),
        }
    }

    /// Delete `id` once `confirm` agrees.
    ///
    /// Returns `true` only when the user confirmed and a product was removed.
    pub async fn delete(&self, id: &str, confirm: &impl Confirm) -> Result<bool, ServiceError> {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(false);
        }
        self.store.delete(id).await
    }

    /// Products matching the current query.
    pub async fn visible(&self) -> Vec<Product> {
        self.store.search(&self.query).await
    }

    /// Table rows for the current query.
    pub async fn rows(&self) -> Vec<ProductRow> {
        self.visible().await.iter().map(ProductRow::from).collect()
    }
}
