use thiserror::Error;

/// Reasons a product draft is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("name is required")]
    EmptyName,
    #[error("price is not a number: {0:?}")]
    InvalidPrice(String),
    #[error("price cannot be negative")]
    NegativePrice,
    #[error("quantity is not a whole number: {0:?}")]
    InvalidQuantity(String),
    #[error("quantity cannot be negative")]
    NegativeQuantity,
}

impl ModelError {
    /// Name of the form field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ModelError::EmptyName => "name",
            ModelError::InvalidPrice(_) | ModelError::NegativePrice => "price",
            ModelError::InvalidQuantity(_) | ModelError::NegativeQuantity => "quantity",
        }
    }
}
