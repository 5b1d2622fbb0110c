use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub quantity: String,
    #[serde(default)]
    pub description: String,
}

/// Draft that passed validation, with numbers coerced.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub price: f64,
    pub quantity: u64,
    pub description: Option<String>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self { name: name.into(), price: price.into(), quantity: quantity.into(), description: String::new() }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the draft and coerce its numeric fields.
    ///
    /// Blank price or quantity count as zero. The name is kept as typed and an
    /// empty description becomes `None`.
    ///
    /// ```
    /// use models::draft::ProductDraft;
    /// let valid = ProductDraft::new("Widget", "9.99", "3").validate().unwrap();
    /// assert_eq!(valid.price, 9.99);
    /// assert_eq!(valid.quantity, 3);
    /// assert!(valid.description.is_none());
    /// ```
    pub fn validate(&self) -> Result<ValidDraft, ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        let price = parse_price(&self.price)?;
        let quantity = parse_quantity(&self.quantity)?;
        let description = if self.description.is_empty() { None } else { Some(self.description.clone()) };
        Ok(ValidDraft { name: self.name.clone(), price, quantity, description })
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_price(raw: &str) -> Result<f64, ModelError> {
    let price = parse_number(raw).ok_or_else(|| ModelError::InvalidPrice(raw.to_string()))?;
    if price < 0.0 {
        return Err(ModelError::NegativePrice);
    }
    // fold -0 into 0
    Ok(price + 0.0)
}

fn parse_quantity(raw: &str) -> Result<u64, ModelError> {
    let quantity = parse_number(raw)
        .filter(|v| v.fract() == 0.0)
        .ok_or_else(|| ModelError::InvalidQuantity(raw.to_string()))?;
    if quantity < 0.0 {
        return Err(ModelError::NegativeQuantity);
    }
    if quantity > u64::MAX as f64 {
        return Err(ModelError::InvalidQuantity(raw.to_string()));
    }
    Ok(quantity as u64)
}
