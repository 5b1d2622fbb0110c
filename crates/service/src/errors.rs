use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(#[from] ModelError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: &str) -> Self { Self::NotFound(format!("{entity} {id} not found")) }

    pub fn storage(err: impl std::fmt::Display) -> Self { Self::Storage(err.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Storage(_) => 1200,
        }
    }

    pub fn is_validation(&self) -> bool { matches!(self, ServiceError::Validation(_)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_become_validation_errors() {
        let err: ServiceError = ModelError::EmptyName.into();
        assert!(err.is_validation());
        assert_eq!(err.code(), 1001);
        assert_eq!(err.to_string(), "validation error: name is required");
    }

    #[test]
    fn not_found_message_names_the_id() {
        let err = ServiceError::not_found("product", "abc");
        assert_eq!(err.to_string(), "not found: product abc not found");
        assert_eq!(err.code(), 1003);
    }
}
