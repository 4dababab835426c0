//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The display strings double as the client-facing messages of the HTTP
/// layer, so keep them stable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No product with the requested id exists.
    #[error("Product not found")]
    NotFound,

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A required creation field was missing or empty.
    #[error("Name and price are required")]
    InvalidInput,

    /// Another live product already carries the requested name.
    #[error("Product name must be unique")]
    DuplicateName,

    /// Every id drawn for a new product collided with a live one.
    #[error("no free product id available")]
    IdsExhausted,
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_client_contract() {
        assert_eq!(DomainError::NotFound.to_string(), "Product not found");
        assert_eq!(DomainError::InvalidInput.to_string(), "Name and price are required");
        assert_eq!(DomainError::DuplicateName.to_string(), "Product name must be unique");
    }
}
