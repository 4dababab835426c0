use catalog_core::{DomainError, DomainResult, Entity, ProductId};

/// Catalog entry. Immutable once created; the repository only adds and removes.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Command: CreateProduct.
///
/// Both fields are optional so that an absent field and an empty one are
/// rejected the same way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl CreateProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
        }
    }

    /// Returns the name and price when both are usable.
    ///
    /// A name is usable when non-empty (whitespace counts). A price is usable
    /// when present and neither zero nor NaN, so a price of `0` is rejected.
    pub fn validate(self) -> DomainResult<(String, f64)> {
        let name = self.name.filter(|n| !n.is_empty());
        let price = self.price.filter(|p| *p != 0.0 && !p.is_nan());

        match (name, price) {
            (Some(name), Some(price)) => Ok((name, price)),
            _ => Err(DomainError::InvalidInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_name_and_price() {
        let (name, price) = CreateProduct::new("Mouse", 19.99).validate().unwrap();
        assert_eq!(name, "Mouse");
        assert_eq!(price, 19.99);
    }

    #[test]
    fn validate_rejects_missing_fields() {
        let missing_name = CreateProduct {
            name: None,
            price: Some(1.0),
        };
        let missing_price = CreateProduct {
            name: Some("Mouse".to_string()),
            price: None,
        };

        assert_eq!(missing_name.validate().unwrap_err(), DomainError::InvalidInput);
        assert_eq!(missing_price.validate().unwrap_err(), DomainError::InvalidInput);
        assert_eq!(CreateProduct::default().validate().unwrap_err(), DomainError::InvalidInput);
    }

    #[test]
    fn validate_rejects_empty_name() {
        let err = CreateProduct::new("", 10.0).validate().unwrap_err();
        assert_eq!(err, DomainError::InvalidInput);
    }

    #[test]
    fn validate_rejects_zero_and_nan_price() {
        assert_eq!(
            CreateProduct::new("Mouse", 0.0).validate().unwrap_err(),
            DomainError::InvalidInput
        );
        assert_eq!(
            CreateProduct::new("Mouse", -0.0).validate().unwrap_err(),
            DomainError::InvalidInput
        );
        assert_eq!(
            CreateProduct::new("Mouse", f64::NAN).validate().unwrap_err(),
            DomainError::InvalidInput
        );
    }

    #[test]
    fn validate_keeps_whitespace_names_and_negative_prices() {
        assert!(CreateProduct::new("  ", 5.0).validate().is_ok());
        assert!(CreateProduct::new("Refund", -5.0).validate().is_ok());
    }
}
