use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ProductId};

/// An inventory line item.
///
/// Mutated wholesale on update (every field overwritten); there is no
/// partial-update semantics. Durable state is owned by the persistence layer,
/// everything else holds request-scoped copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// `None` until the persistence layer assigns an identifier on first save.
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    /// Validate the creation-time business rule: price must not be negative.
    ///
    /// Deliberately not invoked on the update path, which overwrites a row
    /// without re-checking this rule.
    pub fn validate_for_create(&self) -> DomainResult<()> {
        if self.price < 0.0 {
            return Err(DomainError::validation("Price must not be negative"));
        }
        Ok(())
    }

    /// Return a copy of this product carrying the given identifier.
    ///
    /// Used on the update path, where the path identifier wins over whatever
    /// the request body carried.
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen(price: f64) -> Product {
        Product {
            id: None,
            name: "Pen".to_string(),
            description: "Blue ink".to_string(),
            price,
            quantity: 100,
        }
    }

    #[test]
    fn non_negative_price_passes_validation() {
        assert!(pen(1.5).validate_for_create().is_ok());
        assert!(pen(0.0).validate_for_create().is_ok());
    }

    #[test]
    fn negative_price_is_rejected_with_the_wire_message() {
        let err = pen(-5.0).validate_for_create().unwrap_err();
        assert_eq!(err.to_string(), "Price must not be negative");
    }

    #[test]
    fn with_id_overwrites_a_body_supplied_identifier() {
        let product = pen(1.5).with_id(ProductId::new(7)).with_id(ProductId::new(1));
        assert_eq!(product.id, Some(ProductId::new(1)));
    }
}
