//! Request/response DTOs and mapping to/from domain types.
//!
//! The wire shape currently mirrors the stored shape field for field; the
//! explicit mapping keeps the wire contract decoupled from the storage
//! contract so the two can diverge later.

use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;
use stockroom_products::Product;

/// Product as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

pub fn to_domain(dto: ProductDto) -> Product {
    Product {
        id: dto.id.map(ProductId::new),
        name: dto.name,
        description: dto.description,
        price: dto.price,
        quantity: dto.quantity,
    }
}

pub fn to_dto(product: Product) -> ProductDto {
    ProductDto {
        id: product.id.map(i64::from),
        name: product.name,
        description: product.description,
        price: product.price,
        quantity: product.quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_a_structural_round_trip() {
        let dto = ProductDto {
            id: Some(3),
            name: "Pen".to_string(),
            description: "Blue ink".to_string(),
            price: 1.5,
            quantity: 100,
        };

        assert_eq!(to_dto(to_domain(dto.clone())), dto);
    }

    #[test]
    fn absent_id_maps_to_none_both_ways() {
        let dto = ProductDto {
            id: None,
            name: "Pen".to_string(),
            description: String::new(),
            price: 0.0,
            quantity: 0,
        };

        let product = to_domain(dto);
        assert!(product.id.is_none());
        assert!(to_dto(product).id.is_none());
    }
}
