//! Product service (application-level orchestration).
//!
//! Sits between the HTTP handlers and the storage port. Each operation is a
//! single read-modify-write against the injected [`ProductStore`]; errors are
//! mapped into a consistent [`ProductError`] that the HTTP layer translates
//! exactly once.

use std::sync::Arc;

use thiserror::Error;

use stockroom_core::{DomainError, ProductId};
use stockroom_products::Product;

use crate::product_store::{ProductStore, StoreError};

/// Failure raised by the product service.
#[derive(Debug, Error)]
pub enum ProductError {
    /// The referenced product does not exist.
    #[error("Product not found with id: {0}")]
    NotFound(ProductId),

    /// A business rule rejected the input (currently only the
    /// non-negative-price rule on creation).
    #[error("{0}")]
    Validation(String),

    /// The storage adapter failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DomainError> for ProductError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => ProductError::Validation(msg),
            DomainError::InvalidId(msg) => ProductError::Validation(msg),
        }
    }
}

/// Orchestrates product CRUD against the storage port.
///
/// Constructed once at process start with the chosen store adapter and shared
/// behind an `Arc` by the HTTP layer.
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Create a product. Rejects a negative price before touching storage.
    pub async fn create(&self, product: Product) -> Result<Product, ProductError> {
        product.validate_for_create()?;
        Ok(self.store.save(product).await?)
    }

    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, ProductError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// All products, in whatever order the store yields.
    pub async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.store.find_all().await?)
    }

    /// Replace every field of the product at `id` with `product`'s fields.
    ///
    /// The path id wins over any id carried in the body. The price rule is
    /// intentionally not re-checked here; only creation validates it.
    pub async fn update(&self, id: ProductId, product: Product) -> Result<Product, ProductError> {
        if !self.store.exists_by_id(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(self.store.save(product.with_id(id)).await?)
    }

    pub async fn delete(&self, id: ProductId) -> Result<(), ProductError> {
        if !self.store.exists_by_id(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(self.store.delete_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_store::InMemoryProductStore;

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductStore::new()))
    }

    fn pen(price: f64) -> Product {
        Product {
            id: None,
            name: "Pen".to_string(),
            description: "Blue ink".to_string(),
            price,
            quantity: 100,
        }
    }

    #[tokio::test]
    async fn create_assigns_an_id_and_round_trips() {
        let svc = service();
        let created = svc.create(pen(1.5)).await.unwrap();
        let id = created.id.expect("created product must carry an id");

        let found = svc.get_by_id(id).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(found.name, "Pen");
        assert_eq!(found.price, 1.5);
    }

    #[tokio::test]
    async fn create_rejects_a_negative_price_and_persists_nothing() {
        let svc = service();
        let err = svc.create(pen(-1.0)).await.unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
        assert_eq!(err.to_string(), "Price must not be negative");
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn absent_ids_fail_with_not_found() {
        let svc = service();
        let id = ProductId::new(42);

        assert!(matches!(
            svc.get_by_id(id).await.unwrap_err(),
            ProductError::NotFound(_)
        ));
        assert!(matches!(
            svc.update(id, pen(1.5)).await.unwrap_err(),
            ProductError::NotFound(_)
        ));
        let err = svc.delete(id).await.unwrap_err();
        assert_eq!(err.to_string(), "Product not found with id: 42");
    }

    #[tokio::test]
    async fn update_overwrites_every_field_and_ignores_the_body_id() {
        let svc = service();
        let created = svc.create(pen(1.5)).await.unwrap();
        let id = created.id.unwrap();

        let mut replacement = pen(2.0);
        replacement.name = "Fountain pen".to_string();
        replacement.quantity = 5;
        replacement.id = Some(ProductId::new(999));

        let updated = svc.update(id, replacement).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "Fountain pen");
        assert_eq!(updated.quantity, 5);
        assert_eq!(svc.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_does_not_re_validate_the_price_rule() {
        // Creation rejects negative prices; update deliberately does not.
        let svc = service();
        let id = svc.create(pen(1.5)).await.unwrap().id.unwrap();

        let updated = svc.update(id, pen(-5.0)).await.unwrap();
        assert_eq!(updated.price, -5.0);
    }

    #[tokio::test]
    async fn second_delete_fails_with_not_found() {
        let svc = service();
        let id = svc.create(pen(1.5)).await.unwrap().id.unwrap();

        svc.delete(id).await.unwrap();
        assert!(matches!(
            svc.delete(id).await.unwrap_err(),
            ProductError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn list_all_returns_every_created_product() {
        let svc = service();
        let first = svc.create(pen(1.5)).await.unwrap();
        let mut second = pen(0.5);
        second.name = "Pencil".to_string();
        let second = svc.create(second).await.unwrap();

        let all = svc.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&first));
        assert!(all.contains(&second));
    }
}
