//! Product storage abstractions.

pub mod postgres;

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use stockroom_core::ProductId;
use stockroom_products::Product;

pub use postgres::PostgresProductStore;

/// Failure raised by a storage adapter.
///
/// Carries the driver error for logging; the HTTP layer never leaks it to
/// clients.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),

    /// The in-process store's lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Durable CRUD primitives keyed by product identifier.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError>;
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;
    /// Insert or update. Assigns the next identifier when the product carries
    /// none, otherwise overwrites the row matching the carried identifier.
    async fn save(&self, product: Product) -> Result<Product, StoreError>;
    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError> {
        (**self).exists_by_id(id).await
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).find_all().await
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        (**self).save(product).await
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        (**self).delete_by_id(id).await
    }
}

/// In-memory product store for tests/dev.
///
/// Rows are keyed by id in a `BTreeMap`, so `find_all` yields ascending-id
/// order; with store-assigned ids that coincides with insertion order.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i64, Product>,
    next_id: i64,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.contains_key(&id.as_i64()))
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.get(&id.as_i64()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn save(&self, mut product: Product) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let id = match product.id {
            Some(id) => id.as_i64(),
            None => {
                inner.next_id += 1;
                inner.next_id
            }
        };
        // Keep the counter ahead of client-supplied ids so later inserts
        // never collide.
        inner.next_id = inner.next_id.max(id);
        product.id = Some(ProductId::new(id));
        inner.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        inner.rows.remove(&id.as_i64());
        Ok(())
    }
}
