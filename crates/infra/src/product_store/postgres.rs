//! Postgres-backed product store.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use stockroom_core::ProductId;
use stockroom_products::Product;

use super::{ProductStore, StoreError};

/// Product store over a `sqlx` Postgres pool.
///
/// One logical table keyed by `id`. Concurrency control is whatever Postgres
/// provides at the row level; this layer adds no locking or versioning.
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `products` table when it does not exist yet.
    ///
    /// Called once at startup. Schema migration beyond this is out of scope.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                quantity BIGINT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn row_to_product(row: &sqlx::postgres::PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: Some(ProductId::new(row.try_get::<i64, _>("id")?)),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        quantity: row.try_get("quantity")?,
    })
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 AS one FROM products WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, price, quantity
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(row_to_product(&row).map_err(StoreError::Database)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, price, quantity
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut products = Vec::with_capacity(rows.len());
        for row in &rows {
            products.push(row_to_product(row).map_err(StoreError::Database)?);
        }
        Ok(products)
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        match product.id {
            None => {
                let row = sqlx::query(
                    r#"
                    INSERT INTO products (name, description, price, quantity)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.quantity)
                .fetch_one(&self.pool)
                .await?;

                let id: i64 = row.try_get("id").map_err(StoreError::Database)?;
                Ok(Product {
                    id: Some(ProductId::new(id)),
                    ..product
                })
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO products (id, name, description, price, quantity)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id)
                    DO UPDATE SET
                        name = EXCLUDED.name,
                        description = EXCLUDED.description,
                        price = EXCLUDED.price,
                        quantity = EXCLUDED.quantity
                    "#,
                )
                .bind(id.as_i64())
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.quantity)
                .execute(&self.pool)
                .await?;

                Ok(product)
            }
        }
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
