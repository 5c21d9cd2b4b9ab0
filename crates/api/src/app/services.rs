//! Service construction and store adapter selection.

use std::sync::Arc;

use sqlx::PgPool;

use stockroom_infra::{InMemoryProductStore, PostgresProductStore, ProductService, ProductStore};

/// Everything the handlers need, built once at process start.
pub struct AppServices {
    pub products: ProductService,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            products: ProductService::new(store),
        }
    }
}

/// Build services from the environment.
///
/// `DATABASE_URL` set: connect a Postgres pool and ensure the schema exists
/// (startup aborts on failure). Unset: fall back to the in-memory store.
pub async fn build_services() -> AppServices {
    match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPool::connect(&database_url)
                .await
                .expect("failed to connect to Postgres");

            let store = PostgresProductStore::new(pool);
            store
                .ensure_schema()
                .await
                .expect("failed to ensure products schema");

            tracing::info!("using Postgres product store");
            AppServices::new(Arc::new(store))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using in-memory product store");
            AppServices::new(Arc::new(InMemoryProductStore::new()))
        }
    }
}
