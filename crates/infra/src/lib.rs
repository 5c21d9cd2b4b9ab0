//! `stockroom-infra` — persistence adapters and service orchestration.
//!
//! The [`product_store::ProductStore`] trait is the storage port; this crate
//! ships an in-memory adapter for dev/test and a Postgres adapter for real
//! deployments, plus the [`service::ProductService`] that orchestrates store
//! calls on behalf of the HTTP layer.

pub mod product_store;
pub mod service;

pub use product_store::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};
pub use service::{ProductError, ProductService};
