//! `stockroom-products` — the product catalog domain.

pub mod product;

pub use product::Product;
