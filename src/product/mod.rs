//! Product Domain Module
//!
//! - Domain models (Product, create/update inputs, field validation)
//! - Repository (SQLite queries, category resolution)
//! - REST API handlers for `/products`

pub mod handlers;
pub mod models;
pub mod repository;

pub use handlers::routes;
pub use models::Product;
pub use repository::ProductRepository;
