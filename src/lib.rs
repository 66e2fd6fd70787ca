//! Shop API Library
//!
//! This library provides a small e-commerce backend: CRUD endpoints for
//! products, categories and shopping carts, persisted in SQLite via `sqlx`.

// Domain modules
pub mod cart;
pub mod category;
pub mod product;

// Infrastructure
pub mod config;
pub mod error;
pub mod lookup;
pub mod router;
pub mod state;
pub mod store;
