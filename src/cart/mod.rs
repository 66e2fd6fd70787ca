//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart logic, including:
//! - Domain models (Cart, add-product input)
//! - Repository (cart rows and the cart/product association)
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod repository;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::Cart;
pub use repository::CartRepository;
