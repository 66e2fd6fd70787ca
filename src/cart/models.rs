//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::models::Product;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A shopping cart.
///
/// Carts carry no quantities: a product added twice is listed twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i64,

    /// Products in the order they were added
    pub products: Vec<Product>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /carts/:id/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddProductInput {
    pub product_id: i64,
}
