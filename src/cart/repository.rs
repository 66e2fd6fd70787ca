//! Cart repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::models::Cart;
use crate::product::ProductRepository;
use crate::store::{Store, StoreError};

#[derive(Debug, FromRow)]
struct CartRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Repository for cart database operations.
#[derive(Debug, Clone, Copy)]
pub struct CartRepository<'a> {
    store: &'a Store,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Insert an empty cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the insert fails.
    pub async fn create(&self) -> Result<Cart, StoreError> {
        let now = Utc::now();

        let id = sqlx::query("INSERT INTO carts (created_at, updated_at) VALUES (?, ?)")
            .bind(now)
            .bind(now)
            .execute(self.store.pool())
            .await?
            .last_insert_rowid();

        Ok(Cart {
            id,
            products: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a cart by its ID, with its products.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if a query fails.
    pub async fn find(&self, id: i64) -> Result<Option<Cart>, StoreError> {
        let row = sqlx::query_as::<_, CartRow>(
            "SELECT id, created_at, updated_at FROM carts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.store.pool())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let products = ProductRepository::new(self.store).list_by_cart(id).await?;

        Ok(Some(Cart {
            id: row.id,
            products,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }

    /// Record `product_id` in the cart and touch the cart's `updated_at`.
    ///
    /// Returns `None`, writing nothing, if the cart does not exist. The caller
    /// is responsible for checking that the product exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if a query fails.
    pub async fn add_product(
        &self,
        cart_id: i64,
        product_id: i64,
    ) -> Result<Option<Cart>, StoreError> {
        let touched = sqlx::query("UPDATE carts SET updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(cart_id)
            .execute(self.store.pool())
            .await?;

        if touched.rows_affected() == 0 {
            return Ok(None);
        }

        sqlx::query("INSERT INTO cart_products (cart_id, product_id) VALUES (?, ?)")
            .bind(cart_id)
            .bind(product_id)
            .execute(self.store.pool())
            .await?;

        self.find(cart_id).await
    }
}
