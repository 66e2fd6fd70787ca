//! Product repository for database operations.
//!
//! Every read joins the product's category so callers always receive a
//! fully shaped [`Product`]. Product lists for categories and carts are
//! served from here as well.

use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;

use super::models::{category_ref, CreateProductInput, Product, UpdateProductInput};
use crate::category::models::Category;
use crate::store::{Store, StoreError};

const PRODUCT_COLUMNS: &str = "p.id, p.name, p.description, p.price, p.category_id, \
     p.created_at, p.updated_at, \
     c.name AS category_name, c.created_at AS category_created_at, \
     c.updated_at AS category_updated_at";

/// Internal row type: a product joined with its (optional) category.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    category_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_name: Option<String>,
    category_created_at: Option<DateTime<Utc>>,
    category_updated_at: Option<DateTime<Utc>>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let category = match (
            row.category_id,
            row.category_name,
            row.category_created_at,
            row.category_updated_at,
        ) {
            (Some(id), Some(name), Some(created_at), Some(updated_at)) => Category {
                id,
                name,
                products: Vec::new(),
                created_at,
                updated_at,
            },
            _ => Category::default(),
        };

        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            category_id: row.category_id.unwrap_or(0),
            category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Timestamp for an update that is strictly later than anything stored so far.
fn next_update_stamp(
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    let floor = created_at.max(updated_at);
    if now > floor {
        now
    } else {
        floor + Duration::microseconds(1)
    }
}

/// Repository for product database operations.
#[derive(Debug, Clone, Copy)]
pub struct ProductRepository<'a> {
    store: &'a Store,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Insert a product and return it with its category resolved.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the insert or the read-back fails.
    pub async fn create(&self, input: &CreateProductInput) -> Result<Product, StoreError> {
        let now = Utc::now();

        let id = sqlx::query(
            r"
            INSERT INTO products (name, description, price, category_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(category_ref(input.category_id))
        .bind(now)
        .bind(now)
        .execute(self.store.pool())
        .await?
        .last_insert_rowid();

        self.find(id)
            .await?
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn find(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p \
             LEFT JOIN categories c ON c.id = p.category_id \
             WHERE p.id = ?"
        );

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(self.store.pool())
            .await?;

        Ok(row.map(Product::from))
    }

    /// All products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p \
             LEFT JOIN categories c ON c.id = p.category_id \
             ORDER BY p.id"
        );

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(self.store.pool())
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Products belonging to a category, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<Product>, StoreError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p \
             LEFT JOIN categories c ON c.id = p.category_id \
             WHERE p.category_id = ? \
             ORDER BY p.id"
        );

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(category_id)
            .fetch_all(self.store.pool())
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Products in a cart, one entry per add, in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn list_by_cart(&self, cart_id: i64) -> Result<Vec<Product>, StoreError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM cart_products cp \
             JOIN products p ON p.id = cp.product_id \
             LEFT JOIN categories c ON c.id = p.category_id \
             WHERE cp.cart_id = ? \
             ORDER BY cp.id"
        );

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(cart_id)
            .fetch_all(self.store.pool())
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Overwrite the fields present in `changes`.
    ///
    /// Returns `None` if no product has this ID. The lookup and the write are
    /// separate statements.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if a query fails.
    pub async fn update(
        &self,
        id: i64,
        changes: &UpdateProductInput,
    ) -> Result<Option<Product>, StoreError> {
        let Some(current) = self.find(id).await? else {
            return Ok(None);
        };

        let name = changes.name.as_deref().unwrap_or(&current.name);
        let description = changes
            .description
            .as_deref()
            .unwrap_or(&current.description);
        let price = changes.price.unwrap_or(current.price);
        let category_id = category_ref(changes.category_id.or(Some(current.category_id)));
        let updated_at = next_update_stamp(current.created_at, current.updated_at, Utc::now());

        sqlx::query(
            r"
            UPDATE products
            SET name = ?, description = ?, price = ?, category_id = ?, updated_at = ?
            WHERE id = ?
            ",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(category_id)
        .bind(updated_at)
        .bind(id)
        .execute(self.store.pool())
        .await?;

        self.find(id).await
    }

    /// Delete a product. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.store.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
