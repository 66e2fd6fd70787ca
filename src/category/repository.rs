//! Category repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::models::Category;
use crate::product::ProductRepository;
use crate::store::{Store, StoreError};

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            products: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for category database operations.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRepository<'a> {
    store: &'a Store,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Insert a category. A new category has no products.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the insert fails.
    pub async fn create(&self, name: &str) -> Result<Category, StoreError> {
        let now = Utc::now();

        let id = sqlx::query(
            "INSERT INTO categories (name, created_at, updated_at) VALUES (?, ?, ?)",
        )
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(self.store.pool())
        .await?
        .last_insert_rowid();

        Ok(Category {
            id,
            name: name.to_string(),
            products: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a category by its ID, with its products.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if a query fails.
    pub async fn find(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, created_at, updated_at FROM categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.store.pool())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut category = Category::from(row);
        category.products = ProductRepository::new(self.store)
            .list_by_category(id)
            .await?;

        Ok(Some(category))
    }
}
