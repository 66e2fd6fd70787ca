//! Product Domain Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::models::Category;
use crate::error::AppError;

// =============================================================================
// Product Domain Models
// =============================================================================

/// A catalog product with its resolved category.
///
/// `category_id` is `0` and `category` zero-valued when the product is
/// uncategorized or its category does not exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: i64,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /products`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductInput {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub price: f64,

    /// `None` or `0` leaves the product uncategorized
    #[serde(default)]
    pub category_id: Option<i64>,
}

/// Body of `PUT /products/:id`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<i64>,
}

impl CreateProductInput {
    /// # Errors
    ///
    /// `AppError::BadRequest` naming the first offending field.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        validate_category_id(self.category_id)
    }
}

impl UpdateProductInput {
    /// # Errors
    ///
    /// `AppError::BadRequest` naming the first offending field.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        validate_category_id(self.category_id)
    }
}

/// Column value for a requested category: `0` means none.
pub(crate) fn category_ref(category_id: Option<i64>) -> Option<i64> {
    category_id.filter(|id| *id > 0)
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}

fn validate_category_id(category_id: Option<i64>) -> Result<(), AppError> {
    match category_id {
        Some(id) if id < 0 => Err(AppError::BadRequest(format!(
            "category_id must not be negative, got {id}"
        ))),
        _ => Ok(()),
    }
}
