//! REST API handlers for categories

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::models::{Category, CreateCategoryInput};
use super::repository::CategoryRepository;
use crate::error::Result;
use crate::lookup::{LegacyAbsence, Lookup, NotFoundPolicy, PathSegment};
use crate::state::AppState;
use crate::store::Store;

/// Creates routes for category operations
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", post(create_category))
        .route("/categories/:id", get(get_category))
}

/// Endpoint: POST /categories
async fn create_category(
    State(store): State<Store>,
    payload: std::result::Result<Json<CreateCategoryInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>)> {
    let Json(input) = payload?;
    input.validate()?;

    let category = CategoryRepository::new(&store).create(&input.name).await?;
    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// Endpoint: GET /categories/:id
/// Unknown ids are `404`. Malformed ids are `404` under the legacy policy and
/// `400` under the strict one.
async fn get_category(
    State(store): State<Store>,
    State(policy): State<NotFoundPolicy>,
    segment: PathSegment,
) -> Result<Json<Category>> {
    let repo = CategoryRepository::new(&store);
    let lookup = Lookup::resolve(segment, |id| repo.find(id)).await?;

    let category = policy.settle(lookup, LegacyAbsence::NotFound, "category")?;
    Ok(Json(category))
}
