//! REST API handlers for products
//!
//! `GET /products/:id` answers an unknown or malformed id with a zero-valued
//! product under the legacy policy; `PUT` answers `404`; `DELETE` always
//! answers `204`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::models::{CreateProductInput, Product, UpdateProductInput};
use super::repository::ProductRepository;
use crate::error::Result;
use crate::lookup::{LegacyAbsence, Lookup, NotFoundPolicy, PathSegment};
use crate::state::AppState;
use crate::store::Store;

/// Creates routes for product operations
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product).get(list_products))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Endpoint: POST /products
async fn create_product(
    State(store): State<Store>,
    payload: std::result::Result<Json<CreateProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(input) = payload?;
    input.validate()?;

    let product = ProductRepository::new(&store).create(&input).await?;
    tracing::info!(product_id = product.id, category_id = product.category_id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Endpoint: GET /products
async fn list_products(State(store): State<Store>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(&store).list().await?;
    Ok(Json(products))
}

/// Endpoint: GET /products/:id
async fn get_product(
    State(store): State<Store>,
    State(policy): State<NotFoundPolicy>,
    segment: PathSegment,
) -> Result<Json<Product>> {
    let repo = ProductRepository::new(&store);
    let lookup = Lookup::resolve(segment, |id| repo.find(id)).await?;

    let product = policy.settle(lookup, LegacyAbsence::ZeroValue, "product")?;
    Ok(Json(product))
}

/// Endpoint: PUT /products/:id
async fn update_product(
    State(store): State<Store>,
    State(policy): State<NotFoundPolicy>,
    segment: PathSegment,
    payload: std::result::Result<Json<UpdateProductInput>, JsonRejection>,
) -> Result<Json<Product>> {
    let Json(changes) = payload?;
    changes.validate()?;

    let repo = ProductRepository::new(&store);
    let lookup = Lookup::resolve(segment, |id| repo.update(id, &changes)).await?;

    let product = policy.settle(lookup, LegacyAbsence::NotFound, "product")?;
    tracing::info!(product_id = product.id, "Product updated");

    Ok(Json(product))
}

/// Endpoint: DELETE /products/:id
async fn delete_product(
    State(store): State<Store>,
    State(policy): State<NotFoundPolicy>,
    segment: PathSegment,
) -> Result<StatusCode> {
    let repo = ProductRepository::new(&store);
    let lookup = Lookup::resolve(segment, |id| async move {
        repo.delete(id).await.map(|deleted| deleted.then_some(id))
    })
    .await?;

    // Under the legacy policy an absent product is deleted "successfully".
    let deleted = policy.settle(lookup, LegacyAbsence::ZeroValue, "product")?;
    if deleted != 0 {
        tracing::info!(product_id = deleted, "Product deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
