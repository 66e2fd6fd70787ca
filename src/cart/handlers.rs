//! REST API handlers for shopping cart operations
//!
//! Under the legacy policy carts never answer `404`: an unknown or malformed
//! cart id yields a zero-valued cart.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::models::{AddProductInput, Cart};
use super::repository::CartRepository;
use crate::error::{AppError, Result};
use crate::lookup::{path_id, LegacyAbsence, Lookup, NotFoundPolicy, PathSegment};
use crate::product::ProductRepository;
use crate::state::AppState;
use crate::store::Store;

/// Creates routes for cart-related operations
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/carts", post(create_cart))
        .route("/carts/:id", get(get_cart))
        .route("/carts/:id/products", post(add_product_to_cart))
}

/// Endpoint: POST /carts
/// Any request body is ignored.
async fn create_cart(State(store): State<Store>) -> Result<(StatusCode, Json<Cart>)> {
    let cart = CartRepository::new(&store).create().await?;
    tracing::info!(cart_id = cart.id, "Cart created");

    Ok((StatusCode::CREATED, Json(cart)))
}

/// Endpoint: GET /carts/:id
async fn get_cart(
    State(store): State<Store>,
    State(policy): State<NotFoundPolicy>,
    segment: PathSegment,
) -> Result<Json<Cart>> {
    let repo = CartRepository::new(&store);
    let lookup = Lookup::resolve(segment, |id| repo.find(id)).await?;

    let cart = policy.settle(lookup, LegacyAbsence::ZeroValue, "cart")?;
    Ok(Json(cart))
}

/// Endpoint: POST /carts/:id/products
async fn add_product_to_cart(
    State(store): State<Store>,
    State(policy): State<NotFoundPolicy>,
    segment: PathSegment,
    payload: std::result::Result<Json<AddProductInput>, JsonRejection>,
) -> Result<Json<Cart>> {
    let Json(input) = payload?;

    let cart_id = match path_id(segment) {
        Ok(id) => id,
        Err(raw) => {
            let cart = policy.settle(Lookup::Malformed(raw), LegacyAbsence::ZeroValue, "cart")?;
            return Ok(Json(cart));
        }
    };

    let product = ProductRepository::new(&store)
        .find(input.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", input.product_id)))?;

    match CartRepository::new(&store).add_product(cart_id, product.id).await? {
        Some(cart) => {
            tracing::info!(cart_id, product_id = product.id, "Product added to cart");
            Ok(Json(cart))
        }
        None => match policy {
            // Nothing is persisted; the reply only echoes the requested product.
            NotFoundPolicy::Legacy => {
                tracing::warn!(cart_id, product_id = product.id, "Product added to unknown cart");
                Ok(Json(Cart {
                    products: vec![product],
                    ..Cart::default()
                }))
            }
            NotFoundPolicy::Strict => Err(AppError::NotFound(format!("cart {cart_id}"))),
        },
    }
}
