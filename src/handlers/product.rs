// src/handlers/product.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::instrument;

use crate::dtos::product::{ProductRequest, ProductResponse};
use crate::error::AppError;
use crate::state::AppState;

// POST /product - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Json(payload) = payload?;
    let product = state.products.create_product(payload)?;

    Ok(Json(ProductResponse::from(product)))
}

// GET /product/{sku} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(sku): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.products.get_product(sku)?;

    Ok(Json(ProductResponse::from(product)))
}

// PUT /product/{sku} - Replace product inventory
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(sku): Path<i64>,
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Json(payload) = payload?;
    let product = state.products.update_product(sku, payload)?;

    Ok(Json(ProductResponse::from(product)))
}

// DELETE /product/{sku} - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(sku): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<bool>, AppError> {
    let deleted = state.products.delete_product(sku)?;

    Ok(Json(deleted))
}
