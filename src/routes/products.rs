use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::product::{
    get_product, create_product, update_product, delete_product
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/product", post(create_product))
        .route("/product/{sku}", get(get_product).put(update_product).delete(delete_product))
}
