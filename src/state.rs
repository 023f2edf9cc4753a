// src/state.rs
use std::sync::Arc;

use crate::services::product::ProductService;
use crate::store::ProductStore;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

impl AppState {
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self {
            products: ProductService::new(store),
        }
    }
}
