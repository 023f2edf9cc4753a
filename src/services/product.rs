// src/services/product.rs
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::dtos::product::ProductRequest;
use crate::models::product::Product;
use crate::store::ProductStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("create_product: product already exists, sku={sku}")]
    Conflict { sku: i64 },
    #[error("{operation}: product not found, sku={sku}")]
    NotFound { operation: &'static str, sku: i64 },
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Create/read/update/delete over the shared [`ProductStore`].
#[derive(Debug, Clone)]
pub struct ProductService {
    store: Arc<ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self { store }
    }

    pub fn create_product(&self, request: ProductRequest) -> ProductResult<Product> {
        info!(sku = request.sku, name = %request.name, "creating product");

        let sku = request.sku;
        let product = Product::new(sku, request.name, request.inventory.warehouses);

        self.store.insert_new(product).ok_or_else(|| {
            let err = ProductError::Conflict { sku };
            warn!(%err, "create rejected");
            err
        })
    }

    pub fn get_product(&self, sku: i64) -> ProductResult<Product> {
        info!(sku, "getting product");

        self.store
            .get(sku)
            .ok_or_else(|| not_found("get_product", sku))
    }

    /// Replaces the inventory of an existing product.
    ///
    /// Identity comes from the stored record: the request's `sku` and `name` are not applied.
    pub fn update_product(&self, sku: i64, request: ProductRequest) -> ProductResult<Product> {
        info!(sku, request_sku = request.sku, "updating product");

        let warehouses = request.inventory.warehouses;
        self.store
            .replace_existing(sku, |existing| existing.with_warehouses(warehouses))
            .ok_or_else(|| not_found("update_product", sku))
    }

    pub fn delete_product(&self, sku: i64) -> ProductResult<bool> {
        info!(sku, "deleting product");

        if self.store.delete(sku) {
            Ok(true)
        } else {
            Err(not_found("delete_product", sku))
        }
    }
}

fn not_found(operation: &'static str, sku: i64) -> ProductError {
    let err = ProductError::NotFound { operation, sku };
    warn!(%err, "product lookup failed");
    err
}
