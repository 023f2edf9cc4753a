// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::models::product::{Product, Warehouse};

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryRequest {
    #[serde(default)]
    pub warehouses: Vec<Warehouse>,
}

/// Body of both create and update. On update only `inventory` is applied.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub sku: i64,
    pub name: String,
    pub inventory: InventoryRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryResponse {
    pub quantity: u64,
    pub warehouses: Vec<Warehouse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResponse {
    pub sku: i64,
    pub name: String,
    pub inventory: InventoryResponse,
    #[serde(rename = "isMarketable")]
    pub is_marketable: bool,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            sku: product.sku(),
            name: product.name().to_string(),
            inventory: InventoryResponse {
                quantity: product.total_quantity(),
                warehouses: product.warehouses().to_vec(),
            },
            is_marketable: product.is_marketable(),
        }
    }
}
