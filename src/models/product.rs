use serde::{Deserialize, Serialize};

use crate::models::inventory::InventorySummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarehouseType {
    Ecommerce,
    PhysicalStore,
}

/// Stock held for a product at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub locality: String,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub kind: WarehouseType,
}

impl Warehouse {
    pub fn new(locality: impl Into<String>, quantity: u32, kind: WarehouseType) -> Self {
        Self {
            locality: locality.into(),
            quantity,
            kind,
        }
    }
}

/// A stored product record.
///
/// `total_quantity` and `is_marketable` are derived from `warehouses` and are only
/// ever set through [`Product::new`], so they cannot drift from the warehouse list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    sku: i64,
    name: String,
    warehouses: Vec<Warehouse>,
    total_quantity: u64,
    is_marketable: bool,
}

impl Product {
    pub fn new(sku: i64, name: impl Into<String>, warehouses: Vec<Warehouse>) -> Self {
        let InventorySummary { quantity, is_marketable } = InventorySummary::of(&warehouses);
        Self {
            sku,
            name: name.into(),
            warehouses,
            total_quantity: quantity,
            is_marketable,
        }
    }

    /// Same identity, new inventory. Derived fields are recomputed.
    pub fn with_warehouses(&self, warehouses: Vec<Warehouse>) -> Self {
        Self::new(self.sku, self.name.clone(), warehouses)
    }

    pub fn sku(&self) -> i64 {
        self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    pub fn is_marketable(&self) -> bool {
        self.is_marketable
    }
}
