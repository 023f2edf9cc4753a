// src/store.rs
use std::collections::HashMap;

use parking_lot::RwLock;

use crate::models::product::Product;

/// In-memory product table keyed by sku.
///
/// Compound operations (`insert_new`, `replace_existing`) run under a single write
/// lock, so concurrent callers cannot both create the same sku or lose an update.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<HashMap<i64, Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite.
    #[allow(dead_code)]
    pub fn put(&self, product: Product) -> Product {
        self.products.write().insert(product.sku(), product.clone());
        product
    }

    pub fn get(&self, sku: i64) -> Option<Product> {
        self.products.read().get(&sku).cloned()
    }

    /// Returns `true` when an entry was removed.
    pub fn delete(&self, sku: i64) -> bool {
        self.products.write().remove(&sku).is_some()
    }

    /// Inserts only if the sku is free. `None` means the sku was already taken.
    pub fn insert_new(&self, product: Product) -> Option<Product> {
        let mut products = self.products.write();
        if products.contains_key(&product.sku()) {
            return None;
        }
        products.insert(product.sku(), product.clone());
        Some(product)
    }

    /// Replaces the record for `sku` with `f(existing)`. `None` if there is no record.
    pub fn replace_existing<F>(&self, sku: i64, f: F) -> Option<Product>
    where
        F: FnOnce(&Product) -> Product,
    {
        let mut products = self.products.write();
        let slot = products.get_mut(&sku)?;
        let replacement = f(slot);
        debug_assert_eq!(replacement.sku(), sku);
        *slot = replacement.clone();
        Some(replacement)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.products.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::{Warehouse, WarehouseType};

    fn product(sku: i64, quantity: u32) -> Product {
        Product::new(
            sku,
            format!("Product {sku}"),
            vec![Warehouse::new("SP", quantity, WarehouseType::Ecommerce)],
        )
    }

    #[test]
    fn put_then_get() {
        let store = ProductStore::new();
        let saved = store.put(product(1, 10));

        assert_eq!(store.get(1), Some(saved));
        assert_eq!(store.get(2), None);
    }

    #[test]
    fn put_overwrites_same_sku() {
        let store = ProductStore::new();
        store.put(product(1, 10));
        store.put(product(1, 20));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).map(|p| p.total_quantity()), Some(20));
    }

    #[test]
    fn delete_reports_whether_something_was_removed() {
        let store = ProductStore::new();
        store.put(product(1, 10));

        assert!(store.delete(1));
        assert!(!store.delete(1));
        assert_eq!(store.get(1), None);
    }

    #[test]
    fn insert_new_refuses_taken_sku() {
        let store = ProductStore::new();

        assert!(store.insert_new(product(1, 10)).is_some());
        assert!(store.insert_new(product(1, 99)).is_none());
        assert_eq!(store.get(1).map(|p| p.total_quantity()), Some(10));
    }

    #[test]
    fn replace_existing_only_touches_present_records() {
        let store = ProductStore::new();

        assert!(store.replace_existing(1, |p| p.with_warehouses(Vec::new())).is_none());
        assert_eq!(store.len(), 0);

        store.put(product(1, 10));
        let replaced = store
            .replace_existing(1, |p| p.with_warehouses(Vec::new()))
            .unwrap();

        assert_eq!(replaced.total_quantity(), 0);
        assert_eq!(store.get(1), Some(replaced));
    }
}
