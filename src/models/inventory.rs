use crate::models::product::Warehouse;

/// Totals derived from a warehouse list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySummary {
    pub quantity: u64,
    pub is_marketable: bool,
}

impl InventorySummary {
    pub fn of(warehouses: &[Warehouse]) -> Self {
        let quantity: u64 = warehouses.iter().map(|w| u64::from(w.quantity)).sum();
        Self {
            quantity,
            is_marketable: quantity > 0,
        }
    }
}
