pub mod inventory;
pub mod product;
