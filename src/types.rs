//! Core types for the inventory record manager.

/// ProductId: caller-assigned product identifier, not unique within a store
pub type ProductId = i32;

/// Quantity on hand; negative values are accepted
pub type Quantity = i32;

/// Unit price
pub type Price = f64;
