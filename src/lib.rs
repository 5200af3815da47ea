//! Inventory: single-user product record manager
//!
//! Keeps an ordered list of product records in memory, mutates it through a
//! fixed set of operations, and persists the whole list to a flat text file.

pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod store;
pub mod tooling;
pub mod types;
pub mod views;

pub use error::{ApiError, StorageError};
pub use record::Record;
pub use store::RecordStore;
