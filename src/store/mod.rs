//! Record Store
//!
//! In-memory ordered collection of product records. Insertion order is the
//! display and save order; duplicate ids are allowed and all lookups are
//! linear scans.

pub mod persistence;

use crate::error::StorageError;
use crate::record::Record;
use crate::types::{Price, ProductId, Quantity};
use persistence::{FlatFileStorage, RecordPersistence};
use std::path::Path;

/// RecordStore: exclusive owner of the record sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record. No duplicate check.
    pub fn add(&mut self, record: Record) {
        tracing::debug!(id = record.id(), "Adding record");
        self.records.push(record);
    }

    /// Remove every record with `id`, keeping the rest in order.
    ///
    /// Returns the number of records removed; zero is not an error.
    pub fn remove(&mut self, id: ProductId) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let removed = before - self.records.len();
        tracing::debug!(id, removed, "Removed records");
        removed
    }

    /// Overwrite name, price, and quantity of the first record with `id`.
    ///
    /// Later records sharing the id are left untouched. Returns whether a
    /// record was found.
    pub fn update(
        &mut self,
        id: ProductId,
        name: &str,
        price: Price,
        quantity: Quantity,
    ) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.set_name(name);
                record.set_price(price);
                record.set_quantity(quantity);
                tracing::debug!(id, "Updated record");
                true
            }
            None => {
                tracing::debug!(id, "No record to update");
                false
            }
        }
    }

    /// All records in store order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the full sequence to `path`, replacing its contents.
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        self.save_to(&FlatFileStorage::new(path))
    }

    /// Append the records stored at `path`. A missing file loads nothing.
    pub fn load(&mut self, path: &Path) -> Result<usize, StorageError> {
        self.load_from(&FlatFileStorage::new(path))
    }

    pub fn save_to(&self, storage: &dyn RecordPersistence) -> Result<(), StorageError> {
        storage.write_all(&self.records)?;
        tracing::info!(count = self.records.len(), "Saved inventory");
        Ok(())
    }

    pub fn load_from(&mut self, storage: &dyn RecordPersistence) -> Result<usize, StorageError> {
        let loaded = storage.read_all()?;
        let count = loaded.len();
        self.records.extend(loaded);
        tracing::info!(count, "Loaded inventory");
        Ok(count)
    }
}
